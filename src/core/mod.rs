pub mod azure;
pub mod transport;

pub use azure::AzureChatCompletion;
pub use transport::{ChatMessage, ChatTransport};
