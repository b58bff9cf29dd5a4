mod display;

pub use display::*;
