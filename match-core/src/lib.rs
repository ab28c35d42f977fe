pub mod evaluation;
pub mod words;

// Re-export main components
pub use evaluation::*;
pub use words::*;
