pub mod formatting;

pub use formatting::{display_key, format_confidence, format_yield};
