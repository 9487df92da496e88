pub mod formatting;

pub use formatting::{end_label, tenure_line};
