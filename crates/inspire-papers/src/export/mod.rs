//! Report file writers.

mod json;
mod xlsx;

pub use json::{to_json_string, write_json};
pub use xlsx::{SHEET_NAME, write_xlsx};
