//! Output rendering for the command line front end

pub mod formatter;

pub use formatter::{format_compact, format_json, format_text, format_text_list};
