//! Shared helper functions for dates, HTML text, and URL construction

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
