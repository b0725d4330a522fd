// URL handling utilities
pub mod url_parser;
pub mod query_string;
pub mod slug;

// Display formatting
pub mod price_formatter;
pub mod timestamp;

pub use url_parser::hostname_from_url;
pub use query_string::{build_query_string, with_query};
pub use slug::slugify;
pub use price_formatter::{format_price, format_price_fixed};
pub use timestamp::format_timestamp;
