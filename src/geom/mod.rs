pub mod parse;

pub use parse::{parse_query_geometry, representative_point};
