mod csv;
mod parser;
mod pipeline;
mod types;

pub use csv::{join_record, split_record};
pub use parser::{parse_count, parse_duration, parse_flag, parse_timestamp};
pub use pipeline::{derive, derive_from_reader};
pub use types::{DataError, Result};
