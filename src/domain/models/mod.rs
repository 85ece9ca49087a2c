mod query;
mod query_mode;

pub use query::*;
pub use query_mode::*;
