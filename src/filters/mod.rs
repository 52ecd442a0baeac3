pub mod apply;
pub mod parser;
pub mod query;

pub use apply::apply_query;
pub use parser::parse_query;
pub use query::QueryModel;
