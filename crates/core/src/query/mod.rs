mod attributes;
mod error;
mod types;

pub use attributes::parse_expression_attributes;
pub use error::ValidationError;
pub use types::{ExpressionAttribute, TableQuery};
