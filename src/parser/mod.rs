//! Precedence-driven tree construction

pub mod constants;
mod core;
mod errors;

pub use self::core::{ExpressionParser, parse, split_point};
pub use errors::{ErrorKind, ParseError};
