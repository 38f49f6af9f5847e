//! Utils module split into submodules

mod brackets;
mod errors;
mod numbers;

pub use brackets::{bracket_group, strip_outer};
pub use errors::BracketError;
pub use numbers::{literal_to_number, number_prefix_len};
