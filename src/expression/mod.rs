//! Expression tree, evaluation and rendering

mod ast;
mod display;
mod eval;
mod latex;
mod operator;

pub use ast::Expression;
pub use display::stringify;
pub use eval::evaluate;
pub use operator::Operator;

#[cfg(test)]
mod tests;
