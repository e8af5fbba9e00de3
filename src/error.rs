/// Structural errors.
///
/// Defines every failure that can occur while turning an infix expression
/// into postfix form, an AST or a display tree: unbalanced parentheses,
/// operators without enough operands, stray symbols and empty input.
pub mod parse_error;
/// Binding errors.
///
/// Raised when a `name=value` binding supplied on the command line cannot be
/// understood.
pub mod binding_error;

pub use binding_error::BindingError;
pub use parse_error::ParseError;
