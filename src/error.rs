/// Dispatch errors.
///
/// Contains the error types raised while firing plugins and loading modules.
/// Dispatch errors are reported to the error stream and never abort the rest
/// of the pipeline.
pub mod dispatch_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters and token sequences
/// that end before the expression is complete.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include literals that cannot be converted to an integer and
/// arithmetic overflow.
pub mod runtime_error;

pub use dispatch_error::DispatchError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
