//! Chat-command calculator.
//!
//! A message containing the trigger keyword is treated as a command: the text after the keyword is an
//! infix expression (`+ - * / % ^`, parentheses, literals with optional `B`/`O`/`H` base suffix),
//! optionally followed by `->N` to request output in base N (2-36).
//! The expression is converted to postfix, evaluated, and rendered as reply text.
//!
//! ```
//! use calcbot::{evaluate, Outcome};
//!
//! assert_eq!(evaluate("calculate 2^3^2", "calculate"), Outcome::Reply("512".into()));
//! assert_eq!(evaluate("calculate FFH ->2", "calculate"), Outcome::Reply("11111111".into()));
//! assert_eq!(evaluate("good morning", "calculate"), Outcome::NoMatch);
//! ```
#[macro_use]
extern crate lazy_static;

pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod eval;
pub mod format;
pub mod kmp;
pub mod literal;

pub use command::{calculate, evaluate, Engine, Outcome};
pub use config::Config;
pub use convert::to_postfix;
pub use error::CalcError;
pub use eval::eval_postfix;
pub use format::{to_base, trim_decimal};
