use thiserror::Error;

///Everything that can go wrong once a message has been recognized as a command.
///
///The `Display` text of each variant is exactly what gets sent back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
	///malformed expression: missing operands, leftover values or an oversized literal
	#[error("Expression error")]
	Expression,
	///right operand of `/` or `%` is zero
	#[error("Divisor cannot be 0")]
	DivisorCannotZero,
	///requested output base is outside of [2,36]
	#[error("please enter a valid base, allowed range [2,36]")]
	InvalidBase,
}
