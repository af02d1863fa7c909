//! Character classes shared by the converter and the evaluator, plus the operator table.

use phf::phf_map;
use crate::error::CalcError;

///grouping direction for operators of equal precedence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
	Left,
	Right
}

///one binary operator: symbol, binding strength and what it computes
#[derive(Clone, Copy)]
pub struct Operator {
	pub symbol: char,
	pub prec: i8,
	pub assoc: Assoc,
	apply: fn(f64, f64) -> Result<f64, CalcError>
}
impl Operator {
	#[inline(always)]
	///apply to left operand `s` and right operand `e`
	pub fn apply(&self, s: f64, e: f64) -> Result<f64, CalcError> {
		(self.apply)(s, e)
	}
}

fn add(s: f64, e: f64) -> Result<f64, CalcError> {Ok(s + e)}
fn sub(s: f64, e: f64) -> Result<f64, CalcError> {Ok(s - e)}
fn mul(s: f64, e: f64) -> Result<f64, CalcError> {Ok(s * e)}
fn pow(s: f64, e: f64) -> Result<f64, CalcError> {Ok(s.powf(e))}

fn div(s: f64, e: f64) -> Result<f64, CalcError> {
	if e == 0.0 {return Err(CalcError::DivisorCannotZero);}
	Ok(s / e)
}

///integer modulo, both sides truncated to i64 first
fn rem(s: f64, e: f64) -> Result<f64, CalcError> {
	let (si, ei) = (s as i64, e as i64);
	if ei == 0 {return Err(CalcError::DivisorCannotZero);}	//also catches 0 < |e| < 1
	Ok(si.wrapping_rem(ei) as f64)
}

///all supported binary operators
pub static OPERATORS: phf::Map<char, Operator> = phf_map! {
	'+' => Operator {symbol: '+', prec: 1, assoc: Assoc::Left, apply: add},
	'-' => Operator {symbol: '-', prec: 1, assoc: Assoc::Left, apply: sub},
	'*' => Operator {symbol: '*', prec: 2, assoc: Assoc::Left, apply: mul},
	'/' => Operator {symbol: '/', prec: 2, assoc: Assoc::Left, apply: div},
	'%' => Operator {symbol: '%', prec: 2, assoc: Assoc::Left, apply: rem},
	'^' => Operator {symbol: '^', prec: 3, assoc: Assoc::Right, apply: pow},
};

///precedence of an opening parenthesis on the operator stack
pub const PAREN_PREC: i8 = 0;
///precedence of anything that is not an operator
pub const NO_PREC: i8 = -1;

#[inline(always)]
///digits of any supported base, the decimal point and the base suffixes
///
///`B` needs no special case, it is already a hex digit
pub fn is_digit_like(ch: char) -> bool {
	ch.is_ascii_hexdigit() || matches!(ch, '.' | 'O' | 'H')
}

#[inline(always)]
pub fn is_operator(ch: char) -> bool {
	OPERATORS.contains_key(&ch)
}

///0 for `(`, table value for operators, -1 otherwise
pub fn precedence(ch: char) -> i8 {
	match ch {
		'(' => PAREN_PREC,
		_ => OPERATORS.get(&ch).map_or(NO_PREC, |op| op.prec)
	}
}

#[inline(always)]
///radix selected by a trailing literal suffix
pub fn suffix_base(ch: char) -> Option<u32> {
	match ch {
		'B' => Some(2),
		'O' => Some(8),
		'H' => Some(16),
		_ => None
	}
}
