//! Postfix evaluation and literal parsing.

use log::trace;
use regex::Regex;
use crate::error::CalcError;
use crate::literal::{is_digit_like, suffix_base, OPERATORS};

lazy_static! {
	///longest decimal prefix `atof` would accept from a literal token
	static ref DEC_PREFIX: Regex = Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap();
}

///Converts one literal token to a number.
///
///With a `B`, `O` or `H` suffix the rest is read as an unsigned integer in base 2, 8 or 16;
///a digit invalid for that base or a value beyond 64 bits gives 0.
///Otherwise the longest decimal prefix is used, 0 if there is none.
pub fn parse_literal(tok: &str) -> f64 {
	let mut chars = tok.chars();
	if let Some(radix) = chars.next_back().and_then(suffix_base) {
		let mut acc: u64 = 0;
		for c in chars {
			match c.to_digit(radix).and_then(|d| acc.checked_mul(radix as u64)?.checked_add(d as u64)) {
				Some(n) => {acc = n;}
				None => {return 0.0;}
			}
		}
		acc as f64
	}
	else {
		DEC_PREFIX.find(tok).and_then(|m| m.as_str().parse().ok()).unwrap_or(0.0)
	}
}

///Evaluates a postfix token sequence as produced by [`to_postfix`](crate::to_postfix).
///
///A literal is ended by a space, an operator or the end of input.
///Literals longer than `max_literal` characters are rejected.
///Exactly one value must be left over at the end.
pub fn eval_postfix(postfix: &str, max_literal: usize) -> Result<f64, CalcError> {
	let mut stk: Vec<f64> = Vec::new();
	let mut buf = String::new();

	for c in postfix.chars() {
		if is_digit_like(c) {
			if buf.len() >= max_literal {
				trace!("literal longer than {max_literal} chars: {buf}{c}...");
				return Err(CalcError::Expression);
			}
			buf.push(c);
			continue;
		}

		if !buf.is_empty() {
			stk.push(parse_literal(&buf));
			buf.clear();
		}

		if let Some(op) = OPERATORS.get(&c) {
			let (Some(e), Some(s)) = (stk.pop(), stk.pop()) else {
				return Err(CalcError::Expression);
			};
			stk.push(op.apply(s, e)?);
		}
		//spaces and stray chars only separate literals
	}
	if !buf.is_empty() {
		stk.push(parse_literal(&buf));
	}

	match stk[..] {
		[res] => {
			trace!("{postfix:?} = {res}");
			Ok(res)
		},
		_ => Err(CalcError::Expression)
	}
}
