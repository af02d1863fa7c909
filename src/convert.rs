//! Infix to postfix conversion (shunting-yard).

use log::trace;
use crate::literal::{is_digit_like, precedence, Assoc, OPERATORS};

///Converts an infix expression to a space-delimited postfix token sequence.
///
///Never fails: malformed input simply yields a sequence the evaluator will reject.
///Whitespace is ignored everywhere, even between the digits of one literal.
///A leading `+` or `-` applies to an implicit `0`.
///Parentheses are not checked for balance, a surplus `)` is ignored
///and operators left behind by a missing `)` are emitted at the end.
pub fn to_postfix(expr: &str) -> String {
	let chars: Vec<char> = expr.chars().collect();
	let mut out = String::with_capacity(expr.len() * 2);
	let mut ops: Vec<char> = Vec::new();	//operator stack, may contain '('
	let mut first = true;	//no significant char seen yet

	let mut p = 0;
	while p < chars.len() {
		if chars[p].is_whitespace() {
			p += 1;
			continue;
		}

		if first {
			if matches!(chars[p], '+' | '-') {
				out.push_str("0 ");	//unary sign
			}
			first = false;
		}

		//copy literal verbatim
		let mut lit = false;
		while p < chars.len() && (is_digit_like(chars[p]) || chars[p].is_whitespace()) {
			if !chars[p].is_whitespace() {
				out.push(chars[p]);
				lit = true;
			}
			p += 1;
		}
		if lit {out.push(' ');}
		if p >= chars.len() {break;}

		match chars[p] {
			'(' => {ops.push('(');},
			')' => {
				while let Some(top) = ops.pop() {
					if top == '(' {break;}
					out.push(top);
					out.push(' ');
				}
			},
			c => if let Some(op) = OPERATORS.get(&c) {
				while let Some(&top) = ops.last() {
					let tp = precedence(top);
					if tp < op.prec {break;}
					if op.assoc == Assoc::Right && tp == op.prec {break;}	//let x^y^z pile up
					out.push(top);
					out.push(' ');
					ops.pop();
				}
				ops.push(c);
			}
			//anything else is dropped
		}
		p += 1;
	}

	while let Some(top) = ops.pop() {
		if top == '(' {continue;}	//unclosed
		out.push(top);
		out.push(' ');
	}
	out.pop();	//trailing separator

	trace!("postfix of {expr:?}: {out:?}");
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn precedence_order() {
		assert_eq!(to_postfix("1+2*3"), "1 2 3 * +");
		assert_eq!(to_postfix("1*2+3"), "1 2 * 3 +");
		assert_eq!(to_postfix("(1+2)*3"), "1 2 + 3 *");
		assert_eq!(to_postfix("8/4/2"), "8 4 / 2 /");
		assert_eq!(to_postfix("8-4+2"), "8 4 - 2 +");
		assert_eq!(to_postfix("7%3*2"), "7 3 % 2 *");
	}

	#[test]
	fn power_is_right_associative() {
		assert_eq!(to_postfix("2^3^2"), "2 3 2 ^ ^");
		assert_eq!(to_postfix("2^3*2"), "2 3 ^ 2 *");
		assert_eq!(to_postfix("2*3^2"), "2 3 2 ^ *");
		assert_eq!(to_postfix("(2^3)^2"), "2 3 ^ 2 ^");
	}

	#[test]
	fn leading_sign() {
		assert_eq!(to_postfix("-5+2"), "0 5 - 2 +");
		assert_eq!(to_postfix("  +5"), "0 5 +");
		assert_eq!(to_postfix("(-5)"), "5 -");	//only the very first char counts
	}

	#[test]
	fn literals_and_whitespace() {
		assert_eq!(to_postfix(" 1 2 + 3 "), "12 3 +");
		assert_eq!(to_postfix("FFH*10B"), "FFH 10B *");
		assert_eq!(to_postfix("0.5 + .25"), "0.5 .25 +");
		assert_eq!(to_postfix("1\t+\n2"), "1 2 +");
	}

	#[test]
	fn unbalanced_parentheses_pass_through() {
		assert_eq!(to_postfix("1+2)*3"), "1 2 + 3 *");
		assert_eq!(to_postfix("(1+2"), "1 2 +");
		assert_eq!(to_postfix("((1"), "1");
	}

	#[test]
	fn unknown_chars_are_dropped() {
		assert_eq!(to_postfix("1x2"), "1 2");
		assert_eq!(to_postfix("3 = 3"), "3 3");
		assert_eq!(to_postfix(""), "");
	}
}
