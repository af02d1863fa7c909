use calcbot::{calculate, evaluate, kmp, to_base, to_postfix, CalcError, Outcome};

fn reply(msg: &str) -> Outcome {
	let _ = env_logger::builder().is_test(true).try_init();
	evaluate(msg, "calculate")
}

fn text(s: &str) -> Outcome {
	Outcome::Reply(s.into())
}

#[test]
fn conversion_and_evaluation() {
	assert_eq!(to_postfix("1+2*3"), "1 2 3 * +");
	assert_eq!(calculate("1+2*3"), Ok(7.0));
	assert_eq!(calculate("(1+2)*3"), Ok(9.0));
	assert_eq!(calculate("2^3^2"), Ok(512.0));
	assert_eq!(calculate("5/0"), Err(CalcError::DivisorCannotZero));
	assert_eq!(calculate("FH"), Ok(15.0));
	assert_eq!(calculate("-2^2"), Ok(-4.0));
	assert_eq!(calculate("10B + 10O + 10H + 10"), Ok(36.0));
	assert_eq!(calculate("2 ^ -1"), Err(CalcError::Expression));
	assert_eq!(calculate("(1+2"), Ok(3.0));
	assert_eq!(calculate("1+"), Err(CalcError::Expression));
	assert_eq!(calculate(""), Err(CalcError::Expression));
}

#[test]
fn formatting_and_search() {
	assert_eq!(to_base(255, 16), "FF");
	assert_eq!(kmp::find_str("ababcabab", "abcab"), Some(2));
	assert_eq!(kmp::count_str("aaaa", "aa"), 3);
}

#[test]
fn plain_decimal_replies() {
	assert_eq!(reply("calculate 1+1"), text("2"));
	assert_eq!(reply("calculate 10/4"), text("2.5"));
	assert_eq!(reply("calculate 1/3"), text("0.333333"));
	assert_eq!(reply("calculate 7 % 3"), text("1"));
	assert_eq!(reply("calculate -3*2"), text("-6"));
	assert_eq!(reply("calculate 3-3"), text("0"));
	assert_eq!(reply("calculate 2.50+0.50"), text("3"));
	assert_eq!(reply("so, calculate (2+3)*4 now"), text("20"));
}

#[test]
fn based_replies() {
	assert_eq!(reply("calculate 16->2"), text("10000"));
	assert_eq!(reply("calculate 255 -> 16"), text("FF"));
	assert_eq!(reply("calculate 35->36"), text("Z"));
	assert_eq!(reply("calculate 0-255->16"), text("FF"));
	assert_eq!(reply("calculate 100->10"), text("100"));
	assert_eq!(reply("calculate 2.9->2"), text("10"));
	assert_eq!(reply("calculate 0->2"), text("0"));
}

#[test]
fn magnitude_up_to_one_prints_zero_in_other_bases() {
	assert_eq!(reply("calculate 0.5->2"), text("0"));
	assert_eq!(reply("calculate 1->2"), text("0"));
	assert_eq!(reply("calculate 0-1->16"), text("0"));
}

#[test]
fn no_keyword_no_reply() {
	assert_eq!(reply("hello world"), Outcome::NoMatch);
	assert_eq!(reply("calculat 1+1"), Outcome::NoMatch);
	assert_eq!(reply(""), Outcome::NoMatch);
}

#[test]
fn error_replies() {
	let invalid = text("please enter a valid base, allowed range [2,36]");
	assert_eq!(reply("calculate 1->99"), invalid);
	assert_eq!(reply("calculate 1->1"), invalid);
	assert_eq!(reply("calculate 1->"), invalid);
	assert_eq!(reply("calculate 5/0"), text("Divisor cannot be 0"));
	assert_eq!(reply("calculate 5%0"), text("Divisor cannot be 0"));
	assert_eq!(reply("calculate 1 2"), text("12"));
	assert_eq!(reply("calculate 1 x 2"), text("Expression error"));
	assert_eq!(reply("calculate"), text("Expression error"));
	assert_eq!(reply(&format!("calculate {}", "9".repeat(64))), text("Expression error"));
}
