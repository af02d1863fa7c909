//! Rendering of results.

///Digits of `value` in `base` (2-36), most significant first, alphabet 0-9 then A-Z.
///
///0 gives an empty string, callers decide how zero is shown.
pub fn to_base(mut value: u64, base: u32) -> String {
	let base = base as u64;
	let mut digits: Vec<u8> = Vec::new();
	while value != 0 {
		let r = (value % base) as u8;
		digits.push(if r < 10 {b'0' + r} else {b'A' + r - 10});
		value /= base;
	}
	digits.iter().rev().map(|&d| d as char).collect()
}

///Strips trailing zeros after the decimal point, and the point itself if nothing is left after it.
///Text without a decimal point is returned unchanged.
pub fn trim_decimal(text: &str) -> &str {
	if !text.contains('.') {return text;}
	let t = text.trim_end_matches('0');
	t.strip_suffix('.').unwrap_or(t)
}

///Final reply text for a computed value.
///
///Decimal output (no base, or base 10) is printed with `decimals` fractional digits, then trimmed.
///Other bases print the integer part of the magnitude; magnitudes up to 1 print as "0".
pub fn render(value: f64, base: Option<u32>, decimals: usize) -> String {
	if value == 0.0 {return "0".into();}
	match base {
		None | Some(10) => trim_decimal(&format!("{value:.decimals$}")).to_string(),
		Some(b) => {
			let mag = value.abs();
			if mag > 1.0 {to_base(mag as u64, b)} else {"0".into()}
		}
	}
}
