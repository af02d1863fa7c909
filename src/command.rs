//! Recognizing a command inside a chat message and turning it into reply text.

use log::debug;
use regex::Regex;
use crate::config::Config;
use crate::convert::to_postfix;
use crate::error::CalcError;
use crate::eval::eval_postfix;
use crate::format::render;
use crate::kmp::find_str;

///separates the expression from the requested output base
pub const BASE_DELIMITER: &str = "->";
///smallest and largest supported output base
pub const BASE_RANGE: std::ops::RangeInclusive<i64> = 2..=36;

lazy_static! {
	///what `atoi` would read from the start of a string
	static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?[0-9]+)").unwrap();
}

///What the host should do with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	///not addressed to us, leave it alone
	NoMatch,
	///send this back, either a result or an error explanation
	Reply(String)
}

///Parts of a recognized command, borrowed from the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
	///byte offset of the keyword
	pub keyword_at: usize,
	pub expression: &'a str,
	///unparsed text after the delimiter
	pub base: Option<&'a str>
}

///Locates `keyword` and the optional base delimiter in `message`.
///
///The expression runs from the end of the keyword up to the delimiter, or to the end of the message.
///A delimiter in front of the keyword leaves the expression empty.
pub fn extract<'a>(message: &'a str, keyword: &str) -> Option<Command<'a>> {
	let keyword_at = find_str(message, keyword)?;
	let start = keyword_at + keyword.len();
	let (expression, base) = match find_str(message, BASE_DELIMITER) {
		Some(d) => (&message[start..d.max(start)], Some(&message[d + BASE_DELIMITER.len()..])),
		None => (&message[start..], None)
	};
	Some(Command {keyword_at, expression, base})
}

///Reads a leading integer the way `atoi` does and checks it is a usable base.
pub fn parse_base(text: &str) -> Result<u32, CalcError> {
	let n: i64 = LEADING_INT.captures(text)
		.and_then(|c| c[1].parse().ok())
		.unwrap_or(0);
	if BASE_RANGE.contains(&n) {Ok(n as u32)} else {Err(CalcError::InvalidBase)}
}

///Bundled configuration for answering messages, immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Engine {
	cfg: Config
}
impl Engine {
	pub fn new(cfg: Config) -> Self {
		Self {cfg}
	}
	///replace trigger keyword
	pub fn custom_keyword(mut self, keyword: impl Into<String>) -> Self {
		self.cfg.keyword = keyword.into();
		self
	}
	///replace longest accepted literal
	pub fn custom_literal_limit(mut self, n: usize) -> Self {
		self.cfg.max_literal_len = n;
		self
	}
	///replace fractional digits of decimal output
	pub fn custom_decimals(mut self, n: usize) -> Self {
		self.cfg.decimal_places = n;
		self
	}

	pub fn config(&self) -> &Config {
		&self.cfg
	}

	///Evaluates a bare infix expression.
	pub fn calculate(&self, expr: &str) -> Result<f64, CalcError> {
		eval_postfix(&to_postfix(expr), self.cfg.max_literal_len)
	}

	///Answers one raw message.
	///
	///Returns [`Outcome::NoMatch`] if the keyword does not occur, otherwise always a reply:
	///failures are turned into their message text and never reach the caller as errors.
	pub fn dispose(&self, message: &str) -> Outcome {
		let Some(cmd) = extract(message, &self.cfg.keyword) else {
			return Outcome::NoMatch;
		};
		debug!("command at {}: expression {:?}, base {:?}", cmd.keyword_at, cmd.expression, cmd.base);

		Outcome::Reply(match self.run(&cmd) {
			Ok(text) => text,
			Err(err) => {
				debug!("{:?} failed: {err}", cmd.expression);
				err.to_string()
			}
		})
	}

	fn run(&self, cmd: &Command) -> Result<String, CalcError> {
		let base = cmd.base.map(parse_base).transpose()?;	//checked before evaluating anything
		let value = self.calculate(cmd.expression)?;
		Ok(render(value, base, self.cfg.decimal_places))
	}
}

///Answers `raw_message` with the default configuration and the given trigger keyword.
pub fn evaluate(raw_message: &str, keyword: &str) -> Outcome {
	Engine::default().custom_keyword(keyword).dispose(raw_message)
}

///Evaluates a bare infix expression with the default literal limit.
pub fn calculate(expr: &str) -> Result<f64, CalcError> {
	Engine::default().calculate(expr)
}
