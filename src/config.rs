use std::env;
use log::warn;

///Startup configuration, fixed for the lifetime of an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	///trigger word that marks a message as a command
	pub keyword: String,
	///longest accepted numeric literal, in characters
	pub max_literal_len: usize,
	///fractional digits printed before trimming decimal results
	pub decimal_places: usize,
}

impl Default for Config {
	///- keyword: "calculate"
	///- literal limit: 63
	///- decimals: 6
	fn default() -> Self {
		Self {
			keyword: "calculate".into(),
			max_literal_len: 63,
			decimal_places: 6,
		}
	}
}

impl Config {
	///Defaults overridden by `CALCBOT_KEYWORD`, `CALCBOT_MAX_LITERAL` and `CALCBOT_DECIMALS`.
	///Unparsable numbers are logged and ignored.
	pub fn from_env() -> Self {
		let mut cfg = Self::default();
		if let Ok(kw) = env::var("CALCBOT_KEYWORD") {
			if kw.is_empty() {
				warn!("CALCBOT_KEYWORD is empty, keeping {:?}", cfg.keyword);
			}
			else {cfg.keyword = kw;}
		}
		if let Some(n) = env_usize("CALCBOT_MAX_LITERAL") {cfg.max_literal_len = n;}
		if let Some(n) = env_usize("CALCBOT_DECIMALS") {cfg.decimal_places = n;}
		cfg
	}
}

fn env_usize(var: &str) -> Option<usize> {
	let val = env::var(var).ok()?;
	match val.trim().parse() {
		Ok(n) => Some(n),
		Err(err) => {
			warn!("ignoring {var}={val:?}: {err}");
			None
		}
	}
}
