use std::io::{stdin, stdout, BufRead, Write};
use calcbot::{Config, Engine, Outcome};
#[macro_use]
extern crate lazy_static;

lazy_static! { static ref HELPMSG: &'static str = {
r##"calcbot - answers chat messages that contain a calculation command

A message is a command if it contains the keyword (default "calculate", or $CALCBOT_KEYWORD).
Everything after the keyword is an expression: + - * / % ^ and parentheses,
numbers may end in B (binary), O (octal) or H (hex). Append ->N to print the result in base N (2-36).
Messages without the keyword get no reply.

Command line options:
(order/position of --flags doesn't matter)

<nothing>
	Defaults to "-i".

--inter|-i [PROMPT]
	Interactive mode, one message per line. A custom prompt may be provided, default is "> ".

--expr|-e [--inter|-i] MSG1 [MSG2] [MSG3] ...
	Expression mode, answers each argument as one message. If combined with -i, enters interactive mode afterwards.

[--file|-f] [--inter|-i] FILE1 [FILE2] [FILE3] ...
	File mode, answers every line of the file(s) as one message. May also be combined with -i.
	-f is optional: If at least one option is provided without any --flags, file mode is implied.

--keyword|-k WORD
	Use WORD as the keyword.

--at NAME
	Prefix every reply with "@NAME ", like a reply in a group conversation.

--help|-h
	Ignores all other options and prints this help message.

Logging is controlled by RUST_LOG, e.g. RUST_LOG=calcbot=debug."##};}

///everything the front end needs to answer a message
struct Host {
	engine: Engine,
	///at-mention prefix
	at: Option<String>
}
impl Host {
	///print reply if the message is a command
	fn answer(&self, msg: &str) {
		if let Outcome::Reply(text) = self.engine.dispose(msg) {
			match &self.at {
				Some(name) => {println!("@{name} {text}");}
				None => {println!("{text}");}
			}
		}
	}
}

fn main() {
	env_logger::init();

	//parse options
	let (mut i, mut e, mut f, mut h) = (false, false, false, false);
	let mut cfg = Config::from_env();
	let mut at: Option<String> = None;
	let mut names: Vec<String> = Vec::new();
	let mut args = std::env::args().skip(1);	//skip name of binary
	while let Some(arg) = args.next() {
		let flag: &str = if arg.starts_with("--") {	//long option
			let flag = &arg[2..];
			match flag {
				"inter" => {i=true;}
				"expr" => {e=true;}
				"file" => {f=true;}
				"help" => {h=true;}
				"keyword" | "at" => {}
				_ => {
					eprintln!("! Unrecognized option: --{flag}, use -h for help");
					std::process::exit(0);
				}
			}
			flag
		}
		else if arg.starts_with('-') && arg.len()>1 {	//short option, multiple at once possible
			let mut k = false;
			for flag in arg.chars() {
				match flag {
					'-' => {}	//allow -f-i or similar
					'i' => {i=true;}
					'e' => {e=true;}
					'f' => {f=true;}
					'h' => {h=true;}
					'k' => {k=true;}
					_ => {
						eprintln!("! Unrecognized option: -{flag}, use -h for help");
						std::process::exit(0);
					}
				}
			}
			if k {"keyword"} else {continue;}
		}
		else {
			names.push(arg);
			continue;
		};

		//options with a value
		match flag {
			"keyword" => match args.next() {
				Some(kw) if !kw.is_empty() => {cfg.keyword = kw;}
				_ => {
					eprintln!("! Option --keyword needs a non-empty word");
					std::process::exit(0);
				}
			},
			"at" => match args.next() {
				Some(name) => {at = Some(name);}
				None => {
					eprintln!("! Option --at needs a name");
					std::process::exit(0);
				}
			},
			_ => {}
		}
	}
	if !(e||f) && names.is_empty() {i=true};	//default to interactive

	if h {	//always exits
		println!("{}", *HELPMSG);
		std::process::exit(0);
	}

	let host = Host {engine: Engine::new(cfg), at};
	match (i, e, f) {
		(false, false, false) => {file_mode(&host, names, false);}	//no flags: assume filenames
		(true, false, false) => {interactive_mode(&host, names.first().cloned());}	//normal interactive
		(_, true, false) => {expression_mode(&host, names, i);}	//expr mode, pass i on
		(_, false, true) => {file_mode(&host, names, i);}	//file mode, pass i on
		(_, true, true) => {eprintln!("! Invalid options: both -e and -f present");}	//invalid combination
	}
}

fn interactive_mode(host: &Host, prompt: Option<String>) {
	let prompt = prompt.unwrap_or_else(|| "> ".into());
	let mut lines = stdin().lock().lines();
	loop {
		print!("{prompt}");
		if let Err(err) = stdout().flush() {
			eprintln!("! Unable to write prompt: {err}");
			return;
		}
		match lines.next() {
			Some(Ok(line)) => {host.answer(&line);}
			Some(Err(err)) => {
				eprintln!("! Unable to read input: {err}");
				return;
			}
			None => {return;}	//EOF
		}
	}
}

fn expression_mode(host: &Host, msgs: Vec<String>, inter: bool) {
	if msgs.is_empty() {
		eprintln!("! No message provided");
	}
	else {
		for msg in msgs {
			host.answer(&msg);
		}
	}
	if inter {
		interactive_mode(host, None);
	}
}

fn file_mode(host: &Host, files: Vec<String>, inter: bool) {
	if files.is_empty() {
		eprintln!("! No file name provided");
	}
	else {
		for file in files {
			match std::fs::read_to_string(&file) {
				Ok(text) => {
					for line in text.lines() {
						host.answer(line);
					}
				},
				Err(error) => {
					eprintln!("! Unable to read file \"{file}\": {error}");
				},
			}
		}
	}
	if inter {
		interactive_mode(host, None);
	}
}
