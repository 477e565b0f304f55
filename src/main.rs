use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use fudgeroll::{
	command::{Context, Registry, DEFAULT_PREFIX},
	dice::roller::{FastRand, Roller},
	markup::{Ansi, Irc, Markup, Plain},
	parse::{self, Problem},
	Expr,
};

/// Roll dice expressions like 2d6+1d4-3 or 4df
#[derive(Parser, Debug)]
#[command(name = "fudgeroll")]
#[command(version)]
#[command(about = "Roll dice expressions like 2d6+1d4-3 or 4df, or run chat commands like \".choose a, b\"")]
struct Args {
	/// Expression or command to respond to (reads lines from stdin if not provided)
	input: Vec<String>,

	/// Seed for the random number generator, for repeatable rolls
	#[arg(short, long)]
	seed: Option<u64>,

	/// How to style fudge dice symbols
	#[arg(short, long, value_enum, default_value_t = MarkupKind::Ansi)]
	markup: MarkupKind,

	/// Maximum number of individual results to list
	#[arg(short, long)]
	limit: Option<usize>,

	/// Prefix that marks a line as a command
	#[arg(short, long, default_value_t = DEFAULT_PREFIX)]
	prefix: char,
}

/// Output styles available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MarkupKind {
	/// No styling
	Plain,

	/// Terminal colours
	Ansi,

	/// mIRC colour codes
	Irc,
}

impl MarkupKind {
	fn markup(self) -> &'static dyn Markup {
		match self {
			Self::Plain => &Plain,
			Self::Ansi => &Ansi,
			Self::Irc => &Irc,
		}
	}
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.init();

	let registry = Registry::builtin(args.prefix);
	let mut roller = match args.seed {
		Some(seed) => FastRand::with_seed(seed),
		None => FastRand::default(),
	};
	let mut ctx = Context {
		roller: &mut roller as &mut dyn Roller,
		markup: args.markup.markup(),
		list_limit: args.limit,
	};

	// Obtain the input by combining all args passed to the executable, so that it can be left unquoted even with spaces
	if !args.input.is_empty() {
		let input = args.input.join(" ");
		let input = input.trim();
		tracing::debug!(input, "responding to arguments");

		if let Some(reply) = registry.respond(input, &mut ctx) {
			println!("{reply}");
			return Ok(ExitCode::SUCCESS);
		}

		// Nothing to say usually means the input wasn't an expression, so explain why
		if !input.starts_with(args.prefix) {
			if let Err(parse::Error::Malformed(problems)) = input.parse::<Expr>() {
				report(input, &problems)?;
			}
		}
		return Ok(ExitCode::FAILURE);
	}

	let stdin = io::stdin();
	let interactive = stdin.is_terminal();
	let mut stdout = io::stdout();
	loop {
		if interactive {
			print!("> ");
			stdout.flush()?;
		}

		let mut line = String::new();
		if stdin.lock().read_line(&mut line)? == 0 {
			break;
		}

		if let Some(reply) = registry.respond(&line, &mut ctx) {
			writeln!(stdout, "{reply}")?;
		}
	}

	Ok(ExitCode::SUCCESS)
}

/// Prints a report of every problem found in an expression to stderr.
fn report(input: &str, problems: &[Problem]) -> io::Result<()> {
	let Some(first) = problems.first() else {
		return Ok(());
	};

	let mut builder = Report::build(ReportKind::Error, first.span.clone())
		.with_config(Config::default().with_index_type(IndexType::Byte))
		.with_message("Malformed dice expression");
	for problem in problems {
		builder = builder.with_label(
			Label::new(problem.span.clone())
				.with_message(&problem.message)
				.with_color(Color::Red),
		);
	}

	builder.finish().eprint(Source::from(input))
}
