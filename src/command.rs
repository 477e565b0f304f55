//! Chat command layer: a statically declared registry of commands, prefix dispatch with autocompletion of command
//! names, and the bare dice expression trigger.
//!
//! Transports (IRC and the like) stay outside of this module. They hand each incoming line to
//! [`Registry::respond()`] and send back whatever reply comes out of it.

use alloc::{
	borrow::ToOwned,
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::fmt;

use crate::{
	choice,
	dice::{self, Roller},
	expr::Expr,
	markup::Markup,
	parse,
};

/// Reply sent when a term asks for more dice than allowed. Nothing else about the roll is reported.
pub const DIE_COUNT_TOO_HIGH: &str = "That's too many dice! Keep it to 5000 or fewer per term.";

/// Reply sent when a total doesn't fit in an integer.
pub const TOTAL_TOO_LARGE: &str = "That total is too large to count.";

/// Prefix that marks a line as a command unless configured otherwise
pub const DEFAULT_PREFIX: char = '.';

/// Everything a command handler needs to do its job
#[expect(clippy::exhaustive_structs, reason = "Built with struct literals by transports")]
pub struct Context<'a> {
	/// Source of random values for the command
	pub roller: &'a mut dyn Roller,

	/// Markup used for styled parts of replies
	pub markup: &'a dyn Markup,

	/// Maximum number of individual results to list in a reply
	pub list_limit: Option<usize>,
}

impl fmt::Debug for Context<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Context")
			.field("list_limit", &self.list_limit)
			.finish_non_exhaustive()
	}
}

/// Function that handles a command's arguments, producing an optional reply
pub type Handler = fn(&mut Context<'_>, &str) -> Result<Option<String>, Error>;

/// A registered command
#[derive(Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Commands are declared statically with struct literals")]
pub struct Command {
	/// Names the command can be invoked by. The first is the main one.
	pub names: &'static [&'static str],

	/// Short usage text, shown when the arguments can't be understood
	pub usage: &'static str,

	/// Handler for the arguments
	pub handler: Handler,
}

impl Command {
	/// Gets the main name of the command.
	#[must_use]
	pub fn name(&self) -> &'static str {
		self.names.first().copied().unwrap_or_default()
	}

	/// Runs the command, turning any error into the reply users should see for it.
	pub fn run(&self, ctx: &mut Context<'_>, args: &str) -> Option<String> {
		match (self.handler)(ctx, args) {
			Ok(reply) => reply,
			Err(err) => {
				tracing::warn!(command = self.name(), args, %err, "command failed");
				err.reply(self)
			}
		}
	}
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("names", &self.names)
			.field("usage", &self.usage)
			.finish_non_exhaustive()
	}
}

/// Rolls a dice expression.
pub const ROLL: Command = Command {
	names: &["roll", "dice"],
	usage: "roll <dice expression>, e.g. 2d6+1d4-3 or 4df",
	handler: roll,
};

/// Picks one of several comma-separated options.
pub const CHOOSE: Command = Command {
	names: &["choose"],
	usage: "choose <option>, <option>, ...",
	handler: choose,
};

/// Handler for [`ROLL`]
fn roll(ctx: &mut Context<'_>, args: &str) -> Result<Option<String>, Error> {
	let text = args.trim();
	let expr = text.parse::<Expr>()?;
	roll_expr(ctx, text, &expr).map(Some)
}

/// Evaluates an already-parsed expression and describes the outcome using the text it was parsed from.
fn roll_expr(ctx: &mut Context<'_>, text: &str, expr: &Expr) -> Result<String, Error> {
	let outcome = expr.eval(&mut *ctx.roller)?.outcome()?;
	tracing::debug!(expr = text, total = outcome.total, "rolled");
	Ok(outcome.describe(text, ctx.markup, ctx.list_limit))
}

/// Handler for [`CHOOSE`]
fn choose(ctx: &mut Context<'_>, args: &str) -> Result<Option<String>, Error> {
	Ok(Some(choice::choose(args, &mut *ctx.roller)?.to_owned()))
}

/// Result of looking up a possibly partial command name
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Completion<'r> {
	/// One of the command's names is exactly the one given
	Exact(&'r Command),

	/// Only this command has a name starting with the one given
	Unique(&'r Command),

	/// Several commands have names starting with the one given (listed by their main names)
	Ambiguous(Vec<&'static str>),

	/// No command matches
	Unknown,
}

impl PartialEq for Command {
	fn eq(&self, other: &Self) -> bool {
		self.names == other.names
	}
}

impl Eq for Command {}

/// A set of commands along with the prefix that invokes them
#[derive(Debug, Clone)]
pub struct Registry {
	/// Prefix that marks a line as a command
	prefix: char,

	/// Every registered command
	commands: Vec<Command>,
}

impl Registry {
	/// Creates an empty registry that recognizes commands by the given prefix.
	#[must_use]
	pub const fn new(prefix: char) -> Self {
		Self {
			prefix,
			commands: Vec::new(),
		}
	}

	/// Creates a registry with the built-in commands ([`ROLL`] and [`CHOOSE`]) using the given prefix.
	#[must_use]
	pub fn builtin(prefix: char) -> Self {
		Self::new(prefix).with(ROLL).with(CHOOSE)
	}

	/// Adds a command to the registry.
	#[must_use]
	pub fn with(mut self, command: Command) -> Self {
		self.register(command);
		self
	}

	/// Adds a command to the registry.
	pub fn register(&mut self, command: Command) {
		self.commands.push(command);
	}

	/// Gets every registered command.
	#[must_use]
	pub fn commands(&self) -> &[Command] {
		&self.commands
	}

	/// Looks up a command by a full or partial name, ignoring ASCII case. An exact name match always wins, even
	/// when other commands also start with it. Registered names are expected to be lowercase.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::command::{Completion, Registry, CHOOSE, ROLL};
	///
	/// let registry = Registry::builtin('.');
	/// assert_eq!(registry.complete("dice"), Completion::Exact(&ROLL));
	/// assert_eq!(registry.complete("ch"), Completion::Unique(&CHOOSE));
	/// assert_eq!(registry.complete("ROLL"), Completion::Exact(&ROLL));
	/// assert_eq!(registry.complete("x"), Completion::Unknown);
	/// ```
	#[must_use]
	pub fn complete(&self, partial: &str) -> Completion<'_> {
		let partial = partial.to_ascii_lowercase();
		if let Some(cmd) = self.commands.iter().find(|cmd| cmd.names.iter().any(|name| *name == partial)) {
			return Completion::Exact(cmd);
		}

		let candidates = self
			.commands
			.iter()
			.filter(|cmd| cmd.names.iter().any(|name| name.starts_with(partial.as_str())))
			.collect::<Vec<_>>();

		match candidates.as_slice() {
			[] => Completion::Unknown,
			[cmd] => Completion::Unique(*cmd),
			_ => Completion::Ambiguous(candidates.iter().map(|cmd| cmd.name()).collect()),
		}
	}

	/// Responds to a single line of input, if it calls for a response.
	///
	/// Lines starting with the prefix are commands: the first word names the command (autocompleted, see
	/// [`Self::complete()`]) and the rest are its arguments. Any other line that is entirely a dice expression is
	/// rolled. Everything else is ignored.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{
	/// 	command::{Context, Registry},
	/// 	dice::roller::Iter as IterRoller,
	/// 	markup::Plain,
	/// };
	///
	/// let registry = Registry::builtin('.');
	/// let mut roller = IterRoller::new([3, 5, 2]);
	/// let mut ctx = Context {
	/// 	roller: &mut roller,
	/// 	markup: &Plain,
	/// 	list_limit: None,
	/// };
	///
	/// assert_eq!(registry.respond(".roll 2d6", &mut ctx).as_deref(), Some("8 (2d6=3, 5)"));
	/// assert_eq!(registry.respond("d4+1", &mut ctx).as_deref(), Some("3 (d4+1=2, 1)"));
	/// assert_eq!(registry.respond("hello there", &mut ctx), None);
	/// ```
	pub fn respond(&self, line: &str, ctx: &mut Context<'_>) -> Option<String> {
		let line = line.trim();

		if let Some(rest) = line.strip_prefix(self.prefix) {
			let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
			return self.invoke(name, args.trim(), ctx);
		}

		let expr = line.parse::<Expr>().ok()?;
		match roll_expr(ctx, line, &expr) {
			Ok(reply) => Some(reply),
			Err(err) => {
				tracing::warn!(expr = line, %err, "roll failed");
				err.reply(&ROLL)
			}
		}
	}

	/// Invokes a command by a full or partial name.
	fn invoke(&self, name: &str, args: &str, ctx: &mut Context<'_>) -> Option<String> {
		if name.is_empty() {
			return None;
		}

		match self.complete(name) {
			Completion::Exact(cmd) | Completion::Unique(cmd) => cmd.run(ctx, args),
			Completion::Ambiguous(names) => Some(did_you_mean(&names)),
			Completion::Unknown => None,
		}
	}
}

impl Default for Registry {
	/// Creates a registry with the built-in commands and the default prefix.
	fn default() -> Self {
		Self::builtin(DEFAULT_PREFIX)
	}
}

/// Builds a question listing every candidate name, e.g. "Did you mean a, b or c?".
fn did_you_mean(names: &[&str]) -> String {
	match names.split_last() {
		Some((last, [])) => format!("Did you mean {last}?"),
		Some((last, rest)) => format!("Did you mean {} or {last}?", rest.join(", ")),
		None => "Did you mean nothing?".to_string(),
	}
}

/// An error resulting from running a command
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The arguments weren't a valid dice expression.
	#[error(transparent)]
	Parse(#[from] parse::Error),

	/// The dice couldn't be rolled or totalled.
	#[error(transparent)]
	Dice(#[from] dice::Error),

	/// There was nothing to choose from.
	#[error(transparent)]
	Choice(#[from] choice::Error),
}

impl Error {
	/// Gets the reply users should see for this error, if any.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{
	/// 	choice,
	/// 	command::{Error, DIE_COUNT_TOO_HIGH, ROLL},
	/// 	dice::{self, Term},
	/// };
	///
	/// let err = Error::Dice(dice::Error::CountTooHigh(Term::new(5001, 6)));
	/// assert_eq!(err.reply(&ROLL).as_deref(), Some(DIE_COUNT_TOO_HIGH));
	/// assert_eq!(Error::Choice(choice::Error::EmptyOptions).reply(&ROLL), None);
	/// ```
	#[must_use]
	pub fn reply(&self, command: &Command) -> Option<String> {
		match self {
			Self::Parse(..) => Some(format!("Usage: {}", command.usage)),
			Self::Dice(dice::Error::CountTooHigh(..)) => Some(DIE_COUNT_TOO_HIGH.to_owned()),
			Self::Dice(dice::Error::Overflow) => Some(TOTAL_TOO_LARGE.to_owned()),
			Self::Choice(choice::Error::EmptyOptions) => None,
		}
	}
}
