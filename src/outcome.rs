//! Aggregation of rolled terms into a total and a sequence of tokens to show to a user.

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::fmt;

use crate::{
	dice::{Error, Faces, Rolled},
	markup::{Markup, Plain},
};

/// How a [`Symbol`] should be presented. Actual escape codes are up to a [`Markup`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Style {
	/// Something good for the roller (usually green)
	Positive,

	/// Something bad for the roller (usually red)
	Negative,
}

/// Symbol shown for a non-zero fudge die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Fudge dice only have two non-blank faces")]
pub enum Symbol {
	/// A `+` face
	Plus,

	/// A `-` face
	Minus,
}

impl Symbol {
	/// Gets the text of the symbol.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Plus => "+",
			Self::Minus => "-",
		}
	}

	/// Gets the style the symbol should be presented with.
	#[must_use]
	pub const fn style(self) -> Style {
		match self {
			Self::Plus => Style::Positive,
			Self::Minus => Style::Negative,
		}
	}
}

/// Single entry in the display sequence of an [`Outcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Highly unlikely to change")]
pub enum DisplayToken {
	/// Plain numeric value (standard dice, flat modifiers, and blank fudge dice)
	Num(i64),

	/// Styled fudge symbol
	Symbol(Symbol),
}

impl DisplayToken {
	/// Renders the token with a given markup.
	#[must_use]
	pub fn render(&self, markup: &(impl Markup + ?Sized)) -> String {
		match self {
			Self::Num(val) => val.to_string(),
			Self::Symbol(sym) => markup.paint(sym.as_str(), sym.style()),
		}
	}
}

impl fmt::Display for DisplayToken {
	/// Formats the token without any markup.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Num(val) => write!(f, "{val}"),
			Self::Symbol(sym) => f.write_str(sym.as_str()),
		}
	}
}

/// Total and display sequence for a fully evaluated dice expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Outcome {
	/// Sum of every value rolled
	pub total: i64,

	/// Tokens for every value rolled, in order
	pub display: Vec<DisplayToken>,
}

impl Outcome {
	/// Builds the message for the outcome in the form `<total> (<expr>=<token>, <token>, ...)`.
	/// `expr` should be the expression text exactly as the user entered it.
	///
	/// If `list_limit` is specified and there are more tokens than it, the list of tokens will be truncated and
	/// appended with "X more..." (where X is the remaining token count past the max).
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{markup::Plain, outcome::{DisplayToken, Outcome}};
	///
	/// let outcome = Outcome {
	/// 	total: 8,
	/// 	display: vec![DisplayToken::Num(3), DisplayToken::Num(5)],
	/// };
	/// assert_eq!(outcome.describe("2d6", &Plain, None), "8 (2d6=3, 5)");
	/// assert_eq!(outcome.describe("2d6", &Plain, Some(1)), "8 (2d6=3, 1 more...)");
	/// ```
	#[must_use]
	pub fn describe(&self, expr: &str, markup: &(impl Markup + ?Sized), list_limit: Option<usize>) -> String {
		let list_limit = list_limit.unwrap_or(usize::MAX);
		let truncated = self.display.len().saturating_sub(list_limit);

		format!(
			"{} ({}={}{})",
			self.total,
			expr,
			self.display
				.iter()
				.take(list_limit)
				.map(|token| token.render(markup))
				.collect::<Vec<_>>()
				.join(", "),
			if truncated > 0 {
				format!(", {truncated} more...")
			} else {
				String::new()
			}
		)
	}
}

impl fmt::Display for Outcome {
	/// Formats the total and the unstyled tokens, without the expression: `<total> (<token>, <token>, ...)`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tokens = self
			.display
			.iter()
			.map(|token| token.render(&Plain))
			.collect::<Vec<_>>()
			.join(", ");
		write!(f, "{} ({})", self.total, tokens)
	}
}

/// Sums every rolled value into a total and maps each value to a [`DisplayToken`]: standard dice and flat modifiers
/// appear as plain numbers, while fudge dice appear as `+`/`-` symbols (or a plain 0 for a blank).
///
/// # Errors
/// If there is an integer overflow while summing, [`Error::Overflow`] is returned.
///
/// # Examples
/// ```
/// use fudgeroll::{
/// 	dice::{Rolled, Term},
/// 	outcome::{aggregate, DisplayToken, Symbol},
/// };
///
/// let rolled = Rolled::from_term_and_values(Term::fudge(3), [1, -1, 0]);
/// let outcome = aggregate(&[rolled])?;
/// assert_eq!(outcome.total, 0);
/// assert_eq!(
/// 	outcome.display,
/// 	vec![
/// 		DisplayToken::Symbol(Symbol::Plus),
/// 		DisplayToken::Symbol(Symbol::Minus),
/// 		DisplayToken::Num(0),
/// 	],
/// );
/// # Ok::<(), fudgeroll::dice::Error>(())
/// ```
pub fn aggregate(rolls: &[Rolled]) -> Result<Outcome, Error> {
	let mut total: i64 = 0;
	let mut display = Vec::with_capacity(rolls.iter().map(|rolled| rolled.values.len()).sum());

	for rolled in rolls {
		total = total.checked_add(rolled.total()?).ok_or(Error::Overflow)?;

		match rolled.term.faces {
			Faces::Fudge => display.extend(rolled.values.iter().map(|val| match val.signum() {
				1 => DisplayToken::Symbol(Symbol::Plus),
				-1 => DisplayToken::Symbol(Symbol::Minus),
				_ => DisplayToken::Num(0),
			})),
			_ => display.extend(rolled.values.iter().copied().map(DisplayToken::Num)),
		}
	}

	Ok(Outcome { total, display })
}
