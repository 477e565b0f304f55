//! Parser generators for dice expressions, and [`FromStr`] implementations for the types they parse into.
//!
//! The parsers expect lowercase input. The [`FromStr`] implementations take care of that themselves, so they are
//! case-insensitive.

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::{fmt, num::NonZeroU32, ops::Range, str::FromStr};

use chumsky::prelude::*;

use crate::{
	dice::{Faces, Sign, Term},
	expr::Expr,
};

/// Generates a parser for a leading `+` or `-`.
fn sign<'src>() -> impl Parser<'src, &'src str, Sign, extra::Err<Rich<'src, char>>> + Clone {
	choice((just('+').to(Sign::Pos), just('-').to(Sign::Neg)))
}

/// Generates a parser that specifically handles dice terms like "d20", "2d6", "-4df", etc.
pub fn term_part<'src>() -> impl Parser<'src, &'src str, Term, extra::Err<Rich<'src, char>>> + Clone {
	// Parser for the die kind following the "d"
	let faces = choice((
		just('f').to(Faces::Fudge),
		text::digits(10).to_slice().try_map(|sides: &str, span| {
			let sides = sides
				.parse::<NonZeroU32>()
				.map_err(|err| Rich::custom(span, format!("Dice sides: {err}")))?;
			Ok(Faces::Sides(sides))
		}),
	));

	sign()
		.or_not()
		.then(text::digits(10).to_slice().or_not())
		.then_ignore(just('d'))
		.then(faces)
		.map(|((sign, count), faces)| Term {
			sign: sign.unwrap_or_default(),
			count: count.map_or(1, |count| saturating(count, u32::MAX)),
			faces,
		})
}

/// Generates a parser that handles a flat modifier like "+3" or "-1". The sign is required.
///
/// Any run of digits is accepted. Values too large to fit are clamped, so that they are reported as an overflow when
/// rolled rather than as a syntax error.
pub fn flat_part<'src>() -> impl Parser<'src, &'src str, Term, extra::Err<Rich<'src, char>>> + Clone {
	sign()
		.then(text::digits(10).to_slice())
		.map(|(sign, val): (Sign, &str)| Term::flat(sign, saturating(val, u64::MAX)))
}

/// Generates a parser that handles a full dice expression: one or more dice terms optionally followed by a single flat
/// modifier, such as "2d6+1d4-3" or "4df". Expects end of input.
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	term_part()
		.repeated()
		.at_least(1)
		.collect::<Vec<_>>()
		.then(flat_part().or_not())
		.then_ignore(end())
		.map(|(mut terms, flat)| {
			terms.extend(flat);
			Expr::new(terms)
		})
}

/// Parses a run of digits, clamping anything too large to fit to `max`. Whatever consumes the value (the count limit
/// for dice, overflow checks for flat modifiers) rejects it later.
fn saturating<T: FromStr>(digits: &str, max: T) -> T {
	digits.parse().unwrap_or(max)
}

/// A single problem found in a dice expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Problem {
	/// Byte range of the input the problem applies to
	pub span: Range<usize>,

	/// Description of the problem
	pub message: String,
}

impl fmt::Display for Problem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)
	}
}

impl From<Rich<'_, char>> for Problem {
	fn from(err: Rich<'_, char>) -> Self {
		let span = *err.span();
		Self {
			span: span.start..span.end,
			message: err.to_string(),
		}
	}
}

/// An error resulting from parsing a dice expression
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The input doesn't match the dice expression grammar.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{parse::Error, Expr};
	///
	/// assert!(matches!("2d6 + 3".parse::<Expr>(), Err(Error::Malformed(..))));
	/// assert!(matches!("2d0".parse::<Expr>(), Err(Error::Malformed(..))));
	/// ```
	#[error("malformed dice expression: {}", join_problems(.0))]
	Malformed(Vec<Problem>),
}

/// Joins all problems into a single line.
fn join_problems(problems: &[Problem]) -> String {
	problems.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl FromStr for Term {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_ascii_lowercase();
		let result = choice((term_part(), flat_part()))
			.then_ignore(end())
			.parse(&lc)
			.into_result()
			.map_err(|errs| Error::Malformed(errs.into_iter().map(Problem::from).collect()));
		result
	}
}

impl FromStr for Expr {
	type Err = Error;

	/// Parses a full dice expression, ignoring case.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{dice::{Sign, Term}, Expr};
	///
	/// let expr: Expr = "2D6-dF+3".parse()?;
	/// assert_eq!(
	/// 	expr.terms,
	/// 	vec![Term::new(2, 6), Term::fudge(1).with_sign(Sign::Neg), Term::flat(Sign::Pos, 3)],
	/// );
	/// # Ok::<(), fudgeroll::parse::Error>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_ascii_lowercase();
		let result = expr()
			.parse(&lc)
			.into_result()
			.map_err(|errs| Error::Malformed(errs.into_iter().map(Problem::from).collect()));
		match &result {
			Ok(expr) => tracing::debug!(input = s, terms = expr.terms.len(), "parsed dice expression"),
			Err(err) => tracing::debug!(input = s, %err, "rejected dice expression"),
		}
		result
	}
}
