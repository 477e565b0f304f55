//! All functionality for directly creating dice terms, rolling them, and working with their resulting rolls.
//!
//! This is the home of the dice "primitives". For a full expression made up of several terms, see [`Expr`].
//!
//! [`Expr`]: crate::expr::Expr

pub mod roller;

use alloc::{vec, vec::Vec};
use core::{fmt, num::NonZeroU32};

pub use self::roller::Roller;

/// Maximum number of dice a single term is allowed to roll.
/// Terms requesting more than this fail with [`Error::CountTooHigh`] before any die is rolled.
pub const MAX_COUNT: u32 = 5000;

/// Sign applied to every value produced by a [`Term`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[expect(clippy::exhaustive_enums, reason = "There are only ever two signs")]
pub enum Sign {
	/// Values are added to the total as-is
	#[default]
	Pos,

	/// Values are negated before being added to the total
	Neg,
}

impl Sign {
	/// Applies the sign to a value.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::dice::Sign;
	///
	/// assert_eq!(Sign::Pos.apply(4), 4);
	/// assert_eq!(Sign::Neg.apply(4), -4);
	/// assert_eq!(Sign::Neg.apply(0), 0);
	/// ```
	#[must_use]
	#[inline]
	pub const fn apply(self, val: i64) -> i64 {
		match self {
			Self::Pos => val,
			Self::Neg => val.saturating_neg(),
		}
	}

	/// Gets the character used to write the sign in an expression.
	#[must_use]
	#[inline]
	pub const fn symbol(self) -> char {
		match self {
			Self::Pos => '+',
			Self::Neg => '-',
		}
	}
}

/// What is being rolled by a [`Term`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Faces {
	/// Standard die with the given number of sides, producing values from 1 up to the side count
	Sides(NonZeroU32),

	/// Fudge die, producing -1, 0, or 1
	Fudge,

	/// No die at all: a flat modifier with the given magnitude, producing a single value
	Flat(u64),
}

/// A single signed group of dice (or flat modifier) within a dice expression, such as `2d6`, `-df`, or `+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "A term is fully described by these three fields")]
pub struct Term {
	/// Sign applied to every value rolled
	pub sign: Sign,

	/// Number of dice to roll (always 1 for [`Faces::Flat`])
	pub count: u32,

	/// Kind of die rolled
	pub faces: Faces,
}

impl Term {
	/// Creates a new positive term with a given count of dice with a number of sides.
	///
	/// # Panics
	/// Panics if `sides` is zero.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		let Some(sides) = NonZeroU32::new(sides) else {
			panic!("dice must have at least one side");
		};

		Self {
			sign: Sign::Pos,
			count,
			faces: Faces::Sides(sides),
		}
	}

	/// Creates a new positive term with a given count of fudge dice.
	#[must_use]
	pub const fn fudge(count: u32) -> Self {
		Self {
			sign: Sign::Pos,
			count,
			faces: Faces::Fudge,
		}
	}

	/// Creates a new flat modifier term.
	#[must_use]
	pub const fn flat(sign: Sign, val: u64) -> Self {
		Self {
			sign,
			count: 1,
			faces: Faces::Flat(val),
		}
	}

	/// Creates a copy of this term with the given sign.
	#[must_use]
	#[inline]
	pub const fn with_sign(mut self, sign: Sign) -> Self {
		self.sign = sign;
		self
	}

	/// Rolls the term using the given roller, producing one signed value per die (or a single value for a flat
	/// modifier, which never consumes anything from the roller).
	///
	/// # Errors
	/// If the term asks for more than [`MAX_COUNT`] dice, [`Error::CountTooHigh`] is returned and nothing is rolled.
	/// A flat modifier too large to be an [`i64`] results in [`Error::Overflow`].
	///
	/// # Examples
	/// ```
	/// use fudgeroll::dice::{roller::Iter as IterRoller, Term};
	///
	/// let term = Term::new(2, 6);
	/// let rolled = term.roll(&mut IterRoller::new([3, 5]))?;
	/// assert_eq!(rolled.values, vec![3, 5]);
	/// # Ok::<(), fudgeroll::dice::Error>(())
	/// ```
	pub fn roll<R: Roller + ?Sized>(&self, roller: &mut R) -> Result<Rolled, Error> {
		let values = match self.faces {
			Faces::Flat(val) => vec![self.sign.apply(i64::try_from(val).ok().ok_or(Error::Overflow)?)],
			_ if self.count > MAX_COUNT => return Err(Error::CountTooHigh(*self)),
			Faces::Sides(sides) => (0..self.count)
				.map(|_| self.sign.apply(i64::from(roller.roll_die(sides))))
				.collect(),
			Faces::Fudge => (0..self.count)
				.map(|_| self.sign.apply(i64::from(roller.roll_fudge())))
				.collect(),
		};

		tracing::trace!(term = %self, ?values, "rolled term");
		Ok(Rolled { values, term: *self })
	}
}

impl Default for Term {
	/// Creates the default term (1d20).
	#[inline]
	fn default() -> Self {
		Self::new(1, 20)
	}
}

impl fmt::Display for Term {
	/// Formats the term the way it would be written in an expression, always including its sign and count.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::dice::{Sign, Term};
	///
	/// assert_eq!(Term::new(2, 6).to_string(), "+2d6");
	/// assert_eq!(Term::fudge(4).with_sign(Sign::Neg).to_string(), "-4df");
	/// assert_eq!(Term::flat(Sign::Neg, 3).to_string(), "-3");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.faces {
			Faces::Sides(sides) => write!(f, "{}{}d{}", self.sign.symbol(), self.count, sides),
			Faces::Fudge => write!(f, "{}{}df", self.sign.symbol(), self.count),
			Faces::Flat(val) => write!(f, "{}{}", self.sign.symbol(), val),
		}
	}
}

/// Representation of the result from rolling a [`Term`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Rolled {
	/// Each individual signed value that was rolled, in order
	pub values: Vec<i64>,

	/// Term that was rolled to produce this
	pub term: Term,
}

impl Rolled {
	/// Calculates the total of all values.
	///
	/// # Errors
	/// If there is an integer overflow while summing the values, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::dice::{roller::Iter as IterRoller, Sign, Term};
	///
	/// let term = Term::new(3, 8).with_sign(Sign::Neg);
	/// let rolled = term.roll(&mut IterRoller::new([1, 8, 4]))?;
	/// assert_eq!(rolled.total()?, -13);
	/// # Ok::<(), fudgeroll::dice::Error>(())
	/// ```
	pub fn total(&self) -> Result<i64, Error> {
		self.values
			.iter()
			.try_fold(0_i64, |sum, val| sum.checked_add(*val))
			.ok_or(Error::Overflow)
	}

	/// Creates a new rolled term from a given term and an iterator of already-signed values.
	#[must_use]
	pub fn from_term_and_values(term: Term, values: impl IntoIterator<Item = i64>) -> Self {
		Self {
			values: values.into_iter().collect(),
			term,
		}
	}
}

/// An error resulting from a dice operation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The term asks for more dice than [`MAX_COUNT`].
	///
	/// # Examples
	/// ```
	/// use fudgeroll::dice::{roller::Max as MaxRoller, Error, Term};
	///
	/// let term = Term::new(5001, 6);
	/// assert!(matches!(term.roll(&mut MaxRoller), Err(Error::CountTooHigh(..))));
	/// ```
	#[error("die count too high in {0} (at most {MAX_COUNT} dice per term)")]
	CountTooHigh(Term),

	/// There was an integer overflow when summing values, or a flat modifier was too large to sum at all.
	#[error("integer overflow")]
	Overflow,
}
