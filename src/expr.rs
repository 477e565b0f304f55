//! Data structures for evaluating full dice expressions and working with their results.

use alloc::{string::ToString, vec::Vec};
use core::fmt;

use crate::{
	dice::{Error, Rolled, Roller, Sign, Term},
	outcome::{self, Outcome},
};

/// A full dice expression: an ordered sequence of terms whose values are all summed together
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "An expression is only ever a list of terms")]
pub struct Expr {
	/// Terms of the expression, in the order they were written
	pub terms: Vec<Term>,
}

impl Expr {
	/// Creates a new expression from a list of terms.
	#[must_use]
	#[inline]
	pub const fn new(terms: Vec<Term>) -> Self {
		Self { terms }
	}

	/// Evaluates the expression by rolling every term from left to right, consuming values from the roller in that
	/// same order.
	///
	/// # Errors
	/// If any term fails to roll, evaluation stops right there and the error is returned. No results are kept for
	/// the terms that were already rolled.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{dice::roller::Iter as IterRoller, Expr};
	///
	/// let expr: Expr = "1d4+1d4".parse()?;
	/// let evaled = expr.eval(&mut IterRoller::new([2, 4]))?;
	/// assert_eq!(evaled.total()?, 6);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	pub fn eval<R: Roller + ?Sized>(&self, roller: &mut R) -> Result<Evaled, Error> {
		let rolls = self
			.terms
			.iter()
			.map(|term| term.roll(&mut *roller))
			.collect::<Result<Vec<_>, _>>()
			.inspect_err(|err| tracing::debug!(expr = %self, %err, "evaluation aborted"))?;
		Ok(Evaled { rolls })
	}
}

impl fmt::Display for Expr {
	/// Formats the expression in its canonical form: every count is written out and the first term only carries a
	/// sign if it's negative. Re-parsing the output results in an identical expression.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::Expr;
	///
	/// let expr: Expr = "d20+DF-2".parse()?;
	/// assert_eq!(expr.to_string(), "1d20+1df-2");
	/// # Ok::<(), fudgeroll::parse::Error>(())
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, term) in self.terms.iter().enumerate() {
			let text = term.to_string();
			match text.strip_prefix(Sign::Pos.symbol()) {
				Some(unsigned) if idx == 0 => f.write_str(unsigned)?,
				_ => f.write_str(&text)?,
			}
		}
		Ok(())
	}
}

/// Every rolled term of an evaluated expression, in order
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Evaled {
	/// Results for each term
	pub rolls: Vec<Rolled>,
}

impl Evaled {
	/// Calculates the sum of every value from every term.
	///
	/// # Errors
	/// If there is an integer overflow while summing, an error variant is returned.
	pub fn total(&self) -> Result<i64, Error> {
		self.rolls.iter().try_fold(0_i64, |sum, rolled| {
			sum.checked_add(rolled.total()?).ok_or(Error::Overflow)
		})
	}

	/// Aggregates the rolls into a total and a sequence of display tokens. See [`outcome::aggregate()`].
	///
	/// # Errors
	/// If there is an integer overflow while summing, an error variant is returned.
	#[inline]
	pub fn outcome(&self) -> Result<Outcome, Error> {
		outcome::aggregate(&self.rolls)
	}
}
