//! Picking one of several comma-separated options at random.

use alloc::vec::Vec;
use core::num::NonZeroU32;

use crate::dice::Roller;

/// Picks one option out of a comma-separated list, uniformly at random. Whitespace around each option is trimmed and
/// options left empty by that are ignored.
///
/// The pick is made by rolling a single die with one side per option.
///
/// # Errors
/// If there are no non-empty options, [`Error::EmptyOptions`] is returned.
///
/// # Examples
/// ```
/// use fudgeroll::{choice::choose, dice::roller::Iter as IterRoller};
///
/// let picked = choose("a, b ,c", &mut IterRoller::new([2]))?;
/// assert_eq!(picked, "b");
/// # Ok::<(), fudgeroll::choice::Error>(())
/// ```
pub fn choose<'a, R: Roller + ?Sized>(options: &'a str, roller: &mut R) -> Result<&'a str, Error> {
	let options = options
		.split(',')
		.map(str::trim)
		.filter(|opt| !opt.is_empty())
		.collect::<Vec<_>>();

	let sides = NonZeroU32::new(u32::try_from(options.len()).unwrap_or(u32::MAX)).ok_or(Error::EmptyOptions)?;
	let rolled = usize::try_from(roller.roll_die(sides)).unwrap_or(usize::MAX);
	let idx = rolled.saturating_sub(1).min(options.len().saturating_sub(1));

	options.get(idx).copied().ok_or(Error::EmptyOptions)
}

/// An error resulting from choosing between options
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// There was nothing to choose from.
	///
	/// # Examples
	/// ```
	/// use fudgeroll::{choice::{choose, Error}, dice::roller::Max as MaxRoller};
	///
	/// assert_eq!(choose(" , ,", &mut MaxRoller), Err(Error::EmptyOptions));
	/// ```
	#[error("no options to choose from")]
	EmptyOptions,
}
