//! Abstractions for producing die values using various means.

use core::{iter::Peekable, num::NonZeroU32};

#[cfg(feature = "fastrand")]
use fastrand::Rng;

use super::{Error, Rolled, Term};

/// Rolls dice - what else is there to say?
pub trait Roller {
	/// Rolls a single standard die, producing a value from 1 up to `sides`.
	#[must_use]
	fn roll_die(&mut self, sides: NonZeroU32) -> u32;

	/// Rolls a single fudge die, producing -1, 0, or 1.
	#[must_use]
	fn roll_fudge(&mut self) -> i8;

	/// Rolls every die in a term. This is the same as calling [`Term::roll()`] with this roller.
	///
	/// # Errors
	/// If the term asks for too many dice, an error variant is returned.
	fn roll(&mut self, term: &Term) -> Result<Rolled, Error>
	where
		Self: Sized,
	{
		term.roll(self)
	}
}

/// Generates rolls with random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use fudgeroll::dice::{roller::{FastRand as FastRandRoller, Roller}, Term};
///
/// let mut roller = FastRandRoller::default();
///
/// let term = Term::new(4, 6);
/// let _ = roller.roll(&term)?;
/// let _ = roller.roll(&term)?;
/// # Ok::<(), fudgeroll::dice::Error>(())
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use fudgeroll::dice::{roller::{FastRand as FastRandRoller, Roller}, Term};
///
/// let term = Term::fudge(4);
/// let first = FastRandRoller::with_seed(0x750c38d574400).roll(&term)?;
/// let second = FastRandRoller::with_seed(0x750c38d574400).roll(&term)?;
/// assert_eq!(first, second);
/// # Ok::<(), fudgeroll::dice::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	#[inline]
	fn roll_die(&mut self, sides: NonZeroU32) -> u32 {
		self.0.u32(1..=sides.get())
	}

	#[inline]
	fn roll_fudge(&mut self) -> i8 {
		self.0.i8(-1..=1)
	}
}

/// Generates rolls that always have their max value (a `+` for fudge dice).
///
/// # Examples
/// ```
/// use fudgeroll::dice::{roller::{Max as MaxRoller, Roller}, Term};
///
/// let mut roller = MaxRoller;
///
/// let rolled = roller.roll(&Term::new(4, 6))?;
/// assert!(rolled.values.iter().all(|val| *val == 6));
///
/// let rolled = roller.roll(&Term::fudge(3))?;
/// assert!(rolled.values.iter().all(|val| *val == 1));
/// # Ok::<(), fudgeroll::dice::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	#[inline]
	fn roll_die(&mut self, sides: NonZeroU32) -> u32 {
		sides.get()
	}

	#[inline]
	fn roll_fudge(&mut self) -> i8 {
		1
	}
}

/// Generates rolls from an iterator of values. Mainly useful for testing purposes.
///
/// Values are handed out as-is: a standard die takes the next value as its face, a fudge die takes it as -1, 0,
/// or 1. Signs are applied by the term afterwards, so the iterator should only contain unsigned draws.
///
/// # Examples
/// ```
/// use fudgeroll::dice::{roller::{Iter as IterRoller, Roller}, Term};
///
/// let mut roller = IterRoller::new([1, 2, 3, 1, -1, 0]);
/// assert_eq!(roller.roll(&Term::new(3, 6))?.values, vec![1, 2, 3]);
/// assert_eq!(roller.roll(&Term::fudge(3))?.values, vec![1, -1, 0]);
/// assert!(!roller.can_roll());
/// # Ok::<(), fudgeroll::dice::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = i64>>(Peekable<I>);

impl<I: Iterator<Item = i64>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

#[expect(
	clippy::expect_used,
	reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
)]
impl<I: Iterator<Item = i64>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished or the value isn't a valid face, this will panic.
	#[inline]
	fn roll_die(&mut self, _sides: NonZeroU32) -> u32 {
		let val = self.0.next().expect("iterator is finished");
		u32::try_from(val).expect("value is not a valid die face")
	}

	/// Rolls a fudge die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished or the value isn't a valid fudge face, this will panic.
	#[inline]
	fn roll_fudge(&mut self) -> i8 {
		let val = self.0.next().expect("iterator is finished");
		assert!((-1..=1).contains(&val), "value is not a valid fudge face");
		i8::try_from(val).expect("value is not a valid fudge face")
	}
}
