//! Presentation of styled display tokens for different kinds of output.

use alloc::{format, string::String};

use crate::outcome::Style;

/// Turns styled text into whatever a particular output needs to show that style.
pub trait Markup {
	/// Wraps `text` in the codes for `style`.
	#[must_use]
	fn paint(&self, text: &str, style: Style) -> String;
}

/// No styling at all.
///
/// # Examples
/// ```
/// use fudgeroll::{markup::{Markup, Plain}, outcome::Style};
///
/// assert_eq!(Plain.paint("+", Style::Positive), "+");
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Unit struct")]
pub struct Plain;

impl Markup for Plain {
	#[inline]
	fn paint(&self, text: &str, _style: Style) -> String {
		String::from(text)
	}
}

/// mIRC colour codes: green for positive, red for negative, followed by a formatting reset.
///
/// # Examples
/// ```
/// use fudgeroll::{markup::{Irc, Markup}, outcome::Style};
///
/// assert_eq!(Irc.paint("+", Style::Positive), "\x033+\x0F");
/// assert_eq!(Irc.paint("-", Style::Negative), "\x034-\x0F");
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Unit struct")]
pub struct Irc;

impl Markup for Irc {
	fn paint(&self, text: &str, style: Style) -> String {
		let colour = match style {
			Style::Positive => 3,
			Style::Negative => 4,
		};
		format!("\x03{colour}{text}\x0F")
	}
}

/// ANSI SGR escape sequences for terminals.
///
/// # Examples
/// ```
/// use fudgeroll::{markup::{Ansi, Markup}, outcome::Style};
///
/// assert_eq!(Ansi.paint("-", Style::Negative), "\x1b[31m-\x1b[0m");
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Unit struct")]
pub struct Ansi;

impl Markup for Ansi {
	fn paint(&self, text: &str, style: Style) -> String {
		let colour = match style {
			Style::Positive => 32,
			Style::Negative => 31,
		};
		format!("\x1b[{colour}m{text}\x1b[0m")
	}
}
