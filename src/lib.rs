#![doc = pretty_readme::docify!("README.md", "https://docs.rs/fudgeroll/latest/fudgeroll/", "./")]
#![cfg_attr(not(any(doc, test)), no_std)]
#![expect(
	clippy::tabs_in_doc_comments,
	reason = "Consistency with source, user-configurability & accessibility"
)]
#![deny(macro_use_extern_crate, meta_variable_misuse, unit_bindings)]
#![warn(
	explicit_outlives_requirements,
	missing_docs,
	missing_debug_implementations,
	unreachable_pub,
	unused_crate_dependencies,
	unused_qualifications,
	clippy::pedantic,
	clippy::alloc_instead_of_core,
	clippy::allow_attributes,
	clippy::allow_attributes_without_reason,
	clippy::arithmetic_side_effects,
	clippy::dbg_macro,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::get_unwrap,
	clippy::map_err_ignore,
	clippy::missing_docs_in_private_items,
	clippy::panic_in_result_fn,
	clippy::print_stderr,
	clippy::print_stdout,
	clippy::self_named_module_files,
	clippy::std_instead_of_alloc,
	clippy::std_instead_of_core,
	clippy::str_to_string,
	clippy::try_err,
	clippy::unwrap_in_result,
	clippy::unwrap_used
)]

extern crate alloc;
extern crate core;

pub mod choice;
#[cfg(feature = "parse")]
pub mod command;
pub mod dice;
pub mod expr;
pub mod markup;
pub mod outcome;
#[cfg(feature = "parse")]
pub mod parse;

#[cfg(feature = "parse")]
pub use command::Registry;
pub use dice::Term;
pub use expr::Expr;
#[cfg(feature = "parse")]
pub use parse::expr as parser;

#[cfg(test)]
mod tests;

#[cfg(feature = "build-binary")]
use ariadne as _;
#[cfg(feature = "build-binary")]
use clap as _;
#[cfg(feature = "build-binary")]
use tracing_subscriber as _;
