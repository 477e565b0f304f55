use crate::{
	command::{Command, Completion, Context, Error, Registry, CHOOSE, DIE_COUNT_TOO_HIGH, ROLL, TOTAL_TOO_LARGE},
	dice::roller::{Iter as IterRoller, Max as MaxRoller},
	markup::{Irc, Plain},
};

fn respond(registry: &Registry, line: &str, draws: &[i64]) -> Option<String> {
	let mut roller = IterRoller::new(draws.to_vec());
	let mut ctx = Context {
		roller: &mut roller,
		markup: &Plain,
		list_limit: None,
	};
	registry.respond(line, &mut ctx)
}

fn shout(_ctx: &mut Context<'_>, args: &str) -> Result<Option<String>, Error> {
	Ok(Some(args.to_uppercase()))
}

fn silent(_ctx: &mut Context<'_>, _args: &str) -> Result<Option<String>, Error> {
	Ok(None)
}

const SHOUT: Command = Command {
	names: &["shout"],
	usage: "shout <text>",
	handler: shout,
};

const CHOOSY: Command = Command {
	names: &["choosy", "picky"],
	usage: "choosy",
	handler: silent,
};

#[test]
fn exact_match_wins() {
	let registry = Registry::builtin('.').with(CHOOSY);
	assert_eq!(registry.complete("choose"), Completion::Exact(&CHOOSE));
	assert_eq!(registry.complete("picky"), Completion::Exact(&CHOOSY));
}

#[test]
fn unique_prefix() {
	let registry = Registry::builtin('.');
	assert_eq!(registry.complete("r"), Completion::Unique(&ROLL));
	assert_eq!(registry.complete("di"), Completion::Unique(&ROLL));
}

#[test]
fn ambiguous_prefix() {
	let registry = Registry::builtin('.').with(CHOOSY);
	assert_eq!(registry.complete("cho"), Completion::Ambiguous(vec!["choose", "choosy"]));
}

#[test]
fn unknown_prefix() {
	let registry = Registry::builtin('.');
	assert_eq!(registry.complete("rolls"), Completion::Unknown);
	assert_eq!(Registry::new('.').complete("roll"), Completion::Unknown);
}

#[test]
fn completion_ignores_case() {
	let registry = Registry::builtin('.').with(CHOOSY);
	assert_eq!(registry.complete("ROLL"), Completion::Exact(&ROLL));
	assert_eq!(registry.complete("Dice"), Completion::Exact(&ROLL));
	assert_eq!(registry.complete("CH"), Completion::Ambiguous(vec!["choose", "choosy"]));
	assert_eq!(registry.complete("PiC"), Completion::Unique(&CHOOSY));
}

#[test]
fn uppercase_commands() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, ".ROLL 2d6", &[3, 5]).as_deref(), Some("8 (2d6=3, 5)"));
	assert_eq!(respond(&registry, ".Choose a,b", &[1]).as_deref(), Some("a"));
	assert_eq!(respond(&registry, ".CH x", &[1]).as_deref(), Some("x"));
}

#[test]
fn roll_command() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, ".roll 2d6", &[3, 5]).as_deref(), Some("8 (2d6=3, 5)"));
	assert_eq!(respond(&registry, ".dice 3df", &[1, -1, 0]).as_deref(), Some("0 (3df=+, -, 0)"));
}

#[test]
fn autocompleted_roll_command() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, ".ro 1d4+1d4", &[2, 4]).as_deref(), Some("6 (1d4+1d4=2, 4)"));
}

#[test]
fn ambiguous_command_runs_nothing() {
	let registry = Registry::default().with(CHOOSY).with(SHOUT);
	assert_eq!(
		respond(&registry, ".cho a, b", &[1]).as_deref(),
		Some("Did you mean choose or choosy?")
	);

	let registry = Registry::new('!').with(SHOUT).with(CHOOSY).with(CHOOSE).with(ROLL);
	assert_eq!(
		respond(&registry, "!c x", &[]).as_deref(),
		Some("Did you mean choosy or choose?")
	);
}

#[test]
fn three_way_ambiguity() {
	let registry = Registry::new('.')
		.with(CHOOSE)
		.with(CHOOSY)
		.with(Command {
			names: &["chorus"],
			usage: "chorus",
			handler: silent,
		});
	assert_eq!(
		respond(&registry, ".ch", &[]).as_deref(),
		Some("Did you mean choose, choosy or chorus?")
	);
}

#[test]
fn unknown_command_ignored() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, ".weather today", &[]), None);
	assert_eq!(respond(&registry, ".", &[]), None);
}

#[test]
fn custom_command() {
	let registry = Registry::builtin('!').with(SHOUT);
	assert_eq!(respond(&registry, "!sh hello  there ", &[]).as_deref(), Some("HELLO  THERE"));
	assert_eq!(respond(&registry, ".shout hello", &[]), None);
}

#[test]
fn bare_expression_rolled() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, "  2d6  ", &[1, 2]).as_deref(), Some("3 (2d6=1, 2)"));
	assert_eq!(respond(&registry, "2d6 please", &[]), None);
	assert_eq!(respond(&registry, "hello", &[]), None);
}

#[test]
fn count_too_high_reply() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, ".roll 1d6+5001d6", &[3]).as_deref(), Some(DIE_COUNT_TOO_HIGH));
	assert_eq!(respond(&registry, "5001df", &[]).as_deref(), Some(DIE_COUNT_TOO_HIGH));
}

#[test]
fn wide_flat_modifier() {
	let registry = Registry::default();
	assert_eq!(
		respond(&registry, ".roll 1d6+4294967296", &[3]).as_deref(),
		Some("4294967299 (1d6+4294967296=3, 4294967296)")
	);
	assert_eq!(
		respond(&registry, "1d6-99999999999999999999", &[3]).as_deref(),
		Some(TOTAL_TOO_LARGE)
	);
}

#[test]
fn malformed_roll_reply() {
	let registry = Registry::default();
	assert_eq!(
		respond(&registry, ".roll 2d6 + 3", &[]),
		Some(format!("Usage: {}", ROLL.usage))
	);
	assert_eq!(respond(&registry, ".roll", &[]), Some(format!("Usage: {}", ROLL.usage)));
}

#[test]
fn choose_command() {
	let registry = Registry::default();
	assert_eq!(respond(&registry, ".choose tea, coffee", &[2]).as_deref(), Some("coffee"));
	assert_eq!(respond(&registry, ".choose , ,", &[]), None);
}

#[test]
fn list_limit_and_markup() {
	let registry = Registry::default();
	let mut roller = MaxRoller;
	let mut ctx = Context {
		roller: &mut roller,
		markup: &Irc,
		list_limit: Some(2),
	};
	assert_eq!(
		registry.respond(".roll 4df", &mut ctx).as_deref(),
		Some("4 (4df=\x033+\x0F, \x033+\x0F, 2 more...)")
	);
}

#[test]
fn builtin_commands() {
	let registry = Registry::default();
	let names = registry.commands().iter().map(Command::name).collect::<Vec<_>>();
	assert_eq!(names, vec!["roll", "choose"]);
}
