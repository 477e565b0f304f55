#![feature(test)]

extern crate test;

use test::Bencher;

use fudgeroll::{
	command::{Context, Registry},
	dice::roller::FastRand,
	markup::Irc,
	Expr,
};

#[bench]
fn e2e_basic(b: &mut Bencher) {
	let mut rng = FastRand::default();
	b.iter(|| {
		"4d8+4"
			.parse::<Expr>()
			.unwrap()
			.eval(&mut rng)
			.unwrap()
			.outcome()
			.unwrap()
	});
}

#[bench]
fn e2e_command(b: &mut Bencher) {
	let registry = Registry::default();
	let mut rng = FastRand::default();
	let mut ctx = Context {
		roller: &mut rng,
		markup: &Irc,
		list_limit: Some(50),
	};
	b.iter(|| registry.respond(".ro 3d6+4df-2", &mut ctx).unwrap());
}
