use std::num::NonZeroU32;

use chumsky::Parser;

use crate::{
	dice::{Faces, Sign, Term},
	parse::Error,
	parser, Expr,
};

#[test]
fn basic_dice() {
	let expr: Expr = "2d6".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::new(2, 6)]);
}

#[test]
fn count_defaults_to_one() {
	let expr: Expr = "d20".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::new(1, 20)]);
}

#[test]
fn fudge_dice() {
	let expr: Expr = "4df".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::fudge(4)]);
}

#[test]
fn multiple_terms_with_signs() {
	let expr: Expr = "2d6+1d4-3d8".parse().unwrap();
	assert_eq!(
		expr.terms,
		vec![
			Term::new(2, 6),
			Term::new(1, 4),
			Term::new(3, 8).with_sign(Sign::Neg),
		]
	);
}

#[test]
fn unsigned_terms_after_the_first() {
	let expr: Expr = "2d6d8".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::new(2, 6), Term::new(1, 8)]);
}

#[test]
fn leading_negative_sign() {
	let expr: Expr = "-2d6".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::new(2, 6).with_sign(Sign::Neg)]);
}

#[test]
fn trailing_flat_modifier() {
	let expr: Expr = "2d6+1d4-3".parse().unwrap();
	assert_eq!(
		expr.terms,
		vec![Term::new(2, 6), Term::new(1, 4), Term::flat(Sign::Neg, 3)]
	);
}

#[test]
fn case_insensitive() {
	let upper: Expr = "2D6+4DF".parse().unwrap();
	let lower: Expr = "2d6+4df".parse().unwrap();
	assert_eq!(upper, lower);
}

#[test]
fn leading_zeroes() {
	let expr: Expr = "02d010".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::new(2, 10)]);
}

#[test]
fn huge_count_saturates() {
	let expr: Expr = "99999999999d6".parse().unwrap();
	assert_eq!(expr.terms[0].count, u32::MAX);
}

#[test]
fn wide_flat_modifier() {
	let expr: Expr = "1d6+4294967296".parse().unwrap();
	assert_eq!(expr.terms, vec![Term::new(1, 6), Term::flat(Sign::Pos, 4_294_967_296)]);
	assert_eq!(expr.terms[1].faces, Faces::Flat(4_294_967_296));
}

#[test]
fn huge_flat_modifier_saturates() {
	let expr: Expr = "1d6-99999999999999999999".parse().unwrap();
	assert_eq!(expr.terms[1], Term::flat(Sign::Neg, u64::MAX));
}

#[test]
fn zero_sides_rejected() {
	assert!(matches!("2d0".parse::<Expr>(), Err(Error::Malformed(..))));
}

#[test]
fn huge_sides_rejected() {
	assert!(matches!("1d99999999999".parse::<Expr>(), Err(Error::Malformed(..))));
}

#[test]
fn flat_modifier_alone_rejected() {
	assert!(matches!("+3".parse::<Expr>(), Err(Error::Malformed(..))));
	assert!(matches!("3".parse::<Expr>(), Err(Error::Malformed(..))));
}

#[test]
fn flat_modifier_must_be_last() {
	assert!(matches!("1d6+3+1d4".parse::<Expr>(), Err(Error::Malformed(..))));
	assert!(matches!("1d6+3+2".parse::<Expr>(), Err(Error::Malformed(..))));
}

#[test]
fn whitespace_rejected() {
	assert!("2d6 + 3".parse::<Expr>().is_err());
	assert!(" 2d6".parse::<Expr>().is_err());
	assert!("2d6\n".parse::<Expr>().is_err());
}

#[test]
fn garbage_rejected() {
	for input in ["", "d", "2d", "2x6", "2d6x", "2df6", "hello", "2d6*3", "d+6", "--1d6"] {
		let result = input.parse::<Expr>();
		assert!(matches!(result, Err(Error::Malformed(ref problems)) if !problems.is_empty()), "{input}");
	}
}

#[test]
fn problem_spans_point_at_input() {
	let Err(Error::Malformed(problems)) = "2d6+1q4".parse::<Expr>() else {
		panic!("expected a malformed expression");
	};
	assert!(problems.iter().all(|problem| problem.span.end <= "2d6+1q4".len()));
	assert!(problems.iter().any(|problem| problem.span.start >= 4));
}

#[test]
fn parsing_is_repeatable() {
	let input = "3d6-df+2";
	assert_eq!(input.parse::<Expr>(), input.parse::<Expr>());
}

#[test]
fn canonical_display_reparses() {
	let expr: Expr = "d20-DF+d4-2".parse().unwrap();
	let reparsed: Expr = expr.to_string().parse().unwrap();
	assert_eq!(expr, reparsed);
}

#[test]
fn single_term_from_str() {
	assert_eq!("-3DF".parse::<Term>().unwrap(), Term::fudge(3).with_sign(Sign::Neg));
	assert_eq!("+5".parse::<Term>().unwrap(), Term::flat(Sign::Pos, 5));
	assert_eq!("-4294967296".parse::<Term>().unwrap(), Term::flat(Sign::Neg, 4_294_967_296));
	assert!("2d6+1".parse::<Term>().is_err());
}

#[test]
fn raw_parser_requires_lowercase() {
	assert!(parser().parse("2d6").into_result().is_ok());
	assert!(parser().parse("2D6").into_result().is_err());
}

#[test]
fn raw_parser_output() {
	let expr = parser().parse("10d100-d3").into_result().unwrap();
	assert_eq!(expr.terms[0].faces, Faces::Sides(NonZeroU32::new(100).unwrap()));
	assert_eq!(expr.terms[1].sign, Sign::Neg);
}
