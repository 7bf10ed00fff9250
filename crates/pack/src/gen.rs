// Copyright 2025 Irreducible Inc.

use crate::{codec::ExponentCodec, error::Error};
use mpoly_utils::ensure;

/// Packs the exponent vector of the `i`-th ring generator: exponent 1 at
/// position `i`, 0 elsewhere, and a total-degree field of 1 under graded
/// orders.
///
/// When the whole monomial fits one word the packed form is built directly
/// from two shifts; otherwise the unit vector goes through the general codec.
/// Both paths produce identical words.
pub fn unit_monomial(codec: &ExponentCodec, i: usize) -> Result<Vec<u64>, Error> {
	let layout = codec.layout();
	ensure!(
		i < layout.nvars(),
		Error::VariableOutOfRange {
			index: i,
			max: layout.nvars(),
		}
	);

	if codec.words_per_monomial() == 1 {
		return Ok(vec![unit_monomial_word(codec, i)]);
	}

	let mut exponents = vec![0; layout.nvars()];
	exponents[i] = 1;
	codec.encode(&exponents)
}

/// Single-word fast path: the variable's field and, under graded orders, the
/// degree field each hold 1, so the word is two shifted bits.
fn unit_monomial_word(codec: &ExponentCodec, i: usize) -> u64 {
	let bits = codec.width().bits();
	let fields = codec.width().fields_per_word();
	let layout = codec.layout();

	let mut word = 1u64 << ((fields - 1 - layout.slot_of_var(i)) * bits);
	if layout.order().is_graded() {
		word |= 1u64 << ((fields - 1) * bits);
	}
	word
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		layout::{MonomialLayout, TermOrder},
		width::FieldWidth,
	};
	use assert_matches::assert_matches;

	const ALL_ORDERS: [TermOrder; 3] = [TermOrder::Lex, TermOrder::DegLex, TermOrder::DegRevLex];

	#[test]
	fn test_unit_monomial_decodes_to_unit_vector() {
		for order in ALL_ORDERS {
			for width in FieldWidth::ALL {
				for nvars in [1, 3, 9] {
					let codec = ExponentCodec::new(MonomialLayout::new(nvars, order), width);
					for i in 0..nvars {
						let words = unit_monomial(&codec, i).unwrap();
						let decoded = codec.decode(&words).unwrap();
						let mut expected = vec![0; nvars];
						expected[i] = 1;
						assert_eq!(decoded.exponents, expected);
						assert_eq!(decoded.degree, order.is_graded().then_some(1));
					}
				}
			}
		}
	}

	#[test]
	fn test_fast_path_matches_general_path() {
		for order in ALL_ORDERS {
			for width in [FieldWidth::W8, FieldWidth::W16, FieldWidth::W32] {
				let codec = ExponentCodec::new(MonomialLayout::new(3, order), width);
				if codec.words_per_monomial() != 1 {
					continue;
				}
				for i in 0..3 {
					let mut exponents = vec![0; 3];
					exponents[i] = 1;
					assert_eq!(
						unit_monomial(&codec, i).unwrap(),
						codec.encode(&exponents).unwrap()
					);
				}
			}
		}
	}

	#[test]
	fn test_multiword_unit_monomial() {
		// 11 slots at 32 bits is a six-word monomial; the builder must not
		// reject it the way the single-word fast path alone would.
		let codec = ExponentCodec::new(MonomialLayout::new(10, TermOrder::DegRevLex), FieldWidth::W32);
		assert_eq!(codec.words_per_monomial(), 6);
		let words = unit_monomial(&codec, 4).unwrap();
		let decoded = codec.decode(&words).unwrap();
		assert_eq!(decoded.exponents, vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
		assert_eq!(decoded.degree, Some(1));
	}

	#[test]
	fn test_variable_out_of_range() {
		let codec = ExponentCodec::new(MonomialLayout::new(3, TermOrder::Lex), FieldWidth::W8);
		assert_matches!(
			unit_monomial(&codec, 3),
			Err(Error::VariableOutOfRange { index: 3, max: 3 })
		);
	}
}
