// Copyright 2025 Irreducible Inc.

use crate::width::{FieldWidth, WORD_BITS};
use mpoly_utils::checked_arithmetics::words_for_bits;
use std::cmp::Ordering;

/// Term order of a polynomial ring.
///
/// The order is captured by two flags that drive the packed layout: `graded`
/// (a total-degree field is materialized in front of the exponents) and
/// `reversed` (variables are packed in reverse, so that the comparison falls
/// on the trailing variables first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermOrder {
	Lex,
	DegLex,
	DegRevLex,
}

impl TermOrder {
	pub const fn is_graded(self) -> bool {
		matches!(self, Self::DegLex | Self::DegRevLex)
	}

	pub const fn is_reversed(self) -> bool {
		matches!(self, Self::DegRevLex)
	}

	/// Term-order comparison of two logical exponent vectors.
	///
	/// This is the comparison that [`compare_packed`](crate::compare_packed)
	/// must reproduce on the packed representation.
	pub fn compare_exponents(self, a: &[u64], b: &[u64]) -> Ordering {
		debug_assert_eq!(a.len(), b.len());
		if self.is_graded() {
			let deg_a: u128 = a.iter().map(|&e| e as u128).sum();
			let deg_b: u128 = b.iter().map(|&e| e as u128).sum();
			match deg_a.cmp(&deg_b) {
				Ordering::Equal => {}
				ord => return ord,
			}
		}
		if self.is_reversed() {
			a.iter().rev().cmp(b.iter().rev())
		} else {
			a.iter().cmp(b.iter())
		}
	}
}

/// Packing context for one polynomial ring: variable count and term order.
///
/// An immutable value threaded explicitly into every codec, promoter and
/// builder call; there is no hidden global ring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonomialLayout {
	nvars: usize,
	order: TermOrder,
}

impl MonomialLayout {
	pub fn new(nvars: usize, order: TermOrder) -> Self {
		assert!(nvars >= 1, "a polynomial ring needs at least one variable");
		Self { nvars, order }
	}

	pub const fn nvars(&self) -> usize {
		self.nvars
	}

	pub const fn order(&self) -> TermOrder {
		self.order
	}

	/// Number of packed fields per monomial: one per variable, plus the
	/// total-degree field under graded orders.
	pub const fn field_slots(&self) -> usize {
		self.nvars + self.order.is_graded() as usize
	}

	pub const fn words_per_monomial(&self, width: FieldWidth) -> usize {
		words_for_bits(self.field_slots() * width.bits(), WORD_BITS)
	}

	/// Significance position of variable `i`; position 0 is the most
	/// significant slot of the most significant word. The total-degree field,
	/// when present, always takes position 0, so degree comparison wins.
	pub(crate) fn slot_of_var(&self, i: usize) -> usize {
		debug_assert!(i < self.nvars);
		let graded = self.order.is_graded() as usize;
		if self.order.is_reversed() {
			graded + (self.nvars - 1 - i)
		} else {
			graded + i
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_field_slots() {
		assert_eq!(MonomialLayout::new(3, TermOrder::Lex).field_slots(), 3);
		assert_eq!(MonomialLayout::new(3, TermOrder::DegLex).field_slots(), 4);
		assert_eq!(MonomialLayout::new(3, TermOrder::DegRevLex).field_slots(), 4);
	}

	#[test]
	fn test_words_per_monomial() {
		let layout = MonomialLayout::new(3, TermOrder::DegLex);
		assert_eq!(layout.words_per_monomial(FieldWidth::W8), 1);
		assert_eq!(layout.words_per_monomial(FieldWidth::W16), 1);
		assert_eq!(layout.words_per_monomial(FieldWidth::W32), 2);
		assert_eq!(layout.words_per_monomial(FieldWidth::W64), 4);

		let layout = MonomialLayout::new(9, TermOrder::DegRevLex);
		assert_eq!(layout.words_per_monomial(FieldWidth::W8), 2);
		assert_eq!(layout.words_per_monomial(FieldWidth::W16), 3);
	}

	#[test]
	fn test_slot_of_var() {
		// Lex: variable 0 is the most significant field.
		let layout = MonomialLayout::new(3, TermOrder::Lex);
		assert_eq!(layout.slot_of_var(0), 0);
		assert_eq!(layout.slot_of_var(2), 2);

		// DegLex: the degree field shifts every variable down one slot.
		let layout = MonomialLayout::new(3, TermOrder::DegLex);
		assert_eq!(layout.slot_of_var(0), 1);
		assert_eq!(layout.slot_of_var(2), 3);

		// DegRevLex: the last variable sits just below the degree field.
		let layout = MonomialLayout::new(3, TermOrder::DegRevLex);
		assert_eq!(layout.slot_of_var(0), 3);
		assert_eq!(layout.slot_of_var(2), 1);
	}

	#[test]
	fn test_compare_exponents_lex() {
		let order = TermOrder::Lex;
		assert_eq!(order.compare_exponents(&[1, 0], &[0, 5]), Ordering::Greater);
		assert_eq!(order.compare_exponents(&[2, 3], &[2, 3]), Ordering::Equal);
		assert_eq!(order.compare_exponents(&[2, 3], &[2, 4]), Ordering::Less);
	}

	#[test]
	fn test_compare_exponents_graded() {
		// Total degree decides first.
		let order = TermOrder::DegLex;
		assert_eq!(order.compare_exponents(&[1, 0], &[0, 5]), Ordering::Less);
		assert_eq!(order.compare_exponents(&[3, 1], &[1, 3]), Ordering::Greater);

		// Equal degrees fall through to the reversed variable scan.
		let order = TermOrder::DegRevLex;
		assert_eq!(order.compare_exponents(&[3, 1], &[1, 3]), Ordering::Less);
		assert_eq!(order.compare_exponents(&[1, 3], &[3, 1]), Ordering::Greater);
	}
}
