// Copyright 2025 Irreducible Inc.

use crate::{
	error::Error,
	layout::MonomialLayout,
	width::FieldWidth,
};
use mpoly_utils::ensure;
use std::cmp::Ordering;

/// Decoded view of one packed monomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMonomial {
	/// One exponent per ring variable.
	pub exponents: Vec<u64>,
	/// Total degree, present exactly under graded orders.
	pub degree: Option<u64>,
}

/// Stateless encoder/decoder between logical exponent vectors and packed words
/// for one fixed layout and field width.
///
/// One generic routine covers all four widths; the slot arithmetic is the only
/// per-width variation and it is derived from [`FieldWidth`], not unrolled by
/// hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentCodec {
	layout: MonomialLayout,
	width: FieldWidth,
}

impl ExponentCodec {
	pub fn new(layout: MonomialLayout, width: FieldWidth) -> Self {
		Self { layout, width }
	}

	pub const fn layout(&self) -> MonomialLayout {
		self.layout
	}

	pub const fn width(&self) -> FieldWidth {
		self.width
	}

	pub const fn words_per_monomial(&self) -> usize {
		self.layout.words_per_monomial(self.width)
	}

	/// Word index and in-word shift of significance position `slot`.
	///
	/// Word 0 is the most significant word; within a word, higher shifts are
	/// more significant. Trailing unused slots of the final word end up at the
	/// low-order bits, so zero padding sorts below every real field.
	fn word_and_shift(&self, slot: usize) -> (usize, usize) {
		let fields = self.width.fields_per_word();
		(slot / fields, (fields - 1 - slot % fields) * self.width.bits())
	}

	/// Total degree of `exponents`, checked to fit one field.
	fn graded_total(&self, exponents: &[u64]) -> Result<u64, Error> {
		let total: u128 = exponents.iter().map(|&e| e as u128).sum();
		ensure!(
			total <= self.width.mask() as u128,
			Error::FieldTooWide {
				value: total,
				bits: self.width.bits(),
			}
		);
		Ok(total as u64)
	}

	/// Packs `exponents` into a freshly allocated word sequence.
	pub fn encode(&self, exponents: &[u64]) -> Result<Vec<u64>, Error> {
		let mut words = vec![0; self.words_per_monomial()];
		self.encode_into(exponents, &mut words)?;
		Ok(words)
	}

	/// Packs `exponents` into `out`, which must hold exactly
	/// [`Self::words_per_monomial`] words.
	///
	/// Under graded orders the total-degree field is computed here rather than
	/// accepted from the caller, so a stored degree can never disagree with
	/// the stored exponents. A value too wide for the field is an error; it is
	/// never masked down.
	pub fn encode_into(&self, exponents: &[u64], out: &mut [u64]) -> Result<(), Error> {
		ensure!(
			exponents.len() == self.layout.nvars(),
			Error::FieldCountMismatch {
				expected: self.layout.nvars(),
				got: exponents.len(),
			}
		);
		ensure!(
			out.len() == self.words_per_monomial(),
			Error::WordCountMismatch {
				expected: self.words_per_monomial(),
				got: out.len(),
			}
		);

		let mask = self.width.mask();
		let degree = if self.layout.order().is_graded() {
			Some(self.graded_total(exponents)?)
		} else {
			None
		};
		for &e in exponents {
			ensure!(
				e <= mask,
				Error::FieldTooWide {
					value: e as u128,
					bits: self.width.bits(),
				}
			);
		}

		out.fill(0);
		if let Some(degree) = degree {
			let (word, shift) = self.word_and_shift(0);
			out[word] |= degree << shift;
		}
		for (i, &e) in exponents.iter().enumerate() {
			let (word, shift) = self.word_and_shift(self.layout.slot_of_var(i));
			out[word] |= e << shift;
		}
		Ok(())
	}

	/// Unpacks a word sequence produced by [`Self::encode`].
	///
	/// Exact inverse of `encode` under the same layout and width. A word count
	/// other than [`Self::words_per_monomial`] is reported, not assumed away.
	pub fn decode(&self, words: &[u64]) -> Result<DecodedMonomial, Error> {
		ensure!(
			words.len() == self.words_per_monomial(),
			Error::WordCountMismatch {
				expected: self.words_per_monomial(),
				got: words.len(),
			}
		);

		let mask = self.width.mask();
		let field = |slot: usize| {
			let (word, shift) = self.word_and_shift(slot);
			(words[word] >> shift) & mask
		};

		let exponents = (0..self.layout.nvars())
			.map(|i| field(self.layout.slot_of_var(i)))
			.collect();
		let degree = self.layout.order().is_graded().then(|| field(0));
		Ok(DecodedMonomial { exponents, degree })
	}
}

/// Compares two packed monomials word-by-word as unsigned integers, most
/// significant word first.
///
/// For monomials packed by the same [`ExponentCodec`] this reproduces
/// [`TermOrder::compare_exponents`](crate::TermOrder::compare_exponents) on the
/// logical vectors; that equivalence is the central contract of the packed
/// representation.
pub fn compare_packed(a: &[u64], b: &[u64]) -> Ordering {
	debug_assert_eq!(a.len(), b.len());
	a.cmp(b)
}
