// Copyright 2025 Irreducible Inc.

use crate::{error::Error, ring::MPolyRing};
use getset::CopyGetters;
use itertools::izip;
use mpoly_pack::{promote, unit_monomial, DecodedMonomial, FieldWidth};
use mpoly_utils::ensure;

/// A multivariate polynomial: a coefficient array plus a packed exponent
/// buffer, one monomial per term.
///
/// The container stores terms in the order the caller supplies them; packing
/// makes term comparison a word-level operation but nothing here sorts on
/// insert. The exponent buffer is owned exclusively by the container and is
/// replaced as a whole when the field width must grow.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct MPoly {
	coeffs: Vec<i64>,
	exps: Vec<u64>,
	/// Number of stored terms.
	#[getset(get_copy = "pub")]
	len: usize,
	/// Field width currently in force for the packed exponent buffer.
	#[getset(get_copy = "pub")]
	width: FieldWidth,
}

impl Default for MPoly {
	fn default() -> Self {
		Self::new()
	}
}

impl MPoly {
	pub fn new() -> Self {
		Self {
			coeffs: Vec::new(),
			exps: Vec::new(),
			len: 0,
			width: FieldWidth::W8,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.len == 0
	}

	/// The constant polynomial `c`; zero is the empty polynomial.
	pub fn constant(c: i64, ring: &MPolyRing) -> Result<Self, Error> {
		let mut poly = Self::new();
		if c != 0 {
			poly.push_term(c, &vec![0; ring.nvars()], ring)?;
		}
		Ok(poly)
	}

	/// The `i`-th ring generator as a one-term polynomial.
	pub fn gen(i: usize, ring: &MPolyRing) -> Result<Self, Error> {
		let mut poly = Self::new();
		poly.fit_length(1, ring);
		let words = unit_monomial(&ring.codec(poly.width), i)?;
		poly.exps.extend_from_slice(&words);
		poly.coeffs.push(1);
		poly.set_length(1);
		Ok(poly)
	}

	fn words_per_monomial(&self, ring: &MPolyRing) -> usize {
		ring.layout().words_per_monomial(self.width)
	}

	/// Ensures capacity for at least `n` monomials at the current width.
	pub fn fit_length(&mut self, n: usize, ring: &MPolyRing) {
		self.coeffs.reserve(n.saturating_sub(self.coeffs.len()));
		let words = n * self.words_per_monomial(ring);
		self.exps.reserve(words.saturating_sub(self.exps.len()));
	}

	/// Marks the logical term count after a write. Raise-only; shrinking goes
	/// through [`Self::truncate`].
	pub fn set_length(&mut self, n: usize) {
		debug_assert!(n >= self.len, "set_length never shrinks; use truncate");
		debug_assert_eq!(self.coeffs.len(), n);
		self.len = n;
	}

	pub fn truncate(&mut self, n: usize, ring: &MPolyRing) {
		if n < self.len {
			let words = self.words_per_monomial(ring);
			self.len = n;
			self.coeffs.truncate(n);
			self.exps.truncate(n * words);
		}
	}

	/// Widens the packed exponent buffer so that fields of `new_width` fit;
	/// a width that is already sufficient is a no-op.
	///
	/// The buffer of record is swapped in a single hand-off: the old buffer
	/// stays intact until the repacked one is complete, then is dropped as it
	/// is replaced.
	pub fn promote_width(&mut self, new_width: FieldWidth, ring: &MPolyRing) -> Result<(), Error> {
		if let Some(repacked) = promote(&self.exps, self.width, new_width, self.len, ring.layout())? {
			self.exps = repacked;
			self.width = new_width;
		}
		Ok(())
	}

	/// Appends one term, promoting the field width first when `exponents`
	/// (or, under graded orders, their total degree) do not fit the width in
	/// force. On error the stored terms are left untouched.
	pub fn push_term(&mut self, coeff: i64, exponents: &[u64], ring: &MPolyRing) -> Result<(), Error> {
		ensure!(
			exponents.len() == ring.nvars(),
			mpoly_pack::Error::FieldCountMismatch {
				expected: ring.nvars(),
				got: exponents.len(),
			}
		);

		let governing: u128 = if ring.order().is_graded() {
			exponents.iter().map(|&e| e as u128).sum()
		} else {
			exponents.iter().copied().max().unwrap_or(0) as u128
		};
		let needed = FieldWidth::minimal_for(governing)?;
		self.promote_width(needed, ring)?;

		let codec = ring.codec(self.width);
		let words = codec.words_per_monomial();
		self.fit_length(self.len + 1, ring);
		self.exps.resize((self.len + 1) * words, 0);
		codec.encode_into(exponents, &mut self.exps[self.len * words..])?;
		self.coeffs.push(coeff);
		self.set_length(self.len + 1);
		Ok(())
	}

	/// The raw packed exponent buffer, `len * words_per_monomial` words.
	pub fn packed_words(&self) -> &[u64] {
		&self.exps
	}

	pub fn coeff(&self, i: usize) -> Result<i64, Error> {
		ensure!(i < self.len, Error::TermOutOfRange { index: i, len: self.len });
		Ok(self.coeffs[i])
	}

	/// Decoded exponent vector (and graded degree) of term `i`.
	pub fn term(&self, i: usize, ring: &MPolyRing) -> Result<DecodedMonomial, Error> {
		ensure!(i < self.len, Error::TermOutOfRange { index: i, len: self.len });
		let codec = ring.codec(self.width);
		let words = codec.words_per_monomial();
		Ok(codec.decode(&self.exps[i * words..(i + 1) * words])?)
	}

	pub fn exponents(&self, i: usize, ring: &MPolyRing) -> Result<Vec<u64>, Error> {
		Ok(self.term(i, ring)?.exponents)
	}

	/// Iterates the decoded terms in storage order.
	pub fn terms<'a>(&'a self, ring: &MPolyRing) -> impl Iterator<Item = (i64, DecodedMonomial)> + 'a {
		let codec = ring.codec(self.width);
		let words = codec.words_per_monomial();
		izip!(&self.coeffs, self.exps.chunks(words))
			.map(move |(&coeff, chunk)| (coeff, codec.decode(chunk).expect("stored terms decode")))
	}
}
