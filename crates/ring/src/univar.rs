// Copyright 2025 Irreducible Inc.

use crate::{error::Error, poly::MPoly, ring::MPolyRing};
use mpoly_utils::ensure;
use std::collections::BTreeMap;

/// A multivariate polynomial viewed as univariate in one chosen variable.
///
/// Coefficients are themselves polynomials in the remaining variables (the
/// eliminated variable's exponent is zeroed out in them). Terms are kept with
/// strictly decreasing exponents.
#[derive(Debug, Clone)]
pub struct MPolyUnivar {
	terms: Vec<(u64, MPoly)>,
}

impl MPolyUnivar {
	/// `(exponent, coefficient)` pairs, highest exponent first.
	pub fn terms(&self) -> &[(u64, MPoly)] {
		&self.terms
	}

	pub fn is_zero(&self) -> bool {
		self.terms.is_empty()
	}

	pub fn degree(&self) -> u64 {
		self.terms.first().map_or(0, |&(e, _)| e)
	}

	/// Dense coefficient array by ascending degree, when every coefficient is
	/// constant in the remaining variables. `None` otherwise.
	pub(crate) fn constant_coeffs(&self) -> Option<Vec<i64>> {
		if self.is_zero() {
			return Some(Vec::new());
		}
		let degree = usize::try_from(self.degree()).ok()?;
		let mut out = vec![0; degree + 1];
		for (e, coeff) in &self.terms {
			out[*e as usize] = constant_of(coeff)?;
		}
		Some(out)
	}
}

/// The constant value of `poly`, or `None` if any term touches a variable.
///
/// The all-zero exponent vector packs to all-zero words under every width and
/// layout, so no decode pass is needed.
fn constant_of(poly: &MPoly) -> Option<i64> {
	match poly.len() {
		0 => Some(0),
		1 if poly.packed_words().iter().all(|&w| w == 0) => poly.coeff(0).ok(),
		_ => None,
	}
}

/// Rewrites `poly` as univariate in `var`.
///
/// Each term's exponent vector is decoded, the exponent of `var` is split off,
/// and the rest of the monomial is pushed into the coefficient polynomial of
/// that exponent.
pub fn to_univar(poly: &MPoly, var: usize, ring: &MPolyRing) -> Result<MPolyUnivar, Error> {
	ensure!(
		var < ring.nvars(),
		Error::VariableOutOfRange {
			index: var,
			max: ring.nvars(),
		}
	);

	let mut buckets: BTreeMap<u64, MPoly> = BTreeMap::new();
	for (coeff, monomial) in poly.terms(ring) {
		let mut exponents = monomial.exponents;
		let e = std::mem::take(&mut exponents[var]);
		buckets
			.entry(e)
			.or_insert_with(MPoly::new)
			.push_term(coeff, &exponents, ring)?;
	}
	Ok(MPolyUnivar {
		terms: buckets.into_iter().rev().collect(),
	})
}
