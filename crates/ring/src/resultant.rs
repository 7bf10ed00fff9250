// Copyright 2025 Irreducible Inc.

use crate::{
	error::Error,
	poly::MPoly,
	ring::MPolyRing,
	univar::{to_univar, MPolyUnivar},
};

/// Resultant of `a` and `b` with respect to variable `var`.
///
/// Thin bridge: both inputs are converted to univariate form in `var` and the
/// computation is delegated to [`univar_resultant`], whose outcome is returned
/// unchanged. The temporary univariate structures are scoped to this call and
/// released on every exit path.
///
/// `Ok(None)` means the univariate engine could not complete on these inputs;
/// that is not a fatal condition and is never retried here. `Err` is reserved
/// for malformed inputs and representation limits.
pub fn resultant(
	a: &MPoly,
	b: &MPoly,
	var: usize,
	ring: &MPolyRing,
) -> Result<Option<MPoly>, Error> {
	let ax = to_univar(a, var, ring)?;
	let bx = to_univar(b, var, ring)?;
	let outcome = univar_resultant(&ax, &bx, ring);
	tracing::trace!(
		var,
		completed = matches!(outcome, Ok(Some(_))),
		"bridged multivariate resultant to the univariate engine"
	);
	outcome
}

/// Univariate resultant engine.
///
/// Handles the case where every coefficient is constant in the remaining
/// variables, by fraction-free elimination of the Sylvester matrix. A zero
/// input gives the zero polynomial; two nonzero constants give 1 (empty
/// Sylvester matrix). Inputs with genuinely polynomial coefficients are
/// outside this engine and reported as `Ok(None)`.
pub fn univar_resultant(
	ax: &MPolyUnivar,
	bx: &MPolyUnivar,
	ring: &MPolyRing,
) -> Result<Option<MPoly>, Error> {
	if ax.is_zero() || bx.is_zero() {
		return Ok(Some(MPoly::new()));
	}
	let (Some(a), Some(b)) = (ax.constant_coeffs(), bx.constant_coeffs()) else {
		return Ok(None);
	};
	let det = sylvester_resultant(&a, &b)?;
	Ok(Some(MPoly::constant(det, ring)?))
}

/// Resultant of two dense integer polynomials (ascending coefficients) as the
/// determinant of their Sylvester matrix.
fn sylvester_resultant(a: &[i64], b: &[i64]) -> Result<i64, Error> {
	let Some(m) = a.iter().rposition(|&c| c != 0) else {
		return Ok(0);
	};
	let Some(n) = b.iter().rposition(|&c| c != 0) else {
		return Ok(0);
	};
	let size = m + n;
	if size == 0 {
		return Ok(1);
	}

	// n shifted copies of a's coefficients, then m of b's, descending order.
	let mut matrix = vec![0i128; size * size];
	for row in 0..n {
		for j in 0..=m {
			matrix[row * size + row + j] = a[m - j] as i128;
		}
	}
	for row in 0..m {
		for j in 0..=n {
			matrix[(n + row) * size + row + j] = b[n - j] as i128;
		}
	}

	let det = bareiss_determinant(&mut matrix, size)?;
	i64::try_from(det).map_err(|_| Error::CoefficientOverflow)
}

/// Fraction-free Gaussian elimination (Bareiss); every division is exact.
fn bareiss_determinant(matrix: &mut [i128], size: usize) -> Result<i128, Error> {
	debug_assert_eq!(matrix.len(), size * size);
	let mut sign = 1i128;
	let mut prev_pivot = 1i128;

	for k in 0..size - 1 {
		if matrix[k * size + k] == 0 {
			let Some(swap) = (k + 1..size).find(|&row| matrix[row * size + k] != 0) else {
				return Ok(0);
			};
			for j in k..size {
				matrix.swap(k * size + j, swap * size + j);
			}
			sign = -sign;
		}
		let pivot = matrix[k * size + k];
		for i in k + 1..size {
			for j in k + 1..size {
				let lhs = matrix[i * size + j]
					.checked_mul(pivot)
					.ok_or(Error::CoefficientOverflow)?;
				let rhs = matrix[i * size + k]
					.checked_mul(matrix[k * size + j])
					.ok_or(Error::CoefficientOverflow)?;
				matrix[i * size + j] = lhs
					.checked_sub(rhs)
					.ok_or(Error::CoefficientOverflow)?
					/ prev_pivot;
			}
			matrix[i * size + k] = 0;
		}
		prev_pivot = pivot;
	}
	Ok(sign * matrix[size * size - 1])
}

#[cfg(test)]
mod tests {
	use super::*;
	use mpoly_pack::TermOrder;

	fn univariate(coeffs: &[(i64, u64)], ring: &MPolyRing) -> MPoly {
		let mut poly = MPoly::new();
		for &(c, e) in coeffs {
			poly.push_term(c, &[e], ring).unwrap();
		}
		poly
	}

	fn constant_value(poly: &MPoly) -> i64 {
		match poly.len() {
			0 => 0,
			1 => poly.coeff(0).unwrap(),
			_ => panic!("not a constant"),
		}
	}

	#[test]
	fn test_resultant_of_two_linear_polynomials() {
		// res(x - 2, x - 5) = +-3, with a sign stable across calls.
		let ring = MPolyRing::new(1, TermOrder::Lex);
		let a = univariate(&[(1, 1), (-2, 0)], &ring);
		let b = univariate(&[(1, 1), (-5, 0)], &ring);

		let first = resultant(&a, &b, 0, &ring).unwrap().expect("engine completes");
		assert_eq!(constant_value(&first).abs(), 3);

		let second = resultant(&a, &b, 0, &ring).unwrap().expect("engine completes");
		assert_eq!(first, second);
	}

	#[test]
	fn test_resultant_is_evaluation_at_the_root() {
		// res(x^2 - 1, x - 3) = (x^2 - 1) at x = 3 = 8.
		let ring = MPolyRing::new(1, TermOrder::Lex);
		let a = univariate(&[(1, 2), (-1, 0)], &ring);
		let b = univariate(&[(1, 1), (-3, 0)], &ring);
		let res = resultant(&a, &b, 0, &ring).unwrap().expect("engine completes");
		assert_eq!(constant_value(&res), 8);
	}

	#[test]
	fn test_resultant_with_zero_is_zero() {
		let ring = MPolyRing::new(1, TermOrder::Lex);
		let a = univariate(&[(1, 1), (-2, 0)], &ring);
		let res = resultant(&a, &MPoly::new(), 0, &ring).unwrap().unwrap();
		assert!(res.is_zero());
	}

	#[test]
	fn test_resultant_of_two_constants_is_one() {
		let ring = MPolyRing::new(1, TermOrder::Lex);
		let a = MPoly::constant(4, &ring).unwrap();
		let b = MPoly::constant(9, &ring).unwrap();
		let res = resultant(&a, &b, 0, &ring).unwrap().unwrap();
		assert_eq!(constant_value(&res), 1);
	}

	#[test]
	fn test_polynomial_coefficients_are_surfaced_not_computed() {
		// Eliminating x from polynomials with y in their coefficients is a
		// case the default engine does not handle; the bridge surfaces it.
		let ring = MPolyRing::new(2, TermOrder::Lex);
		let mut a = MPoly::new();
		a.push_term(1, &[1, 1], &ring).unwrap(); // x*y
		a.push_term(1, &[0, 0], &ring).unwrap(); // + 1
		let mut b = MPoly::new();
		b.push_term(1, &[1, 0], &ring).unwrap(); // x
		b.push_term(1, &[0, 1], &ring).unwrap(); // + y
		assert!(resultant(&a, &b, 0, &ring).unwrap().is_none());
	}

	#[test]
	fn test_resultant_in_a_multivariate_ring_with_constant_coefficients() {
		// The same x - 2, x - 5 pair embedded in a two-variable graded ring.
		let ring = MPolyRing::new(2, TermOrder::DegRevLex);
		let mut a = MPoly::new();
		a.push_term(1, &[1, 0], &ring).unwrap();
		a.push_term(-2, &[0, 0], &ring).unwrap();
		let mut b = MPoly::new();
		b.push_term(1, &[1, 0], &ring).unwrap();
		b.push_term(-5, &[0, 0], &ring).unwrap();
		let res = resultant(&a, &b, 0, &ring).unwrap().expect("engine completes");
		assert_eq!(constant_value(&res).abs(), 3);
	}

	#[test]
	fn test_sylvester_resultant_shares_a_root() {
		// x^2 - 1 and x - 1 share the root 1, so the resultant vanishes.
		assert_eq!(sylvester_resultant(&[-1, 0, 1], &[-1, 1]).unwrap(), 0);
	}

	#[test]
	fn test_sylvester_resultant_quadratics() {
		// res(x^2 + 1, x^2 - 1) = 4.
		assert_eq!(sylvester_resultant(&[1, 0, 1], &[-1, 0, 1]).unwrap(), 4);
	}

	#[test]
	fn test_sylvester_resultant_pivots_past_a_zero() {
		// res(x^2, x) forces a row swap during elimination.
		assert_eq!(sylvester_resultant(&[0, 0, 1], &[0, 1]).unwrap(), 0);
	}
}
