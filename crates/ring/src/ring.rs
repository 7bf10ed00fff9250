// Copyright 2025 Irreducible Inc.

use mpoly_pack::{ExponentCodec, FieldWidth, MonomialLayout, TermOrder};

/// Context of a multivariate polynomial ring: variable count and term order.
///
/// Passed explicitly into every container operation; polynomials do not carry
/// a back-reference to their ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MPolyRing {
	nvars: usize,
	order: TermOrder,
}

impl MPolyRing {
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

	pub fn layout(&self) -> MonomialLayout {
		MonomialLayout::new(self.nvars, self.order)
	}

	pub fn codec(&self, width: FieldWidth) -> ExponentCodec {
		ExponentCodec::new(self.layout(), width)
	}
}
