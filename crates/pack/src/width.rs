// Copyright 2025 Irreducible Inc.

use crate::error::Error;
use mpoly_utils::checked_arithmetics::checked_int_div;

/// Number of bits in one packed word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Width in bits of one exponent field inside a packed word.
///
/// Every exponent stored in a packed buffer, and the total-degree field under
/// graded orders, must be strictly below `2^W` for the buffer's width `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldWidth {
	W8,
	W16,
	W32,
	W64,
}

impl FieldWidth {
	/// All supported widths, narrowest first.
	pub const ALL: [Self; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];

	pub const fn bits(self) -> usize {
		match self {
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
		}
	}

	/// Number of fields held by one packed word.
	pub const fn fields_per_word(self) -> usize {
		checked_int_div(WORD_BITS, self.bits())
	}

	/// Mask covering one field.
	pub const fn mask(self) -> u64 {
		match self {
			Self::W64 => u64::MAX,
			_ => (1 << self.bits()) - 1,
		}
	}

	pub const fn from_bits(bits: usize) -> Result<Self, Error> {
		match bits {
			8 => Ok(Self::W8),
			16 => Ok(Self::W16),
			32 => Ok(Self::W32),
			64 => Ok(Self::W64),
			_ => Err(Error::UnsupportedWidth { bits }),
		}
	}

	/// Smallest supported width whose fields can hold `max_value`: the value's
	/// bit count rounded up to the next supported width.
	///
	/// Takes a `u128` so that an overflowing total degree of `u64` exponents is
	/// still representable at the call site; values of `2^64` and above fail
	/// with [`Error::ExponentOverflow`].
	pub fn minimal_for(max_value: u128) -> Result<Self, Error> {
		let significant = (u128::BITS - max_value.leading_zeros()) as usize;
		let bits = significant.next_power_of_two().max(8);
		Self::from_bits(bits).map_err(|_| Error::ExponentOverflow)
	}
}
