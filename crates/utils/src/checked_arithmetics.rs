// Copyright 2025 Irreducible Inc.

/// Division implementation that fails in case when `a` isn't divisible by `b`.
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a);

	result
}

/// Smallest number of words of `word_bits` bits that cover `bits` bits.
pub const fn words_for_bits(bits: usize, word_bits: usize) -> usize {
	(bits + word_bits - 1) / word_bits
}
