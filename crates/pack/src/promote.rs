// Copyright 2025 Irreducible Inc.

use crate::{
	codec::ExponentCodec,
	error::Error,
	layout::MonomialLayout,
	width::FieldWidth,
};
use mpoly_utils::ensure;

/// Repacks a buffer of `len` monomials from field width `old` to `new`.
///
/// Returns `None` when `new` does not exceed `old`: the buffer in force is
/// already sufficient and the call is a pure no-op, so repeated promotion is
/// idempotent. Otherwise returns a freshly populated buffer holding the same
/// monomials, in the same order, re-encoded at the wider width; the caller
/// replaces its buffer of record with the returned one, which keeps exactly one
/// owner of the data live at a time and releases the old buffer only after the
/// new one is complete.
///
/// This is the only path by which a container's field width changes.
pub fn promote(
	buf: &[u64],
	old: FieldWidth,
	new: FieldWidth,
	len: usize,
	layout: MonomialLayout,
) -> Result<Option<Vec<u64>>, Error> {
	if new <= old {
		return Ok(None);
	}

	let old_codec = ExponentCodec::new(layout, old);
	let new_codec = ExponentCodec::new(layout, new);
	let old_words = old_codec.words_per_monomial();
	let new_words = new_codec.words_per_monomial();
	ensure!(
		buf.len() == len * old_words,
		Error::WordCountMismatch {
			expected: len * old_words,
			got: buf.len(),
		}
	);

	tracing::debug!(
		old_bits = old.bits(),
		new_bits = new.bits(),
		len,
		"widening packed exponent buffer"
	);

	let mut out = vec![0; len * new_words];
	for i in 0..len {
		let decoded = old_codec.decode(&buf[i * old_words..(i + 1) * old_words])?;
		new_codec.encode_into(&decoded.exponents, &mut out[i * new_words..(i + 1) * new_words])?;
	}
	Ok(Some(out))
}
