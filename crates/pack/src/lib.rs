// Copyright 2025 Irreducible Inc.

//! Packed-monomial codec for multivariate polynomial arithmetic.
//!
//! A polynomial term's exponent vector (one non-negative integer per ring
//! variable) is stored as a short run of `u64` words, each word holding several
//! fixed-width exponent fields. The packing is arranged so that comparing two
//! packed monomials word-by-word as unsigned integers reproduces the ring's
//! term-order comparison of the logical exponent vectors. That single invariant
//! is what makes term comparison, exponent addition and ordering word-level
//! integer operations instead of per-variable loops.
//!
//! The crate provides:
//!
//! * [`FieldWidth`]: the supported per-exponent field widths (8/16/32/64 bits)
//!   and the minimal-width computation
//! * [`MonomialLayout`] and [`TermOrder`]: the explicit packing context
//!   (variable count, ordering flags) threaded through every call
//! * [`ExponentCodec`]: stateless encode/decode between logical exponent
//!   vectors and packed words
//! * [`promote`]: repacking of a whole exponent buffer to a wider field width
//! * [`unit_monomial`]: direct packed construction of the i-th ring generator

mod codec;
mod error;
mod gen;
mod layout;
mod promote;
mod width;

pub use codec::*;
pub use error::*;
pub use gen::*;
pub use layout::*;
pub use promote::*;
pub use width::*;
