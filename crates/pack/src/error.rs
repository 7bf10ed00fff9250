// Copyright 2025 Irreducible Inc.

/// Error thrown when a packed-monomial operation fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// Thrown when a value cannot be represented in any supported field width.
	/// Multi-word fields are deliberately unsupported.
	#[error("exponent value cannot be represented in any supported field width")]
	ExponentOverflow,
	#[error("{bits}-bit packed fields are not supported")]
	UnsupportedWidth { bits: usize },
	#[error("expected {expected} packed words, got {got}")]
	WordCountMismatch { expected: usize, got: usize },
	#[error("expected {expected} exponent fields, got {got}")]
	FieldCountMismatch { expected: usize, got: usize },
	/// Thrown when a field value does not fit the width in force. The width
	/// must be promoted before the value can be stored; it is never truncated.
	#[error("value {value} does not fit in a {bits}-bit field")]
	FieldTooWide { value: u128, bits: usize },
	#[error("variable index {index} is out of range 0..{max}")]
	VariableOutOfRange { index: usize, max: usize },
}
