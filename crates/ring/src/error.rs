// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	Pack(#[from] mpoly_pack::Error),
	#[error("variable index {index} is out of range 0..{max}")]
	VariableOutOfRange { index: usize, max: usize },
	#[error("term index {index} is out of range 0..{len}")]
	TermOutOfRange { index: usize, len: usize },
	#[error("coefficient does not fit in 64 bits")]
	CoefficientOverflow,
}
