// Copyright 2025 Irreducible Inc.

//! Multivariate polynomial container and resultant bridge, built atop the
//! `mpoly_pack` crate.
//!
//! This crate provides:
//!
//! * [`MPolyRing`]: the explicit ring context (variable count, term order)
//! * [`MPoly`]: a polynomial container owning a coefficient array and a
//!   packed exponent buffer, with width promotion on insert
//! * [`MPolyUnivar`] and [`to_univar`]: a multivariate polynomial viewed as
//!   univariate in one chosen variable
//! * [`resultant`]: the bridge that reduces a multivariate resultant to a
//!   univariate one

mod error;
mod poly;
mod resultant;
mod ring;
mod univar;

pub use error::*;
pub use poly::*;
pub use resultant::*;
pub use ring::*;
pub use univar::*;
