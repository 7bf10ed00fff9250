// Copyright 2025 Irreducible Inc.

pub mod checked_arithmetics;
pub mod error_utils;
