//! Constant values for the kemgate library
//!
//! Sizes and defaults are kept here so that the schemes, the configuration
//! layer and the tests agree on them.

#![no_std]

pub mod pqc;
pub mod traditional;
