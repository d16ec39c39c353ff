//! Exact rational arithmetic on reduced fractions.
//!
//! The central type is [`Rational`], a fraction that reduces itself to
//! lowest terms on construction and uses a zero denominator as the
//! sentinel for undefined ("NaN") results, so chains of arithmetic can
//! propagate undefined-ness without intermediate error checks.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
pub mod math;
mod rational;

pub use error::Error;
pub use rational::Rational;
