//! An implementation of the trusted-setup phase of the [`PGHR13`] zkSNARK.
//!
//! [`PGHR13`]: https://eprint.iacr.org/2013/279.pdf
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![allow(clippy::many_single_char_names, clippy::op_ref)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate ark_std;

/// Reduce an R1CS instance to a *Quadratic Arithmetic Program* instance.
pub mod r1cs_to_qap;

/// Data structures produced and consumed by the generator.
pub mod data_structures;

/// Generate public parameters for the PGHR13 zkSNARK construction.
pub mod generator;

/// Errors that can arise during setup.
pub mod error;


pub use self::data_structures::*;
pub use self::error::Error;

use ark_ec::pairing::Pairing;
use ark_std::{marker::PhantomData, vec::Vec};
use r1cs_to_qap::{LagrangeReduction, R1CSToQAP};

/// The setup of [[PGHR13]](https://eprint.iacr.org/2013/279.pdf).
pub struct Pghr13<E: Pairing, QAP: R1CSToQAP = LagrangeReduction> {
    _p: PhantomData<(E, QAP)>,
}
