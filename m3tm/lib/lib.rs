#![allow(dead_code)]

//! Implements the microscopic three-temperature model (M3TM) of ultrafast
//! demagnetization: coupled rate equations for the electron temperature,
//! lattice (phonon) temperature, and normalized magnetization of a
//! ferromagnet excited by an ultrafast absorbed-energy pulse.
//!
//! Provides implementations for the following numerical routines:
//! - Self-consistent equilibrium magnetization at fixed electron temperature
//!   (secant-method root solve of the mean-field condition)
//! - Explicit first-order time stepping of the coupled rate equations with a
//!   full per-step history record
//! - Gaussian excitation-pulse synthesis, normalized to a total absorbed
//!   energy density on the stepping grid
//! - Pulse-weighted time averaging, modeling what a probe pulse of finite
//!   duration records
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod rootfind;
pub mod material;
pub mod sample;
pub mod pulse;
pub mod utils;

pub mod docs;

pub use ndarray_npy;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
