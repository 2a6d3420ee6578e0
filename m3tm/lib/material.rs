//! Material constants entering the three-temperature rate equations.
//!
//! Constants are expressed in an internally consistent (SI-like) unit system;
//! the integrator itself is unit-agnostic as long as the caller is
//! consistent.

use crate::error::MaterialError;

pub type MaterialResult<T> = Result<T, MaterialError>;

/// Constants describing a single magnetic material.
///
/// All fields are strictly positive; construct through [`Material::new`] to
/// have that enforced, or use a preset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Lattice (phonon) heat capacity (energy volume⁻¹ temperature⁻¹).
    pub cp: f64,
    /// Electron heat-capacity coefficient; the electron bath's heat capacity
    /// at electron temperature `T` is `gamma * T`.
    pub gamma: f64,
    /// Electron-phonon coupling constant.
    pub gep: f64,
    /// Curie temperature.
    pub tc: f64,
    /// Demagnetization rate scale.
    pub rate: f64,
}

impl Material {
    /// Construct a material record, rejecting non-positive or non-finite
    /// constants.
    pub fn new(cp: f64, gamma: f64, gep: f64, tc: f64, rate: f64)
        -> MaterialResult<Self>
    {
        MaterialError::check_constant("cp", cp)?;
        MaterialError::check_constant("gamma", gamma)?;
        MaterialError::check_constant("gep", gep)?;
        MaterialError::check_constant("tc", tc)?;
        MaterialError::check_constant("rate", rate)?;
        Ok(Self { cp, gamma, gep, tc, rate })
    }

    /// Constants for elemental cobalt (heat capacities per unit volume).
    pub fn cobalt() -> Self {
        Self {
            cp: 2.07e6,
            gamma: 665.0,
            gep: 405.0e6,
            tc: 1388.0,
            rate: 25.3e12,
        }
    }
}
