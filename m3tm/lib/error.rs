//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, T>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from the scalar root finder in [`rootfind`][crate::rootfind].
#[derive(Debug, Error)]
pub enum RootError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a zero `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the iteration reaches `maxiters` or leaves the domain
    /// of finite floats without meeting the convergence bound.
    #[error("root search failed to converge after {iters} iterations; last iterate {last}")]
    NoConvergence {
        /// Number of iterations taken before giving up.
        iters: usize,
        /// Last iterate visited.
        last: f64,
    },
}

impl RootError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}

/// Returned from [`Material`][crate::material::Material] construction.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// Returned when a material constant is non-positive (or non-finite).
    #[error("material constant `{0}` must be greater than 0; got {1}")]
    BadConstant(&'static str, f64),
}

impl MaterialError {
    pub(crate) fn check_constant(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val > 0.0 && val.is_finite())
            .then_some(()).ok_or(Self::BadConstant(name, val))
    }
}

/// Returned from [`Sample`][crate::sample::Sample] construction and stepping.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Returned when a non-positive temperature is encountered at
    /// construction.
    #[error("temperatures must be greater than 0; got {0}")]
    BadTemperature(f64),

    /// Returned when a non-positive time step is encountered.
    #[error("time steps must be greater than 0; got {0}")]
    BadTimeStep(f64),

    /// Returned when the equilibrium-magnetization solve fails to converge.
    #[error("equilibrium magnetization search: {0}")]
    Root(#[from] RootError),
}

impl SampleError {
    pub(crate) fn check_temperature(temp: f64) -> Result<(), Self> {
        (temp > 0.0).then_some(()).ok_or(Self::BadTemperature(temp))
    }

    pub(crate) fn check_time_step(dt: f64) -> Result<(), Self> {
        (dt > 0.0).then_some(()).ok_or(Self::BadTimeStep(dt))
    }
}

/// Returned from pulse synthesis, driving, and measurement functions.
#[derive(Debug, Error)]
pub enum PulseError {
    /// Returned when a non-positive pulse duration is encountered.
    #[error("pulse FWHM must be greater than 0; got {0}")]
    BadFwhm(f64),

    /// Returned when a time grid has fewer than 2 points.
    #[error("time grids must contain at least 2 points; got {0}")]
    GridTooShort(usize),

    /// Returned when a time grid is not strictly increasing; holds the index
    /// of the left edge of the first offending interval.
    #[error("time grids must be strictly increasing; first violation at index {0}")]
    NonMonotonicGrid(usize),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`SampleError`]
    #[error("sample error: {0}")]
    Sample(#[from] SampleError),
}

impl PulseError {
    pub(crate) fn check_fwhm(fwhm: f64) -> Result<(), Self> {
        (fwhm > 0.0).then_some(()).ok_or(Self::BadFwhm(fwhm))
    }

    pub(crate) fn check_grid<S>(t: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        if t.len() < 2 {
            return Err(Self::GridTooShort(t.len()));
        }
        match
            t.iter().zip(t.iter().skip(1))
                .position(|(tk, tkp1)| tkp1 <= tk)
        {
            Some(k) => Err(Self::NonMonotonicGrid(k)),
            None => Ok(()),
        }
    }
}
