//! Core state machine for the microscopic three-temperature model: coupled
//! electron-temperature, phonon-temperature, and magnetization dynamics under
//! an absorbed-power forcing term.
//!
//! The integrator itself is a pure state-transition function
//! ([`step_state`]); [`Sample`] owns a live state together with the
//! append-only [`History`] of every state it has passed through.

use ndarray as nd;
use crate::{
    error::SampleError,
    material::Material,
    rootfind,
    DEF_EPSILON,
    DEF_MAXITERS,
};

pub type SampleResult<T> = Result<T, SampleError>;

// hyperbolic cotangent
fn coth(x: f64) -> f64 { x.tanh().recip() }

/// Residual of the mean-field self-consistency condition,
/// `1 - m coth(m tc / te)`, at electron temperature `te`.
///
/// Equilibrium magnetization values are zeros of this function in `m`; away
/// from equilibrium its value sets the instantaneous (de)magnetization rate.
pub fn equilibrium_residual(m: f64, tc: f64, te: f64) -> f64 {
    1.0 - m * coth(m * tc / te)
}

/// Solve the mean-field self-consistency condition for the equilibrium
/// magnetization at electron temperature `te`.
///
/// The search starts from an initial guess of 1 (full magnetization) and
/// iterates until the residual magnitude is within `epsilon`. The residual is
/// even in `m`, so the positive branch is returned. Above the Curie
/// temperature `tc` the condition has no zero and the search reports
/// [`NoConvergence`][crate::error::RootError::NoConvergence].
pub fn equilibrium_magnetization(
    tc: f64,
    te: f64,
    epsilon: f64,
    maxiters: usize,
) -> SampleResult<f64> {
    let m = rootfind::secant(
        |m| equilibrium_residual(m, tc, te), 1.0, epsilon, maxiters)?;
    Ok(m.abs())
}

/// Instantaneous state of a sample: time, the two bath temperatures, and the
/// normalized magnetization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct State {
    /// Time.
    pub t: f64,
    /// Electron temperature.
    pub te: f64,
    /// Phonon temperature.
    pub tph: f64,
    /// Normalized magnetization.
    pub m: f64,
}

/// Advance a state by one explicit first-order step under absorbed-power
/// density `power` delivered to the electron bath.
///
/// Every coupling term is evaluated at the incoming (pre-step) values, i.e.
/// the three fields update simultaneously to first order. The step performs
/// no stability checking: a `dt` too large against the fastest relaxation
/// timescale will faithfully produce non-finite values.
pub fn step_state(mat: &Material, s: State, dt: f64, power: f64) -> State {
    let ce = mat.gamma * s.te;
    let te = s.te + dt * (mat.gep * (s.tph - s.te) + power) / ce;
    let tph = s.tph + dt * mat.gep * (s.te - s.tph) / mat.cp;
    let f = equilibrium_residual(s.m, mat.tc, s.te);
    let m = s.m + dt * mat.rate * s.m * (s.tph / mat.tc) * f;
    State { t: s.t + dt, te, tph, m }
}

/// Append-only record of every state a [`Sample`] has passed through, stored
/// as four row-aligned columns keyed by time.
#[derive(Clone, Debug, Default)]
pub struct History {
    /// Time coordinates.
    pub t: Vec<f64>,
    /// Electron temperatures.
    pub te: Vec<f64>,
    /// Phonon temperatures.
    pub tph: Vec<f64>,
    /// Magnetizations.
    pub m: Vec<f64>,
}

impl History {
    fn push(&mut self, s: State) {
        self.t.push(s.t);
        self.te.push(s.te);
        self.tph.push(s.tph);
        self.m.push(s.m);
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize { self.t.len() }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool { self.t.is_empty() }

    /// `true` if every recorded value is a finite float.
    ///
    /// The stepper performs no internal stability checking; run this after a
    /// stepping loop to detect numerical blow-up.
    pub fn all_finite(&self) -> bool {
        self.t.iter()
            .chain(self.te.iter())
            .chain(self.tph.iter())
            .chain(self.m.iter())
            .all(|x| x.is_finite())
    }

    /// Copy the four columns into ndarray form, ordered
    /// `(t, te, tph, m)`, for analysis or export.
    pub fn to_arrays(&self)
        -> (nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>)
    {
        (
            nd::Array1::from_vec(self.t.clone()),
            nd::Array1::from_vec(self.te.clone()),
            nd::Array1::from_vec(self.tph.clone()),
            nd::Array1::from_vec(self.m.clone()),
        )
    }
}

/// A sample advancing under the three-temperature rate equations.
///
/// Construction places the sample at thermal equilibrium: the magnetization
/// is solved from the mean-field self-consistency condition at the initial
/// electron temperature. Afterward the sample is mutated only through
/// [`step`][Self::step]; there is no reset, so starting over means
/// constructing a new `Sample`.
#[derive(Clone, Debug)]
pub struct Sample {
    mat: Material,
    state: State,
    history: History,
}

impl Sample {
    /// Construct at time zero. See [`Self::with_time`].
    pub fn new(mat: Material, te0: f64, tph0: f64) -> SampleResult<Self> {
        Self::with_time(mat, te0, tph0, 0.0)
    }

    /// Construct at time `t0` with the given bath temperatures and the
    /// equilibrium magnetization solved at `te0`.
    ///
    /// Fails if either temperature is non-positive, or if the magnetization
    /// solve does not converge (which is expected at or above the Curie
    /// temperature, where the self-consistency condition has no zero).
    pub fn with_time(mat: Material, te0: f64, tph0: f64, t0: f64)
        -> SampleResult<Self>
    {
        SampleError::check_temperature(te0)?;
        SampleError::check_temperature(tph0)?;
        let m0 = equilibrium_magnetization(
            mat.tc, te0, DEF_EPSILON, DEF_MAXITERS)?;
        let state = State { t: t0, te: te0, tph: tph0, m: m0 };
        let mut history = History::default();
        history.push(state);
        Ok(Self { mat, state, history })
    }

    /// The material this sample is made of.
    pub fn material(&self) -> &Material { &self.mat }

    /// The current live state; always equal to the last history row.
    pub fn state(&self) -> State { self.state }

    /// Every state so far, including the initial one.
    pub fn history(&self) -> &History { &self.history }

    /// Advance by one interval of length `dt` under absorbed-power density
    /// `power`, recording the result.
    ///
    /// One call advances the state by exactly one explicit first-order step;
    /// there is no sub-stepping. `dt` must be positive, and small against
    /// the fastest relaxation timescale for the step to be stable.
    pub fn step(&mut self, dt: f64, power: f64) -> SampleResult<()> {
        SampleError::check_time_step(dt)?;
        self.state = step_state(&self.mat, self.state, dt, power);
        self.history.push(self.state);
        Ok(())
    }
}
