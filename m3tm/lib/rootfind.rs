//! General-purpose scalar root finding via the secant method.
//!
//! The mean-field equilibrium condition solved at sample construction has no
//! closed form, so its zero must be found iteratively; this module provides
//! that iteration, exposed generically over a caller-supplied function and
//! starting guess.

use crate::error::RootError;

pub type RootResult<T> = Result<T, RootError>;

/// Find a root of `f` by secant iteration starting from `x0`.
///
/// The second starting point is generated by a small relative perturbation of
/// `x0`. Iteration stops as soon as `|f(x)| ≤ epsilon`; if that bound is not
/// met within `maxiters` iterations, or an iterate leaves the domain of
/// finite floats (as happens when `f` has no zero and the secant step
/// diverges), [`RootError::NoConvergence`] is returned.
pub fn secant<F>(mut f: F, x0: f64, epsilon: f64, maxiters: usize)
    -> RootResult<f64>
where F: FnMut(f64) -> f64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;

    let mut xa: f64 = x0;
    let mut xb: f64 = if x0 != 0.0 { x0 * (1.0 + 1e-4) } else { 1e-4 };
    let mut fa: f64 = f(xa);
    let mut fb: f64 = f(xb);
    if fa.abs() <= epsilon { return Ok(xa); }
    for k in 0..maxiters {
        if fb.abs() <= epsilon { return Ok(xb); }
        let step = fb * (xb - xa) / (fb - fa);
        xa = xb;
        fa = fb;
        xb -= step;
        if !xb.is_finite() {
            return Err(RootError::NoConvergence { iters: k + 1, last: xb });
        }
        fb = f(xb);
    }
    Err(RootError::NoConvergence { iters: maxiters, last: xb })
}

#[cfg(test)]
mod test {
    use super::secant;

    #[test]
    fn finds_quadratic_root() {
        let root = secant(|x| x * x - 2.0, 1.0, 1e-9, 100).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn accepts_an_exact_starting_guess() {
        let root = secant(|x| x - 3.0, 3.0, 1e-9, 100).unwrap();
        assert_eq!(root, 3.0);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert!(secant(|x| x, 1.0, -1.0, 100).is_err());
        assert!(secant(|x| x, 1.0, 0.0, 100).is_err());
        assert!(secant(|x| x, 1.0, 1e-6, 0).is_err());
    }

    #[test]
    fn reports_nonconvergence_when_no_zero_exists() {
        assert!(secant(|x| x * x + 1.0, 1.0, 1e-9, 50).is_err());
    }
}
