//! Excitation and measurement: synthesis of the absorbed-power pulse, the
//! driving loop feeding it to a [`Sample`], and pulse-weighted time averages
//! modeling detection by a probe pulse of finite duration.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ LengthError, PulseError },
    sample::Sample,
    utils::{ array_diff, trapz, trapz_grid },
};

pub type PulseResult<T> = Result<T, PulseError>;

/// Ratio between the full width at half maximum and the standard deviation of
/// a Gaussian, `2 √(2 ln 2)`.
pub const FWHM_PER_SIGMA: f64 = 2.3548200450309493;

/// Synthesize a Gaussian absorbed-power pulse centered at `t = 0` over the
/// time grid `t`, rescaled point-wise so that its trapezoidal integral over
/// the grid equals `strength`.
///
/// The grid must be strictly increasing with at least 2 points (it need not
/// be uniform), and `fwhm` must be positive. Rescaling targets the discrete
/// integral on the caller's grid: a grid that undersamples the pulse or clips
/// its tails still integrates to `strength` on that grid, but delivers a
/// different total under left-rule driving, so grid design remains the
/// caller's responsibility.
pub fn gaussian_pulse<S>(t: &Arr1<S>, strength: f64, fwhm: f64)
    -> PulseResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    PulseError::check_fwhm(fwhm)?;
    PulseError::check_grid(t)?;
    let sigma = fwhm / FWHM_PER_SIGMA;
    let mut p: nd::Array1<f64>
        = t.mapv(|tk| (-tk.powi(2) / (2.0 * sigma.powi(2))).exp());
    let norm = trapz_grid(&p, t);
    p *= strength / norm;
    Ok(p)
}

/// Drive a sample over a time grid with a sampled absorbed-power pulse.
///
/// The sample is assumed to start at `t[0]`; the update over each interval
/// `[t[i-1], t[i]]` is forced with the pulse value at the start of the
/// interval (left-rule quadrature for the forcing term).
pub fn drive<S, T>(sample: &mut Sample, t: &Arr1<S>, pulse: &Arr1<T>)
    -> PulseResult<()>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(t, pulse)?;
    PulseError::check_grid(t)?;
    let dt = array_diff(t);
    for (&dtk, &pk) in dt.iter().zip(pulse) {
        sample.step(dtk, pk)?;
    }
    Ok(())
}

/// Pulse-weighted time average of a magnetization series, normalized by its
/// first (pre-pulse equilibrium) sample.
///
/// Computes `∫ pulse·m dt / ∫ pulse dt / m[0]` by the trapezoidal rule. Both
/// series must lie on the same uniform time grid; the grid spacing cancels in
/// the ratio and is not needed.
///
/// *Panics if the series have length less than 2*.
pub fn weighted_magnetization<S, T>(pulse: &Arr1<S>, m: &Arr1<T>)
    -> PulseResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let avg = weighted_average(pulse, m)?;
    Ok(avg / m[0])
}

/// Pulse-weighted time average of a temperature series.
///
/// Same operation as [`weighted_magnetization`], without the normalization by
/// the initial value.
///
/// *Panics if the series have length less than 2*.
pub fn weighted_temperature<S, T>(pulse: &Arr1<S>, temp: &Arr1<T>)
    -> PulseResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    weighted_average(pulse, temp)
}

fn weighted_average<S, T>(pulse: &Arr1<S>, series: &Arr1<T>)
    -> PulseResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(pulse, series)?;
    let weighted: nd::Array1<f64>
        = pulse.iter().zip(series)
        .map(|(pk, xk)| pk * xk)
        .collect();
    Ok(trapz(&weighted, 1.0) / trapz(pulse, 1.0))
}

#[cfg(test)]
mod test {
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use ndarray as nd;
    use super::*;

    #[test]
    fn fwhm_conversion_matches_closed_form() {
        assert_abs_diff_eq!(
            FWHM_PER_SIGMA,
            2.0 * (2.0 * 2.0_f64.ln()).sqrt(),
            epsilon = 1e-15,
        );
    }

    #[test]
    fn pulse_integrates_to_requested_strength() {
        let t: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 2001);
        let p = gaussian_pulse(&t, 7.5, 2.0).unwrap();
        assert_relative_eq!(trapz_grid(&p, &t), 7.5, max_relative = 1e-12);
    }

    #[test]
    fn pulse_peaks_at_time_zero() {
        let t: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 1001);
        let p = gaussian_pulse(&t, 1.0, 1.0).unwrap();
        let peak = p.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(p[500], peak);
    }

    #[test]
    fn pulse_rejects_bad_inputs() {
        let t: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 101);
        assert!(gaussian_pulse(&t, 1.0, 0.0).is_err());
        assert!(gaussian_pulse(&t, 1.0, -1.0).is_err());
        let short: nd::Array1<f64> = nd::Array1::from_vec(vec![0.0]);
        assert!(gaussian_pulse(&short, 1.0, 1.0).is_err());
        let backward: nd::Array1<f64>
            = nd::Array1::from_vec(vec![0.0, 1.0, 0.5]);
        assert!(gaussian_pulse(&backward, 1.0, 1.0).is_err());
    }

    #[test]
    fn weighting_by_anything_leaves_a_constant_series_fixed() {
        let pulse: nd::Array1<f64>
            = nd::Array1::from_vec(vec![0.0, 1.0, 4.0, 1.0, 0.0]);
        let temp: nd::Array1<f64> = nd::Array1::from_elem(5, 300.0);
        let w = weighted_temperature(&pulse, &temp).unwrap();
        assert_abs_diff_eq!(w, 300.0, epsilon = 1e-12);
    }

    #[test]
    fn weighted_magnetization_normalizes_by_first_sample() {
        let pulse: nd::Array1<f64>
            = nd::Array1::from_vec(vec![0.0, 1.0, 1.0, 0.0]);
        let m: nd::Array1<f64>
            = nd::Array1::from_vec(vec![0.8, 0.8, 0.8, 0.8]);
        let w = weighted_magnetization(&pulse, &m).unwrap();
        assert_abs_diff_eq!(w, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn measurement_rejects_mismatched_lengths() {
        let pulse: nd::Array1<f64> = nd::Array1::from_vec(vec![1.0, 1.0]);
        let m: nd::Array1<f64> = nd::Array1::from_vec(vec![1.0, 1.0, 1.0]);
        assert!(weighted_magnetization(&pulse, &m).is_err());
    }
}
