// tests/validation.rs
//
// Integration-style validation tests (physics sanity checks).
// Run with: cargo test
// Or only these tests: cargo test --test validation

use approx::{ assert_abs_diff_eq, assert_relative_eq };
use ndarray as nd;
use m3tm::material::Material;
use m3tm::pulse::{
    drive, gaussian_pulse, weighted_magnetization, weighted_temperature,
};
use m3tm::sample::{ equilibrium_magnetization, equilibrium_residual, Sample };
use m3tm::utils::trapz_grid;

#[test]
fn equilibrium_magnetization_satisfies_self_consistency() {
    let tc: f64 = 1388.0;
    for ratio in [0.1, 0.3, 0.5, 0.7, 0.9, 0.95] {
        let te = ratio * tc;
        let m0 = equilibrium_magnetization(tc, te, 1e-9, 1000).unwrap();
        assert!(
            equilibrium_residual(m0, tc, te).abs() < 1e-6,
            "residual not closed at te/tc = {}",
            ratio,
        );
        assert!(0.0 < m0 && m0 < 1.0, "unphysical m0 = {} at te/tc = {}", m0, ratio);
    }
}

#[test]
fn equilibrium_magnetization_saturates_at_low_temperature() {
    // far below tc the mean-field magnetization is exponentially close to 1
    let m0 = equilibrium_magnetization(1388.0, 139.0, 1e-9, 1000).unwrap();
    assert!(m0 > 0.999);
}

#[test]
fn construction_fails_above_curie_temperature() {
    // the self-consistency condition has no zero for te > tc
    assert!(Sample::new(Material::cobalt(), 1500.0, 1500.0).is_err());
}

#[test]
fn history_grows_by_one_row_per_step() {
    let mut sample = Sample::new(Material::cobalt(), 300.0, 300.0).unwrap();
    let dt = 1e-15;
    let n = 50;
    for _ in 0..n {
        sample.step(dt, 0.0).unwrap();
    }
    let h = sample.history();
    assert_eq!(h.len(), n + 1);
    assert_eq!(h.te.len(), n + 1);
    assert_eq!(h.tph.len(), n + 1);
    assert_eq!(h.m.len(), n + 1);
    for (k, (ta, tb)) in h.t.iter().zip(h.t.iter().skip(1)).enumerate() {
        assert!(tb > ta, "history times not increasing at row {}", k);
        assert_abs_diff_eq!(
            *tb,
            (k as f64 + 1.0) * dt,
            epsilon = 1e-24,
        );
    }
    // live state mirrors the last row
    assert_eq!(sample.state().t, *h.t.last().unwrap());
    assert_eq!(sample.state().m, *h.m.last().unwrap());
}

#[test]
fn unforced_equilibrium_is_stationary() {
    let mut sample = Sample::new(Material::cobalt(), 300.0, 300.0).unwrap();
    let m0 = sample.state().m;
    for _ in 0..1000 {
        sample.step(1e-16, 0.0).unwrap();
    }
    let end = sample.state();
    // both baths start equal, so the heat-exchange terms vanish identically
    assert_abs_diff_eq!(end.te, 300.0, epsilon = 1e-12);
    assert_abs_diff_eq!(end.tph, 300.0, epsilon = 1e-12);
    // m moves only through the solver's residual at m0
    assert_abs_diff_eq!(end.m, m0, epsilon = 1e-5);
}

#[test]
fn pulse_energy_is_conserved_on_an_adequate_grid() {
    let t: nd::Array1<f64> = nd::Array1::linspace(-100e-15, 100e-15, 10001);
    let strength = 4.039e9;
    let p = gaussian_pulse(&t, strength, 39e-15).unwrap();
    assert_relative_eq!(trapz_grid(&p, &t), strength, max_relative = 1e-3);
}

#[test]
fn heating_the_electron_bath_demagnetizes() {
    let mut sample = Sample::new(Material::cobalt(), 300.0, 300.0).unwrap();
    let m0 = sample.state().m;
    for _ in 0..200 {
        sample.step(1e-16, 5e21).unwrap();
    }
    let h = sample.history();
    assert!(sample.state().te > 300.0);
    // once te has been pushed above its equilibrium value the spin channel
    // only removes magnetization; the very first row is excluded because it
    // still sits at the solved equilibrium
    for (k, (ma, mb)) in
        h.m.iter().skip(1).zip(h.m.iter().skip(2)).enumerate()
    {
        assert!(mb < ma, "m increased under forcing at row {}", k + 1);
    }
    assert!(sample.state().m < m0);
}

#[test]
fn cobalt_quenching_scenario() {
    // cobalt driven by a 39 fs pulse; sub-fs steps on a +/-100 fs window
    let mat = Material::cobalt();
    let t: nd::Array1<f64> = nd::Array1::linspace(-100e-15, 100e-15, 20001);
    let pulse = gaussian_pulse(&t, 4.039e9, 39e-15).unwrap();
    let mut sample = Sample::with_time(mat, 273.15, 273.15, t[0]).unwrap();
    let m0 = sample.state().m;
    drive(&mut sample, &t, &pulse).unwrap();

    let h = sample.history();
    assert_eq!(h.len(), t.len());
    assert!(h.all_finite());
    assert_abs_diff_eq!(*h.t.last().unwrap(), 100e-15, epsilon = 1e-20);

    // the pulse heats the electrons through tc and quenches the moment
    let end = sample.state();
    assert!(end.te > mat.tc);
    assert!(end.m > 0.0);
    assert!(end.m < 0.9 * m0, "insufficient quenching: {} vs {}", end.m, m0);

    // a probe the same length as the pump resolves only part of the quench
    let m_arr: nd::Array1<f64> = nd::Array1::from_vec(h.m.clone());
    let te_arr: nd::Array1<f64> = nd::Array1::from_vec(h.te.clone());
    let wm = weighted_magnetization(&pulse, &m_arr).unwrap();
    assert!(0.0 < wm && wm < 1.0, "weighted m out of range: {}", wm);
    let wte = weighted_temperature(&pulse, &te_arr).unwrap();
    assert!(wte > 273.15 && wte < end.te, "weighted te out of range: {}", wte);
}

#[test]
fn numerical_blowup_is_observable_in_history() {
    // absurd second-long steps against femtosecond rates; the stepper does
    // not guard, but the damage is visible after the fact
    let mut sample = Sample::new(Material::cobalt(), 500.0, 300.0).unwrap();
    assert!(sample.history().all_finite());
    for _ in 0..50 {
        sample.step(1.0, 0.0).unwrap();
    }
    assert!(!sample.history().all_finite());
}
