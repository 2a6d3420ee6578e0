use std::path::PathBuf;
use anyhow::Result;
use ndarray as nd;
use m3tm::{ mkdir, write_npz, material::Material, pulse, sample::Sample };

const FWHM: f64 = 39e-15; // pulse duration; s
const T0: f64 = 273.15; // starting temperature; K

// quenching depth and pulse-weighted observables as a function of the
// absorbed fluence

fn main() -> Result<()> {
    let mat = Material::cobalt();
    let t: nd::Array1<f64> = nd::Array1::linspace(-100e-15, 100e-15, 20001);
    let fluence: nd::Array1<f64>
        = nd::Array1::geomspace(0.25e9, 8.0e9, 16)
        .expect("geomspace bounds are positive");

    let mut m_final: Vec<f64> = Vec::with_capacity(fluence.len());
    let mut m_weighted: Vec<f64> = Vec::with_capacity(fluence.len());
    let mut te_weighted: Vec<f64> = Vec::with_capacity(fluence.len());
    for &fl in fluence.iter() {
        let p = pulse::gaussian_pulse(&t, fl, FWHM)?;
        let mut sample = Sample::with_time(mat, T0, T0, t[0])?;
        let m0 = sample.state().m;
        pulse::drive(&mut sample, &t, &p)?;
        let h = sample.history();
        if !h.all_finite() {
            anyhow::bail!("unstable trajectory at fluence {:.3e}", fl);
        }
        let (_, te, _, m) = h.to_arrays();
        m_final.push(sample.state().m / m0);
        m_weighted.push(pulse::weighted_magnetization(&p, &m)?);
        te_weighted.push(pulse::weighted_temperature(&p, &te)?);
        println!(
            "fluence {:9.3e}: m/m0 = {:.4}, weighted m/m0 = {:.4}",
            fl,
            m_final.last().unwrap(),
            m_weighted.last().unwrap(),
        );
    }

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("fluence_scan.npz"),
        arrays: {
            "fluence" => &fluence,
            "m_final" => &nd::Array1::from_vec(m_final),
            "m_weighted" => &nd::Array1::from_vec(m_weighted),
            "Te_weighted" => &nd::Array1::from_vec(te_weighted),
        }
    );
    Ok(())
}
