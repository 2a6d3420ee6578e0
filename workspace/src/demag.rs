use std::path::PathBuf;
use anyhow::Result;
use ndarray as nd;
use m3tm::{ mkdir, write_npz, material::Material, pulse, sample::Sample };

const FLUENCE: f64 = 4.039e9; // absorbed energy density
const FWHM: f64 = 39e-15; // pulse duration; s
const T0: f64 = 273.15; // starting temperature; K

fn main() -> Result<()> {
    let mat = Material::cobalt();

    let t: nd::Array1<f64> = nd::Array1::linspace(-100e-15, 100e-15, 20001);
    let p = pulse::gaussian_pulse(&t, FLUENCE, FWHM)?;

    let mut sample = Sample::with_time(mat, T0, T0, t[0])?;
    let m0 = sample.state().m;
    pulse::drive(&mut sample, &t, &p)?;

    let h = sample.history();
    if !h.all_finite() {
        anyhow::bail!("trajectory left the stable stepping regime");
    }
    let (time, te, tph, m) = h.to_arrays();

    let wm = pulse::weighted_magnetization(&p, &m)?;
    let wte = pulse::weighted_temperature(&p, &te)?;
    println!("final m/m0:          {:.6}", sample.state().m / m0);
    println!("pulse-weighted m/m0: {:.6}", wm);
    println!("pulse-weighted Te:   {:.1} K", wte);

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("demag.npz"),
        arrays: {
            "t" => &time,
            "pulse" => &p,
            "Te" => &te,
            "Tph" => &tph,
            "m" => &m,
            "m_weighted" => &nd::array![wm],
            "Te_weighted" => &nd::array![wte],
        }
    );
    Ok(())
}
