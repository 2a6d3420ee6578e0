use ndarray as nd;
use m3tm::{ material::Material, pulse, sample::Sample };

// quench the magnetization of cobalt with a single ultrafast pulse

fn main() {
    const FLUENCE: f64 = 4.039e9; // absorbed energy density
    const FWHM: f64 = 39e-15; // pulse duration; s
    const T0: f64 = 273.15; // starting temperature; K

    // stepping grid and the pulse sampled on it
    let t: nd::Array1<f64> = nd::Array1::linspace(-100e-15, 100e-15, 20001);
    let p = pulse::gaussian_pulse(&t, FLUENCE, FWHM).unwrap();

    // start from thermal equilibrium and drive through the pulse
    let mut sample = Sample::with_time(Material::cobalt(), T0, T0, t[0]).unwrap();
    let m0 = sample.state().m;
    pulse::drive(&mut sample, &t, &p).unwrap();

    let end = sample.state();
    println!("initial magnetization: {:.6}", m0);
    println!("final magnetization:   {:.6}", end.m);
    println!("final Te:              {:.1} K", end.te);

    // what a probe as long as the pump would actually record
    let h = sample.history();
    let m: nd::Array1<f64> = nd::Array1::from_vec(h.m.clone());
    let wm = pulse::weighted_magnetization(&p, &m).unwrap();
    println!("pulse-weighted m/m0:   {:.6}", wm);
}
