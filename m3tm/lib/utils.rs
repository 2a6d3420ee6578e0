//! Miscellaneous numerical and output tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule over a uniform grid spacing.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Integrate using the trapezoidal rule over an explicit, possibly
/// non-uniform coordinate grid.
///
/// Only the first `min(y.len(), x.len())` points are visited; pass
/// equal-length arrays for a meaningful result.
pub fn trapz_grid<S, T, A>(
    y: &nd::ArrayBase<S, Ix1>,
    x: &nd::ArrayBase<T, Ix1>,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let two = A::one() + A::one();
    y.iter().zip(y.iter().skip(1))
        .zip(x.iter().zip(x.iter().skip(1)))
        .map(|((&yk, &ykp1), (&xk, &xkp1))| (xkp1 - xk) * (yk + ykp1) / two)
        .fold(A::zero(), |acc, a| acc + a)
}

/// Return an array of differences between adjacent elements of a source
/// array.
pub fn array_diff<S, A>(a: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: std::ops::Sub<A, Output = A> + Copy,
{
    a.iter().zip(a.iter().skip(1))
        .map(|(ak, akp1)| *akp1 - *ak)
        .collect()
}

/// Create a directory and all of its ancestors if they don't already exist.
#[macro_export]
macro_rules! mkdir {
    ($dir:expr) => {
        std::fs::create_dir_all(&$dir)
            .unwrap_or_else(|e| {
                panic!("couldn't create directory {:?}: {}", $dir, e)
            })
    };
}

/// Write a set of named arrays to a `.npz` archive.
///
/// ```ignore
/// write_npz!(
///     outdir.join("data.npz"),
///     arrays: { "t" => &t, "m" => &m }
/// );
/// ```
#[macro_export]
macro_rules! write_npz {
    ($path:expr, arrays: { $($name:expr => $arr:expr),+ $(,)? }) => {
        {
            let mut npz = $crate::ndarray_npy::NpzWriter::new(
                std::fs::File::create(&$path)
                    .unwrap_or_else(|e| {
                        panic!("couldn't create file {:?}: {}", $path, e)
                    })
            );
            $(
                npz.add_array($name, $arr)
                    .unwrap_or_else(|e| {
                        panic!("couldn't write array {:?}: {}", $name, e)
                    });
            )+
            npz.finish()
                .unwrap_or_else(|e| {
                    panic!("couldn't finish archive {:?}: {}", $path, e)
                });
        }
    };
}
