//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Equilibrium magnetization](#equilibrium-magnetization)
//! - [Discretization](#discretization)
//! - [Pulse-weighted measurement](#pulse-weighted-measurement)
//!
//! # Background
//! Following an ultrafast optical or X-ray excitation, the absorbed energy in
//! a ferromagnetic film is shared between three reservoirs: the conduction
//! electrons, the lattice (phonons), and the spin system. The
//! three-temperature model[^1] assigns each reservoir a single
//! thermodynamic coordinate and couples them with rate equations; the
//! *microscopic* three-temperature model (M3TM)[^2] closes the spin equation
//! with an Elliott-Yafet spin-flip channel, giving
//! ```text
//!      dT_e
//! C_e ----- = g_ep (T_ph - T_e) + P(t)
//!       dt
//!
//!      dT_ph
//! C_p ------ = g_ep (T_e - T_ph)
//!        dt
//!
//!  dm          T_ph                 m T_C
//! ---- = R m  ------ (1 - m coth( ------- ))
//!  dt           T_C                  T_e
//! ```
//! where *T*<sub>e</sub> and *T*<sub>ph</sub> are the electron and phonon
//! temperatures, *m* is the magnetization normalized to its zero-temperature
//! value, and *P*(*t*) is the absorbed-power density delivered to the
//! electron bath by the pump pulse. The electron heat capacity is linear in
//! temperature, *C*<sub>e</sub> = *γ* *T*<sub>e</sub>, while the phonon heat
//! capacity *C*<sub>p</sub>, the electron-phonon coupling
//! *g*<sub>ep</sub>, the Curie temperature *T*<sub>C</sub>, and the
//! demagnetization rate scale *R* are material constants.
//!
//! The electron bath is heated directly by the pulse and, having a heat
//! capacity orders of magnitude below the lattice's, briefly reaches
//! temperatures comparable to or above *T*<sub>C</sub>. The spin equation
//! then drives *m* down at a rate set by *R*, producing the sub-picosecond
//! quenching of the magnetization observed in pump-probe experiments.
//!
//! # Equilibrium magnetization
//! At fixed electron temperature the spin equation is stationary when
//! ```text
//!                m T_C
//! 1 - m coth( ------- ) = 0
//!                 T_e
//! ```
//! which is the mean-field (Curie-Weiss-like) self-consistency condition for
//! the equilibrium magnetization. It has no closed-form solution, so sample
//! construction solves it numerically with a [secant iteration][secant]
//! starting from full magnetization (*m* = 1). Two structural facts matter
//! for the solver:
//! - The left-hand side is even in *m*, so zeros come in ± pairs; the
//!   physical, positive branch is returned.
//! - For *T*<sub>e</sub> ≥ *T*<sub>C</sub> the left-hand side is bounded away
//!   from zero for all *m* ≠ 0 (its supremum, approached as *m* → 0, is
//!   1 - *T*<sub>e</sub>/*T*<sub>C</sub> ≤ 0), so the search cannot converge
//!   and construction fails instead of fabricating a root.
//!
//! # Discretization
//! The rate equations are stepped with a single explicit first-order (Euler)
//! update per interval, with every coupling term evaluated at the pre-step
//! values:
//! ```text
//! T_e[k+1]  = T_e[k] + dt (g_ep (T_ph[k] - T_e[k]) + P[k]) / (γ T_e[k])
//! T_ph[k+1] = T_ph[k] + dt g_ep (T_e[k] - T_ph[k]) / C_p
//! m[k+1]    = m[k] + dt R m[k] (T_ph[k] / T_C)
//!                         (1 - m[k] coth(m[k] T_C / T_e[k]))
//! ```
//! The scheme carries an *O*(*dt*) local error and no stability safeguard:
//! the electron-bath relaxation rate grows as *T*<sub>e</sub> falls, and a
//! step that overshoots *T*<sub>e</sub> through zero produces non-finite
//! values that propagate through the rest of the trajectory. Step sizes well
//! below the fastest relaxation time (sub-femtosecond steps against the
//! 10-100 fs dynamics of interest) keep the update in its stable regime;
//! choosing them is the caller's responsibility, and the recorded history can
//! be checked for finiteness after the fact.
//!
//! # Pulse-weighted measurement
//! A probe pulse of duration comparable to the dynamics does not sample the
//! instantaneous state. What it records is the state averaged under its own
//! intensity envelope,
//! ```text
//!        ∫ I(t) x(t) dt
//! <x> = ----------------
//!          ∫ I(t) dt
//! ```
//! for a probed quantity *x* and probe intensity *I*. Measurement operators
//! here implement exactly this weighted mean over the recorded history, with
//! the magnetization variant additionally normalized by the pre-pulse
//! equilibrium value so that 1 means "no quenching resolved". When pump and
//! probe envelopes are the same (as in a self-probing X-ray measurement), the
//! synthesized excitation pulse doubles as the weight.
//!
//! [^1]: E. Beaurepaire, J.-C. Merle, A. Daunois, and J.-Y. Bigot, "Ultrafast
//! spin dynamics in ferromagnetic nickel." Phys. Rev. Lett. **76** 4250
//! (1996).
//!
//! [^2]: B. Koopmans, G. Malinowski, F. Dalla Longa, D. Steiauf, M. Fähnle,
//! T. Roth, M. Cinchetti, and M. Aeschlimann, "Explaining the paradoxical
//! diversity of ultrafast laser-induced demagnetization." Nature Materials
//! **9** 259-265 (2010).
//!
//! [secant]: https://en.wikipedia.org/wiki/Secant_method
