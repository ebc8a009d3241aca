//! This crate computes the Spike Time Tiling Coefficient (STTC) between pairs of spike trains.
//!
//! The STTC measures how often the spikes of two trains fall within a tolerance delta-t of each other,
//! corrected for the proportion of time the trains cover by chance.
//! It is computed for every delta-t from 0 up to a maximum value, with a millisecond step.
//!
//! Reference: Cutts CS, Eglen SJ. 2014. Detecting Pairwise Correlations in Spike Trains:
//! An Objective Comparison of Methods and Application to the Study of Retinal Waves. J Neurosci, 34(43):14288-14303.
//!
//! # Sweeping delta-t
//!
//! ```rust
//! use approx::assert_relative_eq;
//! use rusty_sttc::sweep::SttcSweep;
//! use rusty_sttc::window::Window;
//!
//! // Analysis window of 10 seconds
//! let window = Window::new(0.0, 10.0).unwrap();
//!
//! // Spike times (in seconds), sorted
//! let times_a = vec![1.0, 5.0];
//! let times_b = vec![1.001, 5.002];
//!
//! // One coefficient per millisecond, from 0 to 2 ms
//! let sweep = SttcSweep::compute(&window, 0.002, &times_a, &times_b).unwrap();
//! assert_eq!(sweep.delta_ts(), &[0.0, 0.001, 0.002]);
//! assert_relative_eq!(sweep.coefficients()[2], 1.0, epsilon = 1e-12);
//! ```
//!
//! # Undefined Coefficients
//!
//! If one of the trains has no spike within the analysis window, all coefficients are NaN.
//!
//! ```rust
//! use rusty_sttc::sweep::sttc_sweep;
//!
//! let (coefficients, delta_ts) = sttc_sweep(&[0.0, 10.0], 0.005, &[], &[3.0]).unwrap();
//! assert_eq!(delta_ts.len(), 6);
//! assert!(coefficients.iter().all(|c| c.is_nan()));
//! ```

pub mod error;
pub mod sttc;
pub mod sweep;
pub mod window;

/// The delta-t step of a sweep, in seconds.
pub const DELTA_T_RESOLUTION: f64 = 0.001;
/// The number of delta-t steps per second.
pub const STEPS_PER_SECOND: f64 = 1000.0;
/// The largest number of delta-t values in a sweep.
pub const MAX_NUM_STEPS: usize = u32::MAX as usize;
