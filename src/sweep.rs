//! Sweep of the Spike Time Tiling Coefficient over millisecond delta-t values.
//!
//! The spike trains are clipped to the analysis window once, then the coefficient is computed
//! for every delta-t from 0 up to the maximum delta-t rounded up to the next millisecond.
//!
//! # Examples
//!
//! ```rust
//! use rusty_sttc::sweep::SttcSweep;
//! use rusty_sttc::window::Window;
//!
//! let window = Window::new(0.0, 10.0).unwrap();
//! let sweep = SttcSweep::compute(&window, 0.002, &[1.0, 5.0], &[1.001, 5.002]).unwrap();
//!
//! assert_eq!(sweep.delta_ts(), &[0.0, 0.001, 0.002]);
//! assert_eq!(sweep.len(), 3);
//! ```
use serde::{Deserialize, Serialize};

use crate::error::SttcError;
use crate::sttc::sttc;
use crate::window::Window;
use crate::{DELTA_T_RESOLUTION, MAX_NUM_STEPS, STEPS_PER_SECOND};

/// The number of delta-t values in a sweep up to `max_dt`, zero included.
/// Returns an error if `max_dt` is negative, not finite, or gives more than `MAX_NUM_STEPS` values.
pub fn num_steps(max_dt: f64) -> Result<usize, SttcError> {
    if !max_dt.is_finite() {
        return Err(SttcError::InvalidDeltaT(format!(
            "max delta-t must be finite, got {}",
            max_dt
        )));
    }
    if max_dt < 0.0 {
        return Err(SttcError::InvalidDeltaT(format!(
            "max delta-t must be zero or more, got {}",
            max_dt
        )));
    }

    let last_step = (max_dt / DELTA_T_RESOLUTION).ceil();
    if last_step >= MAX_NUM_STEPS as f64 {
        return Err(SttcError::InvalidDeltaT(format!(
            "max delta-t {} gives more than {} delta-t values",
            max_dt, MAX_NUM_STEPS
        )));
    }
    (last_step as usize).checked_add(1).ok_or_else(|| {
        SttcError::InvalidDeltaT(format!("max delta-t {} gives too many delta-t values", max_dt))
    })
}

/// The k-th delta-t value of a sweep.
pub fn delta_t(k: usize) -> f64 {
    k as f64 / STEPS_PER_SECOND
}

/// The coefficients of a sweep, in register with their delta-t values.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SttcSweep {
    delta_ts: Vec<f64>,
    coefficients: Vec<f64>,
}

impl SttcSweep {
    /// Compute the coefficient between two sorted spike trains for every delta-t up to `max_dt`.
    ///
    /// Spikes outside the window are ignored.
    /// If no spike of one of the trains lies in the window, every coefficient is NaN.
    /// Returns an error if `max_dt` is invalid or if any spike time is NaN.
    pub fn compute(
        window: &Window,
        max_dt: f64,
        times_a: &[f64],
        times_b: &[f64],
    ) -> Result<Self, SttcError> {
        let steps = num_steps(max_dt)?;

        if times_a.iter().chain(times_b.iter()).any(|time| time.is_nan()) {
            return Err(SttcError::InvalidSpikeTimes(
                "spike times must not be NaN".to_string(),
            ));
        }

        let times_a = window.clip(times_a);
        let times_b = window.clip(times_b);

        log::debug!(
            "Sweeping {} delta-t values over [{}, {}] with {} and {} spikes",
            steps,
            window.start(),
            window.end(),
            times_a.len(),
            times_b.len()
        );

        let delta_ts: Vec<f64> = (0..steps).map(delta_t).collect();

        if times_a.is_empty() || times_b.is_empty() {
            log::warn!("No spike in the analysis window for at least one train, the coefficient is undefined");
            return Ok(SttcSweep {
                coefficients: vec![f64::NAN; steps],
                delta_ts,
            });
        }

        let coefficients = delta_ts
            .iter()
            .map(|&dt| {
                let coefficient = sttc(times_a, times_b, window, dt);
                log::trace!("dt={}: {}", dt, coefficient);
                coefficient
            })
            .collect();

        Ok(SttcSweep {
            delta_ts,
            coefficients,
        })
    }

    /// The delta-t values, from 0 with a millisecond step.
    pub fn delta_ts(&self) -> &[f64] {
        &self.delta_ts
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterate over the (delta-t, coefficient) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.delta_ts
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }
}

/// Sweep with the window given as a two-element slice `[start, end]`.
/// Returns the coefficients and the delta-t values.
pub fn sttc_sweep(
    window: &[f64],
    max_dt: f64,
    times_a: &[f64],
    times_b: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), SttcError> {
    let window = Window::try_from(window)?;
    let sweep = SttcSweep::compute(&window, max_dt, times_a, times_b)?;
    Ok((sweep.coefficients, sweep.delta_ts))
}
