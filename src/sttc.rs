//! Spike Time Tiling Coefficient between two spike trains for a single delta-t.
//!
//! The coefficient combines four proportions:
//! - `pa` (`pb`): the fraction of spikes of the first (second) train lying within delta-t of a spike of the other train,
//! - `ta` (`tb`): the fraction of the analysis window lying within delta-t of a spike of the first (second) train.
//!
//! See Cutts and Eglen (2014), Detecting Pairwise Correlations in Spike Trains, J. Neurosci. 34(43).
//!
//! All functions in this module expect spike times sorted in non-decreasing order and already clipped to the window.
//!
//! # Examples
//!
//! ```rust
//! use approx::assert_relative_eq;
//! use rusty_sttc::sttc::sttc;
//! use rusty_sttc::window::Window;
//!
//! let window = Window::new(0.0, 10.0).unwrap();
//! let times_1 = vec![1.0, 5.0];
//! let times_2 = vec![1.001, 5.002];
//!
//! assert_relative_eq!(sttc(&times_1, &times_2, &window, 0.002), 1.0, epsilon = 1e-12);
//! assert!(sttc(&times_1, &[], &window, 0.002).is_nan());
//! ```
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::window::Window;

/// Counts the spikes of the first train having at least one spike of the second train within `dt`.
///
/// A single cursor into the second train is shared by all spikes of the first train and only moves forward,
/// hence the cost is linear in the total number of spikes.
/// The cursor stays on a matching spike, so the same spike of the second train can match several spikes of the first.
pub fn coincidence_count(times_1: &[f64], times_2: &[f64], dt: f64) -> usize {
    let mut count = 0;
    let mut j = 0;

    for &time_1 in times_1 {
        while let Some(&time_2) = times_2.get(j) {
            if (time_1 - time_2).abs() <= dt {
                count += 1;
                break;
            } else if time_2 > time_1 {
                break;
            } else {
                j += 1;
            }
        }
    }

    count
}

/// The proportion of spikes of the first train having at least one spike of the second train within `dt`.
/// NaN if the first train is empty.
pub fn coincidence_proportion(times_1: &[f64], times_2: &[f64], dt: f64) -> f64 {
    coincidence_count(times_1, times_2, dt) as f64 / times_1.len() as f64
}

/// The total time of the window lying within `dt` of some spike (not normalized by the window duration).
///
/// Starts from `2 * dt` per spike, then removes the overlap between every pair of consecutive spikes,
/// then the parts of the first and last intervals sticking out of the window.
/// A lone spike is clipped on one side only, the start side taking precedence.
pub fn tiled_duration(times: &[f64], dt: f64, window: &Window) -> f64 {
    let start = window.start();
    let end = window.end();
    let mut duration = 2.0 * times.len() as f64 * dt;

    match times {
        [] => {}
        [time] => {
            if time - start < dt {
                duration = duration - start + time - dt;
            } else if time + dt > end {
                duration = duration - time - dt + end;
            }
        }
        [first, .., last] => {
            for (prev_time, next_time) in times.iter().tuple_windows() {
                let gap = next_time - prev_time;
                if gap < 2.0 * dt {
                    duration = duration - 2.0 * dt + gap;
                }
            }

            if first - start < dt {
                duration = duration - start + first - dt;
            }
            if end - last < dt {
                duration = duration - last - dt + end;
            }
        }
    }

    duration
}

/// The four proportions entering the coefficient.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct TilingTerms {
    /// Proportion of spikes of the first train within delta-t of the second train.
    pub pa: f64,
    /// Proportion of spikes of the second train within delta-t of the first train.
    pub pb: f64,
    /// Proportion of the window within delta-t of the first train.
    pub ta: f64,
    /// Proportion of the window within delta-t of the second train.
    pub tb: f64,
}

impl TilingTerms {
    /// Compute the tiling terms of two (clipped) spike trains.
    /// Returns `None` if any of the trains is empty, in which case the coefficient is undefined.
    pub fn compute(times_1: &[f64], times_2: &[f64], window: &Window, dt: f64) -> Option<Self> {
        if times_1.is_empty() || times_2.is_empty() {
            return None;
        }

        let duration = window.duration();
        Some(TilingTerms {
            pa: coincidence_proportion(times_1, times_2, dt),
            pb: coincidence_proportion(times_2, times_1, dt),
            ta: tiled_duration(times_1, dt, window) / duration,
            tb: tiled_duration(times_2, dt, window) / duration,
        })
    }

    /// The Spike Time Tiling Coefficient.
    /// Zero denominators are not special-cased and give infinite or NaN values.
    pub fn coefficient(&self) -> f64 {
        0.5 * (self.pa - self.tb) / (1.0 - self.tb * self.pa)
            + 0.5 * (self.pb - self.ta) / (1.0 - self.ta * self.pb)
    }
}

/// The Spike Time Tiling Coefficient of two (clipped) spike trains for the given delta-t.
/// NaN if any of the trains is empty.
pub fn sttc(times_1: &[f64], times_2: &[f64], window: &Window, dt: f64) -> f64 {
    match TilingTerms::compute(times_1, times_2, window, dt) {
        Some(terms) => terms.coefficient(),
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, Exp};

    const SEED: u64 = 42;

    /// Sample the (sorted) times of a Poisson process on [0, duration).
    fn rand_times<R: Rng>(rate: f64, duration: f64, rng: &mut R) -> Vec<f64> {
        let exp = Exp::new(rate).unwrap();
        let mut times = vec![];
        let mut time = exp.sample(rng);
        while time < duration {
            times.push(time);
            time += exp.sample(rng);
        }
        times
    }

    /// Quadratic reference for the coincidence count.
    fn brute_force_count(times_1: &[f64], times_2: &[f64], dt: f64) -> usize {
        times_1
            .iter()
            .filter(|t1| times_2.iter().any(|t2| (*t1 - t2).abs() <= dt))
            .count()
    }

    #[test]
    fn test_coincidence_count() {
        assert_eq!(coincidence_count(&[1.0, 2.0, 3.0], &[1.0, 3.0], 0.0), 2);
        assert_eq!(coincidence_count(&[1.0, 2.0, 3.0], &[1.5], 0.5), 2);
        assert_eq!(coincidence_count(&[1.5], &[1.0, 2.0, 3.0], 0.5), 1);
        assert_eq!(coincidence_count(&[1.0, 2.0], &[], 1.0), 0);
        assert_eq!(coincidence_count(&[], &[1.0, 2.0], 1.0), 0);

        // exact matches only at dt = 0
        assert_eq!(coincidence_count(&[1.0, 2.0], &[1.0 + 1e-9, 2.0], 0.0), 1);
    }

    #[test]
    fn test_coincidence_count_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(SEED);
        for _ in 0..20 {
            let times_1 = rand_times(20.0, 5.0, &mut rng);
            let times_2 = rand_times(20.0, 5.0, &mut rng);
            for dt in [0.0, 0.001, 0.005, 0.02, 0.1] {
                assert_eq!(
                    coincidence_count(&times_1, &times_2, dt),
                    brute_force_count(&times_1, &times_2, dt)
                );
            }
        }
    }

    #[test]
    fn test_coincidence_proportion() {
        assert_eq!(coincidence_proportion(&[1.0, 2.0, 3.0, 4.0], &[2.0], 0.0), 0.25);
        assert_eq!(coincidence_proportion(&[1.0, 2.0], &[1.25, 2.25], 0.25), 1.0);
        assert!(coincidence_proportion(&[], &[1.0], 0.5).is_nan());
    }

    #[test]
    fn test_tiled_duration_single_spike() {
        let window = Window::new(0.0, 10.0).unwrap();

        assert_eq!(tiled_duration(&[5.0], 0.5, &window), 1.0);
        // truncated at start
        assert_eq!(tiled_duration(&[0.25], 0.5, &window), 0.75);
        // truncated at end
        assert_eq!(tiled_duration(&[9.75], 0.5, &window), 0.75);
        assert_eq!(tiled_duration(&[5.0], 0.0, &window), 0.0);
    }

    #[test]
    fn test_tiled_duration_many_spikes() {
        let window = Window::new(0.0, 10.0).unwrap();

        // disjoint intervals
        assert_eq!(tiled_duration(&[2.0, 5.0, 8.0], 0.5, &window), 3.0);
        // consecutive overlaps
        assert_eq!(tiled_duration(&[2.0, 2.5, 3.0], 0.5, &window), 2.0);
        // both ends truncated
        assert_eq!(tiled_duration(&[0.0, 5.0, 10.0], 0.5, &window), 2.0);
        // no spike at all
        assert_eq!(tiled_duration(&[], 0.5, &window), 0.0);
    }

    #[test]
    fn test_tiled_duration_wider_than_window() {
        let window = Window::new(0.0, 1.0).unwrap();

        // [4, 6], [4.5, 6.5] and [5, 7] cover [4, 7]
        assert_eq!(tiled_duration(&[5.0, 5.5, 6.0], 1.0, &Window::new(0.0, 10.0).unwrap()), 3.0);
        // both sides clipped for several spikes
        assert_relative_eq!(tiled_duration(&[0.4, 0.6], 1.0, &window), 1.0, epsilon = 1e-12);
        // a lone spike is only clipped at start
        assert_eq!(tiled_duration(&[0.5], 1.0, &window), 1.5);
    }

    #[test]
    fn test_tiling_terms() {
        let window = Window::new(0.0, 10.0).unwrap();

        let terms = TilingTerms::compute(&[2.0, 5.0], &[2.5, 8.0], &window, 0.5).unwrap();
        assert_eq!(terms.pa, 0.5);
        assert_eq!(terms.pb, 0.5);
        assert_relative_eq!(terms.ta, 0.2, epsilon = 1e-12);
        assert_relative_eq!(terms.tb, 0.2, epsilon = 1e-12);
        assert_relative_eq!(terms.coefficient(), 0.3 / 0.9, epsilon = 1e-12);

        assert_eq!(TilingTerms::compute(&[], &[2.5], &window, 0.5), None);
        assert_eq!(TilingTerms::compute(&[2.5], &[], &window, 0.5), None);
    }

    #[test]
    fn test_coefficient_zero_denominator() {
        let terms = TilingTerms {
            pa: 1.0,
            pb: 0.5,
            ta: 0.5,
            tb: 1.0,
        };
        assert!(!terms.coefficient().is_finite());
    }

    #[test]
    fn test_sttc_identical_trains() {
        let window = Window::new(0.0, 10.0).unwrap();
        let times = vec![1.0, 3.0, 5.0, 7.0];
        assert_relative_eq!(sttc(&times, &times, &window, 0.01), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sttc_empty_trains() {
        let window = Window::new(0.0, 10.0).unwrap();
        assert!(sttc(&[], &[3.0], &window, 0.01).is_nan());
        assert!(sttc(&[3.0], &[], &window, 0.01).is_nan());
        assert!(sttc(&[], &[], &window, 0.01).is_nan());
    }

    #[test]
    fn test_sttc_symmetry() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let window = Window::new(0.0, 5.0).unwrap();
        for _ in 0..20 {
            let times_1 = rand_times(10.0, 5.0, &mut rng);
            let times_2 = rand_times(10.0, 5.0, &mut rng);
            for dt in [0.0, 0.001, 0.01, 0.05] {
                let sttc_12 = sttc(&times_1, &times_2, &window, dt);
                let sttc_21 = sttc(&times_2, &times_1, &window, dt);
                assert!(sttc_12 == sttc_21 || (sttc_12.is_nan() && sttc_21.is_nan()));
            }
        }
    }
}
