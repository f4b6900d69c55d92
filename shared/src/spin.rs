use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

// Constants for the spin animation
pub const SPIN_MIN_DURATION_MS: f64 = 4200.0; // Shortest spin
pub const SPIN_MAX_DURATION_MS: f64 = 5400.0; // Longest spin
pub const MIN_TURNS: f64 = 4.0; // Guaranteed full rotations per spin
pub const MAX_TURNS: f64 = 6.0;

const PULSE_AMPLITUDE: f64 = 0.06;
const PULSE_PERIOD_MS: f64 = 120.0;

/// Accelerate-then-decelerate curve applied to the whole spin.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Breathing factor for the center ornament while the wheel is in motion.
pub fn pulse_at(elapsed_ms: f64) -> f64 {
    1.0 + PULSE_AMPLITUDE * (elapsed_ms / PULSE_PERIOD_MS).sin()
}

/// One spin's motion, fixed when the spin starts and discarded once it
/// settles. Defined purely in angle-space.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinTrajectory {
    pub start_angle: f64,
    pub end_angle: f64,
    pub duration_ms: f64,
}

/// Everything the animation loop needs from a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    pub angle: f64,
    pub pulse: f64,
    pub done: bool,
}

impl SpinTrajectory {
    /// Draws a fresh trajectory: 4-6 full turns plus a continuous extra
    /// turn, over 4.2-5.4 seconds.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, start_angle: f64) -> Self {
        let duration_ms = rng.gen_range(SPIN_MIN_DURATION_MS..SPIN_MAX_DURATION_MS);
        let delta = rng.gen_range(MIN_TURNS..MAX_TURNS) * TAU + rng.gen_range(0.0..TAU);
        SpinTrajectory {
            start_angle,
            end_angle: start_angle + delta,
            duration_ms,
        }
    }

    /// Pure frame math: any clock, the browser's or a test's, supplies the
    /// elapsed time since the spin started.
    pub fn frame_at(&self, elapsed_ms: f64) -> SpinFrame {
        let k = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        if k < 1.0 {
            let eased = ease_in_out_cubic(k);
            SpinFrame {
                angle: self.start_angle + (self.end_angle - self.start_angle) * eased,
                pulse: pulse_at(elapsed_ms),
                done: false,
            }
        } else {
            SpinFrame {
                angle: self.end_angle,
                pulse: 1.0,
                done: true,
            }
        }
    }
}

/// Rotation state read by the renderer and, at spin end, by the resolver.
/// The angle accumulates across spins instead of wrapping back to [0, 2*pi).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelState {
    pub angle: f64,
    pub spinning: bool,
}

impl WheelState {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            spinning: false,
        }
    }

    /// Starts a spin unless one is already in flight; repeated activations
    /// while spinning are dropped, not errors.
    pub fn begin_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinTrajectory> {
        if self.spinning {
            log::debug!("spin requested while already spinning, ignored");
            return None;
        }
        self.spinning = true;
        let trajectory = SpinTrajectory::sample(rng, self.angle);
        log::debug!(
            "spin started: {:.2} -> {:.2} over {:.0}ms",
            trajectory.start_angle,
            trajectory.end_angle,
            trajectory.duration_ms
        );
        Some(trajectory)
    }

    /// Terminal tick of a spin: freeze the wheel at the trajectory's end.
    pub fn settle(&mut self, end_angle: f64) {
        self.angle = end_angle;
        self.spinning = false;
    }
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut prev = 0.0;
        for step in 0..=1000 {
            let eased = ease_in_out_cubic(step as f64 / 1000.0);
            assert!(eased >= prev);
            prev = eased;
        }
    }

    #[test]
    fn test_sampled_trajectories_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let trajectory = SpinTrajectory::sample(&mut rng, 1.5);
            assert!(trajectory.duration_ms >= SPIN_MIN_DURATION_MS);
            assert!(trajectory.duration_ms < SPIN_MAX_DURATION_MS);
            let delta = trajectory.end_angle - trajectory.start_angle;
            assert!(delta >= MIN_TURNS * TAU);
            assert!(delta < (MAX_TURNS + 1.0) * TAU);
        }
    }

    #[test]
    fn test_frame_at_interpolates_between_endpoints() {
        let trajectory = SpinTrajectory {
            start_angle: 2.0,
            end_angle: 30.0,
            duration_ms: 5000.0,
        };

        let first = trajectory.frame_at(0.0);
        assert_eq!(first.angle, 2.0);
        assert!(!first.done);

        let halfway = trajectory.frame_at(2500.0);
        assert!((halfway.angle - 16.0).abs() < 1e-9);
        assert!(!halfway.done);

        let last = trajectory.frame_at(5000.0);
        assert_eq!(last.angle, 30.0);
        assert_eq!(last.pulse, 1.0);
        assert!(last.done);

        // Past the end the wheel stays settled.
        let after = trajectory.frame_at(9999.0);
        assert_eq!(after, last);
    }

    #[test]
    fn test_frame_at_is_pure() {
        let trajectory = SpinTrajectory {
            start_angle: 0.0,
            end_angle: 40.0,
            duration_ms: 4200.0,
        };
        assert_eq!(trajectory.frame_at(1234.0), trajectory.frame_at(1234.0));
    }

    #[test]
    fn test_begin_spin_ignored_while_spinning() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = WheelState::new();

        let trajectory = state.begin_spin(&mut rng).expect("first spin starts");
        assert!(state.spinning);

        // A second activation must not restart or drift the trajectory.
        assert!(state.begin_spin(&mut rng).is_none());
        assert!(state.spinning);

        state.settle(trajectory.end_angle);
        assert!(!state.spinning);
        assert_eq!(state.angle, trajectory.end_angle);

        // The next spin continues from the accumulated angle.
        let next = state.begin_spin(&mut rng).expect("wheel is at rest again");
        assert_eq!(next.start_angle, trajectory.end_angle);
    }
}
