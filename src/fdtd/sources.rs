//! Excitation sources.

use std::f64::consts::PI;

use crate::SimulationParameters;

/// An excitation injected additively into Ez at a fixed cell.
///
/// Each variant carries its own time-scaling rule: the Gaussian pulse is
/// evaluated on the raw step index, while the sinusoid first scales the step
/// index into continuous time by the time step.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A Gaussian pulse in step index, peaking at `t_center`.
    Gaussian {
        x: usize,
        y: usize,
        spread: f64,
        t_center: f64,
        amp: f64,
    },
    /// A continuous sinusoid of frequency `freq` (Hz).
    Sinusoidal {
        x: usize,
        y: usize,
        freq: f64,
        amp: f64,
    },
}

impl Source {
    /// The grid cell this source drives.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        match *self {
            Source::Gaussian { x, y, .. } | Source::Sinusoidal { x, y, .. } => (x, y),
        }
    }

    /// The scalar amplitude contributed at the given step index.
    #[inline]
    pub fn amplitude(&self, step: usize, sim_params: &SimulationParameters) -> f64 {
        match *self {
            Source::Gaussian {
                spread,
                t_center,
                amp,
                ..
            } => {
                let arg = (step as f64 - t_center) / spread;
                amp * (-0.5 * arg * arg).exp()
            }
            Source::Sinusoidal { freq, amp, .. } => {
                let t = step as f64 * sim_params.delta_t;
                amp * (2.0 * PI * freq * t).sin()
            }
        }
    }
}
