//! A framework for simulating 2-dimensional resonant cavities with the
//! finite-difference time-domain method.
//!
//! The cavity is discretized on a Yee-staggered grid in the transverse-magnetic
//! configuration (field components Ez, Hx, Hy) and closed by perfectly
//! conducting walls. To get started, refer to the `src/bin` directory in the
//! main repository.

mod simulation;

pub mod fdtd;
pub mod prelude;

pub use simulation::{
    RunDescriptor, Simulation, SimulationDescriptor, SimulationParameters, Snapshot,
};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{mode:?} mode is not implemented ( supported modes: TM )")]
    UnsupportedMode { mode: crate::fdtd::Mode },
    #[error("Grid dimensions must be positive \
        ( got {width} x {height} )")]
    BadDimensions { width: usize, height: usize },
    #[error("{name} must be positive ( got {value} )")]
    BadParameter { name: String, value: f64 },
    #[error("{name} position ({x}, {y}) is outside grid bounds \
        ( grid size: {width} x {height} )")]
    PositionOutOfBounds {
        name: String,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
