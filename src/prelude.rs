//! Includes commonly used library components.

pub use crate::fdtd::{Mode, Source};
pub use crate::{
    Error,
    RunDescriptor,
    Simulation,
    SimulationDescriptor,
    SimulationParameters,
    Snapshot,
};
