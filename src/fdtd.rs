//! The TM field-update engine: stencils, boundary, sources and probe.

pub mod sources;

mod boundary;
mod field_grid;
mod probe;

pub use boundary::PecBoundary;
pub use field_grid::FieldGrid;
pub use probe::ProbeRecorder;
pub use sources::Source;

/// Field configuration of the cavity.
///
/// Only the transverse-magnetic configuration (Ez, Hx, Hy) is implemented;
/// selecting [`Mode::TE`] is refused when the simulation is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TM,
    TE,
}
