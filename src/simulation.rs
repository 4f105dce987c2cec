use indicatif::ProgressBar;
use ndarray::ArrayView2;

use crate::fdtd::{FieldGrid, Mode, PecBoundary, ProbeRecorder, Source};
use crate::Error;

/// Simulation specific parameters.
#[derive(Copy, Clone, Debug)]
pub struct SimulationParameters {
    /// The physical size of each spatial step along x (m).
    pub delta_x: f64,
    /// The physical size of each spatial step along y (m).
    pub delta_y: f64,
    /// The length of each temporal step in the simulation (s).
    pub delta_t: f64,
}

/// Describes a simulation.
pub struct SimulationDescriptor {
    /// Number of grid cells along x.
    pub grid_x: usize,
    /// Number of grid cells along y.
    pub grid_y: usize,
    /// Spatial step in meters; the spacing is the same along both axes.
    pub spatial_step: f64,
    /// Relative permittivity of the cavity medium.
    pub e_r: f64,
    /// Relative permeability of the cavity medium.
    pub mu_r: f64,
    /// Speed of light (m/s).
    pub light_speed: f64,
    /// Field configuration; only [`Mode::TM`] is supported.
    pub mode: Mode,
}

/// Describes a headless simulation run.
pub struct RunDescriptor {
    /// How many steps to execute.
    pub n_steps: usize,
    /// Whether or not to print progress information to the console.
    pub verbose: bool,
}

/// Read-only view of the cavity state after one advanced step.
pub struct Snapshot<'a> {
    /// The full Ez field at the end of the step.
    pub ez: ArrayView2<'a, f64>,
    /// Elapsed simulated time (s), following the half-step leapfrog
    /// convention `step * dt * 2`.
    pub time: f64,
    /// Index of the step that produced this snapshot.
    pub step: usize,
}

/// The main `struct` of the framework.
///
/// Owns the field grid, the active source set, the probe and the step
/// counter; nothing is shared across instances. Stepping is strictly
/// sequential and deterministic.
pub struct Simulation {
    grid: FieldGrid,
    boundary: PecBoundary,
    sources: Vec<Source>,
    probe: ProbeRecorder,
    sim_params: SimulationParameters,
    light_speed: f64,
    step: usize,
}

impl Simulation {
    /// Creates a new `Simulation` instance.
    ///
    /// Every descriptor field is validated before any field array is
    /// allocated; selecting [`Mode::TE`] is refused here. The probe starts
    /// at the origin until [`Simulation::set_probe`] moves it.
    pub fn new(desc: SimulationDescriptor) -> Result<Self, Error> {
        if desc.mode != Mode::TM {
            return Err(Error::UnsupportedMode { mode: desc.mode });
        }
        if desc.grid_x == 0 || desc.grid_y == 0 {
            return Err(Error::BadDimensions {
                width: desc.grid_x,
                height: desc.grid_y,
            });
        }
        for (name, value) in [
            ("spatial_step", desc.spatial_step),
            ("e_r", desc.e_r),
            ("mu_r", desc.mu_r),
            ("light_speed", desc.light_speed),
        ] {
            if value <= 0.0 {
                return Err(Error::BadParameter {
                    name: name.to_string(),
                    value,
                });
            }
        }

        // CFL-derived time step, tied to the spatial resolution
        let sim_params = SimulationParameters {
            delta_x: desc.spatial_step,
            delta_y: desc.spatial_step,
            delta_t: desc.spatial_step / (2.0 * desc.light_speed),
        };

        Ok(Self {
            grid: FieldGrid::new(desc.grid_x, desc.grid_y, desc.e_r, desc.mu_r),
            boundary: PecBoundary,
            sources: Vec::new(),
            probe: ProbeRecorder::new(0, 0),
            sim_params,
            light_speed: desc.light_speed,
            step: 0,
        })
    }

    /// Replaces the active source set wholesale.
    ///
    /// Every source coordinate is bounds-checked before the new set is
    /// installed; on error the previous set is left untouched.
    pub fn set_sources(&mut self, sources: Vec<Source>) -> Result<(), Error> {
        for source in &sources {
            let (x, y) = source.position();
            Self::check_bounds("Source", x, y, self.grid.width(), self.grid.height())?;
        }
        self.sources = sources;
        Ok(())
    }

    /// Replaces the probed coordinate. The accumulated history is retained.
    pub fn set_probe(&mut self, x: usize, y: usize) -> Result<(), Error> {
        Self::check_bounds("Probe", x, y, self.grid.width(), self.grid.height())?;
        self.probe.set_position(x, y);
        Ok(())
    }

    /// Advances the simulation by exactly one step and exposes the resulting
    /// state for an external renderer.
    ///
    /// One step is: H-update, E-update, boundary enforcement, source
    /// injection at the current step index, one probe sample. The physics is
    /// identical whether steps are driven here or through
    /// [`Simulation::run`].
    pub fn advance(&mut self) -> Snapshot<'_> {
        let t = self.step;

        self.grid.update_h(&self.sim_params);
        self.grid.update_e(&self.sim_params);
        self.boundary.apply(self.grid.ez_mut());
        for source in &self.sources {
            let (x, y) = source.position();
            let amplitude = source.amplitude(t, &self.sim_params);
            self.grid.inject(x, y, amplitude);
        }
        self.probe.record(&self.grid);

        self.step = t + 1;

        Snapshot {
            ez: self.grid.ez(),
            time: t as f64 * self.sim_params.delta_t * 2.0,
            step: t,
        }
    }

    /// Does a blocking, headless computational run.
    ///
    /// The step index restarts at zero and exactly `n_steps` steps are
    /// executed; probe samples accumulate on top of any existing history.
    pub fn run(&mut self, desc: RunDescriptor) {
        // setup output if verbose
        let bar = if desc.verbose {
            println!("# of time steps: {}", desc.n_steps);
            Some(ProgressBar::new(desc.n_steps as u64))
        } else {
            None
        };

        self.step = 0;
        for _ in 0..desc.n_steps {
            self.advance();
            if let Some(ref bar) = bar {
                bar.inc(1);
            }
        }

        if let Some(ref bar) = bar {
            bar.finish();
        }
    }

    /// Reallocates the field arrays zero-filled at a new shape.
    ///
    /// Prior field values are dropped; the probe history and the source and
    /// probe configuration are retained. Fails, without touching the grid,
    /// if the retained configuration would fall outside the new bounds.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::BadDimensions { width, height });
        }
        for source in &self.sources {
            let (x, y) = source.position();
            Self::check_bounds("Source", x, y, width, height)?;
        }
        let (x, y) = self.probe.position();
        Self::check_bounds("Probe", x, y, width, height)?;

        self.grid.resize(width, height);
        self.sim_params.delta_t = self.sim_params.delta_x / (2.0 * self.light_speed);
        Ok(())
    }

    /// Zeroes all field arrays, empties the probe history and resets the
    /// step counter. Sources, probe position, grid size and constants are
    /// retained.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.probe.clear();
        self.step = 0;
    }

    /// The time step `dt = spatial_step / (2 * light_speed)` (s).
    pub fn time_step(&self) -> f64 {
        self.sim_params.delta_t
    }

    pub fn parameters(&self) -> SimulationParameters {
        self.sim_params
    }

    /// Probe samples accumulated since the last clear, in step order.
    pub fn probe_values(&self) -> &[f64] {
        self.probe.values()
    }

    pub fn grid(&self) -> &FieldGrid {
        &self.grid
    }

    fn check_bounds(
        name: &str,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<(), Error> {
        if x >= width || y >= height {
            return Err(Error::PositionOutOfBounds {
                name: name.to_string(),
                x,
                y,
                width,
                height,
            });
        }
        Ok(())
    }
}
