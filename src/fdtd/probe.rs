use crate::fdtd::FieldGrid;

/// Samples one grid cell once per executed step into an ordered history.
///
/// The history is append-only and never trimmed; callers clear it between
/// independent runs.
pub struct ProbeRecorder {
    x: usize,
    y: usize,
    history: Vec<f64>,
}

impl ProbeRecorder {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Moves the probe without touching the accumulated history.
    pub fn set_position(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    /// Appends the Ez value under the probe.
    #[inline]
    pub fn record(&mut self, grid: &FieldGrid) {
        self.history.push(grid.sample(self.x, self.y));
    }

    /// The samples accumulated since the last clear, in step order.
    pub fn values(&self) -> &[f64] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
