use ndarray::{s, Array2, ArrayView2, Zip};

use crate::SimulationParameters;

const EPSILON_0: f64 = physical_constants::VACUUM_ELECTRIC_PERMITTIVITY;
const MU_0: f64 = physical_constants::VACUUM_MAG_PERMEABILITY;

/// Owns the three TM field arrays and the material constants of the cavity.
///
/// All three arrays always share one shape; the shape only changes through
/// [`FieldGrid::resize`], which reallocates and zero-fills every component.
pub struct FieldGrid {
    ez: Array2<f64>,
    hx: Array2<f64>,
    hy: Array2<f64>,
    epsilon: f64,
    mu: f64,
}

impl FieldGrid {
    /// Creates a zero-filled grid for a medium with the given relative
    /// permittivity and permeability.
    pub fn new(width: usize, height: usize, e_r: f64, mu_r: f64) -> Self {
        Self {
            ez: Array2::zeros((width, height)),
            hx: Array2::zeros((width, height)),
            hy: Array2::zeros((width, height)),
            epsilon: EPSILON_0 * e_r,
            mu: MU_0 * mu_r,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.ez.nrows()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.ez.ncols()
    }

    /// Advances Hx and Hy from the spatial differences of Ez.
    ///
    /// The stencil range leaves the last y-slice of Hx and the last x-slice
    /// of Hy untouched.
    #[inline]
    pub fn update_h(&mut self, sim_params: &SimulationParameters) {
        let (width, height) = self.ez.dim();

        let coeff_x = sim_params.delta_t / (self.mu * sim_params.delta_y);
        Zip::from(self.hx.slice_mut(s![.., ..height - 1]))
            .and(self.ez.slice(s![.., 1..]))
            .and(self.ez.slice(s![.., ..height - 1]))
            .for_each(|hx, &ez_up, &ez| *hx -= coeff_x * (ez_up - ez));

        let coeff_y = sim_params.delta_t / (self.mu * sim_params.delta_x);
        Zip::from(self.hy.slice_mut(s![..width - 1, ..]))
            .and(self.ez.slice(s![1.., ..]))
            .and(self.ez.slice(s![..width - 1, ..]))
            .for_each(|hy, &ez_right, &ez| *hy += coeff_y * (ez_right - ez));
    }

    /// Advances the interior of Ez from the curl of H.
    ///
    /// The outer ring of Ez is not touched here; the boundary pass owns it.
    #[inline]
    pub fn update_e(&mut self, sim_params: &SimulationParameters) {
        let (width, height) = self.ez.dim();
        if width < 2 || height < 2 {
            return;
        }

        let coeff = sim_params.delta_t / (self.epsilon * sim_params.delta_x);
        Zip::from(self.ez.slice_mut(s![1..width - 1, 1..height - 1]))
            .and(self.hy.slice(s![1..width - 1, 1..height - 1]))
            .and(self.hy.slice(s![..width - 2, 1..height - 1]))
            .and(self.hx.slice(s![1..width - 1, 1..height - 1]))
            .and(self.hx.slice(s![1..width - 1, ..height - 2]))
            .for_each(|ez, &hy, &hy_left, &hx, &hx_down| {
                *ez += coeff * ((hy - hy_left) - (hx - hx_down));
            });
    }

    /// Adds a source amplitude into Ez at the given cell.
    #[inline]
    pub fn inject(&mut self, x: usize, y: usize, amplitude: f64) {
        self.ez[[x, y]] += amplitude;
    }

    /// The Ez value at the given cell.
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> f64 {
        self.ez[[x, y]]
    }

    pub fn ez(&self) -> ArrayView2<'_, f64> {
        self.ez.view()
    }

    pub fn hx(&self) -> ArrayView2<'_, f64> {
        self.hx.view()
    }

    pub fn hy(&self) -> ArrayView2<'_, f64> {
        self.hy.view()
    }

    pub(crate) fn ez_mut(&mut self) -> &mut Array2<f64> {
        &mut self.ez
    }

    /// Reallocates all three field arrays zero-filled at the new shape.
    /// Prior field values are not preserved.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.ez = Array2::zeros((width, height));
        self.hx = Array2::zeros((width, height));
        self.hy = Array2::zeros((width, height));
    }

    /// Zeroes all three field arrays in place.
    pub fn clear(&mut self) {
        self.ez.fill(0.0);
        self.hx.fill(0.0);
        self.hy.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(delta: f64, delta_t: f64) -> SimulationParameters {
        SimulationParameters {
            delta_x: delta,
            delta_y: delta,
            delta_t,
        }
    }

    #[test]
    fn h_update_differences_ez_neighbours() {
        let mut grid = FieldGrid::new(3, 3, 1.0, 1.0);
        grid.ez[[1, 1]] = 1.0;

        let sim_params = params(1.0, 2.0);
        grid.update_h(&sim_params);

        let coeff = sim_params.delta_t / (grid.mu * sim_params.delta_y);
        assert_eq!(grid.hx[[1, 0]], -coeff);
        assert_eq!(grid.hx[[1, 1]], coeff);
        assert_eq!(grid.hy[[0, 1]], coeff);
        assert_eq!(grid.hy[[1, 1]], -coeff);

        // rows of Ez that are all zero contribute nothing
        assert_eq!(grid.hx[[0, 0]], 0.0);
        assert_eq!(grid.hy[[1, 0]], 0.0);
    }

    #[test]
    fn h_update_never_touches_trailing_slices() {
        let mut grid = FieldGrid::new(4, 5, 1.0, 1.0);
        for value in grid.ez.iter_mut() {
            *value = 1.5;
        }
        grid.ez[[2, 3]] = -4.0;

        grid.update_h(&params(1e-3, 1e-12));

        assert!(grid.hx.slice(s![.., 4]).iter().all(|&v| v == 0.0));
        assert!(grid.hy.slice(s![3, ..]).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn e_update_differences_h_neighbours() {
        let mut grid = FieldGrid::new(3, 3, 1.0, 1.0);
        grid.hy[[1, 1]] = 2.0;
        grid.hy[[0, 1]] = 0.5;
        grid.hx[[1, 1]] = 1.0;
        grid.hx[[1, 0]] = 3.0;

        let sim_params = params(1.0, 4.0);
        grid.update_e(&sim_params);

        let coeff = sim_params.delta_t / (grid.epsilon * sim_params.delta_x);
        assert_eq!(grid.ez[[1, 1]], coeff * ((2.0 - 0.5) - (1.0 - 3.0)));
    }

    #[test]
    fn e_update_leaves_outer_ring_untouched() {
        let mut grid = FieldGrid::new(5, 4, 1.0, 1.0);
        for value in grid.hx.iter_mut() {
            *value = 1.0;
        }
        for value in grid.hy.iter_mut() {
            *value = -2.0;
        }
        grid.hx[[2, 2]] = 7.0;
        grid.hy[[2, 1]] = 3.0;

        grid.update_e(&params(1e-3, 1e-12));

        assert!(grid.ez.row(0).iter().all(|&v| v == 0.0));
        assert!(grid.ez.row(4).iter().all(|&v| v == 0.0));
        assert!(grid.ez.column(0).iter().all(|&v| v == 0.0));
        assert!(grid.ez.column(3).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn e_update_on_degenerate_grid_is_a_no_op() {
        let mut grid = FieldGrid::new(1, 6, 1.0, 1.0);
        grid.update_e(&params(1e-3, 1e-12));
        assert!(grid.ez.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn resize_reallocates_zero_filled() {
        let mut grid = FieldGrid::new(3, 3, 1.0, 1.0);
        grid.ez[[1, 1]] = 5.0;
        grid.hx[[0, 0]] = 1.0;
        grid.hy[[2, 2]] = -1.0;

        grid.resize(6, 7);

        assert_eq!(grid.ez.dim(), (6, 7));
        assert_eq!(grid.hx.dim(), (6, 7));
        assert_eq!(grid.hy.dim(), (6, 7));
        assert!(grid.ez.iter().all(|&v| v == 0.0));
        assert!(grid.hx.iter().all(|&v| v == 0.0));
        assert!(grid.hy.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn clear_zeroes_in_place() {
        let mut grid = FieldGrid::new(3, 3, 1.0, 1.0);
        grid.ez[[1, 1]] = 5.0;
        grid.hx[[1, 2]] = 2.0;
        grid.hy[[2, 1]] = -3.0;

        grid.clear();

        assert_eq!(grid.ez.dim(), (3, 3));
        assert!(grid.ez.iter().all(|&v| v == 0.0));
        assert!(grid.hx.iter().all(|&v| v == 0.0));
        assert!(grid.hy.iter().all(|&v| v == 0.0));
    }
}
