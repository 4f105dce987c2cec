use ndarray::Array2;

/// Perfectly conducting cavity walls.
///
/// Realized by forcing the tangential electric field to zero along the four
/// domain edges after every E-update, unconditionally.
#[derive(Debug, Default, Clone, Copy)]
pub struct PecBoundary;

impl PecBoundary {
    /// Zeroes Ez on the outer ring of the grid.
    #[inline]
    pub fn apply(&self, ez: &mut Array2<f64>) {
        let (width, height) = ez.dim();

        ez.row_mut(0).fill(0.0);
        ez.row_mut(width - 1).fill(0.0);
        ez.column_mut(0).fill(0.0);
        ez.column_mut(height - 1).fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_ring_is_zeroed_interior_is_kept() {
        let mut ez = Array2::from_elem((4, 5), 1.0);
        PecBoundary.apply(&mut ez);

        for ((i, j), &value) in ez.indexed_iter() {
            if i == 0 || i == 3 || j == 0 || j == 4 {
                assert_eq!(value, 0.0);
            } else {
                assert_eq!(value, 1.0);
            }
        }
    }
}
