use anyhow::{Context, Result, ensure};

use crate::surface::HeightQuery;

/// Regular grid of height samples, bilinearly interpolated.
///
/// Sample `(i, j)` sits at `(origin_x + i * cell_size, origin_z + j * cell_size)` and is stored
/// row-major in `heights[j * n_x + i]`. Columns outside the sampled footprint miss.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    origin: (f64, f64),
    cell_size: f64,
    resolution: (usize, usize),
    heights: Vec<f64>,
}

impl HeightField {
    pub fn new(
        origin: (f64, f64),
        cell_size: f64,
        resolution: (usize, usize),
        heights: Vec<f64>,
    ) -> Result<Self> {
        let (n_x, n_z) = resolution;
        ensure!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell size must be strictly positive, got {cell_size}"
        );
        ensure!(
            n_x >= 2 && n_z >= 2,
            "a height field needs at least 2x2 samples, got {n_x}x{n_z}"
        );
        let n_samples = n_x
            .checked_mul(n_z)
            .with_context(|| format!("a {n_x}x{n_z} grid has too many samples"))?;
        ensure!(
            heights.len() == n_samples,
            "expected {n_samples} height samples for a {n_x}x{n_z} grid, got {}",
            heights.len()
        );
        ensure!(
            heights.iter().all(|h| h.is_finite()),
            "height samples must be finite"
        );
        Ok(Self {
            origin,
            cell_size,
            resolution,
            heights,
        })
    }

    /// Samples `f` at every grid vertex
    pub fn from_fn(
        origin: (f64, f64),
        cell_size: f64,
        resolution: (usize, usize),
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self> {
        let (n_x, n_z) = resolution;
        let heights = (0..n_z)
            .flat_map(|j| (0..n_x).map(move |i| (i, j)))
            .map(|(i, j)| {
                f(
                    origin.0 + i as f64 * cell_size,
                    origin.1 + j as f64 * cell_size,
                )
            })
            .collect();
        Self::new(origin, cell_size, resolution, heights)
    }

    /// World-space extent: `(x_min, z_min, x_max, z_max)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (n_x, n_z) = self.resolution;
        (
            self.origin.0,
            self.origin.1,
            self.origin.0 + (n_x - 1) as f64 * self.cell_size,
            self.origin.1 + (n_z - 1) as f64 * self.cell_size,
        )
    }

    #[inline]
    fn sample(&self, i: usize, j: usize) -> f64 {
        self.heights[j * self.resolution.0 + i]
    }
}

impl HeightQuery for HeightField {
    fn query(&self, x: f64, z: f64) -> Option<f64> {
        let (n_x, n_z) = self.resolution;
        let u = (x - self.origin.0) / self.cell_size;
        let v = (z - self.origin.1) / self.cell_size;

        let (u_max, v_max) = ((n_x - 1) as f64, (n_z - 1) as f64);
        if !(0.0..=u_max).contains(&u) || !(0.0..=v_max).contains(&v) {
            return None;
        }

        //cell containing the column, the last row/column belongs to the cell before it
        let i0 = (u.floor() as usize).min(n_x - 2);
        let j0 = (v.floor() as usize).min(n_z - 2);
        let (du, dv) = (u - i0 as f64, v - j0 as f64);

        let s00 = self.sample(i0, j0);
        let s10 = self.sample(i0 + 1, j0);
        let s01 = self.sample(i0, j0 + 1);
        let s11 = self.sample(i0 + 1, j0 + 1);

        let a = s00 * (1.0 - du) + s10 * du;
        let b = s01 * (1.0 - du) + s11 * du;
        Some(a * (1.0 - dv) + b * dv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn ramp() -> HeightField {
        // rises one unit of height per unit of x
        HeightField::from_fn((0.0, 0.0), 1.0, (11, 11), |x, _z| x).unwrap()
    }

    #[test_case(0.0, 0.0, 0.0; "origin")]
    #[test_case(2.5, 7.0, 2.5; "between samples")]
    #[test_case(10.0, 10.0, 10.0; "far corner")]
    fn interpolates_a_ramp(x: f64, z: f64, expected: f64) {
        let h = ramp().query(x, z).unwrap();
        assert!(approx_eq!(f64, h, expected, epsilon = 1e-12));
    }

    #[test_case(-0.1, 5.0; "before x")]
    #[test_case(5.0, 10.1; "past z")]
    #[test_case(f64::NAN, 1.0; "nan column")]
    fn misses_outside_the_footprint(x: f64, z: f64) {
        assert_eq!(ramp().query(x, z), None);
    }

    #[test]
    fn bilinear_between_four_samples() {
        let hf = HeightField::new((0.0, 0.0), 2.0, (2, 2), vec![0.0, 2.0, 4.0, 6.0]).unwrap();
        // centre of the single cell is the mean of its corners
        assert!(approx_eq!(f64, hf.query(1.0, 1.0).unwrap(), 3.0, epsilon = 1e-12));
    }

    #[test]
    fn rejects_malformed_grids() {
        assert!(HeightField::new((0.0, 0.0), 1.0, (2, 2), vec![0.0; 3]).is_err());
        assert!(HeightField::new((0.0, 0.0), 0.0, (2, 2), vec![0.0; 4]).is_err());
        assert!(HeightField::new((0.0, 0.0), 1.0, (1, 5), vec![0.0; 5]).is_err());
        // the sample count overflows, wrapping would accept an empty grid
        assert!(HeightField::new((0.0, 0.0), 1.0, (usize::MAX / 2, 3), vec![]).is_err());
        assert!(HeightField::new((0.0, 0.0), 1.0, (usize::MAX, 2), vec![]).is_err());
    }
}
