mod height_field;

#[doc(inline)]
pub use height_field::HeightField;

/// Height of the surface a fence is drawn on.
///
/// Given a horizontal column (x, z), returns the height y of the surface at that column,
/// or `None` when the column misses the surface (e.g. off the edge of a mesh).
pub trait HeightQuery {
    fn query(&self, x: f64, z: f64) -> Option<f64>;
}

impl<F> HeightQuery for F
where
    F: Fn(f64, f64) -> Option<f64>,
{
    fn query(&self, x: f64, z: f64) -> Option<f64> {
        self(x, z)
    }
}

/// Horizontal plane at a constant height, never misses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatSurface {
    pub height: f64,
}

impl HeightQuery for FlatSurface {
    fn query(&self, _x: f64, _z: f64) -> Option<f64> {
        Some(self.height)
    }
}

/// Absent surface: every query misses, elements follow the straight edges between anchors.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct NoSurface;

impl HeightQuery for NoSurface {
    fn query(&self, _x: f64, _z: f64) -> Option<f64> {
        None
    }
}
