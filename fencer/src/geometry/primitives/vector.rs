use std::ops::{Add, Mul, Neg, Sub};

/// Displacement in world space, same axis convention as [`Point`](crate::geometry::primitives::Point).
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Vector(pub f64, pub f64, pub f64);

impl Vector {
    pub const ZERO: Vector = Vector(0.0, 0.0, 0.0);
    pub const X: Vector = Vector(1.0, 0.0, 0.0);
    /// The vertical (up) axis
    pub const UP: Vector = Vector(0.0, 1.0, 0.0);

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector(
            self.1 * other.2 - self.2 * other.1,
            self.2 * other.0 - self.0 * other.2,
            self.0 * other.1 - self.1 * other.0,
        )
    }

    /// Unit vector in the same direction, `None` for a zero-length vector
    pub fn normalize(&self) -> Option<Vector> {
        let l = self.length();
        match l > 0.0 && l.is_finite() {
            true => Some(*self * (1.0 / l)),
            false => None,
        }
    }

    /// Projection onto the horizontal plane (height component dropped)
    pub fn horizontal(&self) -> Vector {
        Vector(self.0, 0.0, self.2)
    }

    pub fn horizontal_length(&self) -> f64 {
        (self.0.powi(2) + self.2.powi(2)).sqrt()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, o: Vector) -> Vector {
        Vector(self.0 + o.0, self.1 + o.1, self.2 + o.2)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, o: Vector) -> Vector {
        Vector(self.0 - o.0, self.1 - o.1, self.2 - o.2)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, s: f64) -> Vector {
        Vector(self.0 * s, self.1 * s, self.2 * s)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0, -self.1, -self.2)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.0, v.1, v.2]
    }
}
