mod orientation;
mod rotation;

/// Primitive geometric shapes: points, vectors and edges
pub mod primitives;

#[doc(inline)]
pub use orientation::HeadingReference;
#[doc(inline)]
pub use orientation::Orientation;
#[doc(inline)]
pub use rotation::Rotation;
