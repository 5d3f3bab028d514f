/// External (serializable) representations of fences and plans
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// All logic for drawing a [`FenceLayout`](crate::entities::FenceLayout) as a top-down SVG
pub mod svg;
