mod element;
mod instance;
mod layout;
mod placement;
mod polyline;

#[doc(inline)]
pub use element::ElementSpec;
#[doc(inline)]
pub use instance::FenceInstance;
#[doc(inline)]
pub use layout::EdgeSummary;
#[doc(inline)]
pub use layout::FenceLayout;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use polyline::MIN_PLANNABLE_POINTS;
#[doc(inline)]
pub use polyline::Polyline;
