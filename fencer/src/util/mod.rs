/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::PlannerConfig;
#[doc(inline)]
pub use config::SessionConfig;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::FPA_TOLERANCE;
