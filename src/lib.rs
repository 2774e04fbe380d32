//! Documentation search for the vinedocs portal: an in-memory ranked index
//! over the fixed page set, a persisted "recently viewed" list, the search
//! surface state machine, and the in-page term-highlighting pass.

pub mod cli;
pub mod error;
pub mod highlight;
pub mod nav;
pub mod recent;
pub mod record;
pub mod route;
pub mod search;
pub mod surface;
pub mod tracing;

pub use record::{PageIndex, PageRecord};
pub use search::{SearchEngine, SearchHit};
pub use surface::{SearchSurface, SurfaceEffect, SurfaceEvent, SurfaceState};
