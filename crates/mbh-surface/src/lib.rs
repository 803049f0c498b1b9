pub mod lifecycle;
pub mod spec;

pub use lifecycle::AttachOnce;
pub use spec::{SURFACE_ID, SurfaceSpec, TAB_INDEX_PROGRAMMATIC_ONLY};
