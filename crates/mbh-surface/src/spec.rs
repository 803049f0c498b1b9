//! Fixed presentation/interaction attributes of the rendering surface.
//!
//! The game runtime that draws to the surface lives outside this repo and
//! finds the canvas by the element id fixed here, so these values must never
//! drift between builds.

/// Element id assigned to the rendering surface. Style rules and the game
/// runtime target the canvas through this name.
pub const SURFACE_ID: &str = "canvas";

/// Tab-index sentinel: the surface accepts keyboard focus when focused
/// programmatically but is skipped by sequential Tab traversal.
pub const TAB_INDEX_PROGRAMMATIC_ONLY: i32 = -1;

/// Plain-data description of the attributes applied to the surface at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    /// Identifying element id.
    pub id: &'static str,
    /// Keyboard focus-order policy.
    pub tab_index: i32,
    /// Swallow the native context menu over the surface; right-click belongs
    /// to the game.
    pub suppress_context_menu: bool,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self {
            id: SURFACE_ID,
            tab_index: TAB_INDEX_PROGRAMMATIC_ONLY,
            suppress_context_menu: true,
        }
    }
}
