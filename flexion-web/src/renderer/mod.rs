//! Renderer module - draw data handed to the external renderer
//!
//! Re-exports only. All logic in submodules.

mod overlay;
mod panel;

pub use overlay::{AngleLabel, FrameOverlay, Renderer};
pub use panel::{format_maximum, panel_id, PanelText, EMPTY_MAXIMUM, SIDE_ELEMENT_ID};
