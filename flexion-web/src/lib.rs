//! Flexion Web - joint angle biofeedback over a live pose overlay
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macros
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

// Browser console on wasm32; compiled out natively so the crate stays testable.
macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($t)*);
    }};
}

macro_rules! console_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($t)*);
    }};
}

pub mod joints;
pub mod bridge;
pub mod renderer;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{update_poses, switch_sides};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Log readiness once the JS side has loaded the pose model
#[wasm_bindgen]
pub fn init() {
    let side = bridge::side_label();
    console_log!("✅ Angle engine ready, tracking {} side", side);
}
