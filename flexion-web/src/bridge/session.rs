//! Session storage and JS entry points
//!
//! Receives PoseNet results from JavaScript, feeds the primary pose to the
//! angle engine and keeps the frame around for the render loop to read.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::joints::{AngleConfig, AngleReading, AngleSession, Side};
use crate::renderer::FrameOverlay;
use super::error::BridgeError;
use super::keypoints::{decode_frame, PoseFrame};

/// Engine state plus the latest frame from the keypoint source
#[derive(Default)]
struct SessionStore {
    session: AngleSession,
    frame: PoseFrame,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SessionStore> = RefCell::new(SessionStore::default());
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Decode one frame and run the engine on its first pose.
///
/// A malformed frame is rejected without touching the session. A frame
/// with no poses replaces the drawn skeleton but keeps the last reading.
pub fn ingest_frame(
    keypoints: &[f64],
    edges: &[u32],
) -> Result<Option<AngleReading>, BridgeError> {
    let frame = decode_frame(keypoints, edges)?;

    SESSION.with(|cell| {
        let mut store = cell.borrow_mut();
        let reading = frame.primary().map(|pose| {
            let leg = pose.leg(store.session.side());
            store.session.process(leg)
        });
        store.frame = frame;
        Ok(reading)
    })
}

/// Read the current session
pub fn with_session<R>(f: impl FnOnce(&AngleSession) -> R) -> R {
    SESSION.with(|cell| f(&cell.borrow().session))
}

/// Overlay for the latest frame
pub fn current_overlay() -> FrameOverlay {
    SESSION.with(|cell| {
        let store = cell.borrow();
        FrameOverlay::build(&store.session, &store.frame)
    })
}

/// Toggle the tracked side, resetting the maxima
pub fn toggle_side() -> Side {
    SESSION.with(|cell| cell.borrow_mut().session.switch_side())
}

/// Replace the engine gates
pub fn apply_config(
    confidence_threshold: f64,
    angle_floor: f64,
) -> Result<AngleConfig, BridgeError> {
    let config = AngleConfig::with_gates(confidence_threshold, angle_floor)?;
    SESSION.with(|cell| cell.borrow_mut().session.set_config(config))?;
    Ok(config)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from the PoseNet `pose` event with flat typed arrays:
/// `Float64Array` of 51 values per pose (17 keypoints × x, y, score) and
/// `Uint32Array` of skeleton edges as (pose, keypoint, keypoint) triples
#[wasm_bindgen]
pub fn update_poses(keypoints: &[f64], edges: &[u32]) -> Result<(), JsValue> {
    match ingest_frame(keypoints, edges) {
        Ok(_) => Ok(()),
        Err(err) => {
            console_warn!("Rejected pose frame: {}", err);
            Err(err.into())
        }
    }
}

/// "Switch Sides" button. Returns the new side label.
#[wasm_bindgen]
pub fn switch_sides() -> String {
    let side = toggle_side();
    console_log!("Tracking {} side, maxima reset", side);
    side.label().to_string()
}

/// Reset the four maxima without changing side
#[wasm_bindgen]
pub fn reset_maxima() {
    SESSION.with(|cell| cell.borrow_mut().session.reset_maxima());
}

/// "left" or "right"
#[wasm_bindgen]
pub fn side_label() -> String {
    with_session(|session| session.side().label().to_string())
}

/// Override the confidence threshold and the noise floor. Resets the maxima.
#[wasm_bindgen]
pub fn configure(confidence_threshold: f64, angle_floor: f64) -> Result<(), JsValue> {
    let config = apply_config(confidence_threshold, angle_floor).map_err(|err| {
        console_warn!("Rejected configuration: {}", err);
        JsValue::from(err)
    })?;
    console_log!(
        "Angle engine configured: confidence > {}, floor > {}°",
        config.confidence_threshold,
        config.angle_floor
    );
    Ok(())
}

/// `[x, y]` per keypoint marker
#[wasm_bindgen]
pub fn get_marker_positions() -> Vec<f64> {
    current_overlay().marker_buffer()
}

/// `[x1, y1, x2, y2]` per skeleton edge
#[wasm_bindgen]
pub fn get_skeleton_segments() -> Vec<f64> {
    current_overlay().edge_buffer()
}

/// `[x, y, degrees]` per angle label
#[wasm_bindgen]
pub fn get_angle_labels() -> Vec<f64> {
    current_overlay().label_buffer()
}

/// `element_id:text` lines for the side panel (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_panel_text() -> String {
    current_overlay().panel.to_lines()
}
