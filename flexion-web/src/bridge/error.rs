//! Errors raised while decoding data handed over from JavaScript

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::joints::ConfigError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("Invalid keypoint data length: {0} (expected a multiple of 51)")]
    KeypointLength(usize),

    #[error("Invalid edge data length: {0} (expected a multiple of 3)")]
    EdgeLength(usize),

    #[error("Edge references pose {pose} but the frame has {poses} poses")]
    EdgePoseOutOfRange { pose: usize, poses: usize },

    #[error("Edge references keypoint {0} (expected < 17)")]
    EdgeKeypointOutOfRange(usize),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
