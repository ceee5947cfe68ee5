//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod keypoints;
mod session;

pub use error::BridgeError;

pub use keypoints::{
    decode_frame,
    tracked_indices,
    Pose,
    PoseFrame,
    SkeletonEdge,
    // Constants
    NOSE, LEFT_EYE, RIGHT_EYE, LEFT_EAR, RIGHT_EAR,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    KEYPOINT_COUNT, KEYPOINT_NAMES,
    VALUES_PER_KEYPOINT, VALUES_PER_POSE, VALUES_PER_EDGE,
};

pub use session::{
    // WASM entry points
    update_poses,
    switch_sides,
    reset_maxima,
    side_label,
    configure,
    get_marker_positions,
    get_skeleton_segments,
    get_angle_labels,
    get_panel_text,
    // Internal API
    ingest_frame,
    with_session,
    current_overlay,
    toggle_side,
    apply_config,
};
