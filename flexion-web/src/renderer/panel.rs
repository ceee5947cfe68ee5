//! Side panel text - session maxima and the tracked side
//!
//! Each value is keyed by the id of the HTML element that shows it.

use crate::joints::{AngleKind, AngleSession, Side};

/// Element showing the tracked side
pub const SIDE_ELEMENT_ID: &str = "sideInstruction";

/// Shown while a maximum is still at its baseline
pub const EMPTY_MAXIMUM: &str = "-";

/// Element showing the maximum for `kind`
pub fn panel_id(kind: AngleKind) -> &'static str {
    match kind {
        AngleKind::KneeFlexion => "kneeFlexion",
        AngleKind::HipFlexion => "hipFlexion",
        AngleKind::Dorsiflexion => "shinAngle",
        AngleKind::TrunkLean => "trunkAngle",
    }
}

/// Integer text for a recorded maximum, or `-` if nothing was recorded
pub fn format_maximum(value: f64, baseline: f64) -> String {
    if value == baseline {
        EMPTY_MAXIMUM.to_string()
    } else {
        format!("{:.0}", value)
    }
}

/// Text content of the side panel
#[derive(Clone, Debug, PartialEq)]
pub struct PanelText {
    pub maxima: [String; 4],
    pub side: Side,
}

impl PanelText {
    pub fn from_session(session: &AngleSession) -> Self {
        let maxima = session.maxima();
        let baseline = session.config().baseline;
        Self {
            maxima: AngleKind::ALL.map(|kind| format_maximum(maxima.get(kind), baseline)),
            side: session.side(),
        }
    }

    pub fn maximum(&self, kind: AngleKind) -> &str {
        &self.maxima[kind as usize]
    }

    /// `element_id:text` lines, maxima first, side last
    pub fn to_lines(&self) -> String {
        let mut lines: Vec<String> = AngleKind::ALL
            .iter()
            .map(|&kind| format!("{}:{}", panel_id(kind), self.maximum(kind)))
            .collect();
        lines.push(format!("{}:{}", SIDE_ELEMENT_ID, self.side.label()));
        lines.join("\n")
    }
}
