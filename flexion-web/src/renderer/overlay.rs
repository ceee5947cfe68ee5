//! Frame overlay - everything the renderer draws for one video frame
//!
//! Markers and skeleton edges come from every detected pose. Angle labels
//! come from the session's last reading and are only shown while a pose
//! is in view.

use crate::bridge::PoseFrame;
use crate::joints::{round_half_up, AngleKind, AngleSession, Point2D};
use super::panel::PanelText;

/// A rounded angle value placed next to its keypoint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleLabel {
    pub kind: AngleKind,
    pub position: Point2D,
    pub degrees: f64,
}

impl AngleLabel {
    pub fn text(&self) -> String {
        format!("{:.0}°", self.degrees)
    }
}

/// Drawing surface implemented outside this crate
pub trait Renderer {
    fn draw_marker(&mut self, position: Point2D);
    fn draw_edge(&mut self, from: Point2D, to: Point2D);
    fn draw_label(&mut self, label: &AngleLabel);
    fn draw_panel(&mut self, panel: &PanelText);
}

/// Draw data for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOverlay {
    pub markers: Vec<Point2D>,
    pub edges: Vec<(Point2D, Point2D)>,
    pub labels: Vec<AngleLabel>,
    pub panel: PanelText,
}

/// Keypoints confident enough to draw, across all poses
fn build_markers(frame: &PoseFrame, min_confidence: f64) -> Vec<Point2D> {
    frame
        .poses
        .iter()
        .flat_map(|pose| pose.keypoints.iter())
        .filter(|kp| kp.confidence > min_confidence)
        .map(|kp| kp.position)
        .collect()
}

/// Angle labels for the last reading, offset from their anchor keypoints
fn build_labels(session: &AngleSession, frame: &PoseFrame) -> Vec<AngleLabel> {
    if frame.primary().is_none() {
        return Vec::new();
    }
    let Some(tracked) = session.last_frame() else {
        return Vec::new();
    };

    let (dx, dy) = session.config().label_offset;
    AngleKind::ALL
        .iter()
        .filter_map(|&kind| {
            let degrees = tracked.reading.get(kind);
            if !degrees.is_finite() {
                return None;
            }
            let anchor = tracked.keypoints.anchor(kind).position;
            Some(AngleLabel {
                kind,
                position: Point2D::new(anchor.x + dx, anchor.y + dy),
                degrees: round_half_up(degrees),
            })
        })
        .collect()
}

impl FrameOverlay {
    pub fn build(session: &AngleSession, frame: &PoseFrame) -> Self {
        Self {
            markers: build_markers(frame, session.config().marker_confidence),
            edges: frame.edge_segments().collect(),
            labels: build_labels(session, frame),
            panel: PanelText::from_session(session),
        }
    }

    /// Draw edges first so markers and labels sit on top
    pub fn render_to<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for &(from, to) in &self.edges {
            renderer.draw_edge(from, to);
        }
        for &marker in &self.markers {
            renderer.draw_marker(marker);
        }
        for label in &self.labels {
            renderer.draw_label(label);
        }
        renderer.draw_panel(&self.panel);
    }

    /// `[x, y]` per marker
    pub fn marker_buffer(&self) -> Vec<f64> {
        self.markers.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// `[x1, y1, x2, y2]` per edge
    pub fn edge_buffer(&self) -> Vec<f64> {
        self.edges
            .iter()
            .flat_map(|(a, b)| [a.x, a.y, b.x, b.y])
            .collect()
    }

    /// `[x, y, degrees]` per label, in knee, hip, ankle, shoulder order
    pub fn label_buffer(&self) -> Vec<f64> {
        self.labels
            .iter()
            .flat_map(|l| [l.position.x, l.position.y, l.degrees])
            .collect()
    }
}
