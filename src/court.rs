use crate::config::Config;
use glam::Vec2;

/// A straight line segment, in court coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }
}

/// Dashed center line splitting the court halves
///
/// Purely decorative. The dash pattern never changes, so the segments are
/// generated once at setup and handed to the display surface as-is.
#[derive(Debug, Clone)]
pub struct CourtDivider {
    segments: Vec<Segment>,
}

impl CourtDivider {
    pub fn new(config: &Config) -> Self {
        let top = config.court_height / 2.0;
        let bottom = -top;

        let mut segments = Vec::new();
        let mut y = top;
        while y > bottom {
            let dash_end = (y - config.divider_dash).max(bottom);
            segments.push(Segment::new(Vec2::new(0.0, y), Vec2::new(0.0, dash_end)));
            y = dash_end - config.divider_gap;
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
