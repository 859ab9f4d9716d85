//! Display boundary
//!
//! The core never talks to a window, font, or event loop directly; it
//! drives whatever implements [`DisplaySurface`]. Hosts wrap their toolkit
//! of choice, tests use [`HeadlessSurface`].

use crate::court::Segment;
use glam::Vec2;

/// Text rendering hints for score numerals and the winner banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Score,
    Banner,
}

/// Regions of drawn text the core may ask to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRegion {
    Scores,
}

/// Everything the simulation needs from the host's render/windowing layer
pub trait DisplaySurface {
    /// Redraw all visible game objects from current state
    fn render_frame(&mut self);

    /// Remove previously drawn text in a region
    fn clear_text(&mut self, region: TextRegion);

    /// Draw text at a court position
    fn draw_text(&mut self, position: Vec2, content: &str, style: TextStyle);

    /// Draw one decorative line segment
    fn draw_segment(&mut self, segment: Segment);

    /// Block until the user dismisses a finished match
    fn await_dismissal(&mut self);
}

/// No-op surface that records draw calls; used by tests and headless runs
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub frames: u32,
    pub segments: Vec<Segment>,
    pub texts: Vec<(Vec2, String, TextStyle)>,
    pub clears: u32,
    pub dismissals: u32,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for HeadlessSurface {
    fn render_frame(&mut self) {
        self.frames += 1;
    }

    fn clear_text(&mut self, _region: TextRegion) {
        self.clears += 1;
    }

    fn draw_text(&mut self, position: Vec2, content: &str, style: TextStyle) {
        self.texts.push((position, content.to_owned(), style));
    }

    fn draw_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    fn await_dismissal(&mut self) {
        self.dismissals += 1;
    }
}
