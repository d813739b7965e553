//! Headless surface that records draw calls
//!
//! Used by the native demo and by tests that assert on what was painted.

use glam::Vec2;
use serde::Serialize;

use super::surface::{DrawSurface, Rgba};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    Segments {
        segments: Vec<(Vec2, Vec2)>,
        width: f32,
        color: Rgba,
    },
    RadialDisc {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

/// In-memory draw call log
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log, leaving it empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of radial discs drawn (stars, trail glows, heads)
    pub fn disc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::RadialDisc { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Segments {
            segments: segments.to_vec(),
            width,
            color,
        });
    }

    fn fill_radial_disc(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.commands.push(DrawCommand::RadialDisc {
            center,
            radius,
            inner,
            outer,
        });
    }
}
