//! Draw list for one frame
//!
//! Built from the world without touching any graphics API, so what gets
//! drawn can be checked in tests. A backend (see `canvas`) replays it.

use glam::Vec2;

use crate::consts::{NET_DASH, NET_PERIOD};
use crate::sim::{Rect, World};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const PADDLE: &str = "#fff";
    pub const BALL: &str = "#ffea00";
    pub const NET: &str = "#444";
}

/// A single drawing primitive, in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: &'static str },
    /// Stroke a set of disjoint segments as one path
    StrokeSegments {
        segments: Vec<(Vec2, Vec2)>,
        color: &'static str,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Background, net, paddles, then ball on top
    pub fn from_world(world: &World) -> Self {
        let (width, height) = (world.width(), world.height());
        let commands = vec![
            DrawCommand::Clear { width, height },
            DrawCommand::StrokeSegments {
                segments: net_segments(width, height),
                color: colors::NET,
            },
            DrawCommand::FillRect {
                rect: world.player.rect(),
                color: colors::PADDLE,
            },
            DrawCommand::FillRect {
                rect: world.ai.rect(),
                color: colors::PADDLE,
            },
            DrawCommand::FillRect {
                rect: world.ball.rect(),
                color: colors::BALL,
            },
        ];
        Self { commands }
    }
}

/// Dashed vertical divider down the middle of the field
pub fn net_segments(width: f32, height: f32) -> Vec<(Vec2, Vec2)> {
    let x = width / 2.0;
    let mut segments = Vec::with_capacity((height / NET_PERIOD).ceil() as usize);
    let mut y = 0.0;
    while y < height {
        segments.push((Vec2::new(x, y), Vec2::new(x, y + NET_DASH)));
        y += NET_PERIOD;
    }
    segments
}
