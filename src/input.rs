//! Pointer and touch input normalization
//!
//! Browser events arrive in display pixels relative to the viewport. The
//! simulation wants a y coordinate in field units, so samples are scaled by
//! `field_height / displayed_height` after removing the surface offset.
//! Only the most recent sample matters: each one overwrites the last.

use crate::sim::World;

/// Anything that can tell the simulation where the player wants the paddle
pub trait InputAdapter {
    /// Target y for the player paddle's center, in field coordinates
    fn current_player_target_y(&self) -> f32;
}

/// On-screen placement of the render surface (from `getBoundingClientRect`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub top: f32,
    pub height: f32,
}

/// A raw input sample in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSample {
    /// Mouse moved over the surface
    Mouse { client_y: f32 },
    /// Touch moved; `client_y` of the first active touch, if any
    Touch { client_y: Option<f32> },
}

impl PointerSample {
    fn client_y(&self) -> Option<f32> {
        match *self {
            PointerSample::Mouse { client_y } => Some(client_y),
            PointerSample::Touch { client_y } => client_y,
        }
    }
}

/// Latest pointer position, scaled into field coordinates
#[derive(Debug, Clone)]
pub struct PointerTracker {
    field_height: f32,
    latest_y: f32,
}

impl PointerTracker {
    /// Starts at the vertical center so the paddle stays put until the
    /// pointer first moves
    pub fn new(field_height: f32) -> Self {
        Self {
            field_height,
            latest_y: field_height / 2.0,
        }
    }

    /// Record a sample. Returns the new target, or `None` if the sample was
    /// ignored (no active touch, or a collapsed surface).
    pub fn on_sample(&mut self, sample: PointerSample, surface: SurfaceRect) -> Option<f32> {
        let client_y = sample.client_y()?;
        if surface.height <= 0.0 {
            log::debug!("Ignoring pointer sample on zero-height surface");
            return None;
        }

        let scale = self.field_height / surface.height;
        self.latest_y = (client_y - surface.top) * scale;
        Some(self.latest_y)
    }
}

impl InputAdapter for PointerTracker {
    fn current_player_target_y(&self) -> f32 {
        self.latest_y
    }
}

/// Hands-free player for attract mode: aims the paddle at the ball
#[derive(Debug, Clone, Copy)]
pub struct DemoPilot {
    target_y: f32,
}

impl DemoPilot {
    pub fn new(world: &World) -> Self {
        Self {
            target_y: world.ball.center_y(),
        }
    }

    /// Re-aim at the ball's current position
    pub fn observe(&mut self, world: &World) {
        self.target_y = world.ball.center_y();
    }
}

impl InputAdapter for DemoPilot {
    fn current_player_target_y(&self) -> f32 {
        self.target_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SURFACE: SurfaceRect = SurfaceRect {
        top: 100.0,
        height: 250.0,
    };

    #[test]
    fn test_starts_centered() {
        let tracker = PointerTracker::new(500.0);
        assert_eq!(tracker.current_player_target_y(), 250.0);
    }

    #[test]
    fn test_mouse_scaled_to_field() {
        // Canvas displayed at half size, 100px below the viewport top
        let mut tracker = PointerTracker::new(500.0);
        let y = tracker.on_sample(PointerSample::Mouse { client_y: 150.0 }, SURFACE);
        assert_eq!(y, Some(100.0));
        assert_eq!(tracker.current_player_target_y(), 100.0);
    }

    #[test]
    fn test_touch_uses_first_touch() {
        let mut tracker = PointerTracker::new(500.0);
        tracker.on_sample(
            PointerSample::Touch {
                client_y: Some(350.0),
            },
            SURFACE,
        );
        assert_eq!(tracker.current_player_target_y(), 500.0);
    }

    #[test]
    fn test_touch_without_touches_is_ignored() {
        let mut tracker = PointerTracker::new(500.0);
        tracker.on_sample(PointerSample::Mouse { client_y: 150.0 }, SURFACE);
        let y = tracker.on_sample(PointerSample::Touch { client_y: None }, SURFACE);
        assert_eq!(y, None);
        assert_eq!(tracker.current_player_target_y(), 100.0);
    }

    #[test]
    fn test_zero_height_surface_is_ignored() {
        let mut tracker = PointerTracker::new(500.0);
        let collapsed = SurfaceRect {
            top: 0.0,
            height: 0.0,
        };
        assert_eq!(
            tracker.on_sample(PointerSample::Mouse { client_y: 10.0 }, collapsed),
            None
        );
        assert_eq!(tracker.current_player_target_y(), 250.0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut tracker = PointerTracker::new(500.0);
        for client_y in [120.0, 300.0, 180.0] {
            tracker.on_sample(PointerSample::Mouse { client_y }, SURFACE);
        }
        assert_eq!(tracker.current_player_target_y(), 160.0);
    }

    #[test]
    fn test_out_of_surface_samples_pass_through() {
        // Clamping is the simulation's job
        let mut tracker = PointerTracker::new(500.0);
        tracker.on_sample(PointerSample::Mouse { client_y: 50.0 }, SURFACE);
        assert_eq!(tracker.current_player_target_y(), -100.0);
    }

    #[test]
    fn test_demo_pilot_follows_ball() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut world = World::new(GameConfig::default(), &mut rng);
        let mut pilot = DemoPilot::new(&world);
        assert_eq!(pilot.current_player_target_y(), 250.0);

        world.ball.pos.y = 93.0;
        pilot.observe(&world);
        assert_eq!(pilot.current_player_target_y(), 100.0);
    }
}
