//! One simulation step per rendered frame
//!
//! The step never fails and never performs I/O: it mutates the world and
//! reports what happened as a list of [`GameEvent`]s.

use rand::Rng;

use super::collision::{english, hits_left_paddle, hits_right_paddle, touches_horizontal_wall};
use super::state::{GameEvent, World};

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Pointer y in field coordinates; the player paddle centers on it
    pub player_target_y: f32,
}

/// Advance the world by one tick and return the events it produced
pub fn tick<R: Rng + ?Sized>(world: &mut World, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let height = world.height();
    let width = world.width();

    // Player paddle follows the pointer directly
    world.player.center_on(input.player_target_y, height);

    // Move ball
    world.ball.pos += world.ball.vel;

    // Top/bottom walls. No position correction: the ball may sit past the
    // wall for a frame.
    if touches_horizontal_wall(&world.ball.rect(), height) {
        world.ball.vel.y = -world.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Player paddle
    let paddle = world.player.rect();
    if hits_left_paddle(&world.ball.rect(), &paddle) {
        world.ball.pos.x = paddle.right();
        world.ball.vel.x = -world.ball.vel.x;
        world.ball.vel.y = english(&world.ball.rect(), &paddle, world.config.english_factor);
        events.push(GameEvent::PlayerHit);
    }

    // AI paddle. Checked independently of the player paddle: on a field
    // narrow enough for the ball to reach both, both fire in the same tick.
    let paddle = world.ai.rect();
    if hits_right_paddle(&world.ball.rect(), &paddle) {
        world.ball.pos.x = paddle.left() - world.ball.size;
        world.ball.vel.x = -world.ball.vel.x;
        world.ball.vel.y = english(&world.ball.rect(), &paddle, world.config.english_factor);
        events.push(GameEvent::AiHit);
    }

    // Scoring
    if world.ball.rect().left() < 0.0 {
        world.ai.score += 1;
        events.push(GameEvent::AiScored);
        log::info!("AI scores ({}-{})", world.player.score, world.ai.score);
        world.serve(1.0, rng);
    }
    if world.ball.rect().right() > width {
        world.player.score += 1;
        events.push(GameEvent::PlayerScored);
        log::info!("Player scores ({}-{})", world.player.score, world.ai.score);
        world.serve(-1.0, rng);
    }

    track_ball(world);

    events
}

/// Bang-bang follower with a dead zone the size of the ball
pub fn track_ball(world: &mut World) {
    let ai_center = world.ai.center_y();
    let ball = world.ball.rect();
    let step = world.config.ai_step();

    if ai_center < ball.top() {
        world.ai.pos.y += step;
    } else if ai_center > ball.bottom() {
        world.ai.pos.y -= step;
    }

    let height = world.height();
    world.ai.clamp_y(height);
}
