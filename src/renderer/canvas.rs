//! Canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCommand, Scene};

/// Replays scenes onto a `<canvas>` 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Returns `None` if the canvas refuses a 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    pub fn render(&self, scene: &Scene) {
        for command in &scene.commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::FillRect { rect, color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(
                        rect.pos.x as f64,
                        rect.pos.y as f64,
                        rect.size.x as f64,
                        rect.size.y as f64,
                    );
                }
                DrawCommand::StrokeSegments { segments, color } => {
                    self.ctx.set_stroke_style_str(color);
                    self.ctx.begin_path();
                    for (from, to) in segments {
                        self.ctx.move_to(from.x as f64, from.y as f64);
                        self.ctx.line_to(to.x as f64, to.y as f64);
                    }
                    self.ctx.stroke();
                }
            }
        }
    }
}
