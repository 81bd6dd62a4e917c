//! Shader demo: the rotating square drawn through a custom shader pair.
//!
//! The vertex stage flips the Y coordinate after the world transform, so
//! the square appears mirrored below the center line; the fragment stage
//! fills it solid red. Shader compilation goes through a validation scope:
//! a failed compile is logged and the program keeps running, presenting
//! clear-only frames.
//!
//! Run with: cargo run -p pivot --example shader_square

use pivot::prelude::*;
use pivot_core::geometry::PhysicalSize;

/// Radians per second.
const ROTATION_SPEED: f32 = 0.5;

struct ShaderSquareApp {
    window: RenderableWindow,
    square: Shape,
    /// None when the shader failed to compile; the demo then clears only.
    renderer: Option<ShapeRenderer>,
    transform: Transform2D,
}

impl App for ShaderSquareApp {
    fn update(&mut self, _ctx: &mut AppCtx, time: &FrameTime) {
        self.transform.rotate(ROTATION_SPEED * time.delta_seconds());
    }

    fn render(&mut self, _ctx: &mut AppCtx, window_id: WindowId, events: &mut EventBatch) {
        if self.window.id() != window_id {
            return;
        }

        events.dispatch(|event| match event {
            Event::WindowResized(new_size) => {
                self.window.resized(*new_size);
                HandleStatus::consumed()
            }
            _ => HandleStatus::ignored(),
        });

        let mut frame = self.window.begin_drawing();

        let mut pass = RenderPassBuilder::new()
            .label("Shader Square Pass")
            .clear_color(Color::BLACK)
            .build(&mut frame);
        if let Some(renderer) = &self.renderer {
            renderer.draw(pass.descriptor(), &self.square, &self.transform);
        }
        pass.finish();

        frame.increment_draw_calls();
        frame.finish();
    }
}

fn main() {
    pivot::core::logging::init();

    run_app(|ctx| {
        let window = ctx
            .create_window(WindowDescriptor {
                title: "Shaders".to_string(),
                size: Some(PhysicalSize::new(800, 600)),
                ..Default::default()
            })
            .expect("Failed to create window");

        let graphics = GraphicsContext::new_sync();
        let window = RenderableWindow::new(window, graphics);

        let vertices = [
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
        ];
        let indices = [0, 1, 2, 3, 2, 1];

        let square =
            Shape::new(graphics, &vertices, &indices).expect("square geometry is valid");

        // A compile failure is already logged by compile_shader; keep
        // running without a pipeline so the window still clears.
        let renderer = match ShapeRenderer::new(graphics, window.format(), FLIP_Y_RED_SHADER) {
            Ok(renderer) => Some(renderer),
            Err(error) => {
                tracing::warn!("continuing without shape pipeline: {}", error);
                None
            }
        };

        let mut transform = Transform2D::new();
        transform.set_scale(0.25);
        transform.set_position(Vec2::new(0.25, 0.25));

        Box::new(ShaderSquareApp {
            window,
            square,
            renderer,
            transform,
        })
    });
}
