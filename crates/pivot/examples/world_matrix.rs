//! World matrix demo: a square drawn with a transform composed from
//! position, rotation, and scale.
//!
//! The square starts at quarter size, offset toward the upper right, and
//! spins a little more every frame. Close the window to exit.
//!
//! Run with: cargo run -p pivot --example world_matrix

use pivot::prelude::*;
use pivot_core::geometry::PhysicalSize;

/// Radians per second.
const ROTATION_SPEED: f32 = 0.5;

struct WorldMatrixApp {
    window: RenderableWindow,
    square: Shape,
    renderer: ShapeRenderer,
    transform: Transform2D,
}

impl App for WorldMatrixApp {
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
            .label("World Matrix Pass")
            .clear_color(Color::BLACK)
            .build(&mut frame);
        self.renderer
            .draw(pass.descriptor(), &self.square, &self.transform);
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
                title: "Transform Class".to_string(),
                size: Some(PhysicalSize::new(800, 600)),
                ..Default::default()
            })
            .expect("Failed to create window");

        let graphics = GraphicsContext::new_sync();
        let window = RenderableWindow::new(window, graphics);

        // Square corners, wound as two triangles:
        // [0]------[1]
        //  |        |
        // [2]------[3]
        let vertices = [
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
        ];
        let indices = [0, 1, 2, 3, 2, 1];

        let square =
            Shape::new(graphics, &vertices, &indices).expect("square geometry is valid");

        let renderer = ShapeRenderer::new(graphics, window.format(), WHITE_SHADER)
            .expect("built-in shader compiles");

        let mut transform = Transform2D::new();
        transform.set_scale(0.25);
        transform.set_position(Vec2::new(0.25, 0.25));

        Box::new(WorldMatrixApp {
            window,
            square,
            renderer,
            transform,
        })
    });
}
