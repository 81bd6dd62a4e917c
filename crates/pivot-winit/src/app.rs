use std::collections::HashMap;
pub use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use pivot_core::profiling;

use crate::{
    event::{Event, EventBatch, EventQueue, HandleStatus},
    time::{FrameTime, TimeTracker},
    window::{Window, WindowDescriptor},
};

struct WindowResources {
    events: EventQueue,
    scale_factor: f64,
}

pub struct AppCtx<'a> {
    event_loop: &'a ActiveEventLoop,
    windows: &'a mut HashMap<WindowId, WindowResources>,
}

impl AppCtx<'_> {
    pub fn create_window(&mut self, descriptor: WindowDescriptor) -> Result<Window, OsError> {
        let window = Window::new(self.event_loop, descriptor)?;

        self.windows.insert(
            window.id(),
            WindowResources {
                events: EventQueue::new(),
                scale_factor: window.scale_factor_f64(),
            },
        );

        Ok(window)
    }

    pub fn exit(&self) {
        self.event_loop.exit();
    }
}

pub trait App {
    /// Called once when the app starts, before the first update.
    #[allow(unused_variables)]
    fn on_start(&mut self, ctx: &mut AppCtx) {}

    /// Called once per frame for global logic (advancing the transform, etc.)
    ///
    /// Frame-independent movement should use `time.delta_seconds()`.
    #[allow(unused_variables)]
    fn update(&mut self, ctx: &mut AppCtx, time: &FrameTime) {}

    /// Called once per window that needs rendering, with window-specific events.
    fn render(&mut self, ctx: &mut AppCtx, window_id: WindowId, events: &mut EventBatch);

    /// Called when the app is about to exit.
    #[allow(unused_variables)]
    fn on_exit(&mut self, ctx: &mut AppCtx) {}
}

pub type AppFactory = fn(ctx: &mut AppCtx) -> Box<dyn App>;

struct AppProxy {
    factory: AppFactory,
    app: Option<Box<dyn App>>,
    update_called_this_frame: bool,
    windows: HashMap<WindowId, WindowResources>,
    time_tracker: TimeTracker,
}

impl winit::application::ApplicationHandler for AppProxy {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            let mut ctx = AppCtx {
                event_loop,
                windows: &mut self.windows,
            };
            let mut app = (self.factory)(&mut ctx);
            app.on_start(&mut ctx);
            self.app = Some(app);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Next redraw starts a new frame
        self.update_called_this_frame = false;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        use winit::event::WindowEvent;

        if self.app.is_none() {
            return;
        }

        let mut ctx = AppCtx {
            event_loop,
            windows: &mut self.windows,
        };

        match event {
            WindowEvent::RedrawRequested => {
                let app = self.app.as_mut().unwrap();

                // Call update() once per frame on first redraw
                if !self.update_called_this_frame {
                    profiling::new_frame();
                    let frame_time = self.time_tracker.tick();
                    app.update(&mut ctx, &frame_time);
                    self.update_called_this_frame = true;
                }

                let Some(window) = ctx.windows.get_mut(&window_id) else {
                    return;
                };
                let mut events = window.events.drain();

                app.render(&mut ctx, window_id, &mut events);

                // Default event handling
                events.dispatch(|event| match event {
                    Event::CloseRequested => {
                        tracing::info!("Close requested for window {:?}", window_id);

                        if let Some(app) = self.app.as_mut() {
                            app.on_exit(&mut ctx);
                        }

                        ctx.event_loop.exit();
                        HandleStatus::consumed()
                    }
                    _ => HandleStatus::ignored(),
                });
            }
            event => {
                let Some(window) = self.windows.get_mut(&window_id) else {
                    return;
                };
                if let WindowEvent::ScaleFactorChanged { scale_factor, .. } = event {
                    window.scale_factor = scale_factor;
                }
                if let Some(event) = Event::from_winit(event, window.scale_factor) {
                    window.events.push(event);
                }
            }
        }
    }
}

/// Run the application with the given factory function.
pub fn run_app(factory: AppFactory) {
    use winit::event_loop::{ControlFlow, EventLoop};
    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app_proxy = AppProxy {
        factory,
        app: None,
        update_called_this_frame: false,
        windows: HashMap::new(),
        time_tracker: TimeTracker::new(),
    };
    event_loop
        .run_app(&mut app_proxy)
        .expect("failed to run app");
}
