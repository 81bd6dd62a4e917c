use pivot_core::geometry::{LogicalPosition, PhysicalPosition, PhysicalSize};
pub use winit::event::WindowEvent as WinitEvent;

use std::collections::VecDeque;

/// Event queue with batching and deduplication
pub struct EventQueue {
    /// Pending events for this frame
    pending: VecDeque<Event>,

    /// High-priority events (processed first)
    priority: VecDeque<Event>,

    /// Deduplicated events (only last value kept)
    latest_mouse_pos: Option<LogicalPosition<f64>>,
    latest_scale_factor: Option<f64>,

    /// Statistics
    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            priority: VecDeque::with_capacity(8),
            latest_mouse_pos: None,
            latest_scale_factor: None,
            stats: EventStats::default(),
        }
    }

    /// Push event to queue (called from winit handler)
    pub fn push(&mut self, event: Event) {
        self.stats.events_received += 1;

        match event {
            // High priority - process immediately
            Event::CloseRequested | Event::WindowResized(_) | Event::Focused(_) => {
                self.priority.push_back(event);
            }

            // Deduplicate - only keep latest
            Event::MouseMoved(pos) => {
                self.latest_mouse_pos = Some(pos);
            }
            Event::ScaleFactorChanged(scale) => {
                self.latest_scale_factor = Some(scale);
            }

            // Normal priority
            _ => {
                self.pending.push_back(event);
            }
        }
    }

    /// Process all events and return batch
    pub fn drain(&mut self) -> EventBatch {
        let mut events = Vec::with_capacity(self.priority.len() + self.pending.len() + 2);

        // Priority events first
        events.extend(self.priority.drain(..));

        // Deduplicated events
        if let Some(pos) = self.latest_mouse_pos.take() {
            events.push(Event::MouseMoved(pos));
        }
        if let Some(scale) = self.latest_scale_factor.take() {
            events.push(Event::ScaleFactorChanged(scale));
        }

        // Regular events
        events.extend(self.pending.drain(..));

        self.stats.events_processed += events.len();
        self.stats.events_dropped = self.stats.events_received - self.stats.events_processed;

        EventBatch { events }
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Run `handler` over each event, removing the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub events_dropped: usize,
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Window moved to a new physical position.
    WindowMoved(PhysicalPosition<i32>),
    /// Window framebuffer resized to a new physical size.
    WindowResized(PhysicalSize<u32>),
    /// Scale factor changed.
    ScaleFactorChanged(f64),
    /// Window focus changed.
    Focused(bool),
    /// Window close requested.
    CloseRequested,
    /// Mouse cursor moved (logical coordinates).
    MouseMoved(LogicalPosition<f64>),
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

impl Event {
    pub(crate) fn from_winit(event: winit::event::WindowEvent, scale_factor: f64) -> Option<Self> {
        match event {
            WinitEvent::Moved(pos) => Some(Event::WindowMoved(pos.into())),
            WinitEvent::Resized(size) => Some(Event::WindowResized(size.into())),
            WinitEvent::ScaleFactorChanged {
                scale_factor,
                inner_size_writer: _,
            } => Some(Event::ScaleFactorChanged(scale_factor)),
            WinitEvent::Focused(focus) => Some(Event::Focused(focus)),
            WinitEvent::CloseRequested => Some(Event::CloseRequested),
            WinitEvent::CursorMoved {
                device_id: _,
                position,
            } => Some(Event::MouseMoved(LogicalPosition::new(
                position.x / scale_factor,
                position.y / scale_factor,
            ))),
            // The demos take no input beyond close/resize.
            WinitEvent::KeyboardInput { .. }
            | WinitEvent::MouseInput { .. }
            | WinitEvent::MouseWheel { .. }
            | WinitEvent::CursorEntered { .. }
            | WinitEvent::CursorLeft { .. }
            | WinitEvent::Ime(_)
            | WinitEvent::TouchpadPressure { .. }
            | WinitEvent::Destroyed => None,
            unknown => {
                tracing::trace!("unhandled window event: {:?}", unknown);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_and_resize_drain_first() {
        let mut queue = EventQueue::new();
        queue.push(Event::WindowMoved(PhysicalPosition::new(1, 2)));
        queue.push(Event::CloseRequested);
        queue.push(Event::WindowResized(PhysicalSize::new(800, 600)));

        let batch = queue.drain();
        let events: Vec<_> = batch.iter().collect();
        assert!(matches!(events[0], Event::CloseRequested));
        assert!(matches!(events[1], Event::WindowResized(_)));
        assert!(matches!(events[2], Event::WindowMoved(_)));
    }

    #[test]
    fn test_mouse_moves_deduplicate() {
        let mut queue = EventQueue::new();
        for i in 0..10 {
            queue.push(Event::MouseMoved(LogicalPosition::new(i as f64, 0.0)));
        }

        let batch = queue.drain();
        assert_eq!(batch.len(), 1);
        match batch.iter().next().unwrap() {
            Event::MouseMoved(pos) => assert_eq!(pos.x, 9.0),
            other => panic!("expected MouseMoved, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_removes_consumed_events() {
        let mut queue = EventQueue::new();
        queue.push(Event::CloseRequested);
        queue.push(Event::Focused(true));

        let mut batch = queue.drain();
        batch.dispatch(|event| match event {
            Event::CloseRequested => HandleStatus::consumed(),
            _ => HandleStatus::ignored(),
        });

        assert_eq!(batch.len(), 1);
        assert!(matches!(batch.iter().next().unwrap(), Event::Focused(true)));
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(Event::Focused(false));
        assert_eq!(queue.drain().len(), 1);
        assert!(queue.drain().is_empty());
        assert_eq!(queue.stats().events_received, 1);
    }
}
