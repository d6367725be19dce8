//! Event types and sinks for observing packing runs.
//!
//! [`crate::packing::pack_with_events`] reports each committed or abandoned circle to an
//! [`EventSink`]. Sinks can filter by [`PackEventKind`] so that per-circle events cost nothing
//! when nobody listens.
use crossbeam_channel::Sender;

use crate::packing::{PackConfig, PackStats, PlacedCircle};

/// Describes events emitted by a packing run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PackEvent {
    /// Emitted before the first circle is tried.
    RunStarted {
        /// Buffer width in pixels.
        width: u32,
        /// Buffer height in pixels.
        height: u32,
        /// Number of radii in the pool.
        pool_len: usize,
        /// The configuration used.
        config: PackConfig,
    },

    /// Emitted when a circle is committed.
    CircleCommitted {
        /// Position of the circle in largest-first traversal order.
        order: usize,
        /// The committed circle.
        circle: PlacedCircle,
        /// Trials spent, including the successful one.
        trials: usize,
    },

    /// Emitted when a circle exhausted its trial budget.
    CircleSkipped {
        /// Position of the circle in largest-first traversal order.
        order: usize,
        /// Radius of the abandoned circle.
        radius: f32,
    },

    /// Emitted after the last circle was tried.
    RunFinished {
        /// Totals for the run.
        stats: PackStats,
    },
}

impl PackEvent {
    pub fn kind(&self) -> PackEventKind {
        match self {
            PackEvent::RunStarted { .. } => PackEventKind::RunStarted,
            PackEvent::CircleCommitted { .. } => PackEventKind::CircleCommitted,
            PackEvent::CircleSkipped { .. } => PackEventKind::CircleSkipped,
            PackEvent::RunFinished { .. } => PackEventKind::RunFinished,
        }
    }
}

/// Discriminant of [`PackEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackEventKind {
    RunStarted,
    CircleCommitted,
    CircleSkipped,
    RunFinished,
}

/// A generic event sink that accepts [`PackEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PackEvent);

    /// Returns `false` to let the engine skip building events of this kind.
    fn wants(&self, _kind: PackEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PackEvent) {}

    #[inline]
    fn wants(&self, _kind: PackEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PackEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PackEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PackEvent),
{
    #[inline]
    fn send(&mut self, event: PackEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PackEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PackEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PackEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PackEvent) {
        self.events.push(event);
    }
}

/// Forwards events over a channel, typically from the worker thread back to the caller.
///
/// Per-circle events are only forwarded when `per_circle` is set.
pub struct ChannelSink {
    pub tx: Sender<PackEvent>,
    pub per_circle: bool,
}

impl ChannelSink {
    pub fn new(tx: Sender<PackEvent>) -> Self {
        Self {
            tx,
            per_circle: false,
        }
    }

    pub fn with_per_circle(mut self, per_circle: bool) -> Self {
        self.per_circle = per_circle;
        self
    }
}

impl EventSink for ChannelSink {
    #[inline]
    fn send(&mut self, event: PackEvent) {
        // The listener may have gone away; the run itself does not depend on it.
        let _ = self.tx.send(event);
    }

    fn wants(&self, kind: PackEventKind) -> bool {
        match kind {
            PackEventKind::RunStarted | PackEventKind::RunFinished => true,
            PackEventKind::CircleCommitted | PackEventKind::CircleSkipped => self.per_circle,
        }
    }
}
