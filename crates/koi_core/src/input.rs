//! Pointer and resize input
//!
//! Notifications never touch the chain. They are recorded as pending input
//! through an [`InputHandle`] and the frame loop takes the whole pending
//! value at the start of the next frame, so a solver pass always sees a
//! complete target.

use std::sync::{Arc, Mutex, MutexGuard};

use koi_paint::Point;
use serde::{Deserialize, Serialize};

use crate::chain::Dot;

/// Input notifications from the host
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    Resize { width: u32, height: u32 },
}

/// Size of the drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Keeps the desired head position; the head size never changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetTracker {
    root: Dot,
}

impl TargetTracker {
    pub fn new(root: Dot) -> Self {
        Self { root }
    }

    /// The dot the solver snaps the head to
    pub fn target(&self) -> Dot {
        self.root
    }

    /// Move the target to the pointer, keeping its size.
    ///
    /// Returns `false` and leaves the target alone for non-finite
    /// coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "ignoring non-finite pointer position");
            return false;
        }
        self.root = Dot::new(x, y, self.root.size);
        true
    }
}

/// Input recorded since the last frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingInput {
    /// Latest pointer position; earlier moves in the same frame are dropped
    pub pointer: Option<Point>,
    pub surface: Option<Surface>,
}

impl PendingInput {
    pub fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.surface.is_none()
    }

    /// Record `event`. A non-finite pointer position is dropped so it never
    /// replaces an earlier valid move.
    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                let pointer = Point::new(x, y);
                if pointer.is_finite() {
                    self.pointer = Some(pointer);
                } else {
                    tracing::warn!(x, y, "dropping non-finite pointer event");
                }
            }
            InputEvent::Resize { width, height } => {
                self.surface = Some(Surface::new(width, height))
            }
        }
    }
}

/// Cloneable sender for input notifications, safe to use from any thread
#[derive(Clone, Debug, Default)]
pub struct InputHandle {
    pending: Arc<Mutex<PendingInput>>,
}

impl InputHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&self, event: InputEvent) {
        self.lock().record(event);
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.send(InputEvent::PointerMove { x, y });
    }

    pub fn resized(&self, width: u32, height: u32) {
        self.send(InputEvent::Resize { width, height });
    }

    /// Take everything recorded so far, leaving nothing pending
    pub fn take(&self) -> PendingInput {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, PendingInput> {
        // A panicked sender cannot leave PendingInput half-written
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
