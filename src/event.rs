//! Input event types fed to the controllers.
//!
//! The crate does not own a window or subscribe to platform callbacks; the
//! application translates whatever its windowing layer produces into
//! [`InputEvent`] values and either calls
//! [`CameraControl::handle_event`](crate::control::CameraControl::handle_event)
//! directly or batches events through an [`InputQueue`] drained once per
//! frame. Both paths are synchronous: an event always takes effect before the
//! next frame's matrix read.

use crate::control::CameraControl;
use std::collections::VecDeque;

bitflags! {
    /// Modifier keys held while an input event was produced.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// A shift key.
        const SHIFT = 0b0001;
        /// A control key.
        const CONTROL = 0b0010;
        /// An alt key.
        const ALT = 0b0100;
        /// The logo (windows/command) key.
        const LOGO = 0b1000;
    }
}

/// The state change of a pointer button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The button was pressed.
    Press,
    /// The button was released.
    Release,
}

/// A pointer button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// The primary button.
    Left,
    /// The middle button or wheel click.
    Middle,
    /// The secondary button.
    Right,
}

/// An input event a controller can react to.
///
/// Cursor positions are in pixels with the origin at the top-left corner of
/// the viewport. Scroll offsets follow the platform's wheel-delta convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to the given position.
    CursorPos(f64, f64, Modifiers),
    /// The wheel scrolled by the given horizontal and vertical offsets.
    Scroll(f64, f64, Modifiers),
    /// A pointer button changed state.
    Button(PointerButton, Action, Modifiers),
    /// The viewport was resized to the given pixel size.
    ViewportSize(u32, u32),
}

/// A FIFO queue of input events.
///
/// Useful when the platform layer and the frame loop are not the same call
/// site: the platform pushes, the frame loop drains. Single-threaded, like
/// everything else in this crate.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    /// Creates an empty queue.
    pub fn new() -> InputQueue {
        InputQueue {
            events: VecDeque::new(),
        }
    }

    /// Appends an event to the back of the queue.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// The number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and returns the queued events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    /// Drains the queue into a controller, oldest event first.
    pub fn flush_into(&mut self, control: &mut dyn CameraControl) {
        for event in self.events.drain(..) {
            control.handle_event(&event);
        }
    }
}
