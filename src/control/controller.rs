use crate::event::InputEvent;
use glamx::{Pose3, Rot3, Vec3};

/// Trait that all camera interaction controllers must implement.
///
/// Controllers turn pointer and wheel input into transforms the application
/// uploads each frame. This trait defines the seam between the application
/// shell (which owns the window, the projection and the render loop) and any
/// concrete controller.
///
/// # Implementations
/// Two controllers are built in:
/// - [`Arcball`](crate::control::Arcball) - virtual-sphere rotation and zoom,
///   with matrix flavors for both camera-steering and object-steering modes
/// - [`Orbit`](crate::control::Orbit) - yaw/pitch/distance orbit around a
///   focus point
///
/// # Custom controllers
/// Implement this trait to plug custom interaction behaviors into the same
/// application shell.
pub trait CameraControl {
    /// Handles an input event to update controller state.
    ///
    /// All state mutation is synchronous; an event handled here is reflected
    /// by the next call to [`view_transform`](Self::view_transform).
    ///
    /// # Arguments
    /// * `event` - The input event to handle
    fn handle_event(&mut self, event: &InputEvent);

    /// Returns the controller's eye position in world space.
    fn eye(&self) -> Vec3;

    /// Returns the view transformation (world to camera space).
    fn view_transform(&self) -> Pose3;

    /// Returns the rotation this controller applies to the object itself.
    ///
    /// Controllers that only steer the camera return the identity. The
    /// caller decides per frame which of the two transform flavors to apply;
    /// see [`FrameTransforms`](crate::control::FrameTransforms).
    #[inline]
    fn model_transform(&self) -> Rot3 {
        Rot3::IDENTITY
    }

    /// Restores the controller to its construction-time state, discarding
    /// any gesture in progress.
    fn reset(&mut self);
}
