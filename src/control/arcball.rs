use crate::control::CameraControl;
use crate::error::ControlError;
use crate::event::{Action, InputEvent, PointerButton};
use glamx::{Pose3, Rot3, Vec2, Vec3};
use log::{debug, trace};

/// Sensitivities and distance limits of an [`Arcball`] controller.
///
/// Fixed at construction; the controller never mutates it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcballConfig {
    /// Scale applied to the great-circle angle of a drag.
    ///
    /// The default value is 2.0.
    pub rotation_sensitivity: f32,
    /// Distance change per wheel-delta unit.
    ///
    /// The default value is 0.0005.
    pub zoom_sensitivity: f32,
    /// Smallest reachable camera distance. Must be strictly positive.
    ///
    /// The default value is 0.1.
    pub min_distance: f32,
    /// Largest reachable camera distance.
    ///
    /// The default value is 100.0.
    pub max_distance: f32,
}

impl Default for ArcballConfig {
    fn default() -> Self {
        ArcballConfig {
            rotation_sensitivity: 2.0,
            zoom_sensitivity: 0.0005,
            min_distance: 0.1,
            max_distance: 100.0,
        }
    }
}

/// Ephemeral state of a drag gesture. Created on pointer-down, discarded on
/// pointer-up.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Drag {
    /// Start position, clamped to the viewport.
    start: Vec2,
    /// Orientation snapshot taken at pointer-down.
    base: Rot3,
}

/// Arcball controller.
///
/// Maps 2D pointer drags to 3D rotations by projecting the drag start and
/// current positions onto a virtual sphere centered in the viewport and
/// rotating along the great circle between them, and maps wheel input to a
/// clamped camera-distance change.
///
/// The controller is mode-agnostic: it exposes both a camera-steering view
/// transform ([`view_transform`](CameraControl::view_transform)) and an
/// object-steering pair ([`model_transform`](CameraControl::model_transform) +
/// [`fixed_view_transform`](Arcball::fixed_view_transform)); which pair the
/// application applies each frame is its own decision. See
/// [`FrameTransforms`](crate::control::FrameTransforms) for the usual
/// dispatch.
///
/// # Default Controls
/// When driven through [`handle_event`](CameraControl::handle_event):
/// - **Left pointer button + drag**: rotate
/// - **Wheel**: change the camera distance
///
/// # Example
/// ```
/// use gimbal::prelude::*;
///
/// # fn main() -> Result<(), ControlError> {
/// let mut arcball = Arcball::new(3.0)?;
/// arcball.begin_drag(350.0, 350.0);
/// arcball.continue_drag(420.0, 350.0);
/// arcball.end_drag();
/// let view = arcball.view_transform().to_mat4();
/// # let _ = view;
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arcball {
    orientation: Rot3,
    distance: f32,
    initial_distance: f32,
    config: ArcballConfig,
    viewport: Vec2,
    drag: Option<Drag>,
    drag_button: Option<PointerButton>,
    last_cursor_pos: Vec2,
}

impl Arcball {
    /// Creates an arcball controller with the default configuration.
    ///
    /// # Errors
    /// Returns [`ControlError::NonPositiveDistance`] if `distance` is not
    /// strictly positive and finite.
    pub fn new(distance: f32) -> Result<Arcball, ControlError> {
        Arcball::with_config(distance, ArcballConfig::default())
    }

    /// Creates an arcball controller with an explicit configuration.
    ///
    /// The initial distance is clamped to the configured range and becomes
    /// the value [`reset`](CameraControl::reset) restores. The viewport
    /// reference size starts at 800x600; callers with a different canvas
    /// should call [`set_viewport_size`](Arcball::set_viewport_size) before
    /// the first drag (resize events keep it current afterwards).
    ///
    /// # Errors
    /// Returns [`ControlError::NonPositiveDistance`] if `distance` is not
    /// strictly positive and finite, and
    /// [`ControlError::InvalidDistanceBounds`] if the configured range is
    /// empty or not strictly positive.
    pub fn with_config(distance: f32, config: ArcballConfig) -> Result<Arcball, ControlError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ControlError::NonPositiveDistance { distance });
        }
        if !config.min_distance.is_finite()
            || !config.max_distance.is_finite()
            || config.min_distance <= 0.0
            || config.max_distance < config.min_distance
        {
            return Err(ControlError::InvalidDistanceBounds {
                min: config.min_distance,
                max: config.max_distance,
            });
        }

        let distance = distance.clamp(config.min_distance, config.max_distance);

        Ok(Arcball {
            orientation: Rot3::IDENTITY,
            distance,
            initial_distance: distance,
            config,
            viewport: Vec2::new(800.0, 600.0),
            drag: None,
            drag_button: Some(PointerButton::Left),
            last_cursor_pos: Vec2::ZERO,
        })
    }

    /// Opens a drag session at the given pointer position.
    ///
    /// Records the (clamped) start position and a snapshot of the current
    /// orientation. An already-open session is replaced.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        let start = self.clamp_to_viewport(Vec2::new(x, y));
        trace!("arcball drag begins at ({}, {})", start.x, start.y);
        self.drag = Some(Drag {
            start,
            base: self.orientation,
        });
    }

    /// Rotates toward the given pointer position while a drag session is
    /// open.
    ///
    /// The rotation is recomputed from the session's start position each
    /// time, so the gesture is stateless between moves: dragging back to the
    /// start position restores the snapshot orientation exactly. No-op when
    /// no session is open.
    pub fn continue_drag(&mut self, x: f32, y: f32) {
        if let Some(drag) = self.drag {
            let pos = self.clamp_to_viewport(Vec2::new(x, y));
            let from = self.to_sphere(drag.start);
            let to = self.to_sphere(pos);
            self.orientation = (self.sphere_arc(from, to) * drag.base).normalize();
        }
    }

    /// Closes the drag session; the current orientation becomes the new
    /// persistent baseline. No-op when no session is open.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            trace!("arcball drag ends");
        }
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Adjusts the camera distance by `delta` scaled by the zoom
    /// sensitivity.
    ///
    /// Saturates at the configured bounds, so the distance never reaches
    /// zero and never exceeds the maximum. Non-finite deltas are ignored.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.distance = (self.distance + delta * self.config.zoom_sensitivity)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// The current camera distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The configuration this controller was constructed with.
    pub fn config(&self) -> &ArcballConfig {
        &self.config
    }

    /// The viewport reference size used for the sphere projection.
    pub fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    /// Sets the viewport reference size. Also updated by
    /// [`InputEvent::ViewportSize`] events.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
        }
    }

    /// The button used to drag the arcball.
    pub fn drag_button(&self) -> Option<PointerButton> {
        self.drag_button
    }

    /// Set the button used to drag the arcball.
    /// Use None to disable dragging.
    pub fn rebind_drag_button(&mut self, new_button: Option<PointerButton>) {
        self.drag_button = new_button;
    }

    /// OBJECT-mode companion view transform: the eye stays at the
    /// construction-time distance on the view axis with no rotation, so the
    /// model transform alone carries the gesture.
    pub fn fixed_view_transform(&self) -> Pose3 {
        Pose3::look_at_rh(
            Vec3::new(0.0, 0.0, self.initial_distance),
            Vec3::ZERO,
            Vec3::Y,
        )
    }

    /// Clamps a pointer position to the viewport. A non-finite coordinate
    /// has no nearest edge; it recovers to the viewport center.
    fn clamp_to_viewport(&self, p: Vec2) -> Vec2 {
        let x = if p.x.is_finite() {
            p.x.clamp(0.0, self.viewport.x)
        } else {
            self.viewport.x / 2.0
        };
        let y = if p.y.is_finite() {
            p.y.clamp(0.0, self.viewport.y)
        } else {
            self.viewport.y / 2.0
        };
        Vec2::new(x, y)
    }

    /// Projects a viewport position onto the virtual unit sphere. Positions
    /// inside the unit disk land on the front hemisphere, positions outside
    /// land on the equator.
    fn to_sphere(&self, p: Vec2) -> Vec3 {
        let x = (2.0 * p.x - self.viewport.x) / self.viewport.x;
        let y = (self.viewport.y - 2.0 * p.y) / self.viewport.y;
        let d2 = x * x + y * y;
        if d2 <= 1.0 {
            Vec3::new(x, y, (1.0 - d2).sqrt())
        } else {
            Vec3::new(x, y, 0.0) / d2.sqrt()
        }
    }

    /// The rotation taking `from` to `to` along their great circle, with the
    /// angle scaled by the rotation sensitivity. Identity when the two
    /// points (numerically) coincide.
    fn sphere_arc(&self, from: Vec3, to: Vec3) -> Rot3 {
        let axis = from.cross(to);
        if axis.length_squared() <= 1.0e-12 {
            return Rot3::IDENTITY;
        }
        let angle = from.dot(to).clamp(-1.0, 1.0).acos() * self.config.rotation_sensitivity;
        Rot3::from_axis_angle(axis.normalize(), angle)
    }
}

impl CameraControl for Arcball {
    fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::CursorPos(x, y, _) => {
                let curr_pos = Vec2::new(x as f32, y as f32);
                if self.drag.is_some() {
                    self.continue_drag(curr_pos.x, curr_pos.y);
                }
                self.last_cursor_pos = curr_pos;
            }
            InputEvent::Button(button, action, _) => {
                if Some(button) == self.drag_button {
                    match action {
                        Action::Press => {
                            let pos = self.last_cursor_pos;
                            self.begin_drag(pos.x, pos.y);
                        }
                        Action::Release => self.end_drag(),
                    }
                }
            }
            InputEvent::Scroll(_, off, _) => self.zoom(off as f32),
            InputEvent::ViewportSize(w, h) => self.set_viewport_size(w, h),
        }
    }

    fn eye(&self) -> Vec3 {
        self.orientation.conjugate() * Vec3::new(0.0, 0.0, self.distance)
    }

    /// VIEW-mode view transform: the accumulated orientation orbits the eye
    /// around the origin at the current distance; the scene itself carries
    /// no rotation.
    fn view_transform(&self) -> Pose3 {
        let inv = self.orientation.conjugate();
        Pose3::look_at_rh(
            inv * Vec3::new(0.0, 0.0, self.distance),
            Vec3::ZERO,
            inv * Vec3::Y,
        )
    }

    fn model_transform(&self) -> Rot3 {
        self.orientation
    }

    fn reset(&mut self) {
        debug!("arcball reset");
        self.orientation = Rot3::IDENTITY;
        self.distance = self.initial_distance;
        self.drag = None;
    }
}
