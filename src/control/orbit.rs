use crate::control::CameraControl;
use crate::error::ControlError;
use crate::event::{Action, InputEvent, PointerButton};
use glamx::{Pose3, Vec2, Vec3};
use log::debug;
use num::Pow;
use std::f32;

/// The pose an [`Orbit`] controller restores on reset.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Home {
    focus: Vec3,
    yaw: f32,
    pitch: f32,
    dist: f32,
}

/// Orbit controller.
///
/// The eye turns around a focus point on a sphere parameterized by yaw and
/// pitch, at a wheel-adjustable distance. This is the usual "turntable"
/// interaction for viewer applications.
///
/// # Default Controls
/// When driven through [`handle_event`](CameraControl::handle_event):
/// - **Left pointer button + drag**: orbit around the focus point
/// - **Wheel**: move closer to / away from the focus point
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orbit {
    focus: Vec3,
    yaw: f32,
    pitch: f32,
    dist: f32,
    home: Home,

    yaw_step: f32,
    pitch_step: f32,
    dist_step: f32,
    min_pitch: f32,
    max_pitch: f32,
    min_dist: f32,
    max_dist: f32,
    drag_button: Option<PointerButton>,

    last_cursor_pos: Vec2,
    dragging: bool,
}

impl Default for Orbit {
    /// Eye at `(0, 0, 3)` looking at the origin.
    fn default() -> Self {
        Orbit::from_spherical(f32::consts::FRAC_PI_2, f32::consts::FRAC_PI_2, 3.0, Vec3::ZERO)
    }
}

impl Orbit {
    /// Creates an orbit controller with the eye at `eye`, turning around
    /// `at`.
    ///
    /// # Errors
    /// Returns [`ControlError::DegenerateLookAt`] if `eye` and `at`
    /// (numerically) coincide.
    pub fn new(eye: Vec3, at: Vec3) -> Result<Orbit, ControlError> {
        let (yaw, pitch, dist) = spherical_coords(eye, at)?;
        Ok(Orbit::from_spherical(yaw, pitch, dist, at))
    }

    fn from_spherical(yaw: f32, pitch: f32, dist: f32, focus: Vec3) -> Orbit {
        let mut res = Orbit {
            focus,
            yaw,
            pitch,
            dist,
            home: Home {
                focus,
                yaw,
                pitch,
                dist,
            },
            yaw_step: 0.005,
            pitch_step: 0.005,
            dist_step: 0.9,
            min_pitch: 0.01,
            max_pitch: f32::consts::PI - 0.01,
            min_dist: 1.0e-4,
            max_dist: f32::MAX,
            drag_button: Some(PointerButton::Left),
            last_cursor_pos: Vec2::ZERO,
            dragging: false,
        };
        res.update_restrictions();
        res.home.pitch = res.pitch;
        res
    }

    /// Moves the eye and the focus point, keeping the current sensitivities.
    ///
    /// # Errors
    /// Returns [`ControlError::DegenerateLookAt`] if `eye` and `at`
    /// (numerically) coincide.
    pub fn look_at(&mut self, eye: Vec3, at: Vec3) -> Result<(), ControlError> {
        let (yaw, pitch, dist) = spherical_coords(eye, at)?;
        self.focus = at;
        self.yaw = yaw;
        self.pitch = pitch;
        self.dist = dist;
        self.update_restrictions();
        Ok(())
    }

    /// The point the controller turns around.
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Sets the point the controller turns around.
    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }

    /// The distance from the eye to the focus point.
    pub fn distance(&self) -> f32 {
        self.dist
    }

    /// Sets the distance from the eye to the focus point, clamped to the
    /// controller's distance range.
    pub fn set_distance(&mut self, dist: f32) {
        if dist.is_finite() {
            self.dist = dist.clamp(self.min_dist, self.max_dist);
        }
    }

    /// Sets the yaw increment per pixel of horizontal drag.
    ///
    /// The default value is 0.005.
    #[inline]
    pub fn set_yaw_step(&mut self, step: f32) {
        self.yaw_step = step;
    }

    /// Sets the pitch increment per pixel of vertical drag.
    ///
    /// The default value is 0.005.
    #[inline]
    pub fn set_pitch_step(&mut self, step: f32) {
        self.pitch_step = step;
    }

    /// Gets the yaw increment per pixel of horizontal drag.
    #[inline]
    pub fn yaw_step(&self) -> f32 {
        self.yaw_step
    }

    /// Gets the pitch increment per pixel of vertical drag.
    #[inline]
    pub fn pitch_step(&self) -> f32 {
        self.pitch_step
    }

    /// The button used to drag the orbit.
    pub fn drag_button(&self) -> Option<PointerButton> {
        self.drag_button
    }

    /// Set the button used to drag the orbit.
    /// Use None to disable dragging.
    pub fn rebind_drag_button(&mut self, new_button: Option<PointerButton>) {
        self.drag_button = new_button;
    }

    fn handle_drag_displacement(&mut self, dpos: Vec2) {
        self.yaw += dpos.x * self.yaw_step;
        self.pitch += dpos.y * self.pitch_step;
        self.update_restrictions();
    }

    /// Wheel zoom: each 120 wheel units scale the distance by `dist_step`.
    fn handle_scroll(&mut self, off: f32) {
        if !off.is_finite() {
            return;
        }
        self.dist =
            (self.dist * self.dist_step.pow(off / 120.0)).clamp(self.min_dist, self.max_dist);
    }

    fn update_restrictions(&mut self) {
        if self.pitch < self.min_pitch {
            self.pitch = self.min_pitch
        }

        if self.pitch > self.max_pitch {
            self.pitch = self.max_pitch
        }
    }
}

impl CameraControl for Orbit {
    fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::CursorPos(x, y, _) => {
                let curr_pos = Vec2::new(x as f32, y as f32);
                if self.dragging {
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.handle_drag_displacement(dpos);
                }
                self.last_cursor_pos = curr_pos;
            }
            InputEvent::Button(button, action, _) => {
                if Some(button) == self.drag_button {
                    self.dragging = action == Action::Press;
                }
            }
            InputEvent::Scroll(_, off, _) => self.handle_scroll(off as f32),
            InputEvent::ViewportSize(..) => {}
        }
    }

    fn eye(&self) -> Vec3 {
        let px = self.dist * self.yaw.cos() * self.pitch.sin();
        let py = self.dist * self.pitch.cos();
        let pz = self.dist * self.yaw.sin() * self.pitch.sin();
        self.focus + Vec3::new(px, py, pz)
    }

    fn view_transform(&self) -> Pose3 {
        Pose3::look_at_rh(self.eye(), self.focus, Vec3::Y)
    }

    fn reset(&mut self) {
        debug!("orbit reset");
        self.focus = self.home.focus;
        self.yaw = self.home.yaw;
        self.pitch = self.home.pitch;
        self.dist = self.home.dist;
        self.dragging = false;
    }
}

/// Yaw, pitch and distance of `eye` around `at`, Y-up.
fn spherical_coords(eye: Vec3, at: Vec3) -> Result<(f32, f32, f32), ControlError> {
    let v = eye - at;
    let dist = v.length();
    if !dist.is_finite() || dist < 1.0e-5 {
        return Err(ControlError::DegenerateLookAt);
    }
    let pitch = (v.y / dist).clamp(-1.0, 1.0).acos();
    let yaw = v.z.atan2(v.x);
    Ok((yaw, pitch, dist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    #[test]
    fn construction_rejects_coincident_points() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Orbit::new(p, p), Err(ControlError::DegenerateLookAt));
    }

    #[test]
    fn look_at_round_trips_through_spherical_coords() {
        let eye = Vec3::new(0.0, 50.0, 100.0);
        let orbit = Orbit::new(eye, Vec3::ZERO).unwrap();
        assert!((orbit.eye() - eye).length() < 1.0e-3);
        assert!((orbit.distance() - eye.length()).abs() < 1.0e-3);
    }

    #[test]
    fn pitch_is_clamped_away_from_the_poles() {
        let mut orbit = Orbit::default();
        let m = Modifiers::empty();
        orbit.handle_event(&InputEvent::Button(PointerButton::Left, Action::Press, m));
        orbit.handle_event(&InputEvent::CursorPos(0.0, 0.0, m));
        orbit.handle_event(&InputEvent::CursorPos(0.0, 1.0e6, m));
        assert!(orbit.pitch <= orbit.max_pitch);

        orbit.handle_event(&InputEvent::CursorPos(0.0, -1.0e6, m));
        assert!(orbit.pitch >= orbit.min_pitch);
    }

    #[test]
    fn wheel_zoom_is_exponential_and_clamped() {
        let mut orbit = Orbit::default();
        let d0 = orbit.distance();

        orbit.handle_scroll(120.0);
        assert!((orbit.distance() - d0 * 0.9).abs() < 1.0e-4);

        for _ in 0..10_000 {
            orbit.handle_scroll(1200.0);
        }
        assert!(orbit.distance() >= orbit.min_dist);
        assert!(orbit.distance() > 0.0);

        orbit.handle_scroll(f32::NAN);
        assert!(orbit.distance().is_finite());
    }

    #[test]
    fn reset_restores_the_constructed_pose() {
        let eye = Vec3::new(0.0, 50.0, 100.0);
        let mut orbit = Orbit::new(eye, Vec3::ZERO).unwrap();
        let m = Modifiers::empty();

        orbit.handle_event(&InputEvent::Button(PointerButton::Left, Action::Press, m));
        orbit.handle_event(&InputEvent::CursorPos(0.0, 0.0, m));
        orbit.handle_event(&InputEvent::CursorPos(250.0, 120.0, m));
        orbit.handle_scroll(-360.0);
        orbit.set_focus(Vec3::new(5.0, 0.0, 0.0));

        orbit.reset();
        assert!((orbit.eye() - eye).length() < 1.0e-3);
        assert_eq!(orbit.focus(), Vec3::ZERO);
        assert!(!orbit.dragging);
    }
}
