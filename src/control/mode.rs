use crate::control::{Arcball, CameraControl};
use glamx::{Mat4, Pose3, Vec3, Vec4Swizzles};

/// Which half of the scene an arcball gesture steers.
///
/// Owned and toggled by the application; the controllers themselves are
/// mode-agnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionMode {
    /// The gesture orbits the camera around a stationary object.
    View,
    /// The gesture spins the object while the camera stays fixed.
    Object,
}

impl Default for InteractionMode {
    fn default() -> Self {
        InteractionMode::View
    }
}

impl InteractionMode {
    /// Switches between `View` and `Object`.
    pub fn toggle(&mut self) {
        *self = match *self {
            InteractionMode::View => InteractionMode::Object,
            InteractionMode::Object => InteractionMode::View,
        };
    }
}

/// The (model, view) matrix pair to upload for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameTransforms {
    /// Object-to-world transform.
    pub model: Mat4,
    /// World-to-camera transform.
    pub view: Mat4,
}

impl FrameTransforms {
    /// Selects the matrix pair for the given mode.
    ///
    /// `View` keeps the object anchored at the origin and lets the arcball
    /// steer the camera; `Object` spins the object and keeps the camera at
    /// its construction-time position.
    pub fn for_mode(mode: InteractionMode, arcball: &Arcball) -> FrameTransforms {
        match mode {
            InteractionMode::View => FrameTransforms {
                model: Mat4::IDENTITY,
                view: arcball.view_transform().to_mat4(),
            },
            InteractionMode::Object => FrameTransforms {
                model: Pose3::from(arcball.model_transform()).to_mat4(),
                view: arcball.fixed_view_transform().to_mat4(),
            },
        }
    }
}

/// Extracts the world-space eye position from a view matrix.
pub fn eye_from_view(view: &Mat4) -> Vec3 {
    view.inverse().w_axis.xyz()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let mut mode = InteractionMode::default();
        assert_eq!(mode, InteractionMode::View);
        mode.toggle();
        assert_eq!(mode, InteractionMode::Object);
        mode.toggle();
        assert_eq!(mode, InteractionMode::View);
    }

    #[test]
    fn view_mode_keeps_the_object_anchored() {
        let mut arcball = Arcball::new(3.0).unwrap();
        arcball.begin_drag(100.0, 100.0);
        arcball.continue_drag(300.0, 250.0);
        arcball.end_drag();

        let frame = FrameTransforms::for_mode(InteractionMode::View, &arcball);
        assert_eq!(frame.model, Mat4::IDENTITY);
        assert_ne!(frame.view, arcball.fixed_view_transform().to_mat4());
    }

    #[test]
    fn object_mode_keeps_the_camera_fixed() {
        let mut arcball = Arcball::new(3.0).unwrap();
        arcball.begin_drag(100.0, 100.0);
        arcball.continue_drag(300.0, 250.0);
        arcball.end_drag();

        let frame = FrameTransforms::for_mode(InteractionMode::Object, &arcball);
        assert_eq!(frame.view, arcball.fixed_view_transform().to_mat4());
        assert_ne!(frame.model, Mat4::IDENTITY);
    }

    #[test]
    fn eye_recovered_from_a_view_matrix() {
        let eye = Vec3::new(0.0, 0.0, 3.0);
        let view = Pose3::look_at_rh(eye, Vec3::ZERO, Vec3::Y).to_mat4();
        assert!((eye_from_view(&view) - eye).length() < 1.0e-5);
    }
}
