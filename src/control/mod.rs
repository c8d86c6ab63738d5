//! Controller trait with the built-in implementations.

pub use self::arcball::{Arcball, ArcballConfig};
pub use self::controller::CameraControl;
pub use self::mode::{eye_from_view, FrameTransforms, InteractionMode};
pub use self::orbit::Orbit;

mod arcball;
mod controller;
mod mode;
mod orbit;
