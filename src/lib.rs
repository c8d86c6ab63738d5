/*!
# gimbal

Keep It Simple, Stupid camera controllers.

This library is born from rewriting the same three hundred lines of camera
code for every little 3D viewer: an arcball here, an orbit camera there, each
time tangled into whatever windowing and rendering stack the viewer happened
to use.

**gimbal** owns none of that stack. It is the interaction layer alone: feed it
pointer and wheel events, read back ready-to-use view and model transforms
once per frame. Windowing, shaders, projection and uniform upload stay on
your side of the fence.

## Features
Most features are one-liners.

* an arcball controller mapping drags onto a virtual sphere, with matrix
  flavors for both camera-steering (VIEW) and object-steering (OBJECT) modes.
* an orbit (turntable) controller around a focus point.
* a small input-event vocabulary and FIFO queue to bridge from any windowing
  layer (we use the [glam](https://docs.rs/glam/) library for math
  operations, through `glamx`).
* user-defined controllers are possible through the [`CameraControl`]
  trait.

As an example, steering a viewer with an arcball and the VIEW/OBJECT toggle
is as simple as:

```
use gimbal::prelude::*;

# fn main() -> Result<(), ControlError> {
let mut arcball = Arcball::new(3.0)?;
let mut mode = InteractionMode::default();

// The windowing layer translated a drag into these calls.
arcball.begin_drag(350.0, 350.0);
arcball.continue_drag(420.0, 350.0);
arcball.end_drag();

// 'a' was pressed: the application toggles the mode and uploads the pair.
mode.toggle();
let frame = FrameTransforms::for_mode(mode, &arcball);
# let _ = frame;
# Ok(())
# }
```

Everything is synchronous and single-threaded: events handled before a frame
are reflected in that frame's matrices.

[`CameraControl`]: crate::control::CameraControl
*/
#![deny(missing_docs)]

#[macro_use]
extern crate bitflags;
extern crate num_traits as num;
#[cfg(feature = "serde")]
extern crate serde;

pub use glamx;

pub mod control;
pub mod error;
pub mod event;

/// The most common imports, in one place.
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use glamx::{Mat4, Pose3, Quat, Rot3, Vec2, Vec3, Vec3Swizzles, Vec4Swizzles};
}
