//! Headless arcball viewer session.
//!
//! Replays the interaction of a toon-shaded model viewer without opening a
//! window: a drag across the canvas, a couple of wheel notches, the
//! VIEW/OBJECT toggle, and a reset. Run with `RUST_LOG=info` to see the
//! transforms each "frame" would upload.

use gimbal::prelude::*;
use log::info;

const CANVAS_SIZE: u32 = 700;
const CAM_START_DIST: f32 = 3.0;

fn main() -> Result<(), ControlError> {
    env_logger::init();

    let mut arcball = Arcball::new(CAM_START_DIST)?;
    arcball.set_viewport_size(CANVAS_SIZE, CANVAS_SIZE);

    let mut mode = InteractionMode::default();
    let mut queue = InputQueue::new();
    let m = Modifiers::empty();

    // A drag from the canvas center toward the right edge.
    queue.push(InputEvent::CursorPos(350.0, 350.0, m));
    queue.push(InputEvent::Button(PointerButton::Left, Action::Press, m));
    for step in 1..=20 {
        queue.push(InputEvent::CursorPos(350.0 + 15.0 * f64::from(step), 350.0, m));
    }
    queue.push(InputEvent::Button(PointerButton::Left, Action::Release, m));

    // Two wheel notches toward the model.
    queue.push(InputEvent::Scroll(0.0, -120.0, m));
    queue.push(InputEvent::Scroll(0.0, -120.0, m));

    queue.flush_into(&mut arcball);
    render_frame(mode, &arcball);

    // 'a' pressed: same gesture history, object-steering matrices.
    mode.toggle();
    render_frame(mode, &arcball);

    // 'r' pressed: everything back to the construction-time state.
    arcball.reset();
    mode = InteractionMode::default();
    render_frame(mode, &arcball);

    Ok(())
}

fn render_frame(mode: InteractionMode, arcball: &Arcball) {
    let frame = FrameTransforms::for_mode(mode, arcball);
    let eye = eye_from_view(&frame.view);
    info!("mode {:?}: eye {}, distance {}", mode, eye, arcball.distance());
    info!("  model {}", frame.model);
    info!("  view  {}", frame.view);
}
