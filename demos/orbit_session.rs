//! Headless solar-system session.
//!
//! Replays the interaction of a small animated scene steered by orbit
//! controls: planets advance on their orbits each frame while the user drags
//! the view around and zooms in. Run with `RUST_LOG=info`.

use gimbal::prelude::*;
use log::info;

struct Planet {
    name: &'static str,
    distance: f32,
    orbit_speed: f32,
    angle: f32,
}

impl Planet {
    fn new(name: &'static str, distance: f32, orbit_speed: f32) -> Planet {
        Planet {
            name,
            distance,
            orbit_speed,
            angle: 0.0,
        }
    }

    fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.angle.cos(),
            0.0,
            self.distance * self.angle.sin(),
        )
    }
}

fn main() -> Result<(), ControlError> {
    env_logger::init();

    let mut orbit = Orbit::new(Vec3::new(0.0, 50.0, 100.0), Vec3::ZERO)?;
    let m = Modifiers::empty();

    let mut planets = vec![
        Planet::new("Mercury", 20.0, 0.02),
        Planet::new("Venus", 35.0, 0.015),
        Planet::new("Earth", 50.0, 0.01),
        Planet::new("Mars", 65.0, 0.008),
    ];

    for frame in 0..120i32 {
        // The user slowly drags the view for most of the session.
        match frame {
            10 => orbit.handle_event(&InputEvent::Button(PointerButton::Left, Action::Press, m)),
            90 => orbit.handle_event(&InputEvent::Button(PointerButton::Left, Action::Release, m)),
            _ => {}
        }
        orbit.handle_event(&InputEvent::CursorPos(f64::from(frame) * 2.0, 300.0, m));
        if frame % 30 == 0 {
            orbit.handle_event(&InputEvent::Scroll(0.0, 120.0, m));
        }

        for planet in &mut planets {
            planet.angle += planet.orbit_speed;
        }

        let view = orbit.view_transform().to_mat4();
        if frame % 30 == 29 {
            info!("frame {}: eye {}, view {}", frame, orbit.eye(), view);
        }
    }

    for planet in &planets {
        info!("{} ended at {}", planet.name, planet.position());
    }

    Ok(())
}
