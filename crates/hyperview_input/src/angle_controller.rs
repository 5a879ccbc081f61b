//! Angle controller: keyboard stand-in for six rotation sliders
//!
//! Controls (first key increases the angle, second decreases it):
//! - 1/Q: XY
//! - 2/W: XZ
//! - 3/E: XW
//! - 4/R: YZ
//! - 5/T: YW
//! - 6/Y: ZW
//!
//! Angles are stored in degrees and kept in `[-180, 180)`, the range of the
//! sliders they replace. They are converted to radians only when handed to
//! the math core.

use hyperview_math::{PlaneAngles, RotationPlane};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Increase/decrease keys per plane, in canonical plane order
pub const PLANE_KEYS: [(RotationPlane, KeyCode, KeyCode); 6] = [
    (RotationPlane::XY, KeyCode::Digit1, KeyCode::KeyQ),
    (RotationPlane::XZ, KeyCode::Digit2, KeyCode::KeyW),
    (RotationPlane::XW, KeyCode::Digit3, KeyCode::KeyE),
    (RotationPlane::YZ, KeyCode::Digit4, KeyCode::KeyR),
    (RotationPlane::YW, KeyCode::Digit5, KeyCode::KeyT),
    (RotationPlane::ZW, KeyCode::Digit6, KeyCode::KeyY),
];

/// Wrap an angle in degrees into `[-180, 180)`
pub fn wrap_degrees(degrees: f32) -> f32 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Holds the six rotation angles and the keys currently held down
pub struct AngleController {
    /// Angles in degrees, canonical plane order
    degrees: [f32; 6],
    // Held key state, canonical plane order
    increasing: [bool; 6],
    decreasing: [bool; 6],

    // Configuration
    /// Degrees per second while a key is held
    pub rotation_speed: f32,
}

impl Default for AngleController {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleController {
    pub fn new() -> Self {
        Self {
            degrees: [0.0; 6],
            increasing: [false; 6],
            decreasing: [false; 6],
            rotation_speed: 90.0,
        }
    }

    /// Builder: set rotation speed in degrees per second
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Builder: start from the given angles (degrees, canonical order)
    pub fn with_degrees(mut self, degrees: [f32; 6]) -> Self {
        self.degrees = degrees.map(wrap_degrees);
        self
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one of the rotation keys.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        for (plane, inc, dec) in PLANE_KEYS {
            if key == inc {
                self.increasing[plane.index()] = pressed;
                return true;
            }
            if key == dec {
                self.decreasing[plane.index()] = pressed;
                return true;
            }
        }
        false
    }

    /// Advance held keys by `dt` seconds
    ///
    /// Returns true if any angle changed, i.e. the view needs a redraw.
    pub fn update(&mut self, dt: f32) -> bool {
        let mut changed = false;
        for i in 0..6 {
            let direction = (self.increasing[i] as i32 - self.decreasing[i] as i32) as f32;
            if direction != 0.0 && dt > 0.0 {
                self.degrees[i] = wrap_degrees(self.degrees[i] + direction * self.rotation_speed * dt);
                changed = true;
            }
        }
        changed
    }

    /// Check if any rotation key is held
    pub fn is_rotating(&self) -> bool {
        (0..6).any(|i| self.increasing[i] != self.decreasing[i])
    }

    /// Set one plane's angle directly, as dragging a slider would
    pub fn set_degrees(&mut self, plane: RotationPlane, degrees: f32) {
        self.degrees[plane.index()] = wrap_degrees(degrees);
    }

    /// Current angle of `plane` in degrees
    pub fn degrees(&self, plane: RotationPlane) -> f32 {
        self.degrees[plane.index()]
    }

    /// Put every angle back to zero
    pub fn reset(&mut self) {
        self.degrees = [0.0; 6];
        log::info!("Rotation angles reset");
    }

    /// Snapshot of the angles in radians, for the math core
    pub fn angles(&self) -> PlaneAngles {
        PlaneAngles::from_array(self.degrees.map(f32::to_radians))
    }

    /// Human-readable angle summary, e.g. `XY 30° XZ 0° ...`
    pub fn readout(&self) -> String {
        RotationPlane::CANONICAL_ORDER
            .iter()
            .map(|&plane| format!("{} {:.0}°", plane, self.degrees(plane)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
