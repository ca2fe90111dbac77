//! Angle constants and conversions

/// π, half a turn (180 degrees).
pub const PI: f32 = std::f32::consts::PI;

/// 2π, a full turn (360 degrees).
pub const PI_2: f32 = std::f32::consts::TAU;

/// Multiply radians by this to get degrees. Equal to `180 / π`.
pub const TO_DEG: f32 = 180.0 / PI;

/// Multiply degrees by this to get radians. Equal to `π / 180`.
pub const TO_RAD: f32 = PI / 180.0;

/// Convert degrees to radians
pub fn to_radians(degrees: f32) -> f32 {
    degrees * TO_RAD
}

/// Convert radians to degrees
pub fn to_degrees(radians: f32) -> f32 {
    radians * TO_DEG
}
