//! Maps cell values to fill colors: dead cells are white, live cells walk a
//! hue rotation as their survival count grows, clipped so veterans settle on
//! a fixed color instead of cycling forever.

use std::f64::consts::PI;

use macroquad::prelude::{Color, WHITE};

/// Hue of a newborn-adjacent cell, in radians.
const HUE_INIT: f64 = 11.0 * PI / 12.0;
/// Hue advance per survived generation, in radians.
const HUE_INCREMENT: f64 = PI / 8.0;
/// Values above this are treated as this, bounding the rotation.
const HUE_CUTOFF: u32 = 6;
const SATURATION: f64 = 0.7;
const VALUE: f64 = 1.0;

/// Fill color for a cell value. 0 is pure white and skips the HSV math
/// entirely; anything else rotates the base hue by the clipped value.
pub fn color_for(value: u32) -> Color {
    if value == 0 {
        return WHITE;
    }

    let clipped = value.min(HUE_CUTOFF);
    let hue = (2.0 * PI + HUE_INIT + clipped as f64 * HUE_INCREMENT) % (2.0 * PI);
    hsv_color(hue, SATURATION, VALUE)
}

/// Standard six-sector HSV to RGB conversion, hue in radians [0, 2*PI).
fn hsv_color(hue: f64, saturation: f64, value: f64) -> Color {
    let h = hue / (PI / 3.0);
    let c = value * saturation;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let o = value - c;

    // Sector lookup; the final arm guards the h == 6 float edge
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    Color::from_rgba(
        (255.0 * (r + o)).round() as u8,
        (255.0 * (g + o)).round() as u8,
        (255.0 * (b + o)).round() as u8,
        255,
    )
}
