// The intensity/angle field sampled once per segment per tick. Pure reads of
// the trail, the ripples and the smoothed pointer; the dominant per-frame cost
// is O(segments x (trail + ripples)).
// Visual outcomes:
// - Segments near the cursor wake glow and thicken, fading with age/distance.
// - A click ring lights the segments it crosses as it expands.
// - Segments near the pointer tilt toward it, relaxing to their axis as the
//   pointer recedes.

use crate::types::{Coordinate, Ripple, TrailPoint};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Glow floor every segment keeps even with nothing nearby.
const AMBIENT: f32 = 0.2;

/// How far a trail point reaches, and the tick span its pull fades over.
const TRAIL_RADIUS: f32 = 80.0;
const AGE_FADE_SPAN: f32 = 100.0;

/// Half-width of the bright band around a ripple's current radius, and its
/// brightness gain. Narrower than the trail radius on purpose; these are
/// hand-tuned visual constants, not derived values.
const WAVE_HALF_WIDTH: f32 = 30.0;
const WAVE_GAIN: f32 = 1.5;

/// Pointer pull on segment angles: range of influence and the cap on how far
/// toward the cursor a segment may rotate.
const PULL_RANGE: f32 = 300.0;
const PULL_CAP: f32 = 0.6;

#[inline]
fn distance(x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let dx = x0 - x1;
    let dy = y0 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Scalar visual weight at (px,py). Trail points and ripples each contribute
/// a candidate; candidates combine by max, never by sum, so overlapping
/// effects dominate rather than stack.
pub fn intensity(px: f32, py: f32, trail: &[TrailPoint], ripples: &[Ripple]) -> f32 {
    let mut max_intensity = AMBIENT;

    for point in trail {
        let trail_distance = distance(px, py, point.x, point.y);
        if trail_distance <= TRAIL_RADIUS {
            let age_factor = (AGE_FADE_SPAN - point.age as f32) / AGE_FADE_SPAN;
            let distance_factor = (TRAIL_RADIUS - trail_distance) / TRAIL_RADIUS;
            max_intensity = max_intensity.max(age_factor * distance_factor);
        }
    }

    let mut ripple_intensity = 0.0f32;
    for ripple in ripples {
        let ripple_distance = distance(px, py, ripple.x, ripple.y);
        // The wave peaks at the ripple's current radius and falls off to
        // either side of it.
        let distance_from_wave = (ripple_distance - ripple.radius).abs();
        if distance_from_wave < WAVE_HALF_WIDTH {
            let wave = (WAVE_HALF_WIDTH - distance_from_wave) / WAVE_HALF_WIDTH * WAVE_GAIN;
            ripple_intensity = ripple_intensity.max(wave * ripple.intensity);
        }
    }

    max_intensity.max(ripple_intensity)
}

/// Rotation for the segment at (px,py). Horizontal segments default to 0,
/// vertical ones to pi/2; within 300px the segment leans toward the smoothed
/// pointer position, up to 60% of the way, eased so the pull ramps in softly.
pub fn angle(px: f32, py: f32, is_vertical: bool, cursor: Coordinate) -> f32 {
    let default_angle = if is_vertical { FRAC_PI_2 } else { 0.0 };

    let cursor_dx = px - cursor.x;
    let cursor_dy = py - cursor.y;
    let cursor_distance = (cursor_dx * cursor_dx + cursor_dy * cursor_dy).sqrt();

    let pull = ((PULL_RANGE - cursor_distance) / PULL_RANGE).clamp(0.0, PULL_CAP);

    // Point toward the pointer, not away from it.
    let cursor_angle = (-cursor_dy).atan2(-cursor_dx);

    // Shortest signed rotation from the default orientation; `%` keeps the
    // dividend's sign, matching the wrap the visuals were tuned with.
    let angle_diff = ((cursor_angle - default_angle + PI) % TAU) - PI;
    let eased_pull = pull.powf(1.5);

    default_angle + angle_diff * eased_pull
}
