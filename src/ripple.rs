// Click ripples: expanding annular waves that perturb the grid.
// Visual outcomes:
// - Each click spawns a bright ring that travels outward from the click point.
// - Rings fade as they travel and vanish once too dim or too large.

use crate::types::Ripple;

const SPAWN_INTENSITY: f32 = 1.2;
const MAX_RADIUS: f32 = 500.0;
const GROWTH_PER_TICK: f32 = 2.5; // slower expansion
const FADE_PER_TICK: f32 = 0.98;  // slower fade
const MIN_INTENSITY: f32 = 0.1;

/// Ripple container. Owns every active wave; no cap on concurrent ripples —
/// rapid clicking is an accepted load, not an error.
pub struct Ripples {
    active: Vec<Ripple>,
}

impl Ripples {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Spawn a wave at the click location.
    /// Visual: nothing yet this frame; the ring grows on subsequent ticks.
    pub fn spawn(&mut self, x: f32, y: f32) {
        self.active.push(Ripple {
            x,
            y,
            radius: 0.0,
            max_radius: MAX_RADIUS,
            intensity: SPAWN_INTENSITY,
        });
    }

    /// Grow and fade every wave, then drop the spent ones. Growth is applied
    /// before the cull test, so a wave can be removed the same tick it
    /// crosses a threshold.
    pub fn advance(&mut self) {
        let mut i = 0;
        while i < self.active.len() {
            let ripple = &mut self.active[i];
            ripple.radius += GROWTH_PER_TICK;
            ripple.intensity *= FADE_PER_TICK;
            if ripple.intensity <= MIN_INTENSITY || ripple.radius >= ripple.max_radius {
                // Remove spent wave (swap-remove, O(1); order is irrelevant
                // because the field combines ripples by max).
                self.active.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn active(&self) -> &[Ripple] {
        &self.active
    }
}
