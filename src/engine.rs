// One grid engine per mounted surface: owns the tracker, the ripples, the
// derived bounds and the color mode, and runs the per-tick step order.

use crate::input::PointerTracker;
use crate::render::{self, ColorMode};
use crate::ripple::Ripples;
use crate::types::{FrameBuffer, GridBounds, GRID_SIZE, SEGMENT_SIZE};
use std::time::Instant;

pub struct GridEngine {
    tracker: PointerTracker,
    ripples: Ripples,
    bounds: GridBounds,
    mode: ColorMode,
}

impl GridEngine {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tracker: PointerTracker::new(),
            ripples: Ripples::new(),
            bounds: GridBounds::from_surface(width, height, GRID_SIZE, SEGMENT_SIZE),
            mode: ColorMode::Dark,
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now: Instant) {
        self.tracker.on_pointer_move(x, y, now);
    }

    pub fn on_click(&mut self, x: f32, y: f32) {
        self.ripples.spawn(x, y);
    }

    pub fn on_resize(&mut self, width: usize, height: usize) {
        self.bounds = GridBounds::from_surface(width, height, GRID_SIZE, SEGMENT_SIZE);
    }

    pub fn toggle_color_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// The simulation part of a tick, in its required order: trail
    /// append/age/cull, then ripple advance/cull, then pointer smoothing.
    /// Rendering must see this tick's state, never the previous tick's.
    pub fn advance(&mut self) {
        self.tracker.advance_trail();
        self.ripples.advance();
        self.tracker.smooth();
    }

    /// One full animation tick: advance the simulation, then repaint.
    pub fn tick(&mut self, fb: &mut FrameBuffer) {
        self.advance();
        render::draw_grid(
            fb,
            &self.bounds,
            self.tracker.trail(),
            self.ripples.active(),
            self.tracker.delayed_pos(),
            self.mode,
        );
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn click_then_advance_grows_the_wave_before_render() {
        let mut engine = GridEngine::new(800, 600);
        engine.on_click(100.0, 100.0);
        engine.advance();
        // Growth precedes the cull test and precedes rendering, so the first
        // frame after a click already sees radius 2.5.
        assert_eq!(engine.ripples.active().len(), 1);
        assert!((engine.ripples.active()[0].radius - 2.5).abs() < 1e-6);
    }

    #[test]
    fn fresh_click_does_not_light_the_band_edge() {
        // Click at (100,100), sample at (100,130): exactly on the wave band
        // boundary at radius 0, so only the ambient floor shows through.
        let mut engine = GridEngine::new(800, 600);
        engine.on_click(100.0, 100.0);
        let level = field::intensity(100.0, 130.0, engine.tracker.trail(), engine.ripples.active());
        assert_eq!(level, 0.2);
    }

    #[test]
    fn smoothing_runs_after_the_trail_step() {
        let mut engine = GridEngine::new(800, 600);
        engine.on_pointer_move(100.0, 0.0, Instant::now());
        engine.advance();
        // The trail recorded the pre-smoothing position (the origin), then
        // the delayed position eased 5% of the way toward the raw one.
        assert!((engine.tracker.delayed_pos().x - 5.0).abs() < 1e-6);
        assert_eq!(engine.tracker.trail().len(), 1);
        assert_eq!(engine.tracker.trail()[0].x, 0.0);
    }

    #[test]
    fn resize_replaces_bounds_wholesale() {
        let mut engine = GridEngine::new(400, 300);
        engine.on_resize(800, 600);
        assert_eq!(engine.bounds().horizontal_rows, 8);
        assert_eq!(engine.bounds().vertical_cols, 11);
        engine.on_resize(0, 0);
        assert_eq!(*engine.bounds(), GridBounds::default());
    }

    #[test]
    fn many_ticks_stay_bounded() {
        let mut engine = GridEngine::new(800, 600);
        let mut fb = FrameBuffer::new(800, 600);
        let t0 = Instant::now();
        for i in 0..120u32 {
            if i % 10 == 0 {
                engine.on_click(400.0, 300.0);
            }
            engine.on_pointer_move(
                (i * 7 % 800) as f32,
                (i * 11 % 600) as f32,
                t0 + std::time::Duration::from_millis(20 * i as u64),
            );
            engine.tick(&mut fb);
        }
        assert!(engine.ripples.active().len() <= 12);
        assert!(engine.tracker.trail().len() <= 30);
    }
}
