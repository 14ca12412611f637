// Grid renderer: clears the surface and repaints every segment and dot from
// the current field state. Draw order is horizontal segments, then vertical,
// then intersection dots; later primitives composite over earlier ones.

use crate::draw::{fill_disc, fill_rotated_bar};
use crate::field;
use crate::types::{Coordinate, FrameBuffer, GridBounds, Ripple, TrailPoint};
use crate::types::{GRID_SIZE, SEGMENT_SIZE};

/// Light/dark line color, following the desktop theme toggle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorMode {
    Dark,
    Light,
}

impl ColorMode {
    pub fn line(self) -> u32 {
        match self {
            ColorMode::Dark => 0x00FF_FFFF,  // white lines
            ColorMode::Light => 0x0000_0000, // black lines
        }
    }

    pub fn background(self) -> u32 {
        match self {
            ColorMode::Dark => 0x0000_0000,
            ColorMode::Light => 0x00FF_FFFF,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
        }
    }
}

/// Repaint the whole grid for this tick.
pub fn draw_grid(
    fb: &mut FrameBuffer,
    bounds: &GridBounds,
    trail: &[TrailPoint],
    ripples: &[Ripple],
    cursor: Coordinate,
    mode: ColorMode,
) {
    fb.clear(mode.background());
    let line = mode.line();

    // Horizontal line segments.
    for row in 0..bounds.horizontal_rows {
        let y = row as f32 * GRID_SIZE;
        for col in 0..bounds.horizontal_cols {
            let x = col as f32 * SEGMENT_SIZE;
            let mid_x = x + SEGMENT_SIZE / 2.0;

            let intensity = field::intensity(mid_x, y, trail, ripples);
            let thickness = (1.0 + intensity * 2.0).max(1.0);
            let opacity = (0.05 + intensity * 0.2).max(0.05);
            let angle = field::angle(mid_x, y, false, cursor);

            fill_rotated_bar(fb, mid_x, y, SEGMENT_SIZE, thickness, angle, line, opacity);
        }
    }

    // Vertical line segments. The opacity gain is 0.25 here versus 0.2 above;
    // the asymmetry is a tuned visual constant, keep it.
    for col in 0..bounds.vertical_cols {
        let x = col as f32 * GRID_SIZE;
        for row in 0..bounds.vertical_rows {
            let y = row as f32 * SEGMENT_SIZE;
            let mid_y = y + SEGMENT_SIZE / 2.0;

            let intensity = field::intensity(x, mid_y, trail, ripples);
            let thickness = (1.0 + intensity * 2.0).max(1.0);
            let opacity = (0.05 + intensity * 0.25).max(0.05);
            // The default pi/2 is baked into the angle, so the bar is drawn
            // with the same horizontal geometry as above and rotated upright.
            let angle = field::angle(x, mid_y, true, cursor);

            fill_rotated_bar(fb, x, mid_y, SEGMENT_SIZE, thickness, angle, line, opacity);
        }
    }

    // Intersection dots. No angle; dots only swell and brighten.
    for row in 0..bounds.intersection_rows {
        for col in 0..bounds.intersection_cols {
            let x = col as f32 * GRID_SIZE;
            let y = row as f32 * GRID_SIZE;

            let intensity = field::intensity(x, y, trail, ripples);
            let dot_size = 3.0 + intensity * 3.0;
            let opacity = 0.1 + intensity * 0.2;

            fill_disc(fb, x, y, dot_size, line, opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_grid(width: usize, height: usize, mode: ColorMode) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        let bounds = GridBounds::from_surface(width, height, GRID_SIZE, SEGMENT_SIZE);
        // Cursor parked far away: zero pull, every segment axis-aligned.
        let cursor = Coordinate { x: 5000.0, y: 5000.0 };
        draw_grid(&mut fb, &bounds, &[], &[], cursor, mode);
        fb
    }

    #[test]
    fn dark_mode_paints_dim_lines_on_black() {
        let fb = quiet_grid(160, 160, ColorMode::Dark);
        // On a grid line: brighter than the background.
        let on_line = fb.pixels[0 * 160 + 20];
        assert!(on_line > 0);
        // Mid-cell, away from every line and dot: untouched background.
        let mid_cell = fb.pixels[38 * 160 + 38];
        assert_eq!(mid_cell, 0);
    }

    #[test]
    fn light_mode_paints_on_white() {
        let fb = quiet_grid(160, 160, ColorMode::Light);
        let mid_cell = fb.pixels[38 * 160 + 38];
        assert_eq!(mid_cell, 0x00FF_FFFF);
        let on_line = fb.pixels[0 * 160 + 20];
        assert!(on_line < 0x00FF_FFFF);
    }

    #[test]
    fn zero_bounds_draw_nothing() {
        let mut fb = FrameBuffer::new(0, 0);
        let bounds = GridBounds::default();
        draw_grid(&mut fb, &bounds, &[], &[], Coordinate::default(), ColorMode::Dark);
        assert!(fb.pixels.is_empty());
    }

    #[test]
    fn trail_point_brightens_nearby_segments() {
        let width = 160;
        let mut fb = FrameBuffer::new(width, 160);
        let bounds = GridBounds::from_surface(width, 160, GRID_SIZE, SEGMENT_SIZE);
        let quiet = quiet_grid(width, 160, ColorMode::Dark);

        let trail = [TrailPoint { x: 37.5, y: 0.0, age: 0 }];
        draw_grid(&mut fb, &bounds, &trail, &[], Coordinate { x: 37.5, y: 0.0 }, ColorMode::Dark);

        // The first horizontal segment's midpoint sits on the trail point, so
        // its pixels must come out brighter than the quiet render.
        let sample = 0 * width + 37;
        assert!(fb.pixels[sample] > quiet.pixels[sample]);
    }

    #[test]
    fn toggling_flips_line_and_background() {
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.line(), ColorMode::Light.background());
    }
}
