// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the grid framebuffer.
// 2) Alpha-blended primitives: rotated bars and filled discs, the two shapes
//    the grid renderer is built from.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,       // the on-screen window you see
    left_was_down: bool,  // last polled state of the left button, for click edges
}

impl Drawer {
    /// Create a resizable window pinned to ~60 updates per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // The per-tick constants (smoothing factor, ripple growth) assume a
        // 60Hz tick, so pin the update rate rather than running uncapped.
        window.set_target_fps(60);
        Ok(Self { window, left_was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Keep the event queue alive on ticks where there is nothing to draw
    /// (the window is momentarily zero-sized during a resize).
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client area size in pixels; shrinks/grows as the user resizes.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Clamp)
    }

    /// True exactly once per left-button press (down edge, not while held).
    /// Visual: each press spawns one ripple, however long the button is held.
    pub fn left_clicked(&mut self) -> bool {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let clicked = down && !self.left_was_down;
        self.left_was_down = down;
        clicked
    }

    // we flip the light/dark line color in main with this.
    pub fn d_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::D, KeyRepeat::No)
    }
}

/* ---------- Software drawing: alpha blend, rotated bars, discs ---------- */

/// Blend `color` over the pixel at (x,y) with the given opacity, if inside
/// bounds. Visual: the pixel moves `alpha` of the way toward `color`.
#[inline]
pub fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, alpha: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    let old = fb.pixels[idx];

    let or = ((old >> 16) & 0xFF) as f32;
    let og = ((old >> 8) & 0xFF) as f32;
    let ob = (old & 0xFF) as f32;

    let sr = ((color >> 16) & 0xFF) as f32;
    let sg = ((color >> 8) & 0xFF) as f32;
    let sb = (color & 0xFF) as f32;

    let a = alpha.clamp(0.0, 1.0);
    let nr = (or + (sr - or) * a).round() as u32;
    let ng = (og + (sg - og) * a).round() as u32;
    let nb = (ob + (sb - ob) * a).round() as u32;

    fb.pixels[idx] = (nr << 16) | (ng << 8) | nb;
}

/// Fill a `length` x `thickness` bar centered at (cx,cy), rotated by `angle`.
/// Visual: one grid segment — a thin line that can tilt toward the pointer.
pub fn fill_rotated_bar(
    fb: &mut FrameBuffer,
    cx: f32,
    cy: f32,
    length: f32,
    thickness: f32,
    angle: f32,
    color: u32,
    alpha: f32,
) {
    let (sin, cos) = angle.sin_cos();
    let half_len = length / 2.0;
    let half_thick = thickness / 2.0;

    // Axis-aligned bounding box of the rotated bar; scan only that.
    let extent_x = cos.abs() * half_len + sin.abs() * half_thick;
    let extent_y = sin.abs() * half_len + cos.abs() * half_thick;
    let x0 = (cx - extent_x).floor() as i32;
    let x1 = (cx + extent_x).ceil() as i32;
    let y0 = (cy - extent_y).floor() as i32;
    let y1 = (cy + extent_y).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            // Project into the bar's local frame (inverse rotation).
            let u = dx * cos + dy * sin;
            let v = -dx * sin + dy * cos;
            if u.abs() <= half_len && v.abs() <= half_thick {
                blend_pixel(fb, x, y, color, alpha);
            }
        }
    }
}

/// Fill a disc of the given radius centered at (cx,cy).
/// Visual: one intersection dot that swells as the field intensity rises.
pub fn fill_disc(fb: &mut FrameBuffer, cx: f32, cy: f32, radius: f32, color: u32, alpha: f32) {
    if radius <= 0.0 {
        return;
    }
    let r2 = radius * radius;
    let x0 = (cx - radius).floor() as i32;
    let x1 = (cx + radius).ceil() as i32;
    let y0 = (cy - radius).floor() as i32;
    let y1 = (cy + radius).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= r2 {
                blend_pixel(fb, x, y, color, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_full_alpha_replaces_pixel() {
        let mut fb = FrameBuffer::new(2, 2);
        blend_pixel(&mut fb, 1, 1, 0x00FF_FFFF, 1.0);
        assert_eq!(fb.pixels[1 * 2 + 1], 0x00FF_FFFF);
    }

    #[test]
    fn blend_half_alpha_mixes_toward_color() {
        let mut fb = FrameBuffer::new(1, 1);
        blend_pixel(&mut fb, 0, 0, 0x00FF_FFFF, 0.5);
        // 0 + (255 - 0) * 0.5 rounds to 128 per channel
        assert_eq!(fb.pixels[0], 0x0080_8080);
    }

    #[test]
    fn blend_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        blend_pixel(&mut fb, -1, 0, 0x00FF_FFFF, 1.0);
        blend_pixel(&mut fb, 0, 5, 0x00FF_FFFF, 1.0);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn axis_aligned_bar_covers_its_row_only() {
        let mut fb = FrameBuffer::new(11, 11);
        fill_rotated_bar(&mut fb, 5.0, 5.0, 8.0, 1.0, 0.0, 0x00FF_FFFF, 1.0);
        // Center row painted around the midpoint, rows above/below untouched.
        assert_eq!(fb.pixels[5 * 11 + 5], 0x00FF_FFFF);
        assert_eq!(fb.pixels[5 * 11 + 2], 0x00FF_FFFF);
        assert_eq!(fb.pixels[2 * 11 + 5], 0);
        assert_eq!(fb.pixels[8 * 11 + 5], 0);
    }

    #[test]
    fn quarter_turn_bar_covers_its_column() {
        let mut fb = FrameBuffer::new(11, 11);
        fill_rotated_bar(&mut fb, 5.0, 5.0, 8.0, 1.0, std::f32::consts::FRAC_PI_2, 0x00FF_FFFF, 1.0);
        assert_eq!(fb.pixels[2 * 11 + 5], 0x00FF_FFFF);
        assert_eq!(fb.pixels[8 * 11 + 5], 0x00FF_FFFF);
    }

    #[test]
    fn disc_covers_center_not_corners() {
        let mut fb = FrameBuffer::new(9, 9);
        fill_disc(&mut fb, 4.0, 4.0, 2.0, 0x00FF_FFFF, 1.0);
        assert_eq!(fb.pixels[4 * 9 + 4], 0x00FF_FFFF);
        assert_eq!(fb.pixels[0], 0);
    }
}
