// What you SEE now:
// • A full-window grid of faint line segments with dots at the intersections.
// • Move the mouse: segments near the cursor's wake brighten, thicken and
//   tilt toward a point that trails slightly behind the cursor.
// • Click: a ring of light expands from the click and fades as it travels.
// • D toggles light/dark line color. ESC quits.

mod draw;
mod engine;
mod error;
mod field;
mod input;
mod render;
mod ripple;
mod types;

use draw::Drawer;
use engine::GridEngine;
use error::Error;
use std::time::{Duration, Instant};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    /* --- Window setup ---
       Visual: a resizable window opens showing the quiet grid. */
    let mut drawer = Drawer::new("Grid Wave — Reactive Lattice", 1280, 720)?;
    let (w, h) = drawer.size();

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(w, h);

    /* --- Grid engine ---
       Owns pointer tracking, ripples and the derived grid bounds. */
    let mut engine = GridEngine::new(w, h);

    /* --- FPS (terminal print once per second) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Track the window size; rebuild the surface and bounds on change.
           Visual: the grid re-tiles to fill the new window. */
        let (w, h) = drawer.size();
        if w != screen.width || h != screen.height {
            screen = FrameBuffer::new(w, h);
            engine.on_resize(w, h);
        }
        if screen.pixels.is_empty() {
            // Mid-resize the window can be zero-sized; skip the tick and
            // keep the event queue alive until it comes back.
            drawer.pump();
            continue;
        }

        /* 2) Inputs: pointer position (throttled inside the tracker), click
           edges, and the light/dark toggle. */
        if let Some((mx, my)) = drawer.mouse_pos() {
            engine.on_pointer_move(mx, my, now);
            if drawer.left_clicked() {
                engine.on_click(mx, my); // visual: a ring starts here
            }
        }
        if drawer.d_pressed_once() {
            engine.toggle_color_mode(); // visual: colors invert
        }

        /* 3) Tick: trail append/age, ripple advance, pointer smoothing, then
           repaint the whole grid into the screen buffer. */
        engine.tick(&mut screen);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter (prints to terminal once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            println!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
