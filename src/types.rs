// Core data shared by the input, simulation and rendering modules.

/// Visual grid cell size and interactive segment length, in pixels.
/// Smaller segments -> more segments -> more per-frame computation.
pub const GRID_SIZE: f32 = 75.0;
pub const SEGMENT_SIZE: f32 = 75.0;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Visual: the whole window becomes `color` (our per-frame clear).
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

/// Plain 2-D point in window pixel units.
#[derive(Clone, Copy, Default, Debug)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

/// A past smoothed-pointer position. `age` counts ticks, not wall time;
/// the tracker evicts a point once its age reaches 30 and recycles its
/// storage for the next appended point.
#[derive(Debug)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub age: u32,
}

/// One expanding click wave.
/// Visual: a bright ring that travels outward from the click and fades.
#[derive(Debug)]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub max_radius: f32,
    pub intensity: f32,
}

/// Row/column counts for the three lattices, derived from the surface size.
/// Recomputed only on resize; never touched per frame.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub horizontal_rows: usize,   // coarse grid rows (horizontal lines)
    pub vertical_cols: usize,     // coarse grid columns (vertical lines)
    pub horizontal_cols: usize,   // segments along each horizontal line
    pub vertical_rows: usize,     // segments along each vertical line
    pub intersection_rows: usize,
    pub intersection_cols: usize,
}

impl GridBounds {
    /// Derive all lattice counts from the surface size.
    /// A zero-sized surface (mid-resize, teardown race) yields zero segments
    /// everywhere so the render loops simply do nothing.
    pub fn from_surface(width: usize, height: usize, grid_size: f32, segment_size: f32) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }

        let w = width as f32;
        let h = height as f32;
        let grid_rows = (h / grid_size).ceil() as usize;
        let grid_cols = (w / grid_size).ceil() as usize;

        Self {
            horizontal_rows: grid_rows,
            vertical_cols: grid_cols,
            horizontal_cols: (w / segment_size).ceil() as usize,
            vertical_rows: (h / segment_size).ceil() as usize,
            intersection_rows: grid_rows + 1,
            intersection_cols: grid_cols + 1,
        }
    }
}
