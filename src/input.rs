// Pointer tracking: raw position (throttled), a smoothed "delayed" position,
// and a bounded trail of recent smoothed positions.
// Visual outcomes:
// - Segments tilt toward a point that lags slightly behind the real cursor.
// - A glowing wake follows the cursor and fades out over half a second.

use crate::types::{Coordinate, TrailPoint};
use std::time::{Duration, Instant};

/// Trail points are evicted once their age reaches this many ticks.
pub const TRAIL_MAX_AGE: u32 = 30;

/// Raw pointer updates are accepted at most once per this window (~60Hz),
/// whatever rate the host samples at.
const MOVE_THROTTLE: Duration = Duration::from_millis(16);

/// Per-tick smoothing factor. Lower = more delay, higher = more responsive.
const SMOOTHING: f32 = 0.05;

/// Minimum per-axis movement of the smoothed position before a new trail
/// point is recorded. Keeps a stationary or slow cursor from flooding the
/// trail with near-duplicate points.
const MOVE_GATE_PX: f32 = 5.0;

pub struct PointerTracker {
    mouse_pos: Coordinate,         // latest accepted raw position (write-only input)
    delayed_pos: Coordinate,       // eased toward mouse_pos every tick
    trail: Vec<TrailPoint>,
    pool: Vec<TrailPoint>,         // storage recycled from evicted points
    last_accepted: Option<Instant>,
    fresh_allocations: usize,      // pool misses; flat once the pool warms up
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            mouse_pos: Coordinate::default(),
            delayed_pos: Coordinate::default(),
            trail: Vec::new(),
            pool: Vec::new(),
            last_accepted: None,
            fresh_allocations: 0,
        }
    }

    /// Record a raw pointer position. Updates arriving within 16ms of the
    /// last *accepted* one are dropped; the acceptance time only advances
    /// when an update goes through.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, now: Instant) {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < MOVE_THROTTLE {
                return;
            }
        }
        self.last_accepted = Some(now);
        self.mouse_pos = Coordinate { x, y };
    }

    /// The trail half of the tick: append a point at the current smoothed
    /// position if it has moved enough, then age every point and recycle the
    /// expired ones. Runs before `smooth()` so the appended point is the
    /// position the previous frame actually rendered with.
    pub fn advance_trail(&mut self) {
        let moved = match self.trail.last() {
            None => true,
            Some(last) => {
                (self.delayed_pos.x - last.x).abs() > MOVE_GATE_PX
                    || (self.delayed_pos.y - last.y).abs() > MOVE_GATE_PX
            }
        };
        if moved {
            let point = self.take_point(self.delayed_pos.x, self.delayed_pos.y);
            self.trail.push(point);
        }

        for point in &mut self.trail {
            point.age += 1;
        }
        let mut i = 0;
        while i < self.trail.len() {
            if self.trail[i].age >= TRAIL_MAX_AGE {
                // Keep the append order intact; the trail never exceeds a few
                // dozen points so the shift is cheap.
                let point = self.trail.remove(i);
                self.pool.push(point);
            } else {
                i += 1;
            }
        }
    }

    /// The smoothing half of the tick: first-order low-pass of the raw
    /// position, applied independently per axis.
    pub fn smooth(&mut self) {
        self.delayed_pos.x += (self.mouse_pos.x - self.delayed_pos.x) * SMOOTHING;
        self.delayed_pos.y += (self.mouse_pos.y - self.delayed_pos.y) * SMOOTHING;
    }

    /// Pull a point from the recycle pool, or allocate if the pool is dry.
    fn take_point(&mut self, x: f32, y: f32) -> TrailPoint {
        match self.pool.pop() {
            Some(mut point) => {
                point.x = x;
                point.y = y;
                point.age = 0;
                point
            }
            None => {
                self.fresh_allocations += 1;
                TrailPoint { x, y, age: 0 }
            }
        }
    }

    pub fn delayed_pos(&self) -> Coordinate {
        self.delayed_pos
    }

    pub fn trail(&self) -> &[TrailPoint] {
        &self.trail
    }

    /// Number of trail points ever allocated (pool misses). Stays flat once
    /// the pool covers the peak trail length.
    pub fn fresh_allocations(&self) -> usize {
        self.fresh_allocations
    }
}
