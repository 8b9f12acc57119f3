//! Decorative particle field.
//!
//! Twenty points drift across the viewport with constant velocity and wrap to the
//! opposite edge when they leave it. Coordinates are in viewport units; the
//! terminal renderer maps them onto a canvas of the same size.

use rand::Rng;

/// Number of particles, fixed for the session.
pub const PARTICLE_COUNT: usize = 20;

/// Viewport units per terminal column.
pub const CELL_WIDTH: f64 = 8.0;
/// Viewport units per terminal row.
pub const CELL_HEIGHT: f64 = 16.0;

/// Viewport bounds for a terminal of `cols` x `rows` cells.
///
/// Particles move up to one unit per tick, so each cell spans several units to keep
/// the drift slow on screen.
pub fn viewport_from_cells(cols: u16, rows: u16) -> (f64, f64) {
    (f64::from(cols) * CELL_WIDTH, f64::from(rows) * CELL_HEIGHT)
}

/// A single animated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Stable identifier in `0..PARTICLE_COUNT`
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Diameter in `[1, 4)`
    pub size: f64,
    /// Horizontal velocity per tick in `[-1, 1)`
    pub speed_x: f64,
    /// Vertical velocity per tick in `[-1, 1)`
    pub speed_y: f64,
}

impl Particle {
    /// Create a particle with a random position inside `width` x `height`
    pub fn random<R: Rng + ?Sized>(id: u32, width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            size: rng.gen::<f64>() * 3.0 + 1.0,
            speed_x: (rng.gen::<f64>() - 0.5) * 2.0,
            speed_y: (rng.gen::<f64>() - 0.5) * 2.0,
        }
    }

    /// Advance one step, wrapping at the viewport edges
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.speed_x, width);
        self.y = wrap(self.y + self.speed_y, height);
    }
}

// Exact wraparound: past the far edge restarts at 0, below 0 restarts at the far edge.
fn wrap(value: f64, bound: f64) -> f64 {
    if value > bound {
        0.0
    } else if value < 0.0 {
        bound
    } else {
        value
    }
}

/// The full set of particles plus the bounds they move in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Generate [`PARTICLE_COUNT`] particles using the thread-local RNG
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, &mut rand::thread_rng())
    }

    /// Generate [`PARTICLE_COUNT`] particles from the given RNG
    pub fn with_rng<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..PARTICLE_COUNT as u32)
            .map(|id| Particle::random(id, width, height, rng))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Move every particle by its velocity
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Change the bounds. Particles outside the new bounds wrap on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
