//! Snowfall particle field used behind menu screens.
//!
//! Flakes fall straight down at their own constant speed and drift one
//! column left or right (or not at all) every `SNOW_JITTER_MS`. A flake that
//! leaves the bottom edge restarts on the top row at a random column; drifting
//! past a side edge wraps to the opposite side.
//!
//! Vertical positions are kept in thousandths of a row so slow flakes still
//! advance with a 16ms timestep.

use crate::rng::RandomSource;
use crate::types::SNOW_JITTER_MS;

/// Slowest fall speed, in milli-rows per second
pub const SNOW_SPEED_MIN: i32 = 1_500;

/// Fastest fall speed, in milli-rows per second
pub const SNOW_SPEED_MAX: i32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flake {
    pub x: i32,
    y_milli: i32,
    speed: i32,
}

impl Flake {
    /// Row the flake currently occupies
    pub fn row(&self) -> i32 {
        self.y_milli / 1000
    }

    /// Fall speed in milli-rows per second
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Heavier-looking glyph for fast flakes
    pub fn is_fast(&self) -> bool {
        self.speed >= (SNOW_SPEED_MIN + SNOW_SPEED_MAX) / 2
    }
}

#[derive(Debug, Clone)]
pub struct Snowfall {
    width: i32,
    height: i32,
    flakes: Vec<Flake>,
    jitter_timer_ms: u32,
}

impl Snowfall {
    /// Scatter `count` flakes over a `width x height` area.
    pub fn new<R: RandomSource + ?Sized>(width: i32, height: i32, count: usize, rng: &mut R) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let flakes = (0..count)
            .map(|_| Flake {
                x: rng.range_inclusive(0, width - 1),
                y_milli: rng.range_inclusive(0, height * 1000 - 1),
                speed: rng.range_inclusive(SNOW_SPEED_MIN, SNOW_SPEED_MAX),
            })
            .collect();
        Self {
            width,
            height,
            flakes,
            jitter_timer_ms: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    /// Change the area, pulling flakes that fell outside back in.
    pub fn resize<R: RandomSource + ?Sized>(&mut self, width: i32, height: i32, rng: &mut R) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        for flake in &mut self.flakes {
            if flake.x >= width {
                flake.x = rng.range_inclusive(0, width - 1);
            }
            if flake.y_milli >= height * 1000 {
                flake.y_milli = 0;
            }
        }
    }

    /// Advance every flake by `elapsed_ms`.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, elapsed_ms: u32, rng: &mut R) {
        let bottom = self.height * 1000;
        for flake in &mut self.flakes {
            flake.y_milli += (flake.speed as i64 * elapsed_ms as i64 / 1000) as i32;
            if flake.y_milli >= bottom {
                flake.y_milli = 0;
                flake.x = rng.range_inclusive(0, self.width - 1);
            }
        }

        self.jitter_timer_ms += elapsed_ms;
        while self.jitter_timer_ms >= SNOW_JITTER_MS {
            self.jitter_timer_ms -= SNOW_JITTER_MS;
            for flake in &mut self.flakes {
                flake.x += rng.range_inclusive(-1, 1);
                if flake.x < 0 {
                    flake.x = self.width - 1;
                } else if flake.x >= self.width {
                    flake.x = 0;
                }
            }
        }
    }
}
