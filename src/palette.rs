use std::collections::HashMap;

use log::warn;
use rand::Rng;

use crate::Point;

/// Color used when a palette lookup misses. A miss is a defect (it means a
/// pixel resolved to a seed the palette does not know), so it degrades to
/// this instead of failing.
pub const FALLBACK_COLOR: u8 = 0;

/// One luminance value per seed, keyed by the seed's index in generation
/// order.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<u8>,
}

impl Palette {
    /// Assigns each of `seed_count` seeds a color drawn uniformly from
    /// `0..=255`.
    pub fn generate<R: Rng>(rng: &mut R, seed_count: usize) -> Self {
        Self {
            colors: (0..seed_count).map(|_| rng.gen::<u8>()).collect(),
        }
    }

    pub fn from_colors(colors: Vec<u8>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolves the color of a seed index. Out-of-range indices degrade to
    /// [`FALLBACK_COLOR`] with a warning rather than panicking.
    pub fn color_of(&self, seed_index: u32) -> u8 {
        match self.colors.get(seed_index as usize) {
            Some(&c) => c,
            None => {
                warn!(
                    "palette lookup miss for seed index {} (palette has {} entries), using fallback",
                    seed_index,
                    self.colors.len()
                );
                FALLBACK_COLOR
            }
        }
    }

    /// Coordinate-keyed view of the palette. Seeds that share a coordinate
    /// collapse to one key, the later seed's color winning, which silently
    /// merges their regions — callers that need exact identity should stay
    /// on the index-keyed lookup.
    pub fn by_coordinate(&self, seeds: &[Point]) -> CoordinatePalette {
        let map = seeds
            .iter()
            .zip(self.colors.iter())
            .map(|(&p, &c)| (p, c))
            .collect();
        CoordinatePalette { map }
    }
}

/// Secondary, coordinate-keyed palette view. See [`Palette::by_coordinate`]
/// for the collision-merge caveat.
#[derive(Clone, Debug)]
pub struct CoordinatePalette {
    map: HashMap<Point, u8>,
}

impl CoordinatePalette {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn color_at(&self, p: Point) -> u8 {
        match self.map.get(&p) {
            Some(&c) => c,
            None => {
                warn!("no palette entry for seed at ({}, {}), using fallback", p.x, p.y);
                FALLBACK_COLOR
            }
        }
    }
}
