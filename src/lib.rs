use image::GrayImage;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

mod diagram;
mod metric;
mod palette;
mod raster;

pub use diagram::{assign_regions, generate_seeds, nearest_seed};
pub use metric::DistanceMetric;
pub use palette::{CoordinatePalette, Palette, FALLBACK_COLOR};
pub use raster::PixelBuffer;

pub const COLOR_BLACK: u8 = 0;
pub const COLOR_GREY: u8 = 128;
pub const COLOR_WHITE: u8 = 255;

/// An (x, y) position in image space: `x` is the column, `y` the row, both
/// 0-indexed. Pixels and seeds share this space and are distinguished by
/// role only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Error)]
pub enum VoronoiError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("seed count must be at least 1")]
    EmptySeedSet,
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VoronoiError>;

#[derive(Debug, Clone)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub seed_count: usize,
    /// Radius of the seed marker disks; 0 disables the overlay.
    pub disk_radius: u32,
    pub metric: DistanceMetric,
    pub background: u8,
    pub disk_color: u8,
    /// Fixing this reproduces a run bit-for-bit.
    pub rng_seed: Option<u64>,
    pub num_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 600,
            height: 800,
            seed_count: 20,
            disk_radius: 5,
            metric: DistanceMetric::Euclidean,
            background: COLOR_BLACK,
            disk_color: COLOR_BLACK,
            rng_seed: None,
            num_threads: num_cpus::get().max(1),
        }
    }
}

impl Config {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VoronoiError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.seed_count == 0 {
            return Err(VoronoiError::EmptySeedSet);
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Runs the full pipeline in memory: seeds → nearest-seed assignment →
/// palette → region fill → seed marker overlay. Fails fast on an invalid
/// configuration before any computation.
pub fn render(config: &Config) -> Result<GrayImage> {
    config.validate()?;
    info!(
        "Rendering {}x{} Voronoi diagram, {} seeds, {:?} metric",
        config.width, config.height, config.seed_count, config.metric
    );

    // Seed coordinates and palette colors come from the same RNG, in this
    // order, so a fixed rng_seed reproduces the whole run.
    let mut rng = config.rng();
    let seeds = generate_seeds(&mut rng, config.width, config.height, config.seed_count);
    let assignment = assign_regions(
        &seeds,
        config.width,
        config.height,
        config.metric,
        config.num_threads,
    );
    let palette = Palette::generate(&mut rng, seeds.len());

    let mut buffer = PixelBuffer::new(config.width, config.height, config.background);
    buffer.fill_regions(&assignment, &palette);
    buffer.overlay_disks(&seeds, config.disk_radius, config.disk_color, config.metric);
    Ok(buffer.to_image())
}

/// [`render`] plus the single terminal write. The output format follows the
/// path extension. Any failure aborts with no partial file written.
pub fn render_to_file(config: &Config, path: &str) -> Result<()> {
    let img = render(config)?;
    img.save(path)?;
    info!("Output saved: {}", path);
    Ok(())
}
