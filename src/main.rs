// CLI entry for voronoi_raster
use anyhow::{bail, Result};
use clap::{Parser, ValueHint};
use voronoi_raster::{render_to_file, Config, DistanceMetric};

#[derive(Parser, Debug)]
#[command(name = "voronoi_raster", version, about = "Random Voronoi diagram raster generator")]
struct Cli {
    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,
    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
    /// Number of seed points
    #[arg(long = "seeds", default_value_t = 20)]
    seed_count: usize,
    /// Seed marker disk radius (0 disables the markers)
    #[arg(long = "radius", default_value_t = 5)]
    disk_radius: u32,
    /// Distance metric: euclidean | manhattan
    #[arg(long, default_value = "euclidean")]
    metric: String,
    /// Background luminance (0-255)
    #[arg(long, default_value_t = 0)]
    background: u8,
    /// Seed marker luminance (0-255)
    #[arg(long = "disk-color", default_value_t = 0)]
    disk_color: u8,
    /// Fix the RNG seed for reproducible output
    #[arg(long = "rng-seed")]
    rng_seed: Option<u64>,
    /// Number of worker threads for the assignment pass
    #[arg(long = "threads")]
    threads: Option<usize>,

    /// Output image path (format chosen by extension, e.g. .png or .ppm)
    #[arg(value_hint = ValueHint::FilePath)]
    output: String,
}

fn build_config(cli: &Cli) -> Result<Config> {
    let Some(metric) = DistanceMetric::from_str(&cli.metric) else {
        bail!("unknown distance metric: {}", cli.metric);
    };
    let mut cfg = Config::default();
    cfg.width = cli.width;
    cfg.height = cli.height;
    cfg.seed_count = cli.seed_count;
    cfg.disk_radius = cli.disk_radius;
    cfg.metric = metric;
    cfg.background = cli.background;
    cfg.disk_color = cli.disk_color;
    cfg.rng_seed = cli.rng_seed;
    if let Some(v) = cli.threads {
        cfg.num_threads = v.max(1);
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = build_config(&cli)?;
    render_to_file(&cfg, &cli.output)?;
    Ok(())
}
