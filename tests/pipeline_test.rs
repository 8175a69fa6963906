use rand::rngs::StdRng;
use rand::SeedableRng;
use voronoi_raster::{
    assign_regions, generate_seeds, render, Config, DistanceMetric, Palette, PixelBuffer, Point,
    VoronoiError,
};

fn test_config() -> Config {
    Config {
        width: 24,
        height: 18,
        seed_count: 6,
        disk_radius: 2,
        rng_seed: Some(99),
        num_threads: 2,
        ..Config::default()
    }
}

#[test]
fn render_reports_configured_dimensions() {
    let img = render(&test_config()).expect("render should succeed");
    assert_eq!(img.width(), 24);
    assert_eq!(img.height(), 18);
}

#[test]
fn fixed_rng_seed_reproduces_output() {
    let cfg = test_config();
    let a = render(&cfg).expect("first render should succeed");
    let b = render(&cfg).expect("second render should succeed");
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn worker_count_does_not_change_output() {
    let mut cfg = test_config();
    cfg.num_threads = 1;
    let a = render(&cfg).expect("sequential render should succeed");
    cfg.num_threads = 5;
    let b = render(&cfg).expect("parallel render should succeed");
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn single_pixel_single_seed() {
    let cfg = Config {
        width: 1,
        height: 1,
        seed_count: 1,
        disk_radius: 0,
        rng_seed: Some(3),
        num_threads: 1,
        ..Config::default()
    };
    let img = render(&cfg).expect("render should succeed");
    assert_eq!((img.width(), img.height()), (1, 1));

    // Replay the pipeline's RNG draws: seed coordinates first, palette next.
    let mut rng = StdRng::seed_from_u64(3);
    let seeds = generate_seeds(&mut rng, 1, 1, 1);
    assert_eq!(seeds[0], Point { x: 0, y: 0 });
    let palette = Palette::generate(&mut rng, 1);
    assert_eq!(img.get_pixel(0, 0).0[0], palette.color_of(0));
}

#[test]
fn single_seed_at_origin_paints_a_solid_image() {
    let seeds = vec![Point { x: 0, y: 0 }];
    let assignment = assign_regions(&seeds, 10, 10, DistanceMetric::Euclidean, 1);
    assert!(assignment.iter().all(|&i| i == 0));

    let palette = Palette::from_colors(vec![137]);
    let mut buf = PixelBuffer::new(10, 10, 0);
    buf.fill_regions(&assignment, &palette);
    assert!(buf.as_raw().iter().all(|&c| c == 137));
}

#[test]
fn seed_markers_take_precedence_over_the_fill() {
    let mut cfg = test_config();
    cfg.disk_color = 255;
    cfg.disk_radius = 2;
    let img = render(&cfg).expect("render should succeed");

    // Seed positions replay from the fixed RNG seed.
    let mut rng = StdRng::seed_from_u64(99);
    let seeds = generate_seeds(&mut rng, cfg.width, cfg.height, cfg.seed_count);
    for s in seeds {
        assert_eq!(img.get_pixel(s.x, s.y).0[0], 255);
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    let mut cfg = test_config();
    cfg.width = 0;
    assert!(matches!(
        render(&cfg),
        Err(VoronoiError::InvalidDimensions { .. })
    ));
}

#[test]
fn zero_seed_count_is_rejected() {
    let mut cfg = test_config();
    cfg.seed_count = 0;
    assert!(matches!(render(&cfg), Err(VoronoiError::EmptySeedSet)));
}
