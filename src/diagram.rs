use std::panic;
use std::sync::Arc;
use std::thread;

use rand::Rng;

use crate::{DistanceMetric, Point};

/// Draws `count` seed coordinates, each component uniform in `[0, dimension)`.
/// Repeats are allowed; the output order defines seed identity and
/// tie-break priority and must be preserved downstream.
pub fn generate_seeds<R: Rng>(rng: &mut R, width: u32, height: u32, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
        })
        .collect()
}

/// Index of the seed closest to `p`. The running minimum starts at seed 0
/// unconditionally and is replaced only on a strictly smaller distance, so
/// equidistant seeds resolve to the earliest index.
pub fn nearest_seed(p: Point, seeds: &[Point], metric: DistanceMetric) -> u32 {
    let mut best = 0u32;
    let mut best_d = metric.distance(p, seeds[0]);
    for (i, s) in seeds.iter().enumerate().skip(1) {
        let d = metric.distance(p, *s);
        if d < best_d {
            best_d = d;
            best = i as u32;
        }
    }
    best
}

/// Brute-force nearest-seed assignment for every pixel, row-major.
/// O(W·H·N) by design. The scan is split into disjoint row bands across
/// `num_threads` workers; each band is written only by its own worker, and
/// the result is bit-identical to the sequential scan for any worker count.
pub fn assign_regions(
    seeds: &[Point],
    width: u32,
    height: u32,
    metric: DistanceMetric,
    num_threads: usize,
) -> Vec<u32> {
    assert!(!seeds.is_empty(), "seed sequence must not be empty");

    let num_threads = num_threads.max(1).min(height as usize);
    if num_threads <= 1 {
        return assign_rows(seeds, width, 0, height, metric);
    }

    let seeds_arc: Arc<Vec<Point>> = Arc::new(seeds.to_vec());
    let rows_per = (height as usize + num_threads - 1) / num_threads;
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let seeds_c = Arc::clone(&seeds_arc);
        let start = (t * rows_per) as u32;
        let end = ((t + 1) * rows_per).min(height as usize) as u32;
        handles.push(thread::spawn(move || {
            assign_rows(&seeds_c, width, start, end, metric)
        }));
    }

    let mut out = Vec::with_capacity(width as usize * height as usize);
    for handle in handles {
        match handle.join() {
            Ok(band) => out.extend(band),
            Err(payload) => panic::resume_unwind(payload),
        }
    }
    out
}

fn assign_rows(
    seeds: &[Point],
    width: u32,
    row_start: u32,
    row_end: u32,
    metric: DistanceMetric,
) -> Vec<u32> {
    let mut band = Vec::with_capacity(width as usize * (row_end - row_start) as usize);
    for y in row_start..row_end {
        for x in 0..width {
            band.push(nearest_seed(Point { x, y }, seeds, metric));
        }
    }
    band
}
