use image::{GrayImage, Luma};

use crate::{DistanceMetric, Palette, Point};

/// Row-major grayscale pixel buffer, the sole output artifact of a run.
/// Allocated background-filled, overwritten by the region fill, optionally
/// post-processed with seed marker disks, then converted and never mutated
/// again.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, background: u8) -> Self {
        Self {
            width,
            height,
            data: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites every pixel with its resolved palette color. `assignment`
    /// is the row-major nearest-seed index map and must cover the whole
    /// buffer; no pixel is left at the background value afterwards.
    pub fn fill_regions(&mut self, assignment: &[u32], palette: &Palette) {
        debug_assert_eq!(assignment.len(), self.data.len());
        for (out, &seed_index) in self.data.iter_mut().zip(assignment.iter()) {
            *out = palette.color_of(seed_index);
        }
    }

    /// Marks each seed with a filled disk of a fixed color, drawn after the
    /// region fill so the markers take precedence. Overlapping disks are
    /// harmless since the color is constant. A radius of 0 draws nothing.
    pub fn overlay_disks(
        &mut self,
        seeds: &[Point],
        radius: u32,
        color: u8,
        metric: DistanceMetric,
    ) {
        if radius == 0 {
            return;
        }
        for &seed in seeds {
            self.fill_disk(seed, radius, color, metric);
        }
    }

    /// Scans the inclusive `center ± radius` box, clamped to the image
    /// extent; coordinates outside the image are skipped, never written.
    fn fill_disk(&mut self, center: Point, radius: u32, color: u8, metric: DistanceMetric) {
        let x0 = center.x.saturating_sub(radius);
        let x1 = center.x.saturating_add(radius).min(self.width - 1);
        let y0 = center.y.saturating_sub(radius);
        let y1 = center.y.saturating_add(radius).min(self.height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if metric.within_disk(center, Point { x, y }, radius) {
                    let i = self.index(x, y);
                    self.data[i] = color;
                }
            }
        }
    }

    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                img.put_pixel(x, y, Luma([self.get(x, y)]));
            }
        }
        img
    }
}
