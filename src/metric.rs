use crate::Point;

/// Distance policy used for both the nearest-seed search and the seed
/// marker disk membership test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Squared Euclidean distance. The square root is never taken; only
    /// relative ordering matters, so comparing squares is enough.
    Euclidean,
    /// Manhattan (taxicab) distance.
    Manhattan,
}

impl DistanceMetric {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" | "squared" => Some(Self::Euclidean),
            "manhattan" | "l1" | "taxicab" => Some(Self::Manhattan),
            _ => None,
        }
    }

    #[inline]
    pub fn distance(self, a: Point, b: Point) -> u64 {
        let dx = (a.x as i64 - b.x as i64).unsigned_abs();
        let dy = (a.y as i64 - b.y as i64).unsigned_abs();
        match self {
            Self::Euclidean => dx * dx + dy * dy,
            Self::Manhattan => dx + dy,
        }
    }

    /// Strict disk membership around `center`. The threshold is `radius²`
    /// for euclidean (the stored distance is squared) and `radius` for
    /// manhattan; the asymmetry is intentional, not something to normalize.
    #[inline]
    pub fn within_disk(self, center: Point, p: Point, radius: u32) -> bool {
        let r = radius as u64;
        let threshold = match self {
            Self::Euclidean => r * r,
            Self::Manhattan => r,
        };
        self.distance(center, p) < threshold
    }
}
