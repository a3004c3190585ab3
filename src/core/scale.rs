use serde::{Deserialize, Serialize};

/// Invertible linear mapping between a data domain and a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how value
/// axes put larger values closer to the top of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Domain value to pixel.
    ///
    /// A zero-width domain maps every value onto the middle of the range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let t = normalize(value, self.domain_start, self.domain_end);
        self.range_start + t * (self.range_end - self.range_start)
    }

    /// Pixel to domain value.
    ///
    /// A zero-width range inverts onto the middle of the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t = normalize(pixel, self.range_start, self.range_end);
        self.domain_start + t * (self.domain_end - self.domain_start)
    }
}

fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span == 0.0 || !span.is_finite() {
        return 0.5;
    }
    (value - start) / span
}
