use std::fmt;
use std::sync::Arc;

use crate::core::{Color, StackedPoint};
use crate::error::{ChartError, ChartResult};

pub type GradientFn = Arc<dyn Fn(&StackedPoint) -> Color + Send + Sync + 'static>;
pub type StrokeResolverFn = Arc<dyn Fn(&str) -> Color + Send + Sync + 'static>;
pub type FillResolverFn = Arc<dyn Fn(&str) -> Fill + Send + Sync + 'static>;

/// Paint for a band or marker: one color, or one color per data point.
#[derive(Clone)]
pub enum Fill {
    Solid(Color),
    Gradient(GradientFn),
}

impl Fill {
    #[must_use]
    pub fn gradient(f: impl Fn(&StackedPoint) -> Color + Send + Sync + 'static) -> Self {
        Self::Gradient(Arc::new(f))
    }

    #[must_use]
    pub fn color_at(&self, point: &StackedPoint) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Gradient(f) => f(point),
        }
    }

    #[must_use]
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Gradient(_) => None,
        }
    }
}

impl fmt::Debug for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            Self::Gradient(_) => f.write_str("Gradient(..)"),
        }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Per-key paint resolvers supplied by the host.
///
/// `marker_fill_of` overrides `fill_of` for the focal marker only.
#[derive(Clone)]
pub struct LayerStyle {
    pub stroke_of: Option<StrokeResolverFn>,
    pub fill_of: FillResolverFn,
    pub marker_fill_of: Option<FillResolverFn>,
}

impl LayerStyle {
    #[must_use]
    pub fn new(fill_of: impl Fn(&str) -> Fill + Send + Sync + 'static) -> Self {
        Self {
            stroke_of: None,
            fill_of: Arc::new(fill_of),
            marker_fill_of: None,
        }
    }

    /// Same fill for every layer.
    #[must_use]
    pub fn uniform(fill: impl Into<Fill>) -> Self {
        let fill = fill.into();
        Self::new(move |_| fill.clone())
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke_of: impl Fn(&str) -> Color + Send + Sync + 'static) -> Self {
        self.stroke_of = Some(Arc::new(stroke_of));
        self
    }

    #[must_use]
    pub fn with_marker_fill(
        mut self,
        marker_fill_of: impl Fn(&str) -> Fill + Send + Sync + 'static,
    ) -> Self {
        self.marker_fill_of = Some(Arc::new(marker_fill_of));
        self
    }

    /// Resolves the paint of one layer. Each resolver runs once for `key`.
    #[must_use]
    pub fn resolve_layer_paint(&self, key: &str) -> LayerPaint {
        let fill = (self.fill_of)(key);
        let marker_fill = match &self.marker_fill_of {
            Some(marker_fill_of) => marker_fill_of(key),
            None => fill.clone(),
        };
        LayerPaint {
            stroke: self.stroke_of.as_ref().map(|stroke_of| stroke_of(key)),
            fill,
            marker_fill,
        }
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::uniform(Color::DARK_GRAY)
    }
}

impl fmt::Debug for LayerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerStyle")
            .field("has_stroke", &self.stroke_of.is_some())
            .field("has_marker_fill", &self.marker_fill_of.is_some())
            .finish_non_exhaustive()
    }
}

/// Resolved paint carried by a stacked layer for one data epoch.
#[derive(Debug, Clone)]
pub struct LayerPaint {
    pub stroke: Option<Color>,
    pub fill: Fill,
    pub marker_fill: Fill,
}

/// Two-stop linear color ramp over `[domain_start, domain_end]`.
///
/// Values outside the domain clamp to the nearest stop; a non-finite value
/// takes the low stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    domain_start: f64,
    domain_end: f64,
    low: Color,
    high: Color,
}

impl ColorRamp {
    pub fn new(domain: (f64, f64), low: Color, high: Color) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "color ramp domain must be finite".to_owned(),
            ));
        }
        low.validate()?;
        high.validate()?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            low,
            high,
        })
    }

    #[must_use]
    pub fn color_at(self, value: f64) -> Color {
        let span = self.domain_end - self.domain_start;
        let t = if span == 0.0 {
            0.0
        } else {
            (value - self.domain_start) / span
        };
        self.low.lerp(self.high, t)
    }
}
