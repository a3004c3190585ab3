use crate::core::{AreaGeometry, Color, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Band paint after resolution against the band's data points.
#[derive(Debug, Clone, PartialEq)]
pub enum BandPaint {
    Solid(Color),
    /// One color per data point, in `top_line` order (horizontal gradient).
    PerPoint(Vec<Color>),
}

/// One stacked band ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPrimitive {
    pub key: String,
    pub stroke: Option<Color>,
    pub paint: BandPaint,
    pub geometry: AreaGeometry,
}

impl BandPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        let vertices = self
            .geometry
            .top_line
            .iter()
            .chain(&self.geometry.fill_polygon);
        if !vertices_finite(vertices) {
            return Err(ChartError::InvalidData(format!(
                "band `{}` has non-finite vertices",
                self.key
            )));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        match &self.paint {
            BandPaint::Solid(color) => color.validate(),
            BandPaint::PerPoint(colors) => {
                if colors.len() != self.geometry.top_line.len() {
                    return Err(ChartError::InvalidData(format!(
                        "band `{}` gradient has {} stops for {} points",
                        self.key,
                        colors.len(),
                        self.geometry.top_line.len()
                    )));
                }
                colors.iter().try_for_each(|color| color.validate())
            }
        }
    }
}

/// Focal point of the focused band, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusMarker {
    pub position: PixelPoint,
    pub fill: Color,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Bands are ordered bottom-to-top. The hover line and marker are present only
/// while something is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaChartFrame {
    pub viewport: Viewport,
    pub bands: Vec<BandPrimitive>,
    pub hover_line_x: Option<f64>,
    pub marker: Option<FocusMarker>,
}

impl AreaChartFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bands: Vec::new(),
            hover_line_x: None,
            marker: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_drawable() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for band in &self.bands {
            band.validate()?;
        }
        if self.hover_line_x.is_some_and(|x| !x.is_finite()) {
            return Err(ChartError::InvalidData(
                "hover line position must be finite".to_owned(),
            ));
        }
        if let Some(marker) = self.marker {
            if !vertices_finite([marker.position].iter()) {
                return Err(ChartError::InvalidData(
                    "marker position must be finite".to_owned(),
                ));
            }
            marker.fill.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

fn vertices_finite<'a>(mut vertices: impl Iterator<Item = &'a PixelPoint>) -> bool {
    vertices.all(|vertex| vertex.x.is_finite() && vertex.y.is_finite())
}
