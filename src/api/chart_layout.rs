use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    RawChartInput, ScaleParameters, SeriesRecord, Viewport, axial_shift, label_divider,
    max_value_in_window, normalize, normalize_with_offset, pixel_per_sample, sample_count,
};
use crate::error::{ChartError, ChartResult};

use super::LayoutConfig;

/// Everything the renderer needs for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub container_width: f64,
    pub sample_count: usize,
    /// Y-axis upper bound for the visible line series.
    pub max_value: f64,
    pub scale: ScaleParameters,
}

/// Holds normalized series and the current viewport, and derives layout
/// parameters from them.
///
/// All derivations are recomputed on request; nothing is cached between
/// passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    config: LayoutConfig,
    series: Vec<SeriesRecord>,
    viewport: Viewport,
}

impl ChartLayout {
    pub fn new(config: LayoutConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            series: Vec::new(),
            viewport: Viewport::new(0.0, 0.0),
        })
    }

    /// Builds a layout from raw input with the viewport covering every sample.
    pub fn from_input(input: &RawChartInput, config: LayoutConfig) -> ChartResult<Self> {
        let mut layout = Self::new(config)?;
        layout.set_input(input)?;
        Ok(layout)
    }

    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesRecord] {
        &self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Normalizes `input` and resets the viewport to the full range.
    pub fn set_input(&mut self, input: &RawChartInput) -> ChartResult<()> {
        let series = match self.config.label_offset()? {
            Some(offset) => normalize_with_offset(input, offset),
            None => normalize(input),
        };
        self.set_series(series);
        Ok(())
    }

    /// Replaces series and resets the viewport to the full range.
    pub fn set_series(&mut self, series: Vec<SeriesRecord>) {
        self.series = series;
        self.viewport = Viewport::full(sample_count(&self.series));
        debug!(
            series = self.series.len(),
            samples = sample_count(&self.series),
            "layout series replaced"
        );
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "viewport must be finite with from <= to, got from={} to={}",
                viewport.from, viewport.to
            )));
        }
        trace!(
            from = viewport.from,
            to = viewport.to,
            span = viewport.span(),
            "set viewport"
        );
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        sample_count(&self.series)
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        max_value_in_window(&self.series, self.viewport.from, self.viewport.to)
    }

    /// Scale parameters for a plot area `container_width` pixels wide.
    #[must_use]
    pub fn scale_parameters(&self, container_width: f64) -> ScaleParameters {
        let pixel_per_sample =
            pixel_per_sample(&self.series, container_width, self.config.remainder_policy());
        ScaleParameters {
            pixel_per_sample,
            axial_shift: axial_shift(pixel_per_sample, self.viewport.from),
            label_divider: label_divider(self.config.label_width_px, pixel_per_sample),
        }
    }

    #[must_use]
    pub fn snapshot(&self, container_width: f64) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport: self.viewport,
            container_width,
            sample_count: self.sample_count(),
            max_value: self.max_value(),
            scale: self.scale_parameters(container_width),
        }
    }

    /// Serializes the current layout snapshot and series to pretty JSON.
    pub fn snapshot_json_pretty(&self, container_width: f64) -> ChartResult<String> {
        #[derive(Serialize)]
        struct Payload<'a> {
            layout: LayoutSnapshot,
            series: &'a [SeriesRecord],
        }

        let payload = Payload {
            layout: self.snapshot(container_width),
            series: &self.series,
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
