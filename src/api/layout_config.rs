use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::RemainderPolicy;
use crate::error::{ChartError, ChartResult};

/// Layout configuration for [`super::ChartLayout`].
///
/// Serializable so host applications can keep it next to their chart data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_redistribute_remainder")]
    pub redistribute_remainder: bool,
    /// Horizontal space reserved for one time-axis label.
    #[serde(default = "default_label_width_px")]
    pub label_width_px: f64,
    /// Fixed offset for time-axis date labels; `None` uses the host's local
    /// time zone.
    #[serde(default)]
    pub label_utc_offset_seconds: Option<i32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            redistribute_remainder: default_redistribute_remainder(),
            label_width_px: default_label_width_px(),
            label_utc_offset_seconds: None,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_redistribute_remainder(mut self, redistribute: bool) -> Self {
        self.redistribute_remainder = redistribute;
        self
    }

    #[must_use]
    pub fn with_label_width_px(mut self, label_width_px: f64) -> Self {
        self.label_width_px = label_width_px;
        self
    }

    #[must_use]
    pub fn with_label_utc_offset_seconds(mut self, offset_seconds: Option<i32>) -> Self {
        self.label_utc_offset_seconds = offset_seconds;
        self
    }

    #[must_use]
    pub fn remainder_policy(self) -> RemainderPolicy {
        RemainderPolicy::from_redistribute(self.redistribute_remainder)
    }

    /// Fixed label offset, or `None` for host-local labels.
    pub fn label_offset(self) -> ChartResult<Option<FixedOffset>> {
        let Some(seconds) = self.label_utc_offset_seconds else {
            return Ok(None);
        };
        FixedOffset::east_opt(seconds).map(Some).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "label utc offset must be within +/-86399 seconds, got {seconds}"
            ))
        })
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.label_width_px.is_finite() || self.label_width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "label width must be finite and >= 0".to_owned(),
            ));
        }
        self.label_offset().map(|_| ())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_redistribute_remainder() -> bool {
    true
}

fn default_label_width_px() -> f64 {
    60.0
}
