use std::fmt::{self, Display};

use chrono::{FixedOffset, Local, TimeZone};
use indexmap::IndexMap;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::core::labels::format_day_month;
use crate::error::{ChartError, ChartResult};

/// Column key reserved for the shared time axis.
pub const TIME_AXIS_KEY: &str = "x";

/// Series kind tag as found in the `types` map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeriesKind {
    /// Time axis column.
    X,
    Line,
    Bar,
    Area,
    /// Any tag this crate does not interpret; kept verbatim.
    Other(String),
}

impl SeriesKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::X => "x",
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Area => "area",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for SeriesKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "x" => Self::X,
            "line" => Self::Line,
            "bar" => Self::Bar,
            "area" => Self::Area,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for SeriesKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_owned())
    }
}

impl From<SeriesKind> for String {
    fn from(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Other(tag) => tag,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw column: a series key followed by its samples.
///
/// Serialized as a flat JSON array, e.g. `["y0", 37, 20, 32]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub key: String,
    pub values: Vec<f64>,
}

impl RawColumn {
    #[must_use]
    pub fn new(key: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

impl Serialize for RawColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.key)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RawColumn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnVisitor;

        impl<'de> Visitor<'de> for ColumnVisitor {
            type Value = RawColumn;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array starting with a series key followed by numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawColumn, A::Error> {
                let key: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element::<f64>()? {
                    values.push(value);
                }
                Ok(RawColumn { key, values })
            }
        }

        deserializer.deserialize_seq(ColumnVisitor)
    }
}

/// Columnar chart payload plus per-series metadata maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawChartInput {
    pub columns: Vec<RawColumn>,
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    #[serde(default)]
    pub types: IndexMap<String, SeriesKind>,
    #[serde(default)]
    pub names: IndexMap<String, String>,
}

impl RawChartInput {
    pub fn from_json(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart input json: {e}")))
    }

    #[must_use]
    pub fn with_column(mut self, key: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push(RawColumn::new(key, values));
        self
    }

    #[must_use]
    pub fn with_type(mut self, key: impl Into<String>, kind: impl Into<SeriesKind>) -> Self {
        self.types.insert(key.into(), kind.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(key.into(), color.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(key.into(), name.into());
        self
    }
}

/// Variant-specific part of a [`SeriesRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesPayload {
    TimeAxis {
        labels: Vec<String>,
    },
    Values {
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        chart: Option<String>,
    },
}

/// Normalized series, index-aligned with every other record of the chart.
///
/// Metadata missing from the input maps stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRecord {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesKind>,
    pub values: Vec<f64>,
    pub name: String,
    #[serde(flatten)]
    pub payload: SeriesPayload,
}

impl SeriesRecord {
    #[must_use]
    pub fn is_time_axis(&self) -> bool {
        matches!(self.payload, SeriesPayload::TimeAxis { .. })
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        self.kind == Some(SeriesKind::Line)
    }

    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        match &self.payload {
            SeriesPayload::TimeAxis { labels } => Some(labels),
            SeriesPayload::Values { .. } => None,
        }
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match &self.payload {
            SeriesPayload::Values { color, .. } => color.as_deref(),
            SeriesPayload::TimeAxis { .. } => None,
        }
    }

    /// Display name of a value series.
    #[must_use]
    pub fn chart(&self) -> Option<&str> {
        match &self.payload {
            SeriesPayload::Values { chart, .. } => chart.as_deref(),
            SeriesPayload::TimeAxis { .. } => None,
        }
    }
}

/// Normalizes raw columns into series records, rendering time-axis labels in
/// the host's local time zone.
///
/// Output order and count match `input.columns`.
#[must_use]
pub fn normalize(input: &RawChartInput) -> Vec<SeriesRecord> {
    debug!(columns = input.columns.len(), zone = "local", "normalize chart input");
    normalize_in_zone(input, &Local)
}

/// Like [`normalize`], with time-axis labels rendered at a fixed `offset`.
#[must_use]
pub fn normalize_with_offset(input: &RawChartInput, offset: FixedOffset) -> Vec<SeriesRecord> {
    debug!(
        columns = input.columns.len(),
        offset_seconds = offset.local_minus_utc(),
        "normalize chart input"
    );
    normalize_in_zone(input, &offset)
}

fn normalize_in_zone<Tz>(input: &RawChartInput, zone: &Tz) -> Vec<SeriesRecord>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    input
        .columns
        .iter()
        .map(|column| normalize_column(input, column, zone))
        .collect()
}

fn normalize_column<Tz>(input: &RawChartInput, column: &RawColumn, zone: &Tz) -> SeriesRecord
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let name = column.key.clone();
    let kind = input.types.get(&name).cloned();
    if kind.is_none() {
        trace!(series = %name, "series has no type entry");
    }

    let payload = if name == TIME_AXIS_KEY {
        SeriesPayload::TimeAxis {
            labels: column
                .values
                .iter()
                .map(|&timestamp| format_day_month(timestamp, zone))
                .collect(),
        }
    } else {
        let color = input.colors.get(&name).cloned();
        let chart = input.names.get(&name).cloned();
        if color.is_none() || chart.is_none() {
            trace!(
                series = %name,
                has_color = color.is_some(),
                has_name = chart.is_some(),
                "series metadata incomplete"
            );
        }
        SeriesPayload::Values { color, chart }
    };

    SeriesRecord {
        kind,
        values: column.values.clone(),
        name,
        payload,
    }
}
