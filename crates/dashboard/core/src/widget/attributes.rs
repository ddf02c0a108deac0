//! Loosely-typed attribute sets and their validated counterparts.
//!
//! Attribute structs mirror what a caller (or a deserialized JSON bag) may
//! supply: every field is optional. `validate` checks the required fields of
//! the kind, applies defaults from [`FactoryConfig`] and produces an options
//! struct in which required fields are no longer optional.
//!
//! | kind        | required                      | defaults            |
//! |-------------|-------------------------------|---------------------|
//! | category    | title, column                 | aggregation = count |
//! | histogram   | title, column                 | bins = 10           |
//! | formula     | title, column, operation      |                     |
//! | list        | title, columns, columns_title |                     |
//! | time-series | column                        | bins = 10           |

use std::str::FromStr;

use strum::VariantNames;

use crate::config::FactoryConfig;
use crate::dataview::{Aggregation, CategorySpec, FormulaSpec, HistogramSpec, ListSpec};
use crate::error::{ValidationError, ValidationResult};
use crate::ids::WidgetId;
use crate::widget::WidgetKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub column: Option<String>,
    pub aggregation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptions {
    pub id: Option<WidgetId>,
    pub title: String,
    pub spec: CategorySpec,
}

impl CategoryAttributes {
    pub fn validate(self, config: &FactoryConfig) -> ValidationResult<CategoryOptions> {
        const KIND: WidgetKind = WidgetKind::Category;

        let title = required_text(KIND, "title", self.title)?;
        let column = required_text(KIND, "column", self.column)?;
        let aggregation = optional_aggregation(KIND, "aggregation", self.aggregation)?
            .unwrap_or(config.default_aggregation);

        Ok(CategoryOptions {
            id: widget_id(self.id),
            title,
            spec: CategorySpec {
                column,
                aggregation,
            },
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistogramAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub column: Option<String>,
    pub bins: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistogramOptions {
    pub id: Option<WidgetId>,
    pub title: String,
    pub spec: HistogramSpec,
}

impl HistogramAttributes {
    pub fn validate(self, config: &FactoryConfig) -> ValidationResult<HistogramOptions> {
        const KIND: WidgetKind = WidgetKind::Histogram;

        let title = required_text(KIND, "title", self.title)?;
        let column = required_text(KIND, "column", self.column)?;
        let bins = bins(KIND, self.bins, config)?;

        Ok(HistogramOptions {
            id: widget_id(self.id),
            title,
            spec: HistogramSpec { column, bins },
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormulaAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub column: Option<String>,
    pub operation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaOptions {
    pub id: Option<WidgetId>,
    pub title: String,
    pub spec: FormulaSpec,
}

impl FormulaAttributes {
    pub fn validate(self, _config: &FactoryConfig) -> ValidationResult<FormulaOptions> {
        const KIND: WidgetKind = WidgetKind::Formula;

        let title = required_text(KIND, "title", self.title)?;
        let column = required_text(KIND, "column", self.column)?;
        let operation = optional_aggregation(KIND, "operation", self.operation)?
            .ok_or(ValidationError::MissingField {
                kind: KIND,
                field: "operation",
            })?;

        Ok(FormulaOptions {
            id: widget_id(self.id),
            title,
            spec: FormulaSpec { column, operation },
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub columns: Option<Vec<String>>,
    pub columns_title: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOptions {
    pub id: Option<WidgetId>,
    pub title: String,
    pub spec: ListSpec,
}

impl ListAttributes {
    pub fn validate(self, _config: &FactoryConfig) -> ValidationResult<ListOptions> {
        const KIND: WidgetKind = WidgetKind::List;

        let title = required_text(KIND, "title", self.title)?;
        let columns = required_list(KIND, "columns", self.columns)?;
        let columns_title = required_list(KIND, "columns_title", self.columns_title)?;

        Ok(ListOptions {
            id: widget_id(self.id),
            title,
            spec: ListSpec {
                columns,
                columns_title,
            },
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeSeriesAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub column: Option<String>,
    pub bins: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSeriesOptions {
    pub id: Option<WidgetId>,
    pub title: Option<String>,
    pub spec: HistogramSpec,
}

impl TimeSeriesAttributes {
    pub fn validate(self, config: &FactoryConfig) -> ValidationResult<TimeSeriesOptions> {
        const KIND: WidgetKind = WidgetKind::TimeSeries;

        let column = required_text(KIND, "column", self.column)?;
        let bins = bins(KIND, self.bins, config)?;

        Ok(TimeSeriesOptions {
            id: widget_id(self.id),
            title: self.title.filter(|title| !is_blank(title)),
            spec: HistogramSpec { column, bins },
        })
    }
}

/// Attribute bag for any widget kind, tagged by `type`.
///
/// ```text
/// { "type": "category", "title": "Countries", "column": "country" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum WidgetAttributes {
    Category(CategoryAttributes),
    Histogram(HistogramAttributes),
    Formula(FormulaAttributes),
    List(ListAttributes),
    TimeSeries(TimeSeriesAttributes),
}

impl WidgetAttributes {
    pub const fn kind(&self) -> WidgetKind {
        match self {
            Self::Category(_) => WidgetKind::Category,
            Self::Histogram(_) => WidgetKind::Histogram,
            Self::Formula(_) => WidgetKind::Formula,
            Self::List(_) => WidgetKind::List,
            Self::TimeSeries(_) => WidgetKind::TimeSeries,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn widget_id(id: Option<String>) -> Option<WidgetId> {
    id.filter(|id| !is_blank(id)).map(WidgetId::from)
}

fn required_text(
    kind: WidgetKind,
    field: &'static str,
    value: Option<String>,
) -> ValidationResult<String> {
    match value {
        Some(value) if !is_blank(&value) => Ok(value),
        _ => Err(ValidationError::MissingField { kind, field }),
    }
}

fn required_list(
    kind: WidgetKind,
    field: &'static str,
    value: Option<Vec<String>>,
) -> ValidationResult<Vec<String>> {
    match value {
        Some(values) if values.iter().any(|value| !is_blank(value)) => Ok(values),
        _ => Err(ValidationError::MissingField { kind, field }),
    }
}

fn optional_aggregation(
    kind: WidgetKind,
    field: &'static str,
    value: Option<String>,
) -> ValidationResult<Option<Aggregation>> {
    let Some(value) = value.filter(|value| !is_blank(value)) else {
        return Ok(None);
    };

    Aggregation::from_str(&value)
        .map(Some)
        .map_err(|_| ValidationError::InvalidValue {
            kind,
            field,
            reason: format!(
                "unknown operation `{}`, expected one of {}",
                value,
                Aggregation::VARIANTS.join(", ")
            ),
        })
}

fn bins(kind: WidgetKind, value: Option<u32>, config: &FactoryConfig) -> ValidationResult<u32> {
    match value {
        Some(0) => Err(ValidationError::InvalidValue {
            kind,
            field: "bins",
            reason: "bin count must be positive".to_string(),
        }),
        Some(bins) => Ok(bins),
        None if config.default_bins == 0 => Err(ValidationError::InvalidValue {
            kind,
            field: "bins",
            reason: "configured default bin count must be positive".to_string(),
        }),
        None => Ok(config.default_bins),
    }
}
