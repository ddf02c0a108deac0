//! Dataview specifications and the dataview model widgets are bound to.
//!
//! A [`DataviewSpec`] is the transient descriptor the factory hands to a
//! dataview provider. The provider answers with a [`Dataview`], which keeps
//! the spec it was built from so consumers can read fields back by key.

use crate::ids::{DataviewId, LayerId};

/// Reduction applied by category and formula dataviews.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Count,
    Sum,
    Avg,
    Max,
    Min,
}

/// Kind of query a dataview runs against its layer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum DataviewKind {
    Category,
    Histogram,
    Formula,
    List,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategorySpec {
    pub column: String,
    pub aggregation: Aggregation,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HistogramSpec {
    pub column: String,
    pub bins: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormulaSpec {
    pub column: String,
    pub operation: Aggregation,
}

/// Pass-through listing of raw column values, no aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListSpec {
    pub columns: Vec<String>,
    pub columns_title: Vec<String>,
}

/// Descriptor for any dataview kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataviewSpec {
    Category(CategorySpec),
    Histogram(HistogramSpec),
    Formula(FormulaSpec),
    List(ListSpec),
}

impl DataviewSpec {
    pub const fn kind(&self) -> DataviewKind {
        match self {
            Self::Category(_) => DataviewKind::Category,
            Self::Histogram(_) => DataviewKind::Histogram,
            Self::Formula(_) => DataviewKind::Formula,
            Self::List(_) => DataviewKind::List,
        }
    }

    /// Single source column, absent for list dataviews.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Category(spec) => Some(&spec.column),
            Self::Histogram(spec) => Some(&spec.column),
            Self::Formula(spec) => Some(&spec.column),
            Self::List(_) => None,
        }
    }
}

impl From<CategorySpec> for DataviewSpec {
    fn from(spec: CategorySpec) -> Self {
        Self::Category(spec)
    }
}

impl From<HistogramSpec> for DataviewSpec {
    fn from(spec: HistogramSpec) -> Self {
        Self::Histogram(spec)
    }
}

impl From<FormulaSpec> for DataviewSpec {
    fn from(spec: FormulaSpec) -> Self {
        Self::Formula(spec)
    }
}

impl From<ListSpec> for DataviewSpec {
    fn from(spec: ListSpec) -> Self {
        Self::List(spec)
    }
}

/// Value of a dataview field looked up by key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u32),
    List(&'a [String]),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Query model over a layer, created and owned by a dataview provider.
///
/// Dataviews may be handed to several widgets at once; they are never
/// mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataview {
    id: DataviewId,
    layer: LayerId,
    spec: DataviewSpec,
}

impl Dataview {
    pub fn new(id: DataviewId, layer: LayerId, spec: impl Into<DataviewSpec>) -> Self {
        Self {
            id,
            layer,
            spec: spec.into(),
        }
    }

    pub fn id(&self) -> DataviewId {
        self.id
    }

    pub fn layer(&self) -> &LayerId {
        &self.layer
    }

    pub fn spec(&self) -> &DataviewSpec {
        &self.spec
    }

    pub fn kind(&self) -> DataviewKind {
        self.spec.kind()
    }

    /// Reads a field by its attribute name.
    ///
    /// `"type"` yields the dataview kind; every other key yields the value the
    /// dataview was constructed with, or `None` when the kind has no such field.
    pub fn get(&self, key: &str) -> Option<FieldValue<'_>> {
        if key == "type" {
            return Some(FieldValue::Text(self.kind().into()));
        }

        match (&self.spec, key) {
            (
                DataviewSpec::Category(_) | DataviewSpec::Histogram(_) | DataviewSpec::Formula(_),
                "column",
            ) => self.spec.column().map(FieldValue::Text),
            (DataviewSpec::Category(spec), "aggregation") => {
                Some(FieldValue::Text(spec.aggregation.into()))
            }
            (DataviewSpec::Histogram(spec), "bins") => Some(FieldValue::Number(spec.bins)),
            (DataviewSpec::Formula(spec), "operation") => {
                Some(FieldValue::Text(spec.operation.into()))
            }
            (DataviewSpec::List(spec), "columns") => Some(FieldValue::List(&spec.columns)),
            (DataviewSpec::List(spec), "columns_title") => {
                Some(FieldValue::List(&spec.columns_title))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> LayerId {
        LayerId::new("layer-0")
    }

    #[test]
    fn aggregation_parses_lowercase_names() {
        assert_eq!("avg".parse::<Aggregation>(), Ok(Aggregation::Avg));
        assert!("COUNT".parse::<Aggregation>().is_err());
        assert!("median".parse::<Aggregation>().is_err());
        assert_eq!(Aggregation::Max.to_string(), "max");
    }

    #[test]
    fn get_reads_back_category_fields() {
        let dataview = Dataview::new(
            DataviewId(1),
            layer(),
            CategorySpec {
                column: "my_column".into(),
                aggregation: Aggregation::Avg,
            },
        );

        assert_eq!(dataview.get("type"), Some(FieldValue::Text("category")));
        assert_eq!(dataview.get("column"), Some(FieldValue::Text("my_column")));
        assert_eq!(dataview.get("aggregation"), Some(FieldValue::Text("avg")));
        assert_eq!(dataview.get("bins"), None);
    }

    #[test]
    fn get_reads_back_list_fields() {
        let dataview = Dataview::new(
            DataviewId(2),
            layer(),
            ListSpec {
                columns: vec!["a".into(), "b".into()],
                columns_title: vec!["first".into(), "2nd".into()],
            },
        );

        let columns = ["a".to_string(), "b".to_string()];
        assert_eq!(dataview.get("columns"), Some(FieldValue::List(&columns)));
        assert_eq!(dataview.get("column"), None);
        assert_eq!(dataview.kind(), DataviewKind::List);
    }

    #[test]
    fn histogram_exposes_bins_as_number() {
        let dataview = Dataview::new(
            DataviewId(3),
            layer(),
            HistogramSpec {
                column: "dates".into(),
                bins: 10,
            },
        );

        assert_eq!(dataview.get("bins"), Some(FieldValue::Number(10)));
        assert_eq!(
            dataview.get("type").and_then(FieldValue::as_text),
            Some("histogram")
        );
    }
}
