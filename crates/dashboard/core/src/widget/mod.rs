//! Widget model and the per-kind attribute sets used to construct widgets.

mod attributes;

pub use attributes::{
    CategoryAttributes, CategoryOptions, FormulaAttributes, FormulaOptions, HistogramAttributes,
    HistogramOptions, ListAttributes, ListOptions, TimeSeriesAttributes, TimeSeriesOptions,
    WidgetAttributes,
};

use std::sync::{Arc, PoisonError, RwLock};

use crate::dataview::{Dataview, DataviewKind};
use crate::ids::WidgetId;

/// Presentation kind of a widget card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WidgetKind {
    Category,
    Histogram,
    Formula,
    List,
    /// Histogram-shaped dataview presented along a time axis.
    TimeSeries,
}

impl WidgetKind {
    /// Time-series widgets derive their label from the column; every other
    /// kind renders as a standalone card and needs an explicit title.
    pub const fn requires_title(self) -> bool {
        !matches!(self, Self::TimeSeries)
    }

    /// Dataview kind backing widgets of this kind.
    pub const fn dataview_kind(self) -> DataviewKind {
        match self {
            Self::Category => DataviewKind::Category,
            Self::Histogram | Self::TimeSeries => DataviewKind::Histogram,
            Self::Formula => DataviewKind::Formula,
            Self::List => DataviewKind::List,
        }
    }
}

/// A user-visible control bound to exactly one dataview.
///
/// The kind and dataview are fixed at construction. The title can be edited
/// afterwards through [`Widget::set_title`], which is why widgets are shared
/// as `Arc<Widget>` between the registry and callers.
#[derive(Debug)]
pub struct Widget {
    id: WidgetId,
    kind: WidgetKind,
    title: RwLock<Option<String>>,
    dataview: Arc<Dataview>,
}

impl Widget {
    pub fn new(
        id: WidgetId,
        kind: WidgetKind,
        title: Option<String>,
        dataview: Arc<Dataview>,
    ) -> Self {
        Self {
            id,
            kind,
            title: RwLock::new(title),
            dataview,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn title(&self) -> Option<String> {
        self.title
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.write().unwrap_or_else(PoisonError::into_inner) = Some(title.into());
    }

    pub fn dataview(&self) -> &Arc<Dataview> {
        &self.dataview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataview::{HistogramSpec, ListSpec};
    use crate::ids::{DataviewId, LayerId};

    #[test]
    fn kind_names_use_kebab_case() {
        assert_eq!(WidgetKind::TimeSeries.to_string(), "time-series");
        assert_eq!("time-series".parse::<WidgetKind>(), Ok(WidgetKind::TimeSeries));
        assert_eq!(WidgetKind::Category.as_ref(), "category");
    }

    #[test]
    fn only_time_series_skips_title() {
        assert!(WidgetKind::Category.requires_title());
        assert!(WidgetKind::List.requires_title());
        assert!(!WidgetKind::TimeSeries.requires_title());
        assert_eq!(
            WidgetKind::TimeSeries.dataview_kind(),
            DataviewKind::Histogram
        );
    }

    #[test]
    fn title_is_editable_after_construction() {
        let dataview = Arc::new(Dataview::new(
            DataviewId(0),
            LayerId::new("layer"),
            HistogramSpec {
                column: "dates".into(),
                bins: 10,
            },
        ));
        let widget = Widget::new(WidgetId::new("w"), WidgetKind::TimeSeries, None, dataview);
        assert_eq!(widget.title(), None);

        widget.set_title("Arrivals");
        assert_eq!(widget.title().as_deref(), Some("Arrivals"));
    }

    #[test]
    fn widgets_can_share_a_dataview() {
        let dataview = Arc::new(Dataview::new(
            DataviewId(7),
            LayerId::new("layer"),
            ListSpec {
                columns: vec!["a".into()],
                columns_title: vec!["A".into()],
            },
        ));
        let first = Widget::new(
            WidgetId::new("a"),
            WidgetKind::List,
            Some("first".into()),
            Arc::clone(&dataview),
        );
        let second = Widget::new(
            WidgetId::new("b"),
            WidgetKind::List,
            Some("second".into()),
            Arc::clone(&dataview),
        );

        assert!(Arc::ptr_eq(first.dataview(), second.dataview()));
    }
}
