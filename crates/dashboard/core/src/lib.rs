//! Widget and dataview data model for the map dashboard.
//!
//! `dashboard-core` defines what a widget is, which attributes each widget
//! kind accepts, and the dataview specifications those attributes turn into.
//! It holds no collaborators: the `widgets` crate wires these types to a
//! dataview provider and a registry.
pub mod config;
pub mod dataview;
pub mod error;
pub mod ids;
pub mod widget;

pub use config::FactoryConfig;
pub use dataview::{
    Aggregation, CategorySpec, Dataview, DataviewKind, DataviewSpec, FieldValue, FormulaSpec,
    HistogramSpec, ListSpec,
};
pub use error::{ValidationError, ValidationResult};
pub use ids::{DataviewId, LayerId, WidgetId};
pub use widget::{
    CategoryAttributes, CategoryOptions, FormulaAttributes, FormulaOptions, HistogramAttributes,
    HistogramOptions, ListAttributes, ListOptions, TimeSeriesAttributes, TimeSeriesOptions,
    Widget, WidgetAttributes, WidgetKind,
};
