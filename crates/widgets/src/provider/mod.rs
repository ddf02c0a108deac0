//! Dataview provider abstraction.
//!
//! The factory never builds dataviews itself. It hands a validated spec to a
//! provider injected at construction time, and the provider decides whether
//! to create a new dataview or reuse an existing one for the same layer and
//! spec. Widgets hold the returned `Arc` and never assume exclusivity.

mod memory;

pub use memory::{InMemoryDataviewProvider, ReusePolicy};

use std::sync::Arc;

use dashboard_core::{CategorySpec, Dataview, FormulaSpec, HistogramSpec, LayerId, ListSpec};

use crate::error::ProviderError;

/// Obtains dataview models for a layer, one method per dataview kind.
pub trait DataviewProvider: Send + Sync {
    /// Category dataview: groups rows by `column` and reduces with `aggregation`.
    fn create_category_dataview(
        &self,
        layer: &LayerId,
        spec: CategorySpec,
    ) -> Result<Arc<Dataview>, ProviderError>;

    /// Histogram dataview: buckets `column` into `bins`.
    ///
    /// Also backs time-series widgets.
    fn create_histogram_dataview(
        &self,
        layer: &LayerId,
        spec: HistogramSpec,
    ) -> Result<Arc<Dataview>, ProviderError>;

    /// Formula dataview: reduces `column` to a single value with `operation`.
    fn create_formula_dataview(
        &self,
        layer: &LayerId,
        spec: FormulaSpec,
    ) -> Result<Arc<Dataview>, ProviderError>;

    /// List dataview: passes `columns` through without aggregation.
    fn create_list_dataview(
        &self,
        layer: &LayerId,
        spec: ListSpec,
    ) -> Result<Arc<Dataview>, ProviderError>;
}
