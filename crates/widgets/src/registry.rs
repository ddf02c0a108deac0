//! Registry of live widget instances.
//!
//! The [`WidgetRegistry`] is a plain identifier → widget map that keeps
//! insertion order, so dashboards enumerate widgets in the order they were
//! created. It performs no validation; that is the factory's job.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use dashboard_core::{Widget, WidgetId};

#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: IndexMap<WidgetId, Arc<Widget>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a widget by identifier. Unknown identifiers yield `None`.
    pub fn get(&self, id: &str) -> Option<&Arc<Widget>> {
        self.widgets.get(id)
    }

    /// Insert a widget keyed by its identifier.
    ///
    /// If a widget with the same identifier exists it is replaced in place
    /// (keeping its position) and returned.
    pub fn add(&mut self, widget: Arc<Widget>) -> Option<Arc<Widget>> {
        let id = widget.id().clone();
        let replaced = self.widgets.insert(id, widget);

        if let Some(previous) = &replaced {
            debug!(
                target: "widgets::registry",
                id = %previous.id(),
                kind = %previous.kind(),
                "Replaced widget"
            );
        }

        replaced
    }

    /// Remove a widget, preserving the order of the remaining entries.
    pub fn remove(&mut self, id: &str) -> Option<Arc<Widget>> {
        let removed = self.widgets.shift_remove(id);

        if removed.is_some() {
            debug!(target: "widgets::registry", id, "Removed widget");
        }

        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widgets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Widget>> + '_ {
        self.widgets.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &WidgetId> + '_ {
        self.widgets.keys()
    }

    pub fn clear(&mut self) {
        self.widgets.clear();
    }
}
