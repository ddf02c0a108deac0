//! Widget factory: validates attributes, obtains dataviews, registers widgets.
//!
//! Every `new_*_model` operation runs the same steps:
//!
//! 1. validate the required fields of the kind and apply defaults
//! 2. ask the [`DataviewProvider`] for a dataview on the layer
//! 3. build the widget around that dataview
//! 4. add it to the [`WidgetRegistry`] and return it
//!
//! Nothing is registered unless every step succeeds. A validation failure is
//! an ordinary outcome and is reported as [`FactoryError::Validation`];
//! provider failures are passed through as [`FactoryError::Provider`].

use std::sync::Arc;

use tracing::{debug, warn};

use dashboard_core::{
    CategoryAttributes, CategoryOptions, Dataview, FactoryConfig, FormulaAttributes,
    FormulaOptions, HistogramAttributes, HistogramOptions, LayerId, ListAttributes, ListOptions,
    TimeSeriesAttributes, TimeSeriesOptions, ValidationResult, Widget, WidgetAttributes, WidgetId,
    WidgetKind,
};

use crate::error::{ProviderError, Result};
use crate::provider::DataviewProvider;
use crate::registry::WidgetRegistry;

/// Builds widgets bound to dataviews and keeps them in a registry.
///
/// # Architecture
///
/// ```text
/// WidgetFactory
/// ├── registry: WidgetRegistry            (live widgets, insertion order)
/// ├── provider: Arc<dyn DataviewProvider> (creates or reuses dataviews)
/// └── config: FactoryConfig               (defaults for optional attributes)
/// ```
pub struct WidgetFactory {
    registry: WidgetRegistry,
    provider: Arc<dyn DataviewProvider>,
    config: FactoryConfig,
    next_seq: u64,
}

impl WidgetFactory {
    /// Creates a factory over an existing registry and dataview provider.
    pub fn new(registry: WidgetRegistry, provider: Arc<dyn DataviewProvider>) -> Self {
        Self {
            registry,
            provider,
            config: FactoryConfig::default(),
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> WidgetRegistry {
        self.registry
    }

    /// Returns the registered widget for `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Arc<Widget>> {
        self.registry.get(id)
    }

    /// Category widget over a category-aggregation dataview.
    ///
    /// Requires `title` and `column`; `aggregation` defaults to `count`.
    pub fn new_category_model(
        &mut self,
        attrs: CategoryAttributes,
        layer: &LayerId,
    ) -> Result<Arc<Widget>> {
        let kind = WidgetKind::Category;
        let CategoryOptions { id, title, spec } =
            self.checked(kind, attrs.validate(&self.config))?;
        let created = self.provider.create_category_dataview(layer, spec);
        let dataview = self.obtained(kind, layer, created)?;

        Ok(self.register(id, kind, Some(title), dataview))
    }

    /// Histogram widget. Requires `title` and `column`; `bins` defaults to 10.
    pub fn new_histogram_model(
        &mut self,
        attrs: HistogramAttributes,
        layer: &LayerId,
    ) -> Result<Arc<Widget>> {
        let kind = WidgetKind::Histogram;
        let HistogramOptions { id, title, spec } =
            self.checked(kind, attrs.validate(&self.config))?;
        let created = self.provider.create_histogram_dataview(layer, spec);
        let dataview = self.obtained(kind, layer, created)?;

        Ok(self.register(id, kind, Some(title), dataview))
    }

    /// Formula widget. Requires `title`, `column` and `operation`.
    pub fn new_formula_model(
        &mut self,
        attrs: FormulaAttributes,
        layer: &LayerId,
    ) -> Result<Arc<Widget>> {
        let kind = WidgetKind::Formula;
        let FormulaOptions { id, title, spec } =
            self.checked(kind, attrs.validate(&self.config))?;
        let created = self.provider.create_formula_dataview(layer, spec);
        let dataview = self.obtained(kind, layer, created)?;

        Ok(self.register(id, kind, Some(title), dataview))
    }

    /// List widget. Requires `title`, `columns` and `columns_title`.
    pub fn new_list_model(&mut self, attrs: ListAttributes, layer: &LayerId) -> Result<Arc<Widget>> {
        let kind = WidgetKind::List;
        let ListOptions { id, title, spec } = self.checked(kind, attrs.validate(&self.config))?;
        let created = self.provider.create_list_dataview(layer, spec);
        let dataview = self.obtained(kind, layer, created)?;

        Ok(self.register(id, kind, Some(title), dataview))
    }

    /// Time-series widget over a histogram dataview.
    ///
    /// Only `column` is required; the title is optional because the card
    /// labels itself from the column.
    pub fn new_time_series_model(
        &mut self,
        attrs: TimeSeriesAttributes,
        layer: &LayerId,
    ) -> Result<Arc<Widget>> {
        let kind = WidgetKind::TimeSeries;
        let TimeSeriesOptions { id, title, spec } =
            self.checked(kind, attrs.validate(&self.config))?;
        let created = self.provider.create_histogram_dataview(layer, spec);
        let dataview = self.obtained(kind, layer, created)?;

        Ok(self.register(id, kind, title, dataview))
    }

    /// Dispatches a tagged attribute bag to the matching `new_*_model`.
    pub fn create(&mut self, attrs: WidgetAttributes, layer: &LayerId) -> Result<Arc<Widget>> {
        match attrs {
            WidgetAttributes::Category(attrs) => self.new_category_model(attrs, layer),
            WidgetAttributes::Histogram(attrs) => self.new_histogram_model(attrs, layer),
            WidgetAttributes::Formula(attrs) => self.new_formula_model(attrs, layer),
            WidgetAttributes::List(attrs) => self.new_list_model(attrs, layer),
            WidgetAttributes::TimeSeries(attrs) => self.new_time_series_model(attrs, layer),
        }
    }

    fn checked<T>(&self, kind: WidgetKind, validated: ValidationResult<T>) -> Result<T> {
        validated.map_err(|err| {
            debug!(
                target: "widgets::factory",
                kind = %kind,
                field = err.field(),
                error = %err,
                "Rejected widget attributes"
            );
            err.into()
        })
    }

    fn obtained(
        &self,
        kind: WidgetKind,
        layer: &LayerId,
        obtained: std::result::Result<Arc<Dataview>, ProviderError>,
    ) -> Result<Arc<Dataview>> {
        obtained.map_err(|err| {
            warn!(
                target: "widgets::factory",
                kind = %kind,
                layer = %layer,
                error = %err,
                "Dataview provider failed"
            );
            err.into()
        })
    }

    fn register(
        &mut self,
        id: Option<WidgetId>,
        kind: WidgetKind,
        title: Option<String>,
        dataview: Arc<Dataview>,
    ) -> Arc<Widget> {
        let id = id.unwrap_or_else(|| self.generate_id(kind));
        let widget = Arc::new(Widget::new(id, kind, title, dataview));

        debug!(
            target: "widgets::factory",
            id = %widget.id(),
            kind = %kind,
            dataview = %widget.dataview().id(),
            "Created widget"
        );

        self.registry.add(Arc::clone(&widget));
        widget
    }

    /// Next `<kind>-<n>` identifier not already present in the registry.
    fn generate_id(&mut self, kind: WidgetKind) -> WidgetId {
        loop {
            self.next_seq += 1;
            let candidate = format!("{}-{}", kind, self.next_seq);
            if !self.registry.contains(&candidate) {
                return WidgetId::from(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::InMemoryDataviewProvider;

    fn factory() -> WidgetFactory {
        WidgetFactory::new(
            WidgetRegistry::new(),
            Arc::new(InMemoryDataviewProvider::new()),
        )
    }

    fn histogram() -> HistogramAttributes {
        HistogramAttributes {
            title: Some("h".into()),
            column: Some("c".into()),
            ..Default::default()
        }
    }

    #[test]
    fn generated_ids_are_distinct() {
        let mut factory = factory();
        let layer = LayerId::new("layer");

        let first = factory.new_histogram_model(histogram(), &layer).unwrap();
        let second = factory.new_histogram_model(histogram(), &layer).unwrap();

        assert_eq!(first.id().as_str(), "histogram-1");
        assert_eq!(second.id().as_str(), "histogram-2");
        assert_eq!(factory.registry().len(), 2);
    }

    #[test]
    fn generated_ids_skip_taken_identifiers() {
        let mut factory = factory();
        let layer = LayerId::new("layer");

        let taken = HistogramAttributes {
            id: Some("histogram-1".into()),
            ..histogram()
        };
        factory.new_histogram_model(taken, &layer).unwrap();
        let generated = factory.new_histogram_model(histogram(), &layer).unwrap();

        assert_eq!(generated.id().as_str(), "histogram-2");
    }

    #[test]
    fn config_defaults_apply() {
        let mut factory = factory().with_config(FactoryConfig::new().with_default_bins(32));
        let widget = factory
            .new_histogram_model(histogram(), &LayerId::new("layer"))
            .unwrap();

        assert_eq!(
            widget.dataview().get("bins"),
            Some(dashboard_core::FieldValue::Number(32))
        );
    }
}
