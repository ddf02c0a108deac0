//! In-memory dataview provider for embedders without a query backend.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use tracing::trace;

use dashboard_core::{
    CategorySpec, Dataview, DataviewId, DataviewSpec, FormulaSpec, HistogramSpec, LayerId,
    ListSpec,
};

use super::DataviewProvider;
use crate::error::ProviderError;

/// Whether identical requests share one dataview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReusePolicy {
    /// Every request creates a new dataview.
    #[default]
    Fresh,
    /// Requests with the same layer and spec receive the same dataview.
    Shared,
}

#[derive(Default)]
struct ProviderState {
    next_id: u64,
    cache: HashMap<(LayerId, DataviewSpec), Arc<Dataview>>,
}

/// Dataview provider that builds dataview models in memory.
///
/// Optionally restricted to a set of known layers; requests for any other
/// layer fail with [`ProviderError::UnknownLayer`].
pub struct InMemoryDataviewProvider {
    policy: ReusePolicy,
    layers: Option<HashSet<LayerId>>,
    state: Mutex<ProviderState>,
}

impl InMemoryDataviewProvider {
    pub fn new() -> Self {
        Self::with_policy(ReusePolicy::Fresh)
    }

    /// Provider that hands the same dataview to identical requests.
    pub fn shared() -> Self {
        Self::with_policy(ReusePolicy::Shared)
    }

    pub fn with_policy(policy: ReusePolicy) -> Self {
        Self {
            policy,
            layers: None,
            state: Mutex::new(ProviderState::default()),
        }
    }

    /// Restrict the provider to the given layers.
    #[must_use]
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = LayerId>) -> Self {
        self.layers = Some(layers.into_iter().collect());
        self
    }

    pub fn policy(&self) -> ReusePolicy {
        self.policy
    }

    /// Number of distinct dataviews created so far.
    pub fn created_count(&self) -> u64 {
        self.state.lock().map(|state| state.next_id).unwrap_or(0)
    }

    fn obtain(&self, layer: &LayerId, spec: DataviewSpec) -> Result<Arc<Dataview>, ProviderError> {
        if let Some(layers) = &self.layers
            && !layers.contains(layer)
        {
            return Err(ProviderError::UnknownLayer(layer.clone()));
        }

        let mut state = self.state.lock().map_err(|_| ProviderError::LockPoisoned)?;

        if self.policy == ReusePolicy::Shared
            && let Some(existing) = state.cache.get(&(layer.clone(), spec.clone()))
        {
            trace!(
                target: "widgets::provider",
                dataview = %existing.id(),
                layer = %layer,
                "Reusing dataview"
            );
            return Ok(Arc::clone(existing));
        }

        let id = DataviewId(state.next_id);
        state.next_id += 1;

        let dataview = Arc::new(Dataview::new(id, layer.clone(), spec));
        if self.policy == ReusePolicy::Shared {
            state.cache.insert(
                (layer.clone(), dataview.spec().clone()),
                Arc::clone(&dataview),
            );
        }

        trace!(
            target: "widgets::provider",
            dataview = %id,
            kind = %dataview.kind(),
            layer = %layer,
            "Created dataview"
        );

        Ok(dataview)
    }
}

impl Default for InMemoryDataviewProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataviewProvider for InMemoryDataviewProvider {
    fn create_category_dataview(
        &self,
        layer: &LayerId,
        spec: CategorySpec,
    ) -> Result<Arc<Dataview>, ProviderError> {
        self.obtain(layer, spec.into())
    }

    fn create_histogram_dataview(
        &self,
        layer: &LayerId,
        spec: HistogramSpec,
    ) -> Result<Arc<Dataview>, ProviderError> {
        self.obtain(layer, spec.into())
    }

    fn create_formula_dataview(
        &self,
        layer: &LayerId,
        spec: FormulaSpec,
    ) -> Result<Arc<Dataview>, ProviderError> {
        self.obtain(layer, spec.into())
    }

    fn create_list_dataview(
        &self,
        layer: &LayerId,
        spec: ListSpec,
    ) -> Result<Arc<Dataview>, ProviderError> {
        self.obtain(layer, spec.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{Aggregation, DataviewKind};

    fn spec() -> CategorySpec {
        CategorySpec {
            column: "country".into(),
            aggregation: Aggregation::Count,
        }
    }

    #[test]
    fn fresh_policy_creates_distinct_dataviews() {
        let provider = InMemoryDataviewProvider::new();
        let layer = LayerId::new("layer");

        let first = provider.create_category_dataview(&layer, spec()).unwrap();
        let second = provider.create_category_dataview(&layer, spec()).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(first.id(), second.id());
        assert_eq!(provider.created_count(), 2);
    }

    #[test]
    fn shared_policy_reuses_identical_requests() {
        let provider = InMemoryDataviewProvider::shared();
        let layer = LayerId::new("layer");

        let first = provider.create_category_dataview(&layer, spec()).unwrap();
        let second = provider.create_category_dataview(&layer, spec()).unwrap();
        let other_layer = provider
            .create_category_dataview(&LayerId::new("other"), spec())
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other_layer));
        assert_eq!(provider.created_count(), 2);
    }

    #[test]
    fn unknown_layers_are_rejected() {
        let provider =
            InMemoryDataviewProvider::new().with_layers([LayerId::new("populated_places")]);

        let err = provider
            .create_histogram_dataview(
                &LayerId::new("rivers"),
                HistogramSpec {
                    column: "length".into(),
                    bins: 10,
                },
            )
            .unwrap_err();
        assert_eq!(err, ProviderError::UnknownLayer(LayerId::new("rivers")));

        let dataview = provider
            .create_list_dataview(
                &LayerId::new("populated_places"),
                ListSpec {
                    columns: vec!["name".into()],
                    columns_title: vec!["Name".into()],
                },
            )
            .unwrap();
        assert_eq!(dataview.kind(), DataviewKind::List);
    }
}
