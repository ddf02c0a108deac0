//! Widget construction for the map dashboard.
//!
//! This crate wires the `dashboard-core` data model to its collaborators:
//! a [`WidgetFactory`] validates attribute sets, obtains dataviews from an
//! injected [`DataviewProvider`] and keeps the resulting widgets in a
//! [`WidgetRegistry`].
//!
//! Modules are organized by responsibility:
//! - [`factory`] hosts the per-kind construction operations
//! - [`registry`] stores live widgets in insertion order
//! - [`provider`] defines the dataview provider contract and an in-memory implementation
//! - [`loaders`] reads factory configuration from TOML
pub mod error;
pub mod factory;
pub mod loaders;
pub mod provider;
pub mod registry;

pub use error::{FactoryError, ProviderError, Result};
pub use factory::WidgetFactory;
pub use loaders::ConfigLoader;
pub use provider::{DataviewProvider, InMemoryDataviewProvider, ReusePolicy};
pub use registry::WidgetRegistry;
