//! Collections and queries shaped by a [`CollectionConfig`].

use std::ops::Deref;

use kindset_config::CollectionConfig;
use kindset_core::error::Result;
use kindset_core::{
    ClosedCollection, ClosedSet, OpenCollection, Query, QueryCollection, QueryOutcome,
};

/// Creates an empty closed collection with the configured capacity.
///
/// # Errors
///
/// Returns [`KindsetError::Configuration`](kindset_core::KindsetError::Configuration)
/// if `E` declares an empty or duplicated kind set.
pub fn closed_collection<E>(config: &CollectionConfig) -> Result<ClosedCollection<E>>
where
    E: ClosedSet,
{
    Ok(ClosedCollection::try_with_capacity(config.capacity())?)
}

/// Creates an empty open collection with the configured capacity.
pub fn open_collection<H>(config: &CollectionConfig) -> OpenCollection<H>
where
    H: Deref + Clone,
    H::Target: Query,
{
    OpenCollection::with_capacity(config.capacity())
}

/// Queries every element and applies the configured aggregation.
pub fn query_configured<C: QueryCollection>(
    collection: &C,
    config: &CollectionConfig,
) -> QueryOutcome {
    collection.query_aggregated(config.aggregation)
}

/// Starts console output using the configured filter.
///
/// Does nothing unless the `console` feature is enabled.
pub fn init_console(config: &CollectionConfig) {
    #[cfg(feature = "console")]
    kindset_console::init_with(config.console.log_filter.as_deref(), config.console.banner);

    #[cfg(not(feature = "console"))]
    let _ = config;
}
