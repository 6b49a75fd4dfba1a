//! [`Query`] collection related to multiple [`Property`] records.

use std::convert::Infallible;

use crate::{domain::Property, Service};

use super::Query;

/// Queries the [`Property`] records visible through the active filter and
/// search query, in catalog order.
#[derive(Clone, Copy, Debug)]
pub struct FilteredProperties;

impl<S, G> Query<FilteredProperties> for Service<S, G> {
    type Ok = Vec<Property>;
    type Err = Infallible;

    async fn execute(
        &self,
        _: FilteredProperties,
    ) -> Result<Self::Ok, Self::Err> {
        let browse = self.browse().read().await;
        Ok(self.catalog().select(&browse.filter, browse.query.as_ref()))
    }
}

/// Queries the trending [`Property`] records highlighted on the home screen.
#[derive(Clone, Copy, Debug)]
pub struct TrendingProperties;

impl TrendingProperties {
    /// Maximum number of returned [`Property`] records.
    const LIMIT: usize = 5;
}

impl<S, G> Query<TrendingProperties> for Service<S, G> {
    type Ok = Vec<Property>;
    type Err = Infallible;

    async fn execute(
        &self,
        _: TrendingProperties,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .catalog()
            .properties()
            .iter()
            .filter(|p| p.trending)
            .take(TrendingProperties::LIMIT)
            .cloned()
            .collect())
    }
}

/// Queries the verified or trending [`Property`] records recommended on the
/// home screen.
#[derive(Clone, Copy, Debug)]
pub struct RecommendedProperties;

impl RecommendedProperties {
    /// Maximum number of returned [`Property`] records.
    const LIMIT: usize = 10;
}

impl<S, G> Query<RecommendedProperties> for Service<S, G> {
    type Ok = Vec<Property>;
    type Err = Infallible;

    async fn execute(
        &self,
        _: RecommendedProperties,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .catalog()
            .properties()
            .iter()
            .filter(|p| p.verified || p.trending)
            .take(RecommendedProperties::LIMIT)
            .cloned()
            .collect())
    }
}
