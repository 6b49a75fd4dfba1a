//! [`Query`] definition.

pub mod browse;
pub mod cities;
pub mod favorites;
pub mod plans;
pub mod properties;
pub mod session;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    browse::BrowseState,
    cities::Cities,
    favorites::FavoriteProperties,
    plans::SubscriptionPlans,
    properties::{
        FilteredProperties, RecommendedProperties, TrendingProperties,
    },
    session::CurrentSession,
};
