//! [`Query`] related to favorited [`Property`] records.

use std::convert::Infallible;

use crate::{domain::Property, Service};

use super::Query;

/// Queries the favorited [`Property`] records, in catalog order.
#[derive(Clone, Copy, Debug)]
pub struct FavoriteProperties;

impl<S, G> Query<FavoriteProperties> for Service<S, G> {
    type Ok = Vec<Property>;
    type Err = Infallible;

    async fn execute(
        &self,
        _: FavoriteProperties,
    ) -> Result<Self::Ok, Self::Err> {
        let browse = self.browse().read().await;
        Ok(self
            .catalog()
            .properties()
            .iter()
            .filter(|p| browse.favorites.contains(&p.id))
            .cloned()
            .collect())
    }
}
