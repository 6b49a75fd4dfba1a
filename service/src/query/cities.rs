//! [`Query`] collection related to multiple [`City`] records.

use std::convert::Infallible;

use crate::{domain::City, Service};

use super::Query;

/// Queries all the [`City`] records, in catalog order.
#[derive(Clone, Copy, Debug)]
pub struct Cities;

impl<S, G> Query<Cities> for Service<S, G> {
    type Ok = Vec<City>;
    type Err = Infallible;

    async fn execute(&self, _: Cities) -> Result<Self::Ok, Self::Err> {
        Ok(self.catalog().cities().to_vec())
    }
}
