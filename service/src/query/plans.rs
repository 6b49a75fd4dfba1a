//! [`Query`] related to subscription plans.

use std::convert::Infallible;

use crate::{read, Service};

use super::Query;

/// Queries the static subscription [`read::plan::Plan`] table.
#[derive(Clone, Copy, Debug)]
pub struct SubscriptionPlans;

impl<S, G> Query<SubscriptionPlans> for Service<S, G> {
    type Ok = Vec<read::plan::Plan>;
    type Err = Infallible;

    async fn execute(
        &self,
        _: SubscriptionPlans,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(read::plan::Plan::all())
    }
}
