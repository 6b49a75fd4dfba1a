//! Browsing session definitions.

use std::collections::HashSet;

use derive_more::{AsRef, Display};
use smart_default::SmartDefault;

use super::{city, property, Property};

/// Device-wide browsing state.
///
/// Favorites are scoped to the device, not to a user account, and survive
/// logout.
#[derive(Clone, Debug, Default)]
pub struct Browse {
    /// Active [`Filter`] narrowing the visible catalog.
    pub filter: Filter,

    /// Active free-text [`SearchQuery`], if any.
    pub query: Option<SearchQuery>,

    /// IDs of the favorited [`Property`] records.
    pub favorites: HashSet<property::Id>,
}

impl Browse {
    /// Toggles membership of the provided [`property::Id`] in the favorites
    /// set: absent IDs are added, present ones are removed.
    pub fn toggle_favorite(&mut self, id: property::Id) -> Toggle {
        if self.favorites.remove(&id) {
            Toggle::Removed
        } else {
            _ = self.favorites.insert(id);
            Toggle::Added
        }
    }
}

/// Result of toggling a favorite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Toggle {
    /// ID was added to the favorites set.
    Added,

    /// ID was removed from the favorites set.
    Removed,
}

/// Conjunctive criteria narrowing the visible [`Property`] catalog.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Filter {
    /// Transaction [`property::Kind`] to show. Always narrowed.
    #[default(property::Kind::Buy)]
    pub kind: property::Kind,

    /// Exact [`city::Name`] to show, if narrowed.
    pub city: Option<city::Name>,

    /// Exact [`property::Category`] to show, if narrowed.
    pub category: Option<property::Category>,

    /// Exact number of bedrooms to show, if narrowed.
    pub bhk: Option<property::Bhk>,

    /// Inclusive [`PriceRange`] to show.
    pub price: PriceRange,
}

impl Filter {
    /// Merges the provided [`Patch`] into this [`Filter`], leaving fields
    /// the [`Patch`] doesn't carry intact.
    pub fn apply(&mut self, patch: Patch) {
        let Patch {
            kind,
            city,
            category,
            bhk,
            min_price,
            max_price,
        } = patch;

        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(city) = city {
            self.city = city;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(bhk) = bhk {
            self.bhk = bhk;
        }
        if let Some(min) = min_price {
            self.price.min = min;
        }
        if let Some(max) = max_price {
            self.price.max = max;
        }
    }

    /// Checks whether the provided [`Property`] satisfies every criterion of
    /// this [`Filter`].
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        if property.kind != self.kind {
            return false;
        }
        if self.city.as_ref().is_some_and(|c| property.city != *c) {
            return false;
        }
        if self
            .category
            .as_ref()
            .is_some_and(|c| property.category != *c)
        {
            return false;
        }
        if self.bhk.is_some_and(|bhk| property.bhk != bhk) {
            return false;
        }
        self.price.contains(property.price)
    }
}

/// Partial update of a [`Filter`].
///
/// Outer [`None`]s keep the current value intact; `Some(None)` clears a
/// narrowing back to "any".
#[derive(Clone, Debug, Default)]
pub struct Patch {
    /// New transaction [`property::Kind`].
    pub kind: Option<property::Kind>,

    /// New city narrowing.
    pub city: Option<Option<city::Name>>,

    /// New category narrowing.
    pub category: Option<Option<property::Category>>,

    /// New bedrooms narrowing.
    pub bhk: Option<Option<property::Bhk>>,

    /// New lower price bound.
    pub min_price: Option<property::Price>,

    /// New upper price bound.
    pub max_price: Option<property::Price>,
}

/// Inclusive price range of a [`Filter`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct PriceRange {
    /// Lower inclusive bound.
    #[default(property::Price::new(0))]
    pub min: property::Price,

    /// Upper inclusive bound.
    #[default(property::Price::new(100_000_000))]
    pub max: property::Price,
}

impl PriceRange {
    /// Checks whether the provided [`property::Price`] lies within this
    /// range.
    #[must_use]
    pub fn contains(self, price: property::Price) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Free-text query matched against the textual fields of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Creates a new [`SearchQuery`], or [`None`] if the given `query` is
    /// empty.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Option<Self> {
        let query = query.into();
        (!query.is_empty()).then_some(Self(query))
    }

    /// Checks whether the title, location, city or description of the
    /// provided [`Property`] contains this query, ignoring case.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        let needle = self.0.to_lowercase();
        [
            property.title.as_ref(),
            property.location.as_ref(),
            property.city.as_ref(),
            property.description.as_ref(),
        ]
        .into_iter()
        .any(|field: &str| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::property::Price;

    use super::{Filter, Patch, PriceRange};

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange {
            min: Price::new(100),
            max: Price::new(200),
        };

        assert!(range.contains(Price::new(100)));
        assert!(range.contains(Price::new(150)));
        assert!(range.contains(Price::new(200)));
        assert!(!range.contains(Price::new(99)));
        assert!(!range.contains(Price::new(201)));
    }

    #[test]
    fn default_price_range_is_wide_open() {
        let range = PriceRange::default();

        assert_eq!(range.min, Price::new(0));
        assert_eq!(range.max, Price::new(100_000_000));
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let mut filter = Filter::default();
        filter.apply(Patch {
            city: Some(crate::domain::city::Name::new("Noida")),
            ..Patch::default()
        });

        assert_eq!(
            filter.city,
            crate::domain::city::Name::new("Noida"),
        );
        assert_eq!(filter.kind, crate::domain::property::Kind::Buy);
        assert_eq!(filter.price, PriceRange::default());

        filter.apply(Patch {
            city: Some(None),
            ..Patch::default()
        });
        assert_eq!(filter.city, None);
    }
}
