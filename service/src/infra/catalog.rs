//! Static [`Catalog`] of [`Property`] and [`City`] records.

use std::{collections::HashMap, fs, io, path::Path};

use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;

use crate::domain::{
    browse::{Filter, SearchQuery},
    property, City, Property,
};

/// Immutable ordered catalog of [`Property`] and [`City`] records.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Catalog {
    /// [`Property`] records, in seed order.
    properties: Vec<Property>,

    /// [`City`] records, in seed order.
    cities: Vec<City>,

    /// Positions of [`Property`] records by their ID.
    index: HashMap<property::Id, usize>,
}

impl Catalog {
    /// Creates a new [`Catalog`] from the provided records, preserving their
    /// order.
    #[must_use]
    pub fn new(properties: Vec<Property>, cities: Vec<City>) -> Self {
        let index = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Self {
            properties,
            cities,
            index,
        }
    }

    /// Loads a new [`Catalog`] from the provided JSON seed files.
    ///
    /// # Errors
    ///
    /// Errors if either seed file cannot be read or parsed.
    pub fn load(
        properties: impl AsRef<Path>,
        cities: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let PropertiesSeed { properties } =
            serde_json::from_slice(&fs::read(properties)?)?;
        let CitiesSeed { cities } =
            serde_json::from_slice(&fs::read(cities)?)?;

        Ok(Self::new(properties, cities))
    }

    /// Returns all the [`Property`] records, in catalog order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns all the [`City`] records, in catalog order.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Looks up a [`Property`] by its ID.
    #[must_use]
    pub fn property(&self, id: &property::Id) -> Option<&Property> {
        self.index.get(id).map(|&i| &self.properties[i])
    }

    /// Returns the [`Property`] records satisfying both the provided
    /// [`Filter`] and [`SearchQuery`], preserving catalog order.
    #[must_use]
    pub fn select(
        &self,
        filter: &Filter,
        query: Option<&SearchQuery>,
    ) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|p| {
                filter.matches(p) && query.map_or(true, |q| q.matches(p))
            })
            .cloned()
            .collect()
    }
}

/// Shape of the properties seed file.
#[derive(Debug, Deserialize)]
struct PropertiesSeed {
    /// [`Property`] records.
    properties: Vec<Property>,
}

/// Shape of the cities seed file.
#[derive(Debug, Deserialize)]
struct CitiesSeed {
    /// [`City`] records.
    cities: Vec<City>,
}

/// Error of loading a [`Catalog`].
#[derive(Debug, Display, From, StdError)]
pub enum LoadError {
    /// Seed file cannot be read.
    #[display("failed to read seed file: {_0}")]
    Io(io::Error),

    /// Seed file cannot be parsed.
    #[display("failed to parse seed file: {_0}")]
    Json(serde_json::Error),
}
