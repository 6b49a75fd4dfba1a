//! [`City`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::property::ImageUrl;

/// City presented on the home screen rail.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct City {
    /// ID of this [`City`].
    pub id: Id,

    /// [`Name`] of this [`City`].
    pub name: Name,

    /// Cover [`ImageUrl`] of this [`City`].
    pub image: ImageUrl,

    /// Number of properties listed in this [`City`].
    pub property_count: PropertyCount,

    /// [`Description`] of this [`City`].
    pub description: Description,
}

/// ID of a [`City`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Id(String);

/// Name of a [`City`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Number of properties listed in a [`City`].
pub type PropertyCount = u32;

/// Description of a [`City`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Description`].
    fn check(text: impl AsRef<str>) -> bool {
        text.as_ref().len() <= 4096
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}
