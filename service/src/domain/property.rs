//! [`Property`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::{city, user};

/// Property listed in the catalog.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Title`] of this [`Property`].
    pub title: Title,

    /// [`Description`] of this [`Property`].
    pub description: Description,

    /// [`Price`] of this [`Property`].
    pub price: Price,

    /// [`Location`] of this [`Property`] within its city.
    pub location: Location,

    /// [`city::Name`] this [`Property`] is located in.
    pub city: city::Name,

    /// Number of bedrooms in this [`Property`].
    pub bhk: Bhk,

    /// Transaction [`Kind`] of this [`Property`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// [`Category`] of this [`Property`].
    pub category: Category,

    /// Floor [`Area`] of this [`Property`], in square feet.
    pub area: Area,

    /// [`ImageUrl`]s of this [`Property`].
    pub images: Vec<ImageUrl>,

    /// [`Amenity`] list of this [`Property`].
    pub amenities: Vec<Amenity>,

    /// Indicator whether this [`Property`] passed verification.
    pub verified: bool,

    /// Indicator whether this [`Property`] is trending.
    pub trending: bool,

    /// [`Agent`] serving this [`Property`].
    pub agent: Agent,

    /// Geographic [`Coordinates`] of this [`Property`].
    pub coordinates: Coordinates,
}

/// ID of a [`Property`].
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

/// Title of a [`Property`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Description of a [`Property`].
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

/// Price of a [`Property`], in the smallest currency unit.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Price(u64);

impl Price {
    /// Creates a new [`Price`] from the provided amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Price`], in the smallest currency unit.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Location of a [`Property`] within its city.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 512
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

/// Number of bedrooms in a [`Property`].
pub type Bhk = u8;

/// Floor area of a [`Property`], in square feet.
pub type Area = u32;

/// Category of a [`Property`] (apartment, villa, commercial, ...).
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Category(String);

impl Category {
    /// Creates a new [`Category`] if the given `category` is valid.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Option<Self> {
        let category = category.into();
        Self::check(&category).then_some(Self(category))
    }

    /// Checks whether the given `category` is a valid [`Category`].
    fn check(category: impl AsRef<str>) -> bool {
        let category = category.as_ref();
        category.trim() == category
            && !category.is_empty()
            && category.len() <= 512
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Category`")
    }
}

/// URL of a [`Property`] or city image.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates a new [`ImageUrl`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Checks whether the given `url` is a valid [`ImageUrl`].
    fn check(url: impl AsRef<str>) -> bool {
        let url = url.as_ref();
        !url.is_empty() && url.len() <= 2048
    }
}

impl FromStr for ImageUrl {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ImageUrl`")
    }
}

/// Amenity of a [`Property`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Amenity(String);

impl Amenity {
    /// Creates a new [`Amenity`] if the given `amenity` is valid.
    #[must_use]
    pub fn new(amenity: impl Into<String>) -> Option<Self> {
        let amenity = amenity.into();
        Self::check(&amenity).then_some(Self(amenity))
    }

    /// Checks whether the given `amenity` is a valid [`Amenity`].
    fn check(amenity: impl AsRef<str>) -> bool {
        let amenity = amenity.as_ref();
        !amenity.is_empty() && amenity.len() <= 512
    }
}

impl FromStr for Amenity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Amenity`")
    }
}

define_kind! {
    #[doc = "Transaction kind of a [`Property`]."]
    enum Kind {
        #[doc = "Property is for sale."]
        Buy = 1,

        #[doc = "Property is for rent."]
        Rent = 2,
    }
}

/// Contact record of the agent serving a [`Property`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Agent {
    /// Name of the agent.
    pub name: user::Name,

    /// Phone number of the agent.
    pub phone: user::Phone,

    /// Email address of the agent.
    pub email: user::Email,
}

/// Geographic coordinates of a [`Property`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude, in degrees.
    pub latitude: f64,

    /// Longitude, in degrees.
    pub longitude: f64,
}
