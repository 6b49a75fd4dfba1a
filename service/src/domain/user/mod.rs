//! [`User`] definitions.

pub mod registration;
pub mod session;

use std::sync::LazyLock;

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

pub use self::{registration::Registration, session::Session};

/// Platform user.
#[derive(Clone, Debug, Deserialize, From, Serialize)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// First [`Name`] of this [`User`].
    pub first_name: Name,

    /// Last [`Name`] of this [`User`].
    pub last_name: Name,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`Phone`] of this [`User`].
    #[serde(rename = "phone_number")]
    pub phone: Phone,

    /// [`Age`] of this [`User`].
    pub age: Age,

    /// [`Sex`] of this [`User`].
    pub sex: Sex,

    /// [`Role`] of this [`User`] on the platform.
    pub role: Role,

    /// Subscription [`Tier`] of this [`User`].
    pub subscription: Tier,

    /// Number of messages this [`User`] has sent to agents so far.
    #[serde(rename = "messagesUsed")]
    pub messages_used: MessageCount,

    /// Message [`Limit`] granted by the subscription [`Tier`].
    #[serde(rename = "messagesLimit")]
    pub messages_limit: Limit,
}

impl User {
    /// Charges a single message send against this [`User`]'s quota.
    ///
    /// [`Charge::Charged`] is the only outcome mutating the counter.
    pub fn charge_message(&mut self) -> Charge {
        match self.messages_limit {
            Limit::Unlimited => Charge::Unlimited,
            Limit::Limited(max) if self.messages_used >= max => {
                Charge::Exhausted
            }
            Limit::Limited(_) => {
                self.messages_used += 1;
                Charge::Charged
            }
        }
    }

    /// Switches this [`User`] to the provided [`Tier`], resetting the used
    /// messages counter and applying the [`Tier`]'s message [`Limit`].
    pub fn subscribe(&mut self, tier: Tier) {
        self.subscription = tier;
        self.messages_used = 0;
        self.messages_limit = tier.message_limit();
    }
}

/// ID of a [`User`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a [`User`].
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

/// Email address of a [`User`].
///
/// Validation is deliberately shallow (non-empty, trimmed, bounded): the
/// mocked backend authenticates any non-empty credential pair.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`User`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^([+]?\d{1,2}[-\s]?|)\d{3}[-\s]?\d{3}[-\s]?\d{4}$")
                .expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Password of a [`User`].
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let password = password.as_ref();
        !password.is_empty() && password.len() <= 128
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Age of a [`User`], in full years.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Age(u8);

impl Age {
    /// Creates a new [`Age`] if the given `age` is valid.
    #[must_use]
    pub fn new(age: u8) -> Option<Self> {
        Self::check(age).then_some(Self(age))
    }

    /// Checks whether the given `age` is a valid [`Age`].
    fn check(age: u8) -> bool {
        (18..=99).contains(&age)
    }
}

impl FromStr for Age {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Age`")
    }
}

define_kind! {
    #[doc = "Sex of a [`User`]."]
    enum Sex {
        #[doc = "Male."]
        Male = 1,

        #[doc = "Female."]
        Female = 2,

        #[doc = "Not disclosed or other."]
        Other = 3,
    }
}

define_kind! {
    #[doc = "Role of a [`User`] on the platform."]
    enum Role {
        #[doc = "Searches and contacts agents."]
        Buyer = 1,

        #[doc = "Posts properties."]
        Seller = 2,

        #[doc = "Both searches and posts."]
        Both = 3,
    }
}

define_kind! {
    #[doc = "Subscription tier of a [`User`]."]
    enum Tier {
        #[doc = "Complimentary tier with a small message quota."]
        Free = 1,

        #[doc = "Entry paid tier with an extended message quota."]
        Basic = 2,

        #[doc = "Professional tier with unlimited messaging."]
        Pro = 3,

        #[doc = "Organization tier with unlimited messaging."]
        Enterprise = 4,
    }
}

impl Tier {
    /// Returns the message [`Limit`] granted by this [`Tier`].
    #[must_use]
    pub const fn message_limit(self) -> Limit {
        match self {
            Self::Free => Limit::Limited(5),
            Self::Basic => Limit::Limited(50),
            Self::Pro | Self::Enterprise => Limit::Unlimited,
        }
    }
}

/// Number of messages a [`User`] has sent to agents.
pub type MessageCount = u32;

/// Message quota limit of a [`User`].
///
/// Stored in the serialized record as a plain integer, where any negative
/// value means [`Limit::Unlimited`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Limit {
    /// At most the contained number of messages may be sent.
    Limited(MessageCount),

    /// No limit is applied.
    Unlimited,
}

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Limited(max) => serializer.serialize_i64(i64::from(max)),
            Self::Unlimited => serializer.serialize_i64(-1),
        }
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            Ok(Self::Unlimited)
        } else {
            MessageCount::try_from(raw)
                .map(Self::Limited)
                .map_err(de::Error::custom)
        }
    }
}

/// Outcome of charging a message send against a [`User`]'s quota.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Charge {
    /// Message was charged against the remaining quota.
    Charged,

    /// Quota is exhausted and the message must be blocked.
    Exhausted,

    /// [`Tier`] is unlimited, so nothing was charged.
    Unlimited,
}

#[cfg(test)]
mod spec {
    use super::{Age, Charge, Email, Id, Limit, Name, Phone, Tier, User};

    fn user(tier: Tier) -> User {
        User {
            id: Id::new(),
            first_name: Name::new("John").unwrap(),
            last_name: Name::new("Doe").unwrap(),
            email: Email::new("john@doe.test").unwrap(),
            phone: Phone::new("+91-9876543210").unwrap(),
            age: Age::new(30).unwrap(),
            sex: super::Sex::Male,
            role: super::Role::Both,
            subscription: tier,
            messages_used: 0,
            messages_limit: tier.message_limit(),
        }
    }

    #[test]
    fn tier_limits_follow_the_table() {
        assert_eq!(Tier::Free.message_limit(), Limit::Limited(5));
        assert_eq!(Tier::Basic.message_limit(), Limit::Limited(50));
        assert_eq!(Tier::Pro.message_limit(), Limit::Unlimited);
        assert_eq!(Tier::Enterprise.message_limit(), Limit::Unlimited);
    }

    #[test]
    fn free_tier_charges_exactly_five_messages() {
        let mut user = user(Tier::Free);
        for _ in 0..5 {
            assert_eq!(user.charge_message(), Charge::Charged);
        }
        assert_eq!(user.charge_message(), Charge::Exhausted);
        assert_eq!(user.charge_message(), Charge::Exhausted);
        assert_eq!(user.messages_used, 5);
    }

    #[test]
    fn unlimited_tier_never_mutates_the_counter() {
        let mut user = user(Tier::Pro);
        for _ in 0..100 {
            assert_eq!(user.charge_message(), Charge::Unlimited);
        }
        assert_eq!(user.messages_used, 0);
    }

    #[test]
    fn subscribing_resets_the_counter() {
        let mut user = user(Tier::Free);
        for _ in 0..5 {
            _ = user.charge_message();
        }

        user.subscribe(Tier::Basic);
        assert_eq!(user.subscription, Tier::Basic);
        assert_eq!(user.messages_used, 0);
        assert_eq!(user.messages_limit, Limit::Limited(50));
    }

    #[test]
    fn limit_round_trips_through_the_sentinel_form() {
        assert_eq!(
            serde_json::to_string(&Limit::Unlimited).unwrap(),
            "-1",
        );
        assert_eq!(
            serde_json::to_string(&Limit::Limited(5)).unwrap(),
            "5",
        );
        assert_eq!(
            serde_json::from_str::<Limit>("-1").unwrap(),
            Limit::Unlimited,
        );
        assert_eq!(
            serde_json::from_str::<Limit>("50").unwrap(),
            Limit::Limited(50),
        );
    }
}
