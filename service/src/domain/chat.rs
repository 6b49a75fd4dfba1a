//! Agent chat definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display};
use serde::Serialize;

#[cfg(doc)]
use common::DateTime;
#[cfg(doc)]
use super::Property;

/// Single message in a conversation with a [`Property`]'s agent.
#[derive(Clone, Debug, Serialize)]
pub struct Message {
    /// [`Author`] of this [`Message`].
    pub author: Author,

    /// [`Text`] of this [`Message`].
    pub text: Text,

    /// [`DateTime`] when this [`Message`] was sent.
    #[serde(with = "common::datetime::serde::unix_timestamp")]
    pub sent_at: SentDateTime,
}

define_kind! {
    #[doc = "Author of a [`Message`]."]
    enum Author {
        #[doc = "Currently authenticated user."]
        User = 1,

        #[doc = "Property agent."]
        Agent = 2,
    }
}

/// Text of a [`Message`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Text(String);

impl Text {
    /// Creates a new [`Text`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Text`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        !text.is_empty() && text.len() <= 2048
    }
}

impl FromStr for Text {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Text`")
    }
}

/// [`DateTime`] when a [`Message`] was sent.
pub type SentDateTime = DateTimeOf<(Message, unit::Creation)>;
