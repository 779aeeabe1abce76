use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::ProtoTimestamp;

/// Backend user identifier.
pub type UserId = u64;

/// Global role of a user account.
///
/// The backend serializes the protobuf enum as its number (`0` user, `1`
/// admin) and omits it entirely for `User`. Older handlers emit the symbolic
/// names, so both forms are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Protobuf enum number.
    #[must_use]
    pub const fn as_number(self) -> u8 {
        match self {
            Self::User => 0,
            Self::Admin => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Look a role up by protobuf enum number.
    #[must_use]
    pub const fn from_number(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::User),
            1 => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" | "USER" | "UserRole_USER" => Ok(Self::User),
            "admin" | "ADMIN" | "UserRole_ADMIN" => Ok(Self::Admin),
            _ => Err("unknown user role"),
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_number())
    }
}

struct UserRoleVisitor;

impl Visitor<'_> for UserRoleVisitor {
    type Value = UserRole;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a user role number or name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        UserRole::from_number(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .ok()
            .and_then(UserRole::from_number)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        UserRole::from_str(value).map_err(|_| E::unknown_variant(value, &["USER", "ADMIN"]))
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UserRoleVisitor)
    }
}

/// A user account snapshot as returned by the backend.
///
/// The front-end never patches a `User`; it is replaced whenever the data is
/// fetched again.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub github_id: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<ProtoTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<ProtoTimestamp>,
}

impl User {
    /// Whether this account holds the admin capability.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Name to show in the UI, falling back to the GitHub login and then the
    /// email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [&self.name, &self.github_id, &self.email]
            .into_iter()
            .find(|value| !value.is_empty())
            .map_or("", String::as_str)
    }

    /// Single uppercase letter for avatar placeholders.
    #[must_use]
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// One page of the user directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserList {
    /// Number of users across all pages.
    pub total: u64,
    /// Users on the requested page, in backend order.
    pub users: Vec<User>,
}
