//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`User::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifier was blank.
    EmptyId,
    /// Identifier carried leading or trailing whitespace.
    InvalidId,
    /// Username was blank.
    EmptyUsername,
    /// Display name was blank.
    EmptyDisplayName,
    /// Rank was blank.
    EmptyRank,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must not contain surrounding whitespace"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::EmptyRank => write!(f, "rank must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier as issued by the personnel system.
///
/// Identifiers are opaque strings (the fixture user is `8675309`), so only
/// blankness and surrounding whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

fn non_blank(value: String, error: UserValidationError) -> Result<String, UserValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(value)
    }
}

/// Authenticated soldier operating the client.
///
/// ## Invariants
/// - `id` is non-empty and carries no surrounding whitespace.
/// - `username`, `name` and `rank` are non-empty once trimmed.
///
/// The serialised form is the record persisted under the `handreceiptUser`
/// storage key: `{"id", "username", "name", "rank"}`.
///
/// # Examples
/// ```
/// use handreceipt::domain::User;
///
/// let user = User::try_from_parts("8675309", "john.doe", "CPT John Doe", "Captain")
///     .expect("valid user");
/// assert_eq!(user.username(), "john.doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: String,
    name: String,
    rank: String,
}

impl User {
    /// Fallible constructor enforcing the field invariants.
    pub fn try_from_parts(
        id: impl AsRef<str>,
        username: impl Into<String>,
        name: impl Into<String>,
        rank: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            id: UserId::new(id)?,
            username: non_blank(username.into(), UserValidationError::EmptyUsername)?,
            name: non_blank(name.into(), UserValidationError::EmptyDisplayName)?,
            rank: non_blank(rank.into(), UserValidationError::EmptyRank)?,
        })
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Display name, rank abbreviation included (e.g. `CPT John Doe`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Full rank title.
    pub fn rank(&self) -> &str {
        self.rank.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: String,
    username: String,
    name: String,
    rank: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            name,
            rank,
        } = value;
        Self {
            id: id.into(),
            username,
            name,
            rank,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.username, value.name, value.rank)
    }
}
