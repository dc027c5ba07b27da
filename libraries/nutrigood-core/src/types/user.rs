/// User profile types
use serde::{Deserialize, Serialize};
use std::fmt;

/// User profile record.
///
/// Built fully populated through [`User::new`]; every field stays
/// independently mutable afterwards. Contents are stored exactly as given:
/// no email format, age range or diabetes value is checked.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login identifier
    pub email: String,

    /// Cleartext password, as sent on registration
    pub password: String,

    /// Display name
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Self-reported diabetes status (e.g. "Yes", "No")
    pub diabetes: String,
}

impl User {
    /// Create a user from all five profile fields.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        diabetes: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            age,
            diabetes: diabetes.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("diabetes", &self.diabetes)
            .finish()
    }
}

/// Profile summary returned by the user-details endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetailsResponse {
    /// Display name as stored by the server
    pub username: Option<String>,

    /// Login identifier
    pub email: Option<String>,
}
