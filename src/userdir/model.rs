use crate::error::{Result, UserdirError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type UserId = u64;

/// A user as served by the remote directory.
///
/// String fields default to empty when the server omits them; unknown fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub phone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        join_name(&self.name, &self.lastname)
    }

    /// The editable fields of this user, as a draft.
    pub fn to_draft(&self) -> DraftUser {
        DraftUser {
            name: self.name.clone(),
            lastname: self.lastname.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Lastname => self.lastname = value,
            Field::Phone => self.phone = value,
        }
    }
}

/// The record being composed in the add form. Also the JSON body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftUser {
    pub name: String,
    pub lastname: String,
    pub phone: String,
}

impl DraftUser {
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            phone: phone.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.lastname.is_empty() && self.phone.is_empty()
    }

    pub fn full_name(&self) -> String {
        join_name(&self.name, &self.lastname)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Lastname => self.lastname = value,
            Field::Phone => self.phone = value,
        }
    }
}

fn join_name(name: &str, lastname: &str) -> String {
    match (name.is_empty(), lastname.is_empty()) {
        (false, false) => format!("{} {}", name, lastname),
        (false, true) => name.to_string(),
        _ => lastname.to_string(),
    }
}

/// A form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Lastname,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Lastname => "lastname",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UserdirError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "lastname" | "last-name" | "last_name" => Ok(Field::Lastname),
            "phone" => Ok(Field::Phone),
            other => Err(UserdirError::Api(format!("Unknown field: {}", other))),
        }
    }
}

/// Status line of a remote response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_tolerates_missing_and_extra_fields() {
        let json = r#"{"id": 3, "name": "Clementine", "username": "Samantha", "phone": "1-463"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Clementine");
        assert_eq!(user.lastname, "");
        assert_eq!(user.phone, "1-463");
    }

    #[test]
    fn user_requires_id() {
        let json = r#"{"name": "Ana"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn draft_serializes_as_create_body() {
        let draft = DraftUser::new("Ana", "Ruiz", "555");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Ana", "lastname": "Ruiz", "phone": "555"})
        );
    }

    #[test]
    fn field_parsing() {
        assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!("Last_Name".parse::<Field>().unwrap(), Field::Lastname);
        assert_eq!(" phone ".parse::<Field>().unwrap(), Field::Phone);
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn full_name_skips_empty_parts() {
        assert_eq!(DraftUser::new("Ana", "Ruiz", "").full_name(), "Ana Ruiz");
        assert_eq!(DraftUser::new("Ana", "", "").full_name(), "Ana");
        assert_eq!(DraftUser::new("", "Ruiz", "").full_name(), "Ruiz");
    }

    #[test]
    fn status_success_range() {
        assert!(StatusCode(200).is_success());
        assert!(StatusCode(201).is_success());
        assert!(StatusCode(299).is_success());
        assert!(!StatusCode(199).is_success());
        assert!(!StatusCode(404).is_success());
        assert!(!StatusCode(0).is_success());
    }
}
