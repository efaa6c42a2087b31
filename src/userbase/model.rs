use crate::error::{Result, UserbaseError};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// On-disk and display format of `time_added`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendered in place of optional fields that were never set.
pub const MISSING: &str = "N/A";

/// One tracked person.
///
/// Field names on disk are fixed (`Name`, `Age`, `Email`, `Address`, `School`,
/// `Other Info`, `time_added`). Optional text fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: Age,
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "School", default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(rename = "Other Info", default, skip_serializing_if = "Option::is_none")]
    pub other_info: Option<String>,
    #[serde(rename = "time_added", with = "timestamp")]
    pub created_at: NaiveDateTime,
}

/// Input for a record that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub address: Option<String>,
    pub school: Option<String>,
    pub other_info: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn with_other_info(mut self, other_info: impl Into<String>) -> Self {
        self.other_info = Some(other_info.into());
        self
    }
}

impl Record {
    /// Builds a record stamped with the current local time.
    pub fn new(user: NewUser) -> Result<Self> {
        Self::stamped(user, now())
    }

    /// Builds a record with an explicit creation time. The name must not be blank.
    pub fn stamped(user: NewUser, created_at: NaiveDateTime) -> Result<Self> {
        if user.name.trim().is_empty() {
            return Err(UserbaseError::EmptyName);
        }
        Ok(Self {
            name: user.name,
            age: Age::Years(user.age),
            email: user.email,
            address: user.address,
            school: user.school,
            other_info: user.other_info,
            created_at,
        })
    }

    pub fn time_added(&self) -> String {
        self.created_at.format(TIME_FORMAT).to_string()
    }

    /// The value of `field` as shown to the operator.
    pub fn display_value(&self, field: Field) -> String {
        let text = match field {
            Field::Name => return self.name.clone(),
            Field::Age => return self.age.to_string(),
            Field::Email => &self.email,
            Field::Address => &self.address,
            Field::School => &self.school,
            Field::OtherInfo => &self.other_info,
        };
        text.clone().unwrap_or_else(|| MISSING.to_string())
    }

    /// Overwrites a single field, returning its previous display value.
    ///
    /// Nothing is changed when the value is rejected.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<String> {
        let old = self.display_value(field);
        match field {
            Field::Name => {
                if value.trim().is_empty() {
                    return Err(invalid_value(field, value));
                }
                self.name = value.to_string();
            }
            Field::Age => {
                let years = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid_value(field, value))?;
                self.age = Age::Years(years);
            }
            Field::Email => self.email = Some(value.to_string()),
            Field::Address => self.address = Some(value.to_string()),
            Field::School => self.school = Some(value.to_string()),
            Field::OtherInfo => self.other_info = Some(value.to_string()),
        }
        Ok(old)
    }
}

fn invalid_value(field: Field, value: &str) -> UserbaseError {
    UserbaseError::InvalidValue {
        field: field.label().to_string(),
        value: value.to_string(),
    }
}

/// Current wall-clock time at the precision that is persisted.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// The editable fields of a [`Record`]. `time_added` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Email,
    Address,
    School,
    OtherInfo,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Age,
        Field::Email,
        Field::Address,
        Field::School,
        Field::OtherInfo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::School => "School",
            Field::OtherInfo => "Other Info",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = UserbaseError;

    /// Case-insensitive; `_` and `-` count as spaces so `other_info` works too.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Field::ALL
            .into_iter()
            .find(|field| field.label().to_lowercase() == normalized)
            .ok_or_else(|| UserbaseError::InvalidField(s.to_string()))
    }
}

mod timestamp {
    use super::TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A stored age.
///
/// New records always hold a whole number. Files written by older versions
/// may carry free text (`"forty"`); that text is kept and rendered as-is so a
/// single odd value cannot make the whole collection unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Age {
    Years(i64),
    Text(String),
}

impl Age {
    pub fn years(&self) -> Option<i64> {
        match self {
            Age::Years(n) => Some(*n),
            Age::Text(_) => None,
        }
    }
}

impl From<i64> for Age {
    fn from(years: i64) -> Self {
        Age::Years(years)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Years(n) => write!(f, "{}", n),
            Age::Text(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAge {
            Number(i64),
            Text(String),
        }

        Ok(match RawAge::deserialize(deserializer)? {
            RawAge::Number(n) => Age::Years(n),
            RawAge::Text(text) => match text.trim().parse() {
                Ok(n) => Age::Years(n),
                Err(_) => Age::Text(text),
            },
        })
    }
}
