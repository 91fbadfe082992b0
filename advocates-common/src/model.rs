//! Advocate record model
//!
//! Wire shape shared by the records endpoint and the directory client.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Deserializer, Serialize};

/// One advocate's profile, immutable once received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Opaque identity token, only used for stable list identity
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Matched with set semantics, displayed in received order
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    /// Unvalidated contact number
    #[serde(deserialize_with = "string_or_number")]
    pub phone_number: String,
}

/// Envelope returned by `GET /api/advocates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocatesEnvelope {
    pub data: Vec<Advocate>,
}

/// Advocate row prior to insertion (database assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: String,
}

impl NewAdvocate {
    /// Attach a database-assigned id
    pub fn with_id(self, id: impl Into<String>) -> Advocate {
        Advocate {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties: self.specialties,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
        }
    }
}

/// Accept either a JSON string or a JSON integer and keep it as a string.
///
/// The database stores ids and phone numbers as integers, so older producers
/// emit them as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Signed(n) => n.to_string(),
        StringOrNumber::Unsigned(n) => n.to_string(),
    })
}
