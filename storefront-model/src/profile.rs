use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::ProfileId;

/// Company profile record as seeded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: ProfileId,
    #[serde(flatten)]
    pub fields: ProfileFields,
    /// Logo payload, either a data URI or bare base64.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Editable text fields of a company profile.
///
/// This is also the full field set sent on every profile update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slogan: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street_and_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locality: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub municipality: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Addressable form field of [`ProfileFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Name,
    Slogan,
    StreetAndNumber,
    Locality,
    Municipality,
    State,
    PostalCode,
    Country,
    Phone,
    Email,
    Website,
    Description,
}

impl ProfileField {
    pub const ALL: [ProfileField; 12] = [
        Self::Name,
        Self::Slogan,
        Self::StreetAndNumber,
        Self::Locality,
        Self::Municipality,
        Self::State,
        Self::PostalCode,
        Self::Country,
        Self::Phone,
        Self::Email,
        Self::Website,
        Self::Description,
    ];

    /// Fields that must be non-blank for a save to be accepted.
    pub const REQUIRED: [ProfileField; 7] = [
        Self::Name,
        Self::StreetAndNumber,
        Self::Locality,
        Self::Phone,
        Self::Email,
        Self::Description,
        Self::Slogan,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Stable key, matching the serialized field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Slogan => "slogan",
            Self::StreetAndNumber => "street_and_number",
            Self::Locality => "locality",
            Self::Municipality => "municipality",
            Self::State => "state",
            Self::PostalCode => "postal_code",
            Self::Country => "country",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Website => "website",
            Self::Description => "description",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Slogan => "Slogan",
            Self::StreetAndNumber => "Street and number",
            Self::Locality => "Locality",
            Self::Municipality => "Municipality",
            Self::State => "State",
            Self::PostalCode => "Postal code",
            Self::Country => "Country",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Website => "Website",
            Self::Description => "Description",
        };
        f.write_str(label)
    }
}

impl ProfileFields {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Slogan => &self.slogan,
            ProfileField::StreetAndNumber => &self.street_and_number,
            ProfileField::Locality => &self.locality,
            ProfileField::Municipality => &self.municipality,
            ProfileField::State => &self.state,
            ProfileField::PostalCode => &self.postal_code,
            ProfileField::Country => &self.country,
            ProfileField::Phone => &self.phone,
            ProfileField::Email => &self.email,
            ProfileField::Website => &self.website,
            ProfileField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Slogan => &mut self.slogan,
            ProfileField::StreetAndNumber => &mut self.street_and_number,
            ProfileField::Locality => &mut self.locality,
            ProfileField::Municipality => &mut self.municipality,
            ProfileField::State => &mut self.state,
            ProfileField::PostalCode => &mut self.postal_code,
            ProfileField::Country => &mut self.country,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Email => &mut self.email,
            ProfileField::Website => &mut self.website,
            ProfileField::Description => &mut self.description,
        };
        *slot = value;
    }
}
