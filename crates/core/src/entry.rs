//! Catalog entry types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::normalize::normalize;

/// A catalog record as delivered by the catalog source, before derived keys exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryInput {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub audio_urls: Vec<String>,
}

/// A stored catalog entry.
///
/// `normalized_name` is always derived from `name`. `phonetic_name` is empty
/// until the phonetic backfill has computed it from `normalized_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub normalized_name: String,
    #[serde(default)]
    pub phonetic_name: String,
    #[serde(default)]
    pub audio_urls: Vec<String>,
}

impl Entry {
    /// Builds an entry from an ingest record, deriving `normalized_name`.
    ///
    /// The phonetic key starts out pending (empty).
    pub fn from_input(input: EntryInput) -> Result<Self, CoreError> {
        if input.id <= 0 {
            return Err(CoreError::InvalidEntryId(input.id));
        }
        let normalized_name = normalize(&input.name);
        Ok(Self {
            id: input.id,
            name: input.name,
            description: input.description,
            normalized_name,
            phonetic_name: String::new(),
            audio_urls: input.audio_urls,
        })
    }

    /// Whether the phonetic key still has to be computed.
    #[must_use]
    pub fn is_phonetic_pending(&self) -> bool {
        self.phonetic_name.is_empty()
    }

    /// Value of the given indexed field.
    #[must_use]
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Name => &self.name,
            EntryField::NormalizedName => &self.normalized_name,
            EntryField::PhoneticName => &self.phonetic_name,
        }
    }
}

/// Indexed entry fields the match tiers query against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Name,
    NormalizedName,
    PhoneticName,
}

impl EntryField {
    /// Storage column holding this field.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match *self {
            Self::Name => "name",
            Self::NormalizedName => "normalized_name",
            Self::PhoneticName => "phonetic_name",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: i64, name: &str) -> EntryInput {
        EntryInput {
            id,
            name: name.to_owned(),
            description: "desc".to_owned(),
            audio_urls: vec!["https://cdn.example/a.mp3".to_owned()],
        }
    }

    #[test]
    fn from_input_derives_normalized_and_pending_phonetic() {
        let entry = Entry::from_input(input(1, "Fire-Style")).unwrap();
        assert_eq!(entry.normalized_name, "FireStyle");
        assert!(entry.is_phonetic_pending());
        assert_eq!(entry.audio_urls.len(), 1);
    }

    #[test]
    fn from_input_rejects_non_positive_ids() {
        assert_eq!(Entry::from_input(input(0, "x")), Err(CoreError::InvalidEntryId(0)));
        assert_eq!(Entry::from_input(input(-3, "x")), Err(CoreError::InvalidEntryId(-3)));
    }

    #[test]
    fn field_accessor_matches_columns() {
        let mut entry = Entry::from_input(input(2, "Fire Style!")).unwrap();
        entry.phonetic_name = "frstl".to_owned();
        assert_eq!(entry.field(EntryField::Name), "Fire Style!");
        assert_eq!(entry.field(EntryField::NormalizedName), "FireStyle");
        assert_eq!(entry.field(EntryField::PhoneticName), "frstl");
        assert_eq!(EntryField::PhoneticName.to_string(), "phonetic_name");
    }

    #[test]
    fn input_defaults_optional_fields() {
        let parsed: EntryInput = serde_json::from_str(r#"{"id": 5, "name": "Chidori"}"#).unwrap();
        assert_eq!(parsed.description, "");
        assert!(parsed.audio_urls.is_empty());
    }
}
