//! Form input and its validation into a write payload.

use std::fmt;

use thiserror::Error;

use super::model::{CreatorFields, CreatorRecord};

/// A required column of the creator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Url,
    Description,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::Name => "name",
            RequiredField::Url => "URL",
            RequiredField::Description => "description",
        })
    }
}

/// One or more required fields were blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields (name, URL, and description)")]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

/// Raw, untrimmed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorDraft {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Empty means "no image".
    pub image_url: String,
}

impl CreatorDraft {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    /// Prefill the edit form from a stored record.
    pub fn from_record(record: &CreatorRecord) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
        }
    }

    /// Trim every field and check the required ones.
    ///
    /// An empty image URL becomes `None`.
    pub fn validate(&self) -> Result<CreatorFields, ValidationError> {
        let name = self.name.trim();
        let url = self.url.trim();
        let description = self.description.trim();

        let missing: Vec<RequiredField> = [
            (RequiredField::Name, name),
            (RequiredField::Url, url),
            (RequiredField::Description, description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let image_url = Some(self.image_url.trim())
            .filter(|v| !v.is_empty())
            .map(String::from);

        Ok(CreatorFields {
            name: name.to_string(),
            url: url.to_string(),
            description: description.to_string(),
            image_url,
        })
    }
}
