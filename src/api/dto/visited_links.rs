//! DTOs for the link ingestion endpoint.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateLength, ValidationError};

/// Longest link the store accepts, in characters.
pub const MAX_LINK_LENGTH: u64 = 255;

pub const EMPTY_LIST: &str = "Empty list";
pub const EMPTY_LINK: &str = "Links must not be empty";
pub const LINK_TOO_LONG: &str = "Link must not exceed 255 characters";

/// Batch of visited links submitted by a client.
///
/// A missing or `null` `links` field is read as an empty batch, which then
/// fails validation with `Empty list`. Any blank or over-long link rejects
/// the whole batch.
#[derive(Debug, Deserialize, Validate)]
pub struct VisitedLinksRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "Empty list"),
        custom(function = "validate_link_items")
    )]
    pub links: Vec<String>,
}

impl VisitedLinksRequest {
    pub fn into_links(self) -> Vec<String> {
        self.links
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_link_items(links: &[String]) -> Result<(), ValidationError> {
    for link in links {
        if link.trim().is_empty() {
            return Err(ValidationError::new("blank_link").with_message(Cow::Borrowed(EMPTY_LINK)));
        }
        if !link.validate_length(None, Some(MAX_LINK_LENGTH), None) {
            return Err(ValidationError::new("length").with_message(Cow::Borrowed(LINK_TOO_LONG)));
        }
    }

    Ok(())
}

/// Plain acknowledgement body: `{"status": "ok"}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
