//! Displayable records.
//!
//! An [`Item`] can only be built through [`Item::new`], which rejects the
//! shapes the list cards cannot draw: a blank name (no icon character) or
//! no usable link (no secondary line).

use thiserror::Error;

/// Reasons a record cannot become an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidItem {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("item '{name}' has no links")]
    NoLinks { name: String },
}

/// One entry of the list: a name plus its links, first link displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    links: Vec<String>,
}

impl Item {
    /// Build a validated item.
    ///
    /// Blank links are dropped before the check, so `["", "http://x"]`
    /// displays `http://x`.
    pub fn new(name: impl Into<String>, links: Vec<String>) -> Result<Self, InvalidItem> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidItem::EmptyName);
        }

        let links: Vec<String> = links
            .into_iter()
            .filter(|link| !link.trim().is_empty())
            .collect();
        if links.is_empty() {
            return Err(InvalidItem::NoLinks { name });
        }

        Ok(Self { name, links })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// The link shown on the card.
    pub fn primary_link(&self) -> &str {
        self.links.first().map(String::as_str).unwrap_or_default()
    }

    /// First character of the name, as written.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
