use serde::Deserialize;

use crate::model::{InvalidItem, Item};

/// One entry of the directory's `/search` response.
///
/// Only the fields the list shows are kept; the rest of the record
/// (domains, country code, province) is ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct UniversityRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub web_pages: Vec<String>,
}

impl TryFrom<UniversityRecord> for Item {
    type Error = InvalidItem;

    fn try_from(record: UniversityRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, record.web_pages)
    }
}

/// Converts records in order, dropping (and logging) the invalid ones.
pub fn into_items(records: Vec<UniversityRecord>) -> Vec<Item> {
    let total = records.len();
    let items: Vec<Item> = records
        .into_iter()
        .filter_map(|record| match Item::try_from(record) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!("Skipping directory record: {}", err);
                None
            }
        })
        .collect();

    if items.len() < total {
        tracing::debug!(kept = items.len(), total, "Filtered invalid records");
    }
    items
}
