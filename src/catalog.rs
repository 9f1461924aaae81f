use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use csv::Reader;
use csv::ReaderBuilder;
use csv::Trim;
use rewardpoints::item::Item;
use rewardpoints::item::ItemId;
use rewardpoints::item::Price;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog csv error, source_error={source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("duplicate catalog item item_id={item_id}")]
    DuplicateItem { item_id: ItemId },
}

/// Item id to [`Item`] lookup used while turning day log rows into entries.
#[derive(Debug)]
pub struct Catalog(HashMap<ItemId, Item>);

impl Catalog {
    pub fn get(&self, item_id: ItemId) -> Option<Item> {
        self.0.get(&item_id).copied()
    }

    fn from_csv<R: std::io::Read>(mut reader: Reader<R>) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct CatalogRow {
            id: ItemId,
            price: Price,
        }

        let mut items = HashMap::new();
        for row_res in reader.deserialize::<CatalogRow>() {
            let row = row_res?;
            match items.entry(row.id) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateItem { item_id: row.id }),
                Entry::Vacant(vacant) => {
                    vacant.insert(Item::new(row.id, row.price));
                }
            }
        }
        Ok(Self(items))
    }
}

/// Reads an `id,price` CSV. Any bad row fails the whole catalog.
pub fn read_from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    Catalog::from_csv(reader)
}
