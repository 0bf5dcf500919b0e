pub mod item_store;

pub use item_store::{ItemRecord, ItemRecordChanges, ItemStore, ItemStoreError, NewItemRecord};
