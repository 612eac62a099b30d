//! Metadata store: whole-collection persistence of file records and list preferences.
//!
//! Every save rewrites the complete JSON array. Two tabs writing the same key race with last
//! writer wins; there is no revision check.

use std::rc::Rc;

use platform_host::{load_json_with, save_json_with, KeyValueStore};
use serde_json::Value;
use thiserror::Error;

use crate::model::{FileRecord, ListPrefs};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Persistence failures surfaced by [`MetadataStore`].
pub enum StoreError {
    /// Reading or decoding the stored value failed.
    #[error("could not read `{key}`: {message}")]
    Read {
        /// Storage key.
        key: String,
        /// Host or decoder message.
        message: String,
    },
    /// Encoding or writing the value failed.
    #[error("could not save `{key}`: {message}")]
    Write {
        /// Storage key.
        key: String,
        /// Host or encoder message.
        message: String,
    },
}

#[derive(Clone)]
/// Reads and writes the record collection and list preferences through a [`KeyValueStore`].
pub struct MetadataStore {
    kv: Rc<dyn KeyValueStore>,
    records_key: String,
    prefs_key: String,
}

impl MetadataStore {
    /// Creates a store over `kv` using the given keys.
    pub fn new(
        kv: Rc<dyn KeyValueStore>,
        records_key: impl Into<String>,
        prefs_key: impl Into<String>,
    ) -> Self {
        Self {
            kv,
            records_key: records_key.into(),
            prefs_key: prefs_key.into(),
        }
    }

    /// Loads the full collection; a missing key is an empty collection.
    ///
    /// Elements are decoded one at a time. A malformed element is logged and skipped so the
    /// remaining records survive the next save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when storage is unavailable or the stored value is not a JSON
    /// array.
    pub fn load_records(&self) -> Result<Vec<FileRecord>, StoreError> {
        let elements = load_json_with::<_, Vec<Value>>(self.kv.as_ref(), &self.records_key)
            .map_err(|message| StoreError::Read {
                key: self.records_key.clone(),
                message,
            })?
            .unwrap_or_default();

        Ok(elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                serde_json::from_value::<FileRecord>(element)
                    .map_err(|err| {
                        leptos::logging::warn!(
                            "skipping record {index} of `{}`: {err}",
                            self.records_key
                        );
                    })
                    .ok()
            })
            .collect())
    }

    /// Replaces the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when encoding or the storage write fails.
    pub fn save_records(&self, records: &[FileRecord]) -> Result<(), StoreError> {
        save_json_with(self.kv.as_ref(), &self.records_key, &records).map_err(|message| {
            StoreError::Write {
                key: self.records_key.clone(),
                message,
            }
        })
    }

    /// Loads list preferences, if any were saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when storage is unavailable or the stored JSON is corrupt.
    pub fn load_prefs(&self) -> Result<Option<ListPrefs>, StoreError> {
        load_json_with(self.kv.as_ref(), &self.prefs_key).map_err(|message| StoreError::Read {
            key: self.prefs_key.clone(),
            message,
        })
    }

    /// Saves list preferences.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the storage write fails.
    pub fn save_prefs(&self, prefs: &ListPrefs) -> Result<(), StoreError> {
        save_json_with(self.kv.as_ref(), &self.prefs_key, prefs).map_err(|message| {
            StoreError::Write {
                key: self.prefs_key.clone(),
                message,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{FileKind, SortOrder};

    fn store_over(kv: &MemoryKeyValueStore) -> MetadataStore {
        MetadataStore::new(Rc::new(kv.clone()), "files", "prefs")
    }

    fn records() -> Vec<FileRecord> {
        vec![
            FileRecord {
                id: "1".to_string(),
                name: "a.pdf".to_string(),
                kind: FileKind::Pdf,
                size: 10,
                uploaded_at: "2024-05-01T12:00:00.000Z".to_string(),
                content: "blob:a".to_string(),
                favorite: true,
            },
            FileRecord {
                id: "2".to_string(),
                name: "b.txt".to_string(),
                kind: FileKind::Other,
                size: 0,
                uploaded_at: "2024-05-02T12:00:00.000Z".to_string(),
                content: "blob:b".to_string(),
                favorite: false,
            },
        ]
    }

    #[test]
    fn missing_key_loads_empty() {
        let kv = MemoryKeyValueStore::default();
        assert_eq!(store_over(&kv).load_records().expect("load"), Vec::new());
    }

    #[test]
    fn records_round_trip_field_for_field() {
        let kv = MemoryKeyValueStore::default();
        let store = store_over(&kv);
        store.save_records(&records()).expect("save");
        assert_eq!(store_over(&kv).load_records().expect("reload"), records());
        assert_eq!(kv.write_count(), 1);
    }

    #[test]
    fn corrupt_collection_is_a_read_error() {
        let kv = MemoryKeyValueStore::default();
        kv.save_raw("files", "{oops").expect("seed");
        let err = store_over(&kv).load_records().expect_err("corrupt");
        assert!(matches!(err, StoreError::Read { ref key, .. } if key == "files"));
    }

    #[test]
    fn malformed_elements_are_skipped_not_fatal() {
        let kv = MemoryKeyValueStore::default();
        kv.save_raw(
            "files",
            r#"[
                {"id":"1","name":"a.pdf","type":"pdf","size":10,"uploadedAt":"2024-05-01T12:00:00.000Z","content":"blob:a","favorite":true},
                {"id":"bad","name":"broken.txt","type":"other","size":null,"uploadedAt":"x","content":"blob:x"},
                42,
                {"id":"2","name":"b.txt","type":"other","size":0,"uploadedAt":"2024-05-02T12:00:00.000Z","content":"blob:b"}
            ]"#,
        )
        .expect("seed");
        assert_eq!(store_over(&kv).load_records().expect("load"), records());
    }

    #[test]
    fn non_array_collection_is_a_read_error() {
        let kv = MemoryKeyValueStore::default();
        kv.save_raw("files", r#"{"id":"1"}"#).expect("seed");
        assert!(store_over(&kv).load_records().is_err());
    }

    #[test]
    fn failed_write_reports_key() {
        let kv = MemoryKeyValueStore::default();
        kv.set_fail_writes(true);
        let err = store_over(&kv).save_records(&records()).expect_err("quota");
        assert!(err.to_string().starts_with("could not save `files`"));
    }

    #[test]
    fn prefs_round_trip() {
        let kv = MemoryKeyValueStore::default();
        let store = store_over(&kv);
        assert_eq!(store.load_prefs().expect("empty"), None);
        let prefs = ListPrefs {
            page_size: 50,
            sort: SortOrder::Oldest,
        };
        store.save_prefs(&prefs).expect("save");
        assert_eq!(store.load_prefs().expect("load"), Some(prefs));
    }
}
