//! Storage-domain contracts and lightweight test adapters.

mod kv;

pub use kv::{
    load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore,
};
