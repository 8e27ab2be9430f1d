//! In-memory multi-collection resource store.
//!
//! Records are opaque JSON objects grouped into named collections. Each
//! collection hands out its own increasing integer ids, starting at 1.
//!
//! ```
//! use coffer_store::ResourceStore;
//! use serde_json::json;
//!
//! let store = ResourceStore::new();
//! let data = json!({ "name": "Luke Skywalker" })
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let created = store.create_record("names", data.clone()).unwrap();
//! assert_eq!(created.id, 1);
//! assert_eq!(created.key.to_string(), "/names/1");
//! assert_eq!(store.get_record("names", 1).unwrap(), data);
//! ```

pub mod engine;
pub mod models;

pub use engine::ResourceStore;
pub use models::{CreatedRecord, RecordData, RecordId, RecordKey};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn collection_not_found(resource: &str) -> Self {
        Error::NotFound(format!("/{resource}"))
    }

    pub(crate) fn record_not_found(
        resource: &str,
        id: RecordId,
    ) -> Self {
        Error::NotFound(RecordKey::new(resource, id).to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(..))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
