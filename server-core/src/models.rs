use coffer_store::CreatedRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for `POST /{resource}`
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct CreatedResponse {
    /// Identifier assigned by the store, unique within the collection
    #[schema(example = 1)]
    pub id: u64,

    /// Canonical path of the new record
    #[schema(example = "/names/1")]
    pub key: String,
}

impl From<CreatedRecord> for CreatedResponse {
    fn from(created: CreatedRecord) -> Self {
        Self {
            id: created.id,
            key: created.key.to_string(),
        }
    }
}
