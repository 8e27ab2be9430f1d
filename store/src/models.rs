use serde::Serialize;

/// Caller supplied record body. The store never looks inside it.
pub type RecordData = serde_json::Map<String, serde_json::Value>;

pub type RecordId = u64;

/// Canonical `/{collection}/{id}` address of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RecordKey {
    pub resource: String,
    pub id: RecordId,
}

impl RecordKey {
    pub fn new(
        resource: impl Into<String>,
        id: RecordId,
    ) -> Self {
        Self {
            resource: resource.into(),
            id,
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "/{}/{}", self.resource, self.id)
    }
}

impl From<RecordKey> for String {
    fn from(key: RecordKey) -> Self {
        key.to_string()
    }
}

/// Result of inserting a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRecord {
    pub id: RecordId,
    pub key: RecordKey,
}
