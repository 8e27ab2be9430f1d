use std::{collections::HashMap, sync::Mutex};

use crate::models::{CreatedRecord, RecordData, RecordId, RecordKey};

mod collection;

use collection::Collection;

#[derive(Debug, Default)]
struct State {
    /// Collection names in the order they were first written to.
    order: Vec<String>,
    collections: HashMap<String, Collection>,
}

impl State {
    /// A collection without live records reads as absent.
    fn live(
        &self,
        resource: &str,
    ) -> Option<&Collection> {
        self.collections
            .get(resource)
            .filter(|collection| !collection.is_empty())
    }

    fn collection_mut(
        &mut self,
        resource: &str,
    ) -> &mut Collection {
        if !self
            .collections
            .contains_key(resource)
        {
            self.order
                .push(resource.to_string());
        }
        self.collections
            .entry(resource.to_string())
            .or_default()
    }
}

/// Process-wide store of named collections.
///
/// Every operation runs under one exclusive lock, so id assignment and
/// reads never interleave with a partially applied write.
#[derive(Debug, Default)]
pub struct ResourceStore {
    inner: Mutex<State>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_lock<F, R>(
        &self,
        f: F,
    ) -> crate::Result<R>
    where
        F: FnOnce(&State) -> R, {
        self.inner
            .lock()
            .map(|guard| f(&guard))
            .map_err(|_| crate::Error::Internal("ResourceStore lock poisoned".into()))
    }

    fn with_lock_mut<F, R>(
        &self,
        f: F,
    ) -> crate::Result<R>
    where
        F: FnOnce(&mut State) -> R, {
        self.inner
            .lock()
            .map(|mut guard| f(&mut guard))
            .map_err(|_| crate::Error::Internal("ResourceStore lock poisoned".into()))
    }

    /// Drops every collection; ids restart at 1 afterwards.
    pub fn reset(&self) -> crate::Result<()> {
        self.with_lock_mut(|state| *state = State::default())?;
        tracing::info!("store reset");
        Ok(())
    }

    /// Keys of every live record, grouped by collection in creation order.
    pub fn list_all_keys(&self) -> crate::Result<Vec<RecordKey>> {
        self.with_lock(|state| {
            state
                .order
                .iter()
                .filter_map(|name| {
                    state
                        .collections
                        .get(name)
                        .map(|collection| (name, collection))
                })
                .flat_map(|(name, collection)| {
                    collection
                        .records()
                        .map(move |record| RecordKey::new(name.as_str(), record.id))
                })
                .collect::<Vec<_>>()
        })
    }

    /// Every record of `resource` with its `id` added. A caller-supplied
    /// `id` field is left as stored.
    pub fn list_collection(
        &self,
        resource: &str,
    ) -> crate::Result<Vec<RecordData>> {
        self.with_lock(|state| {
            state
                .live(resource)
                .map(|collection| {
                    collection
                        .records()
                        .map(|record| {
                            let mut rendered = record.data.clone();
                            rendered
                                .entry("id")
                                .or_insert_with(|| record.id.into());
                            rendered
                        })
                        .collect::<Vec<_>>()
                })
                .ok_or_else(|| crate::Error::collection_not_found(resource))
        })?
    }

    pub fn get_record(
        &self,
        resource: &str,
        id: RecordId,
    ) -> crate::Result<RecordData> {
        self.with_lock(|state| {
            state
                .live(resource)
                .and_then(|collection| collection.get(id))
                .cloned()
                .ok_or_else(|| crate::Error::record_not_found(resource, id))
        })?
    }

    pub fn create_record(
        &self,
        resource: &str,
        data: RecordData,
    ) -> crate::Result<CreatedRecord> {
        let id = self.with_lock_mut(|state| {
            state
                .collection_mut(resource)
                .insert(data)
        })?;

        tracing::debug!(resource, id, "record created");

        Ok(CreatedRecord {
            id,
            key: RecordKey::new(resource, id),
        })
    }

    /// Replaces the whole body of a live record; the id is kept.
    pub fn replace_record(
        &self,
        resource: &str,
        id: RecordId,
        data: RecordData,
    ) -> crate::Result<()> {
        self.with_lock_mut(|state| {
            state
                .collections
                .get_mut(resource)
                .and_then(|collection| collection.get_mut(id))
                .map(|slot| *slot = data)
                .ok_or_else(|| crate::Error::record_not_found(resource, id))
        })??;

        tracing::debug!(resource, id, "record replaced");
        Ok(())
    }

    /// Removes a record if it is live. Missing targets are not an error;
    /// the returned flag tells whether anything was removed.
    pub fn delete_record(
        &self,
        resource: &str,
        id: RecordId,
    ) -> crate::Result<bool> {
        let removed = self.with_lock_mut(|state| {
            state
                .collections
                .get_mut(resource)
                .is_some_and(|collection| collection.remove(id))
        })?;

        tracing::debug!(resource, id, removed, "record deleted");
        Ok(removed)
    }
}
