use crate::models::{RecordData, RecordId};

#[derive(Debug, Clone)]
pub(crate) struct Record {
    pub(crate) id: RecordId,
    pub(crate) data: RecordData,
}

/// Live records of one collection, kept in ascending id order.
#[derive(Debug)]
pub(crate) struct Collection {
    records: Vec<Record>,
    next_id: RecordId,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Collection {
    pub(crate) fn insert(
        &mut self,
        data: RecordData,
    ) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        // ids only grow, so pushing keeps `records` sorted
        self.records.push(Record { id, data });
        id
    }

    fn position(
        &self,
        id: RecordId,
    ) -> Option<usize> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
    }

    pub(crate) fn get(
        &self,
        id: RecordId,
    ) -> Option<&RecordData> {
        self.position(id)
            .map(|at| &self.records[at].data)
    }

    pub(crate) fn get_mut(
        &mut self,
        id: RecordId,
    ) -> Option<&mut RecordData> {
        self.position(id)
            .map(|at| &mut self.records[at].data)
    }

    pub(crate) fn remove(
        &mut self,
        id: RecordId,
    ) -> bool {
        match self.position(id) {
            Some(at) => {
                self.records.remove(at);
                true
            },
            None => false,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    #[cfg(test)]
    pub(crate) fn next_id(&self) -> RecordId {
        self.next_id
    }
}
