//! Ordered store of a widget's committed records.

use std::collections::vec_deque;
use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::model::record::{Record, RecordId};

/// Where new records land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderingPolicy {
    #[default]
    Append,
    /// Newest first, as in the guestbook.
    Prepend,
}

/// All mutation goes through `append` and `remove`; `list` is a read view.
#[derive(Debug, Default)]
pub struct Collection {
    policy: OrderingPolicy,
    records: VecDeque<Record>,
    ids: HashSet<RecordId>,
}

impl Collection {
    pub fn new(policy: OrderingPolicy) -> Self {
        Self {
            policy,
            records: VecDeque::new(),
            ids: HashSet::new(),
        }
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn append(&mut self, record: Record) -> Result<(), EditorError> {
        if !self.ids.insert(record.id()) {
            return Err(EditorError::DuplicateId(record.id()));
        }
        match self.policy {
            OrderingPolicy::Append => self.records.push_back(record),
            OrderingPolicy::Prepend => self.records.push_front(record),
        }
        Ok(())
    }

    /// Removes the record with `id`, handing it back so its resources can be
    /// released. `None` when no such record exists.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        if !self.ids.remove(&id) {
            return None;
        }
        let pos = self.records.iter().position(|r| r.id() == id)?;
        self.records.remove(pos)
    }

    pub fn list(&self) -> vec_deque::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
