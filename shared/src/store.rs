use std::collections::HashSet;

use crate::error::StoreError;
use crate::prompt::{Confirm, DELETE_CONFIRMATION, PURGE_CONFIRMATION};
use crate::storage::{self, KeyValueStore, ACTIVE_KEY, ARCHIVED_KEY};
use crate::task::{IdGenerator, Task, TaskId};

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The id is not in the list the operation works on.
    Missing,
    /// The user said no.
    Declined,
}

/// Owns the active and archived lists and mirrors them into `S` after every
/// change.
#[derive(Debug)]
pub struct TaskStore<S> {
    storage: S,
    active: Vec<Task>,
    archived: Vec<Task>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads both lists from `storage`.
    pub fn open(storage: S) -> Self {
        let active = storage::load(&storage, ACTIVE_KEY);
        let mut archived = storage::load(&storage, ARCHIVED_KEY);

        let live: HashSet<TaskId> = active.iter().map(|t| t.id).collect();
        let before = archived.len();
        archived.retain(|t| !live.contains(&t.id));
        if archived.len() != before {
            log::warn!(
                "dropped {} archived task(s) that were also active",
                before - archived.len()
            );
        }

        let ids = IdGenerator::after(active.iter().chain(archived.iter()));
        log::debug!("loaded {} active, {} archived", active.len(), archived.len());
        Self {
            storage,
            active,
            archived,
            ids,
        }
    }

    pub fn active(&self) -> &[Task] {
        &self.active
    }

    pub fn archived(&self) -> &[Task] {
        &self.archived
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add(&mut self, text: &str) -> Result<TaskId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let (active, archived) = (&self.active, &self.archived);
        let id = self
            .ids
            .next_id(|id| active.iter().chain(archived).any(|t| t.id == id));
        let task = Task::new(id, text).ok_or(StoreError::EmptyText)?;
        self.active.push(task);
        log::debug!("added task {id}");
        self.save_active()?;
        Ok(id)
    }

    pub fn toggle(&mut self, id: TaskId) -> Result<Outcome, StoreError> {
        let Some(task) = self.active.iter_mut().find(|t| t.id == id) else {
            log::debug!("toggle: no active task {id}");
            return Ok(Outcome::Missing);
        };
        task.completed = !task.completed;
        self.save_active()?;
        Ok(Outcome::Applied)
    }

    /// Moves an active task to the archive after confirmation. The task keeps
    /// its `completed` flag.
    pub fn delete(&mut self, id: TaskId, confirm: &mut impl Confirm) -> Result<Outcome, StoreError> {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return Ok(Outcome::Declined);
        }
        let Some(pos) = self.active.iter().position(|t| t.id == id) else {
            log::debug!("delete: no active task {id}");
            return Ok(Outcome::Missing);
        };
        let task = self.active.remove(pos);
        self.archived.push(task);
        self.save_both()?;
        Ok(Outcome::Applied)
    }

    pub fn restore(&mut self, id: TaskId) -> Result<Outcome, StoreError> {
        let Some(pos) = self.archived.iter().position(|t| t.id == id) else {
            log::debug!("restore: no archived task {id}");
            return Ok(Outcome::Missing);
        };
        let task = self.archived.remove(pos);
        self.active.push(task);
        self.save_both()?;
        Ok(Outcome::Applied)
    }

    /// Permanently removes an archived task after confirmation.
    pub fn purge(&mut self, id: TaskId, confirm: &mut impl Confirm) -> Result<Outcome, StoreError> {
        if !confirm.confirm(PURGE_CONFIRMATION) {
            return Ok(Outcome::Declined);
        }
        let Some(pos) = self.archived.iter().position(|t| t.id == id) else {
            log::debug!("purge: no archived task {id}");
            return Ok(Outcome::Missing);
        };
        self.archived.remove(pos);
        log::debug!("purged task {id}");
        self.save_archived()?;
        Ok(Outcome::Applied)
    }

    fn save_active(&mut self) -> Result<(), StoreError> {
        storage::save(&mut self.storage, ACTIVE_KEY, &self.active)?;
        Ok(())
    }

    fn save_archived(&mut self) -> Result<(), StoreError> {
        storage::save(&mut self.storage, ARCHIVED_KEY, &self.archived)?;
        Ok(())
    }

    // Both writes are attempted even if the first one fails.
    fn save_both(&mut self) -> Result<(), StoreError> {
        let active = self.save_active();
        let archived = self.save_archived();
        active.and(archived)
    }
}
