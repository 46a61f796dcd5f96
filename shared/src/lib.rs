//! Core of the task list: the task model, the key-value storage adapter, the
//! task store, the view renderer and the interaction controller.
//!
//! Nothing in here touches a display. The browser crate plugs in
//! `localStorage` through [`KeyValueStore`] and native dialogs through
//! [`Prompt`].

pub mod controller;
pub mod error;
pub mod prompt;
pub mod render;
pub mod storage;
pub mod store;
pub mod task;

pub use controller::{Action, Controller, Rerender, Tab};
pub use error::{StorageError, StoreError};
pub use prompt::{AlwaysConfirm, Confirm, NeverConfirm, Prompt};
pub use render::{ActiveList, ArchiveList};
pub use storage::{KeyValueStore, MemoryStore, ACTIVE_KEY, ARCHIVED_KEY};
pub use store::{Outcome, TaskStore};
pub use task::{Task, TaskId};
