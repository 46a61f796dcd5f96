use crate::error::StoreError;
use crate::prompt::{Prompt, EMPTY_TEXT_ALERT};
use crate::render::{ActiveList, ArchiveList};
use crate::storage::KeyValueStore;
use crate::store::{Outcome, TaskStore};
use crate::task::TaskId;

/// Which list is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Active,
    Archive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Restore(TaskId),
    Purge(TaskId),
    ShowTab(Tab),
}

/// Lists that changed and need to be drawn again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rerender {
    pub active: bool,
    pub archive: bool,
}

impl Rerender {
    pub const NONE: Self = Self {
        active: false,
        archive: false,
    };
    pub const ACTIVE: Self = Self {
        active: true,
        archive: false,
    };
    pub const ARCHIVE: Self = Self {
        active: false,
        archive: true,
    };
    pub const BOTH: Self = Self {
        active: true,
        archive: true,
    };

    pub fn any(self) -> bool {
        self.active || self.archive
    }
}

/// Routes user actions to the task store, asking the user through `P`
/// whenever an action needs it.
#[derive(Debug)]
pub struct Controller<S, P> {
    store: TaskStore<S>,
    prompt: P,
    tab: Tab,
}

impl<S: KeyValueStore, P: Prompt> Controller<S, P> {
    pub fn new(store: TaskStore<S>, prompt: P) -> Self {
        Self {
            store,
            prompt,
            tab: Tab::default(),
        }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn active_list(&self) -> ActiveList {
        ActiveList::project(self.store.active())
    }

    pub fn archive_list(&self) -> ArchiveList {
        ArchiveList::project(self.store.archived())
    }

    pub fn dispatch(&mut self, action: Action) -> Rerender {
        let (result, changed) = match action {
            Action::Add(text) => match self.store.add(&text) {
                Ok(_) => return Rerender::ACTIVE,
                Err(StoreError::EmptyText) => {
                    self.prompt.alert(EMPTY_TEXT_ALERT);
                    return Rerender::NONE;
                }
                Err(e) => {
                    // The task is in memory even though the write failed.
                    log::error!("add: {e}");
                    return Rerender::ACTIVE;
                }
            },
            Action::Toggle(id) => (self.store.toggle(id), Rerender::ACTIVE),
            Action::Delete(id) => (self.store.delete(id, &mut self.prompt), Rerender::BOTH),
            Action::Restore(id) => (self.store.restore(id), Rerender::BOTH),
            Action::Purge(id) => (self.store.purge(id, &mut self.prompt), Rerender::ARCHIVE),
            Action::ShowTab(tab) => {
                self.tab = tab;
                return Rerender::NONE;
            }
        };
        match result {
            Ok(Outcome::Applied) => changed,
            Ok(Outcome::Missing | Outcome::Declined) => Rerender::NONE,
            Err(e) => {
                log::error!("{e}");
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{AlwaysConfirm, Confirm, NeverConfirm};
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct Recorder {
        alerts: Vec<String>,
        asked: Vec<String>,
    }

    impl Confirm for Recorder {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            true
        }
    }

    impl Prompt for Recorder {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    #[test]
    fn blank_add_alerts_and_skips_render() {
        let mut recorder = Recorder::default();
        let mut c = Controller::new(TaskStore::open(MemoryStore::new()), &mut recorder);
        assert_eq!(c.dispatch(Action::Add("  ".into())), Rerender::NONE);
        assert!(c.store().active().is_empty());
        drop(c);
        assert_eq!(recorder.alerts, vec![EMPTY_TEXT_ALERT.to_string()]);
    }

    #[test]
    fn delete_and_purge_ask_with_distinct_messages() {
        let mut recorder = Recorder::default();
        let mut c = Controller::new(TaskStore::open(MemoryStore::new()), &mut recorder);
        c.dispatch(Action::Add("a".into()));
        let id = c.store().active()[0].id;
        assert_eq!(c.dispatch(Action::Delete(id)), Rerender::BOTH);
        assert_eq!(c.dispatch(Action::Purge(id)), Rerender::ARCHIVE);
        drop(c);
        assert_eq!(
            recorder.asked,
            vec![
                crate::prompt::DELETE_CONFIRMATION.to_string(),
                crate::prompt::PURGE_CONFIRMATION.to_string(),
            ]
        );
    }

    #[test]
    fn rerender_tracks_affected_lists() {
        let mut c = Controller::new(TaskStore::open(MemoryStore::new()), AlwaysConfirm);
        assert_eq!(c.dispatch(Action::Add("a".into())), Rerender::ACTIVE);
        let id = c.store().active()[0].id;
        assert_eq!(c.dispatch(Action::Toggle(id)), Rerender::ACTIVE);
        assert_eq!(c.dispatch(Action::Delete(id)), Rerender::BOTH);
        assert_eq!(c.dispatch(Action::Toggle(id)), Rerender::NONE);
        assert_eq!(c.dispatch(Action::Restore(id)), Rerender::BOTH);
        assert_eq!(c.dispatch(Action::Restore(id)), Rerender::NONE);
    }

    #[test]
    fn declined_prompts_skip_render() {
        let mut c = Controller::new(TaskStore::open(MemoryStore::new()), NeverConfirm);
        c.dispatch(Action::Add("a".into()));
        let id = c.store().active()[0].id;
        assert_eq!(c.dispatch(Action::Delete(id)), Rerender::NONE);
        assert_eq!(c.store().active().len(), 1);
    }

    #[test]
    fn tab_switch_leaves_data_alone() {
        let mut c = Controller::new(TaskStore::open(MemoryStore::new()), AlwaysConfirm);
        c.dispatch(Action::Add("a".into()));
        assert_eq!(c.tab(), Tab::Active);
        assert_eq!(c.dispatch(Action::ShowTab(Tab::Archive)), Rerender::NONE);
        assert_eq!(c.tab(), Tab::Archive);
        assert_eq!(c.store().active().len(), 1);
        assert_eq!(c.active_list().summary, "0/1 tasks completed");
        assert_eq!(c.archive_list().summary, "0 archived tasks");
    }
}
