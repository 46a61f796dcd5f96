use sauron::{html::*, prelude::*};
use tasklist_shared::{
    Action, Controller, KeyValueStore, MemoryStore, Prompt, Tab, TaskId, TaskStore,
};
mod prompt;
mod storage;
mod view;

pub use prompt::BrowserPrompt;
pub use storage::LocalStorage;

pub(crate) const INPUT_ID: &str = "taskInput";

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SetInput(String),
    /// A key pressed inside the text input.
    InputKey(String),
    Add,
    Toggle(TaskId),
    Delete(TaskId),
    Restore(TaskId),
    Purge(TaskId),
    ShowTab(Tab),
}

impl Msg {
    /// The controller action for messages that don't depend on the input
    /// field.
    fn into_action(self) -> Option<Action> {
        match self {
            Msg::Toggle(id) => Some(Action::Toggle(id)),
            Msg::Delete(id) => Some(Action::Delete(id)),
            Msg::Restore(id) => Some(Action::Restore(id)),
            Msg::Purge(id) => Some(Action::Purge(id)),
            Msg::ShowTab(tab) => Some(Action::ShowTab(tab)),
            Msg::SetInput(_) | Msg::InputKey(_) | Msg::Add => None,
        }
    }
}

pub struct Model<S, P> {
    controller: Controller<S, P>,
    input: String,
}

impl<S: KeyValueStore, P: Prompt> Model<S, P> {
    pub fn new(storage: S, prompt: P) -> Self {
        Self {
            controller: Controller::new(TaskStore::open(storage), prompt),
            input: String::new(),
        }
    }

    fn submit(&mut self) {
        let rerender = self.controller.dispatch(Action::Add(self.input.clone()));
        if rerender.active {
            self.input.clear();
            focus_input();
        }
    }
}

impl<S, P> Application for Model<S, P>
where
    S: KeyValueStore + 'static,
    P: Prompt + 'static,
{
    type MSG = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::SetInput(input) => self.input = input,
            Msg::InputKey(key) => {
                if key == "Enter" {
                    self.submit();
                }
            }
            Msg::Add => self.submit(),
            other => {
                if let Some(action) = other.into_action() {
                    let rerender = self.controller.dispatch(action);
                    log::debug!("rerender {rerender:?}");
                }
            }
        }
        Cmd::none()
    }

    fn view(&self) -> Node<Msg> {
        let tab = self.controller.tab();
        div([class("container")], [
            h1([], [text("Task List")]),
            view::header(&self.input),
            view::tabs(tab),
            view::active_view(&self.controller.active_list(), tab == Tab::Active),
            view::archive_view(&self.controller.archive_list(), tab == Tab::Archive),
        ])
    }
}

#[cfg(target_arch = "wasm32")]
fn focus_input() {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(INPUT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

// No DOM to focus outside the browser.
#[cfg(not(target_arch = "wasm32"))]
fn focus_input() {}

/// Storage for this page: `localStorage`, or a throwaway in-memory store when
/// the browser refuses access.
fn open_storage() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("localStorage unavailable, tasks will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    Program::mount_to_body(Model::new(open_storage(), BrowserPrompt));
}

#[cfg(test)]
mod tests {
    use tasklist_shared::{AlwaysConfirm, ACTIVE_KEY};

    use super::*;

    fn model() -> Model<MemoryStore, AlwaysConfirm> {
        Model::new(MemoryStore::new(), AlwaysConfirm)
    }

    #[test]
    fn input_messages_have_no_direct_action() {
        assert_eq!(Msg::Add.into_action(), None);
        assert_eq!(Msg::SetInput("x".into()).into_action(), None);
        assert_eq!(Msg::InputKey("Enter".into()).into_action(), None);
        assert_eq!(
            Msg::Purge(TaskId(3)).into_action(),
            Some(Action::Purge(TaskId(3)))
        );
        assert_eq!(
            Msg::ShowTab(Tab::Archive).into_action(),
            Some(Action::ShowTab(Tab::Archive))
        );
    }

    #[test]
    fn non_enter_keys_do_not_submit() {
        let mut m = model();
        m.update(Msg::SetInput("draft".into()));
        m.update(Msg::InputKey("a".into()));
        assert!(m.controller.store().active().is_empty());
        assert_eq!(m.input, "draft");
    }

    #[test]
    fn enter_adds_task_and_clears_input() {
        let mut m = model();
        m.update(Msg::SetInput("  water plants ".into()));
        m.update(Msg::InputKey("Enter".into()));
        let active = m.controller.store().active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "water plants");
        assert_eq!(m.input, "");
    }

    #[test]
    fn add_button_submits_like_enter() {
        let mut m = model();
        m.update(Msg::SetInput("first".into()));
        m.update(Msg::Add);
        m.update(Msg::SetInput("second".into()));
        m.update(Msg::InputKey("Enter".into()));
        let texts: Vec<&str> = m
            .controller
            .store()
            .active()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(m.input, "");
        assert!(m.controller.store().storage().raw(ACTIVE_KEY).is_some());
    }

    #[test]
    fn blank_submit_keeps_input() {
        let mut m = model();
        m.update(Msg::SetInput("   ".into()));
        m.update(Msg::Add);
        assert!(m.controller.store().active().is_empty());
        assert_eq!(m.input, "   ");
    }

    #[test]
    fn tab_switch_is_not_persisted() {
        let mut m = model();
        m.update(Msg::ShowTab(Tab::Archive));
        assert_eq!(m.controller.tab(), Tab::Archive);
        assert_eq!(m.controller.store().storage().raw(ACTIVE_KEY), None);
    }
}
