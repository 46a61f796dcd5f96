use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use tasklist_shared::render::{ActiveList, ArchiveList};
use tasklist_shared::Tab;

use crate::{Msg, INPUT_ID};

pub fn header(draft: &str) -> Node<Msg> {
    div([class("input-section")], [
        input([
            r#type("text"),
            id(INPUT_ID),
            placeholder("Add a new task..."),
            value(draft.to_string()),
            on_input(|event| Msg::SetInput(event.value())),
            on_keypress(|event| Msg::InputKey(event.key())),
        ], []),
        button([id("addBtn"), on_click(|_| Msg::Add)], [text("Add")]),
    ])
}

pub fn tabs(current: Tab) -> Node<Msg> {
    div([class("tabs")], [
        tab_button("activeTab", "Active", Tab::Active, current),
        tab_button("archiveTab", "Archive", Tab::Archive, current),
    ])
}

fn tab_button(dom_id: &'static str, label: &str, tab: Tab, current: Tab) -> Node<Msg> {
    button([
        id(dom_id),
        class(if tab == current { "tab-btn active" } else { "tab-btn" }),
        on_click(move |_| Msg::ShowTab(tab)),
    ], [text(label)])
}

fn view_class(visible: bool) -> &'static str {
    if visible { "view" } else { "view hidden" }
}

pub fn active_view(list: &ActiveList, visible: bool) -> Node<Msg> {
    div([id("activeView"), class(view_class(visible))], [
        ul(
            [id("taskList"), class("task-list")],
            list.rows.iter().map(|row| {
                let task_id = row.id;
                li([
                    key(task_id.to_string()),
                    class(if row.completed { "task-item completed" } else { "task-item" }),
                ], [
                    input([
                        r#type("checkbox"),
                        class("checkbox"),
                        checked(row.completed),
                        on_change(move |_| Msg::Toggle(task_id)),
                    ], []),
                    span([class("task-text")], [text(&row.text)]),
                    button([
                        class("delete-btn"),
                        on_click(move |_| Msg::Delete(task_id)),
                    ], [text("Delete")]),
                ])
            }).collect::<Vec<_>>(),
        ),
        p([id("taskCount"), class("task-count")], [text(&list.summary)]),
    ])
}

pub fn archive_view(list: &ArchiveList, visible: bool) -> Node<Msg> {
    let mut rows: Vec<Node<Msg>> = Vec::with_capacity(list.rows.len() + 1);
    if let Some(placeholder) = list.placeholder {
        rows.push(div([class("empty-message")], [text(placeholder)]));
    }
    rows.extend(list.rows.iter().map(|row| {
        let task_id = row.id;
        li([key(task_id.to_string()), class("task-item archived")], [
            span([class("task-text")], [text(&row.text)]),
            button([
                class("restore-btn"),
                on_click(move |_| Msg::Restore(task_id)),
            ], [text("Restore")]),
            button([
                class("permanent-delete-btn"),
                on_click(move |_| Msg::Purge(task_id)),
            ], [text("Remove")]),
        ])
    }));

    div([id("archiveView"), class(view_class(visible))], [
        ul([id("archiveList"), class("task-list")], rows),
        p([id("archiveCount"), class("task-count")], [text(&list.summary)]),
    ])
}
