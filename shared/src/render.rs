//! Projection of the two task lists into display models and static markup.
//!
//! Rendering never mutates a list. The browser view builds DOM nodes from
//! [`ActiveList`] and [`ArchiveList`]. `to_html` is the static-markup output
//! of the same lists: every string that came from the user goes through
//! [`Markup`], which escapes text and attribute values by default.

use std::fmt::Write;

use crate::task::{Task, TaskId};

pub const EMPTY_ACTIVE_MESSAGE: &str = "No tasks yet. Add one to get started!";
pub const EMPTY_ARCHIVE_MESSAGE: &str = "No archived tasks";

/// Summary line for the active list.
pub fn active_summary(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_ACTIVE_MESSAGE.to_string();
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    format!("{completed}/{} tasks completed", tasks.len())
}

/// Summary line for the archive.
pub fn archive_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} archived task{plural}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRow {
    pub id: TaskId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveList {
    pub rows: Vec<ActiveRow>,
    pub summary: String,
}

impl ActiveList {
    pub fn project(tasks: &[Task]) -> Self {
        Self {
            rows: tasks
                .iter()
                .map(|t| ActiveRow {
                    id: t.id,
                    text: t.text.clone(),
                    completed: t.completed,
                })
                .collect(),
            summary: active_summary(tasks),
        }
    }

    pub fn to_html(&self) -> String {
        let mut m = Markup::default();
        m.open("ul", &[("id", "taskList")]);
        for row in &self.rows {
            let class = if row.completed {
                "task-item completed"
            } else {
                "task-item"
            };
            let id = row.id.to_string();
            m.open("li", &[("class", class), ("data-id", id.as_str())]);
            let mut checkbox = vec![("type", "checkbox"), ("class", "checkbox")];
            if row.completed {
                checkbox.push(("checked", "checked"));
            }
            m.void("input", &checkbox);
            m.element("span", &[("class", "task-text")], &row.text);
            m.element("button", &[("class", "delete-btn")], "Delete");
            m.close("li");
        }
        m.close("ul");
        m.element("p", &[("id", "taskCount")], &self.summary);
        m.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveList {
    pub rows: Vec<ArchiveRow>,
    /// Set when there is nothing to show.
    pub placeholder: Option<&'static str>,
    pub summary: String,
}

impl ArchiveList {
    pub fn project(tasks: &[Task]) -> Self {
        Self {
            rows: tasks
                .iter()
                .map(|t| ArchiveRow {
                    id: t.id,
                    text: t.text.clone(),
                })
                .collect(),
            placeholder: tasks.is_empty().then_some(EMPTY_ARCHIVE_MESSAGE),
            summary: archive_summary(tasks.len()),
        }
    }

    pub fn to_html(&self) -> String {
        let mut m = Markup::default();
        m.open("ul", &[("id", "archiveList")]);
        if let Some(placeholder) = self.placeholder {
            m.element("div", &[("class", "empty-message")], placeholder);
        }
        for row in &self.rows {
            let id = row.id.to_string();
            m.open("li", &[("class", "task-item archived"), ("data-id", id.as_str())]);
            m.element("span", &[("class", "task-text")], &row.text);
            m.element("button", &[("class", "restore-btn")], "Restore");
            m.element("button", &[("class", "permanent-delete-btn")], "Remove");
            m.close("li");
        }
        m.close("ul");
        m.element("p", &[("id", "archiveCount")], &self.summary);
        m.finish()
    }
}

/// Replaces the five HTML-significant characters with entities.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Minimal HTML writer. Tag names are trusted; attribute values and text are
/// always escaped.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
        self.buf.push('>');
    }

    pub fn close(&mut self, tag: &str) {
        let _ = write!(self.buf, "</{tag}>");
    }

    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
        self.buf.push_str("/>");
    }

    pub fn text(&mut self, text: &str) {
        self.buf.push_str(&escape_html(text));
    }

    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.open(tag, attrs);
        self.text(text);
        self.close(tag);
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        let _ = write!(self.buf, "<{tag}");
        for (name, value) in attrs {
            let _ = write!(self.buf, " {name}=\"{}\"", escape_html(value));
        }
    }
}
