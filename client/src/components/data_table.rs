//! Generic paginated table.
//!
//! DESIGN
//! ======
//! The table owns no fetch logic. Callers pass rows and `PageState` and get
//! page changes back through `on_page_change`. Cells default to the row's
//! serialized JSON at the column key, so most columns need no renderer.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;

use crate::components::pager::Pager;
use crate::state::table::PageState;
use crate::util::format::{EMPTY_CELL, cell_text};

/// Shown in place of rows when a list comes back empty.
pub const EMPTY_MESSAGE: &str = "This is empty. Please create a new one.";

pub const LOADING_MESSAGE: &str = "Loading...";

/// What the table body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Failed,
    Empty,
    Rows,
}

impl TableBody {
    #[must_use]
    pub fn select(loading: bool, failed: bool, row_count: usize) -> Self {
        match (loading, failed, row_count) {
            (true, _, _) => Self::Loading,
            (false, true, _) => Self::Failed,
            (false, false, 0) => Self::Empty,
            _ => Self::Rows,
        }
    }

    /// Fixed text for the placeholder row, if this body has one.
    #[must_use]
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Failed | Self::Rows => None,
        }
    }

    /// The pager only ever sits under real rows.
    #[must_use]
    pub fn shows_pager(self, page: &PageState) -> bool {
        self == Self::Rows && page.pager_visible()
    }
}

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

pub struct Column<T> {
    /// Serialized field, dotted for nested values (`"grade.title"`).
    pub key: &'static str,
    pub header: &'static str,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self { key: self.key, header: self.header, render: self.render.clone() }
    }
}

impl<T> Column<T> {
    #[must_use]
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self { key, header, render: None }
    }

    #[must_use]
    pub fn with_render(mut self, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }
}

/// A pill for status-like values; `tone` picks the colour modifier.
pub fn badge(text: &'static str, tone: &'static str) -> AnyView {
    view! { <span class=format!("badge badge--{tone}")>{text}</span> }.into_any()
}

#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)] page: Signal<PageState>,
    #[prop(into)] loading: Signal<bool>,
    /// Load failure shown in place of rows.
    #[prop(into)] error: Signal<Option<String>>,
    on_page_change: Callback<u32>,
    #[prop(optional)] actions: Option<CellRenderer<T>>,
) -> impl IntoView
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let span = (columns.len() + usize::from(actions.is_some())).to_string();
    let headers = columns.iter().map(|c| c.header).collect::<Vec<_>>();
    let has_actions = actions.is_some();
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    let kind = Memo::new(move |_| {
        TableBody::select(loading.get(), error.with(Option::is_some), rows.with(Vec::len))
    });
    let pager_shown = move || kind.get().shows_pager(&page.get());

    let body = move || {
        match kind.get() {
            TableBody::Rows => {}
            TableBody::Failed => {
                return view! {
                    <tr class="data-table__error">
                        <td colspan=span.clone()>{error.get().unwrap_or_default()}</td>
                    </tr>
                }
                .into_any();
            }
            placeholder => {
                let class = if placeholder == TableBody::Loading { "data-table__loading" } else { "data-table__empty" };
                return view! {
                    <tr class=class>
                        <td colspan=span.clone()>{placeholder.placeholder()}</td>
                    </tr>
                }
                .into_any();
            }
        }
        rows.get()
            .into_iter()
            .map(|row| {
                let json = serde_json::to_value(&row).unwrap_or_default();
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let content = match &col.render {
                                Some(render) => render(&row),
                                None => cell_text(&json, col.key).into_any(),
                            };
                            view! { <td>{content}</td> }
                        })
                        .collect::<Vec<_>>()
                });
                let action_cell = actions.with_value(|a| {
                    a.as_ref().map(|render| view! { <td class="data-table__actions">{render(&row)}</td> })
                });
                view! { <tr>{cells} {action_cell}</tr> }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="data-table">
            <table>
                <thead>
                    <tr>
                        {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect::<Vec<_>>()}
                        {has_actions.then(|| view! { <th class="data-table__actions">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <Show when=pager_shown>
                <Pager page=page on_page_change=on_page_change/>
            </Show>
        </div>
    }
}

/// `"-"` when a renderer has nothing to show.
#[must_use]
pub fn or_placeholder(text: String) -> String {
    if text.trim().is_empty() { EMPTY_CELL.to_owned() } else { text }
}
