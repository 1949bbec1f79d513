//! One list screen per resource: table, pager and the CRUD dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every entity page is a `ResourceScreen<F>` where `F` is the entity's form.
//! The form names its record type, so the screen can fetch, render, create,
//! edit and delete without per-entity code beyond columns and fields.
//!
//! DESIGN
//! ======
//! The list is a `LocalResource` keyed on the page number and a reload
//! counter. Mutations never patch rows in place; they bump the counter and
//! the list refetches.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors stay inline and block the request. Mutation failures
//! become an error toast and reopen the dialog for correction. A failed list
//! load replaces the table rows with the error.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{CellRenderer, Column, DataTable};
use crate::components::form_dialog::FormDialog;
use crate::components::toaster::notify;
use crate::components::view_dialog::ViewDialog;
use crate::forms::{EntityForm, FieldErrors};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::resource::Resource;
use crate::net::types::{DEFAULT_PAGE_SIZE, ListQuery};
use crate::state::dialog::{DialogMode, DialogState, save_enabled};
use crate::state::table::{PageState, fallback_page};
use crate::state::toast::{ToastKind, ToastState};

/// Renders the inputs of `F` inside the form dialog.
pub type FieldsFn<F> = fn(RwSignal<F>, RwSignal<FieldErrors>) -> AnyView;

/// Extra per-row controls, rendered before View/Edit/Delete.
pub type RowActionsFn<R> = fn(&R, ScreenHandle) -> AnyView;

/// Extra content below the key/value list of the view dialog.
pub type DetailsFn<R> = fn(&R) -> AnyView;

/// What row actions may do to the surrounding screen.
#[derive(Clone, Copy)]
pub struct ScreenHandle {
    reload: RwSignal<u32>,
    toasts: RwSignal<ToastState>,
}

impl ScreenHandle {
    pub fn refresh(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    pub fn success(&self, message: impl Into<String>) {
        notify(self.toasts, ToastKind::Success, message);
    }

    pub fn failure(&self, err: &ApiError) {
        notify(self.toasts, ToastKind::Error, err.user_message());
    }

    /// Toast the outcome of a mutation and refetch on success.
    pub fn settle<T>(&self, result: Result<T, ApiError>, success: impl Into<String>) -> bool {
        match result {
            Ok(_) => {
                self.success(success);
                self.refresh();
                true
            }
            Err(err) => {
                self.failure(&err);
                false
            }
        }
    }
}

#[component]
pub fn ResourceScreen<F>(
    title: &'static str,
    columns: Vec<Column<F::Record>>,
    fields: FieldsFn<F>,
    #[prop(default = true)] allow_create: bool,
    #[prop(optional)] sort_by: Option<&'static str>,
    #[prop(optional)] row_actions: Option<RowActionsFn<F::Record>>,
    #[prop(optional)] details: Option<DetailsFn<F::Record>>,
) -> impl IntoView
where
    F: EntityForm,
{
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reload = RwSignal::new(0_u32);
    let handle = ScreenHandle { reload, toasts };
    let label = <F::Record as Resource>::LABEL;

    // =========================================================================
    // LIST
    // =========================================================================

    let page_no = RwSignal::new(1_u32);
    let listing = LocalResource::new(move || {
        reload.track();
        let query = ListQuery::page(page_no.get()).with_sort(sort_by);
        async move { api::list::<F::Record>(&query).await }
    });

    let rows = Signal::derive(move || match listing.get() {
        Some(Ok(page)) => page.results,
        Some(Err(_)) | None => Vec::new(),
    });
    let page_state = Signal::derive(move || match listing.get() {
        Some(Ok(page)) => PageState::from_page(&page, DEFAULT_PAGE_SIZE),
        Some(Err(_)) | None => PageState::empty(DEFAULT_PAGE_SIZE),
    });
    let loading = Signal::derive(move || listing.get().is_none());
    let load_error = Signal::derive(move || match listing.get() {
        Some(Err(err)) => Some(err.user_message()),
        _ => None,
    });
    let on_page_change = Callback::new(move |page: u32| page_no.set(page));

    // Deleting the last row of the last page leaves the screen past the end.
    Effect::new(move |_| {
        let fallback = match listing.get() {
            Some(Ok(page)) => fallback_page(&page),
            _ => None,
        };
        if let Some(target) = fallback {
            page_no.set(target);
        }
    });

    // =========================================================================
    // DIALOGS
    // =========================================================================

    let dialog = RwSignal::new(DialogState::Closed);
    let form = RwSignal::new(F::blank());
    let initial = RwSignal::new(F::blank());
    let errors = RwSignal::new(FieldErrors::default());
    let selected = RwSignal::new(None::<F::Record>);
    let viewing = RwSignal::new(None::<F::Record>);

    let open_create = move |_| {
        form.set(F::blank());
        initial.set(F::blank());
        errors.set(FieldErrors::default());
        selected.set(None);
        dialog.update(|d| d.open(DialogMode::Create));
    };
    let open_edit = Callback::new(move |record: F::Record| {
        let prefilled = F::from_record(&record);
        form.set(prefilled.clone());
        initial.set(prefilled);
        errors.set(FieldErrors::default());
        let id = record.id().to_owned();
        selected.set(Some(record));
        dialog.update(|d| d.open(DialogMode::Edit { id }));
    });
    let open_delete = Callback::new(move |record: F::Record| {
        let id = record.id().to_owned();
        selected.set(Some(record));
        dialog.update(|d| d.open(DialogMode::Delete { id }));
    });
    let close = Callback::new(move |()| dialog.update(DialogState::close));

    let submit_form = Callback::new(move |()| {
        let payload = match form.with_untracked(F::validate) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        let Some(mode) = dialog.try_update(DialogState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let succeeded = match mode {
                DialogMode::Create => {
                    handle.settle(api::create::<F::Record>(&payload).await, format!("{label} created"))
                }
                DialogMode::Edit { id } => {
                    handle.settle(api::update::<F::Record>(&id, &payload).await, format!("{label} updated"))
                }
                DialogMode::Delete { .. } => false,
            };
            dialog.update(|d| d.finish(succeeded));
            if succeeded {
                form.set(F::blank());
            }
        });
    });

    let confirm_delete = Callback::new(move |()| {
        if selected.with_untracked(|r| r.as_ref().and_then(Resource::delete_blocked_reason).is_some()) {
            return;
        }
        let Some(DialogMode::Delete { id }) = dialog.try_update(DialogState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let succeeded = handle.settle(api::remove::<F::Record>(&id).await, format!("{label} deleted"));
            dialog.update(|d| d.finish(succeeded));
            if succeeded {
                selected.set(None);
            }
        });
    });

    let form_open = move || dialog.with(|d| matches!(d.mode(), Some(DialogMode::Create | DialogMode::Edit { .. })));
    let delete_open = move || dialog.with(|d| matches!(d.mode(), Some(DialogMode::Delete { .. })));
    let submitting = Signal::derive(move || dialog.with(DialogState::is_submitting));
    let can_save = Signal::derive(move || {
        dialog.with(|d| form.with(|f| initial.with(|i| save_enabled(d, F::REQUIRE_DIRTY_EDIT, i, f))))
    });
    let form_title = Signal::derive(move || match dialog.with(|d| d.mode().cloned()) {
        Some(DialogMode::Edit { .. }) => format!("Edit {label}"),
        _ => format!("Add {label}"),
    });

    // =========================================================================
    // ROW ACTIONS
    // =========================================================================

    let actions: CellRenderer<F::Record> = std::sync::Arc::new(move |row: &F::Record| {
        let extra = row_actions.map(|render| render(row, handle));
        let for_view = row.clone();
        let for_edit = row.clone();
        let for_delete = row.clone();
        view! {
            <div class="row-actions">
                {extra}
                <button class="btn btn--small" on:click=move |_| viewing.set(Some(for_view.clone()))>
                    "View"
                </button>
                <button class="btn btn--small" on:click=move |_| open_edit.run(for_edit.clone())>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| open_delete.run(for_delete.clone())>
                    "Delete"
                </button>
            </div>
        }
        .into_any()
    });

    view! {
        <section class="resource-screen">
            <header class="resource-screen__header">
                <h1>{title}</h1>
                <span class="resource-screen__spacer"></span>
                {allow_create
                    .then(|| {
                        view! {
                            <button class="btn btn--primary" on:click=open_create>
                                {format!("Add {label}")}
                            </button>
                        }
                    })}
            </header>
            <DataTable
                rows=rows
                columns=columns
                page=page_state
                loading=loading
                error=load_error
                on_page_change=on_page_change
                actions=actions
            />
            <Show when=form_open>
                <FormDialog
                    title=form_title
                    save_enabled=can_save
                    submitting=submitting
                    on_cancel=close
                    on_submit=submit_form
                >
                    {fields(form, errors)}
                </FormDialog>
            </Show>
            <Show when=delete_open>
                <ConfirmDialog
                    title=format!("Delete {label}")
                    message=Signal::derive(move || {
                        let name = selected.with(|r| r.as_ref().map(Resource::display_name).unwrap_or_default());
                        format!("Delete \"{name}\"? This cannot be undone.")
                    })
                    blocked_reason=Signal::derive(move || {
                        selected.with(|r| r.as_ref().and_then(Resource::delete_blocked_reason))
                    })
                    submitting=submitting
                    on_cancel=close
                    on_confirm=confirm_delete
                />
            </Show>
            {move || {
                viewing
                    .get()
                    .map(|record| {
                        let extra = details.map(|render| render(&record));
                        view! {
                            <ViewDialog
                                title=record.display_name()
                                record=serde_json::to_value(&record).unwrap_or_default()
                                on_close=Callback::new(move |()| viewing.set(None))
                            >
                                {extra}
                            </ViewDialog>
                        }
                    })
            }}
        </section>
    }
}
