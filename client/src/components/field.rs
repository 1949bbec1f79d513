//! Labelled form controls bound to one field of a form signal.
//!
//! DESIGN
//! ======
//! A `Binding` is a read signal plus a setter, projected out of the form's
//! `RwSignal` with `bind`. Controls never see the whole form, so every entity
//! form reuses the same small set of inputs.

use leptos::prelude::*;

use crate::forms::{FieldErrors, toggle_id};
use crate::net::api;
use crate::net::resource::{Choice, Resource, choice_options};
use crate::net::types::ListQuery;
use crate::state::toast::ToastState;

// =============================================================================
// BINDINGS
// =============================================================================

pub struct Binding<V: Send + Sync + 'static> {
    pub value: Signal<V>,
    pub set: Callback<V>,
}

impl<V: Send + Sync + 'static> Clone for Binding<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Send + Sync + 'static> Copy for Binding<V> {}

impl<V: Clone + Send + Sync + 'static> Binding<V> {
    pub fn new(value: Signal<V>, set: Callback<V>) -> Self {
        Self { value, set }
    }
}

/// Project one field of `form` as a `Binding`.
pub fn bind<F, V>(form: RwSignal<F>, get: fn(&F) -> V, set: fn(&mut F, V)) -> Binding<V>
where
    F: Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Binding {
        value: Signal::derive(move || form.with(get)),
        set: Callback::new(move |value: V| form.update(|f| set(f, value))),
    }
}

/// The validation message for `field`, if any.
pub fn error_for(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
}

/// `(id, label)` options for a select, loaded from the first page of `R`.
pub fn use_options<R: Resource>() -> Signal<Vec<(String, String)>> {
    let loaded = LocalResource::new(|| async { api::list::<R>(&ListQuery::options()).await });
    Signal::derive(move || match loaded.get() {
        Some(Ok(page)) => page.results.iter().map(|r| (r.id().to_owned(), r.display_name())).collect(),
        Some(Err(_)) | None => Vec::new(),
    })
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="field__error">{message}</p> })
}

// =============================================================================
// CONTROLS
// =============================================================================

#[component]
pub fn TextField(
    label: &'static str,
    binding: Binding<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    binding: Binding<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                class:field__input--invalid=move || error.get().is_some()
                rows=rows.to_string()
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            ></textarea>
            <FieldError error=error/>
        </label>
    }
}

/// Single choice from `(value, label)` options, with a blank placeholder row.
#[component]
pub fn SelectField(
    label: &'static str,
    binding: Binding<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "Select...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                prop:value=move || binding.value.get()
                on:change=move |ev| binding.set.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let current = binding.value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! { <option value=value selected=selected>{text}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <FieldError error=error/>
        </label>
    }
}

/// Select over a fixed enum such as a status or lesson mode.
#[component]
pub fn ChoiceField<C: Choice>(label: &'static str, binding: Binding<C>) -> impl IntoView {
    let options = choice_options::<C>();
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || binding.value.get().as_str()
                on:change=move |ev| {
                    if let Some(choice) = C::parse(&event_target_value(&ev)) {
                        binding.set.run(choice);
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let value_attr = value.clone();
                        let selected = move || binding.value.get().as_str() == value;
                        view! { <option value=value_attr selected=selected>{text}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Checkbox list for many-to-many references.
#[component]
pub fn MultiSelectField(
    label: &'static str,
    binding: Binding<Vec<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <fieldset class="field field--multi">
            <legend class="field__label">{label}</legend>
            <div class="field__options">
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, text)| {
                            let checked_id = id.clone();
                            let checked = move || binding.value.with(|ids| ids.contains(&checked_id));
                            let toggle = move |_| {
                                let next = binding.value.with_untracked(|ids| toggle_id(ids, &id));
                                binding.set.run(next);
                            };
                            view! {
                                <label class="field__option">
                                    <input type="checkbox" prop:checked=checked on:change=toggle/>
                                    {text}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <FieldError error=error/>
        </fieldset>
    }
}

/// Uploads the chosen file through `/api/upload` and stores the returned URL.
#[component]
pub fn FileUploadField(
    label: &'static str,
    binding: Binding<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "*/*")] accept: &'static str,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let uploading = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::components::toaster::notify;
            use crate::state::toast::ToastKind;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match api::upload_file(file).await {
                    Ok(url) => binding.set.run(url),
                    Err(err) => notify(toasts, ToastKind::Error, err.user_message()),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, toasts);
    };

    view! {
        <div class="field field--upload">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="file"
                accept=accept
                disabled=move || uploading.get()
                on:change=on_change
            />
            <Show when=move || uploading.get()>
                <span class="field__hint">"Uploading..."</span>
            </Show>
            {move || {
                let url = binding.value.get();
                (!url.is_empty())
                    .then(|| {
                        view! {
                            <a class="field__link" href=url.clone() target="_blank" rel="noopener">
                                "Current file"
                            </a>
                        }
                    })
            }}
            <FieldError error=error/>
        </div>
    }
}
