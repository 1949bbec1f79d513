//! Modal shell for create/edit forms.

use leptos::prelude::*;

/// The caller supplies the fields as children and owns validation and the
/// mutation. The save button is disabled unless `save_enabled`, which the
/// caller turns off while a submission is in flight.
#[component]
pub fn FormDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] save_enabled: Signal<bool>,
    #[prop(into)] submitting: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if save_enabled.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || title.get()}</h2>
                <form class="dialog__form" on:submit=on_form_submit>
                    <div class="dialog__fields">{children()}</div>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=move || submitting.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || !save_enabled.get()>
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
