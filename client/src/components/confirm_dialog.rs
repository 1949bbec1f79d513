//! Destructive-action confirmation.

use leptos::prelude::*;

/// When `blocked_reason` is set the confirm button is disabled and the reason
/// is shown in place of the warning.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] blocked_reason: Signal<Option<&'static str>>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(default = "Delete")] confirm_label: &'static str,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_disabled = move || submitting.get() || blocked_reason.get().is_some();
    let on_confirm_click = move |_| {
        if !confirm_disabled() {
            on_confirm.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || title.get()}</h2>
                {move || match blocked_reason.get() {
                    Some(reason) => view! { <p class="dialog__notice">{reason}</p> }.into_any(),
                    None => view! { <p class="dialog__danger">{message.get()}</p> }.into_any(),
                }}
                <div class="dialog__actions">
                    <button class="btn" disabled=move || submitting.get() on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=confirm_disabled on:click=on_confirm_click>
                        {move || if submitting.get() { "Deleting..." } else { confirm_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
