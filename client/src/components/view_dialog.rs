//! Read-only record details.

use leptos::prelude::*;

use crate::util::format::detail_rows;

#[component]
pub fn ViewDialog(
    title: String,
    /// Serialized record; every visible field becomes one row.
    record: serde_json::Value,
    on_close: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let rows = detail_rows(&record);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <dl class="details">
                    {rows
                        .into_iter()
                        .map(|(label, text)| {
                            view! {
                                <dt class="details__label">{label}</dt>
                                <dd class="details__value">{text}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
                {children.map(|c| c())}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
