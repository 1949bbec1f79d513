//! Tuition rates: price bands per grade and subject.

#[cfg(test)]
#[path = "tuition_rates_test.rs"]
mod tuition_rates_test;

use leptos::prelude::*;

use crate::components::data_table::{Column, or_placeholder};
use crate::components::field::{Binding, FieldError, SelectField, TextField, bind, error_for, use_options};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::tuition_rate::{TierInput, TuitionRateForm};
use crate::net::entities::{Grade, RateTier, Subject, TuitionRate};

/// `"Undergraduate: 1500-2500; Graduate: 2500-4000"`.
fn tiers_summary(tiers: &[RateTier]) -> String {
    tiers
        .iter()
        .map(|t| format!("{}: {}-{}", t.category, t.min_rate, t.max_rate))
        .collect::<Vec<_>>()
        .join("; ")
}

#[component]
pub fn TuitionRatesPage() -> impl IntoView {
    let columns: Vec<Column<TuitionRate>> = vec![
        Column::new("grade.title", "Grade"),
        Column::new("subject.title", "Subject"),
        Column::new("tiers", "Rates (LKR)")
            .with_render(|rate: &TuitionRate| or_placeholder(tiers_summary(&rate.tiers)).into_any()),
        Column::new("updatedAt", "Updated"),
    ];

    view! { <ResourceScreen<TuitionRateForm> title="Tuition Rates" columns=columns fields=rate_fields/> }
}

fn rate_fields(form: RwSignal<TuitionRateForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let grades = use_options::<Grade>();
    let subjects = use_options::<Subject>();

    view! {
        <SelectField
            label="Grade"
            binding=bind(form, |f| f.grade.clone(), |f, v| f.grade = v)
            options=grades
            error=error_for(errors, "grade")
        />
        <SelectField
            label="Subject"
            binding=bind(form, |f| f.subject.clone(), |f, v| f.subject = v)
            options=subjects
            error=error_for(errors, "subject")
        />
        <TiersField form=form error=error_for(errors, "tiers")/>
    }
    .into_any()
}

#[component]
fn TiersField(form: RwSignal<TuitionRateForm>, #[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    let count = Memo::new(move |_| form.with(|f| f.tiers.len()));
    let add = move |_| form.update(|f| f.tiers.push(TierInput::default()));

    view! {
        <fieldset class="field field--tiers">
            <legend class="field__label">"Rate tiers"</legend>
            {move || (0..count.get()).map(|index| view! { <TierRow form=form index=index/> }).collect::<Vec<_>>()}
            <button type="button" class="btn btn--small" on:click=add>
                "+ Add tier"
            </button>
            <FieldError error=error/>
        </fieldset>
    }
}

fn tier_binding(
    form: RwSignal<TuitionRateForm>,
    index: usize,
    get: fn(&TierInput) -> String,
    set: fn(&mut TierInput, String),
) -> Binding<String> {
    Binding::new(
        Signal::derive(move || form.with(|f| f.tiers.get(index).map(get).unwrap_or_default())),
        Callback::new(move |value: String| {
            form.update(|f| {
                if let Some(tier) = f.tiers.get_mut(index) {
                    set(tier, value);
                }
            });
        }),
    )
}

#[component]
fn TierRow(form: RwSignal<TuitionRateForm>, index: usize) -> impl IntoView {
    let no_error = Signal::derive(|| None::<String>);
    let remove = move |_| {
        form.update(|f| {
            if index < f.tiers.len() {
                f.tiers.remove(index);
            }
        });
    };

    view! {
        <div class="tier-row">
            <TextField
                label="Category"
                placeholder="e.g. Undergraduate"
                binding=tier_binding(form, index, |t| t.category.clone(), |t, v| t.category = v)
                error=no_error
            />
            <TextField
                label="Min"
                input_type="number"
                binding=tier_binding(form, index, |t| t.min_rate.clone(), |t, v| t.min_rate = v)
                error=no_error
            />
            <TextField
                label="Max"
                input_type="number"
                binding=tier_binding(form, index, |t| t.max_rate.clone(), |t, v| t.max_rate = v)
                error=no_error
            />
            <button type="button" class="btn btn--small btn--danger tier-row__remove" on:click=remove>
                "Remove"
            </button>
        </div>
    }
}
