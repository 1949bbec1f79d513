use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{TextAreaField, TextField, bind, error_for};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::faq::FaqForm;
use crate::net::entities::Faq;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn FaqsPage() -> impl IntoView {
    let columns: Vec<Column<Faq>> = vec![
        Column::new("question", "Question"),
        Column::new("category", "Category"),
        Column::new("updatedAt", "Updated"),
    ];

    view! { <ResourceScreen<FaqForm> title="FAQs" columns=columns fields=faq_fields details=faq_answer/> }
}

fn faq_answer(faq: &Faq) -> AnyView {
    view! { <div class="markdown" inner_html=render_markdown_html(&faq.answer)></div> }.into_any()
}

fn faq_fields(form: RwSignal<FaqForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    view! {
        <TextField
            label="Question"
            binding=bind(form, |f| f.question.clone(), |f, v| f.question = v)
            error=error_for(errors, "question")
        />
        <TextAreaField
            label="Answer (Markdown)"
            rows=6
            binding=bind(form, |f| f.answer.clone(), |f, v| f.answer = v)
            error=error_for(errors, "answer")
        />
        <TextField
            label="Category"
            binding=bind(form, |f| f.category.clone(), |f, v| f.category = v)
            error=error_for(errors, "category")
        />
    }
    .into_any()
}
