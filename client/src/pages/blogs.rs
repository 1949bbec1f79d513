//! Blog moderation and authoring.
//!
//! Posts arrive as `pending`; staff approve or reject them from the table.
//! Only rejected posts can be deleted.

use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{
    Binding, FieldError, FileUploadField, SelectField, TextAreaField, TextField, bind, error_for, use_options,
};
use crate::components::resource_screen::{ResourceScreen, ScreenHandle};
use crate::forms::FieldErrors;
use crate::forms::blog::{BlockInput, BlockKind, BlogForm};
use crate::net::entities::{Blog, ContentBlock};
use crate::net::resource::Choice;
use crate::net::types::User;
use crate::pages::{moderation_actions, status_badge};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let columns: Vec<Column<Blog>> = vec![
        Column::new("title", "Title"),
        Column::new("author", "Author"),
        Column::new("status", "Status").with_render(|b: &Blog| status_badge(b.status)),
        Column::new("createdAt", "Created"),
    ];

    view! {
        <ResourceScreen<BlogForm>
            title="Blogs"
            columns=columns
            fields=blog_fields
            sort_by="createdAt:desc"
            row_actions=blog_actions
            details=blog_content
        />
    }
}

fn blog_actions(blog: &Blog, screen: ScreenHandle) -> AnyView {
    moderation_actions::<Blog>(&blog.id, blog.status.as_str(), screen)
}

fn blog_content(blog: &Blog) -> AnyView {
    let cover = blog
        .cover_image
        .clone()
        .map(|src| view! { <img class="blog-preview__cover" src=src alt="Cover"/> });
    let blocks = blog
        .content
        .iter()
        .map(|block| match block {
            ContentBlock::Heading { text } => view! { <h3>{text.clone()}</h3> }.into_any(),
            ContentBlock::Paragraph { text } => {
                view! { <div class="markdown" inner_html=render_markdown_html(text)></div> }.into_any()
            }
            ContentBlock::Image { url, caption } => view! {
                <figure>
                    <img src=url.clone() alt=caption.clone().unwrap_or_default()/>
                    {caption.clone().map(|c| view! { <figcaption>{c}</figcaption> })}
                </figure>
            }
            .into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <article class="blog-preview">
            {cover}
            {blocks}
        </article>
    }
    .into_any()
}

fn blog_fields(form: RwSignal<BlogForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let authors = use_options::<User>();

    view! {
        <TextField
            label="Title"
            binding=bind(form, |f| f.title.clone(), |f, v| f.title = v)
            error=error_for(errors, "title")
        />
        <SelectField
            label="Author"
            placeholder="No author"
            binding=bind(form, |f| f.author_id.clone(), |f, v| f.author_id = v)
            options=authors
            error=error_for(errors, "author")
        />
        <FileUploadField
            label="Cover image"
            accept="image/*"
            binding=bind(form, |f| f.cover_image.clone(), |f, v| f.cover_image = v)
            error=error_for(errors, "cover_image")
        />
        <ContentBlocksField form=form error=error_for(errors, "content")/>
    }
    .into_any()
}

#[component]
fn ContentBlocksField(form: RwSignal<BlogForm>, #[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    let count = Memo::new(move |_| form.with(|f| f.content.len()));

    view! {
        <fieldset class="field field--blocks">
            <legend class="field__label">"Content"</legend>
            {move || {
                (0..count.get()).map(|index| view! { <BlockEditor form=form index=index/> }).collect::<Vec<_>>()
            }}
            <div class="field__toolbar">
                {BlockKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                type="button"
                                class="btn btn--small"
                                on:click=move |_| form.update(|f| f.content.push(BlockInput::new(kind)))
                            >
                                {format!("+ {}", kind.label())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <FieldError error=error/>
        </fieldset>
    }
}

fn block_binding(
    form: RwSignal<BlogForm>,
    index: usize,
    get: fn(&BlockInput) -> String,
    set: fn(&mut BlockInput, String),
) -> Binding<String> {
    Binding::new(
        Signal::derive(move || form.with(|f| f.content.get(index).map(get).unwrap_or_default())),
        Callback::new(move |value: String| {
            form.update(|f| {
                if let Some(block) = f.content.get_mut(index) {
                    set(block, value);
                }
            });
        }),
    )
}

#[component]
fn BlockEditor(form: RwSignal<BlogForm>, index: usize) -> impl IntoView {
    let kind = Memo::new(move |_| form.with(|f| f.content.get(index).map(|b| b.kind).unwrap_or_default()));
    let text = block_binding(form, index, |b| b.text.clone(), |b, v| b.text = v);
    let url = block_binding(form, index, |b| b.url.clone(), |b, v| b.url = v);
    let no_error = Signal::derive(|| None::<String>);

    let move_up = move |_| {
        form.update(|f| {
            if index > 0 && index < f.content.len() {
                f.content.swap(index - 1, index);
            }
        });
    };
    let remove = move |_| {
        form.update(|f| {
            if index < f.content.len() {
                f.content.remove(index);
            }
        });
    };

    view! {
        <div class="block-editor">
            <div class="block-editor__header">
                <span class="block-editor__kind">{move || kind.get().label()}</span>
                <span class="block-editor__spacer"></span>
                <button type="button" class="btn btn--small" disabled={index == 0} on:click=move_up>
                    "Move up"
                </button>
                <button type="button" class="btn btn--small btn--danger" on:click=remove>
                    "Remove"
                </button>
            </div>
            {move || match kind.get() {
                BlockKind::Heading => view! { <TextField label="Heading" binding=text error=no_error/> }.into_any(),
                BlockKind::Paragraph => {
                    view! { <TextAreaField label="Paragraph (Markdown)" rows=6 binding=text error=no_error/> }
                        .into_any()
                }
                BlockKind::Image => view! {
                    <FileUploadField label="Image" accept="image/*" binding=url error=no_error/>
                    <TextField label="Caption" binding=text error=no_error/>
                }
                .into_any(),
            }}
        </div>
    }
}
