//! Blog list and post pages.

use leptos::prelude::*;

use crate::content;
use crate::nav::Navigator;

#[component]
pub fn BlogListPage() -> impl IntoView {
    let nav = expect_context::<Navigator>();

    let items = content::POSTS
        .iter()
        .map(|post| {
            let path = format!("/blog/{}", post.slug);
            let href = path.clone();
            view! {
                <li class="blog-list__item">
                    <a
                        class="blog-list__link"
                        href=href
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            nav.navigate(&path);
                        }
                    >
                        <span class="blog-list__title">{post.title}</span>
                        <span class="blog-list__date">{post.date}</span>
                    </a>
                    <p class="blog-list__excerpt">{post.excerpt}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="blog-list">
            <h1>"Blog"</h1>
            <ul class="blog-list__items">{items}</ul>
        </div>
    }
}

/// A single post. The router only routes known slugs here; a miss (possible
/// if content changes under an old bookmark mid-session) shows the list hint
/// instead of erroring.
#[component]
pub fn BlogPostPage(slug: String) -> impl IntoView {
    let nav = expect_context::<Navigator>();

    let body = match content::find_post(&slug) {
        Some(post) => {
            let paragraphs = post
                .body
                .iter()
                .map(|p| view! { <p class="blog-post__paragraph">{*p}</p> })
                .collect::<Vec<_>>();
            view! {
                <article class="blog-post">
                    <h1>{post.title}</h1>
                    <p class="blog-post__date">{post.date}</p>
                    {paragraphs}
                </article>
            }
            .into_any()
        }
        None => view! { <p class="blog-post__missing">"That post is gone."</p> }.into_any(),
    };

    view! {
        <div class="blog-post-page">
            <a
                class="blog-post-page__back"
                href="/blog"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    nav.navigate("/blog");
                }
            >
                "\u{2190} All posts"
            </a>
            {body}
        </div>
    }
}
