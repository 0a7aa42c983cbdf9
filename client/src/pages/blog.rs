//! Blog index (paged) and single post.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::cards::PostCard;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::page_hero::PageHero;
use crate::components::pagination::Pagination;
use crate::i18n::use_i18n;
use crate::net::catalog;
use crate::net::types::{BlogPost, Page};
use crate::state::remote::{Remote, load};
use crate::util::{format, markdown};

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = RwSignal::new(Remote::<Page<BlogPost>>::default());
    let page = RwSignal::new(1_usize);
    let total_pages = Signal::derive(move || {
        posts.with(|p| p.data.as_ref().map_or(1, |d| usize::try_from(d.page_count()).unwrap_or(1)))
    });

    Effect::new(move || {
        let current = u32::try_from(page.get()).unwrap_or(1);
        load(posts, catalog::list_posts(current));
    });

    view! {
        <PageHero title_key="blog.title" subtitle_key="blog.subtitle"/>
        <section class="section">
            {move || {
                let state = posts.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let items = state.data.map(|p| p.items).unwrap_or_default();
                if items.is_empty() {
                    return view! { <EmptyState/> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {items.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
            <Pagination page=page total=total_pages/>
        </section>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let i18n = use_i18n();
    let params = use_params_map();
    let post = RwSignal::new(Remote::<BlogPost>::default());

    Effect::new(move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        load(post, async move { catalog::fetch_post(&slug).await });
    });

    view! {
        <article class="section post">
            {move || {
                let state = post.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let Some(article) = state.data else {
                    return view! { <EmptyState/> }.into_any();
                };
                let html = markdown::to_html(&article.body);
                view! {
                    <Title text=article.title.clone()/>
                    <header class="post__header">
                        <h1>{article.title}</h1>
                        <p class="post__meta">
                            {format::date_or_dash(article.published_at.as_deref())}
                            {article.author.map(|a| format!(" · {a}"))}
                        </p>
                    </header>
                    {article.cover_url.map(|src| view! { <img class="post__cover" src=src alt=""/> })}
                    <div class="prose" inner_html=html></div>
                }
                    .into_any()
            }}
            <A href="/blog" attr:class="card__link">
                {move || i18n.t("blog.back")}
            </A>
        </article>
    }
}
