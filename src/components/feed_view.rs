use yew::prelude::*;

use crate::model::{FeedAction, FeedState};
use crate::state::{GestureOutcome, SwipeConfig, VoteNotice};

use super::{create_post::CreatePost, post_card::PostCard};

#[derive(Properties, PartialEq, Clone)]
pub struct FeedViewProps {
    pub feed: UseReducerHandle<FeedState>,
    pub loading: bool,
    pub swipe_config: SwipeConfig,
    pub show_compose: bool,
    pub on_close_compose: Callback<()>,
    pub on_notice: Callback<VoteNotice>,
}

#[function_component(FeedView)]
pub fn feed_view(props: &FeedViewProps) -> Html {
    let on_publish = {
        let feed = props.feed.clone();
        let close = props.on_close_compose.clone();
        Callback::from(move |content: String| {
            let now = js_sys::Date::new_0();
            feed.dispatch(FeedAction::Publish {
                id: format!("post-{}", now.get_time() as u64),
                content,
                created_at: String::from(now.to_iso_string()),
            });
            close.emit(());
        })
    };

    let compose = if props.show_compose {
        html! {<CreatePost on_publish={on_publish} on_close={props.on_close_compose.clone()} />}
    } else {
        html! {}
    };

    let body = if props.loading {
        html! {<div style="opacity:0.6; text-align:center; padding:24px;">{"Loading feed..."}</div>}
    } else if props.feed.posts.is_empty() {
        html! {<div style="opacity:0.6; text-align:center; padding:24px;">{"Nothing here yet."}</div>}
    } else {
        props
            .feed
            .posts
            .iter()
            .zip(props.feed.votes.iter())
            .map(|(post, vote)| {
                let on_outcome = {
                    let feed = props.feed.clone();
                    let on_notice = props.on_notice.clone();
                    let post_id = post.id.clone();
                    let vote = *vote;
                    Callback::from(move |outcome: GestureOutcome| {
                        // Worked out from the rendered tally; the reducer applies the same rule.
                        let notice = vote.preview(outcome);
                        feed.dispatch(FeedAction::Apply {
                            post_id: post_id.clone(),
                            outcome,
                        });
                        if let Some(n) = notice {
                            on_notice.emit(n);
                        }
                    })
                };
                html! {<PostCard key={post.id.clone()} post={post.clone()} vote={*vote}
                    swipe_config={props.swipe_config} {on_outcome} />}
            })
            .collect::<Html>()
    };

    html! {<main style="padding:80px 16px 40px; max-width:720px; margin:0 auto; display:flex; flex-direction:column; gap:16px;">
        <h1 style="margin:0; font-size:22px;">{"Home Feed"}</h1>
        <div style="font-size:12px; opacity:0.6;">{"Swipe a post right to boost it, left to deboost."}</div>
        { compose }
        { body }
    </main>}
}
