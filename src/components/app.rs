use super::{
    feed_view::FeedView,
    navbar::Navbar,
    toast::{Toast, ToastMessage},
};
use crate::model::{FeedAction, FeedSource, FeedState, SeedFeed};
use crate::state::VoteNotice;
use crate::util::{clog, load_swipe_config};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let feed = use_reducer(FeedState::default);
    let loading = use_state(|| true);
    let swipe_config = use_state(load_swipe_config);
    let show_compose = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);
    let toast_seq = use_mut_ref(|| 0_u64);

    // Load the feed once
    {
        let feed = feed.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            match SeedFeed::bundled().load() {
                Ok(posts) => {
                    clog(&format!("feed: loaded {} posts", posts.len()));
                    feed.dispatch(FeedAction::Load { posts });
                }
                Err(e) => clog(&format!("feed: {e}")),
            }
            loading.set(false);
            || ()
        });
    }

    {
        let version = feed.version;
        let count = feed.posts.len();
        use_effect_with(version, move |v| {
            clog(&format!("feed: v{} ({} posts)", v, count));
            || ()
        });
    }

    let on_notice = {
        let toast = toast.clone();
        let toast_seq = toast_seq.clone();
        Callback::from(move |notice: VoteNotice| {
            let id = {
                let mut seq = toast_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            toast.set(Some(ToastMessage {
                id,
                text: notice.message().to_string(),
            }));
        })
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };
    let open_compose = {
        let show_compose = show_compose.clone();
        Callback::from(move |_| show_compose.set(true))
    };
    let close_compose = {
        let show_compose = show_compose.clone();
        Callback::from(move |_| show_compose.set(false))
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <Navbar on_compose={open_compose} />
            <FeedView
                feed={feed.clone()}
                loading={*loading}
                swipe_config={*swipe_config}
                show_compose={*show_compose}
                on_close_compose={close_compose}
                on_notice={on_notice}
            />
            <Toast message={(*toast).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
