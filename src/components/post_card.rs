use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::model::Post;
use crate::state::{Direction, GestureOutcome, GestureState, GestureVoteController, SwipeConfig, VoteState};
use crate::util::{clog, format_date};

use super::reveal_progress::RevealProgress;

#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    pub post: Post,
    pub vote: VoteState,
    pub swipe_config: SwipeConfig,
    pub on_outcome: Callback<GestureOutcome>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let cfg = props.swipe_config;
    let controller = use_mut_ref(move || GestureVoteController::with_config(cfg));

    // Only re-render trigger; what is drawn comes from the controller.
    let gesture = use_state_eq(GestureState::default);

    // Unmounting mid-drag must not leave a frozen offset behind.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| move || controller.borrow_mut().on_gesture_cancel());
    }

    // A new tuning replaces the old one and drops any drag in progress.
    {
        let controller = controller.clone();
        let gesture = gesture.clone();
        use_effect_with(cfg, move |cfg| {
            let next = {
                let mut c = controller.borrow_mut();
                if c.config() != cfg.sanitized() {
                    c.set_config(*cfg);
                }
                c.state()
            };
            gesture.set(next);
            || ()
        });
    }

    let begin = {
        let controller = controller.clone();
        let gesture = gesture.clone();
        move |x: f64| {
            let next = {
                let mut c = controller.borrow_mut();
                c.on_gesture_start(x);
                c.state()
            };
            gesture.set(next);
        }
    };
    let drag = {
        let controller = controller.clone();
        let gesture = gesture.clone();
        move |x: f64| {
            let next = {
                let mut c = controller.borrow_mut();
                c.on_gesture_move(x);
                c.state()
            };
            gesture.set(next);
        }
    };
    let release = {
        let controller = controller.clone();
        let gesture = gesture.clone();
        let on_outcome = props.on_outcome.clone();
        let post_id = props.post.id.clone();
        move || {
            let (outcome, next) = {
                let mut c = controller.borrow_mut();
                (c.on_gesture_end(), c.state())
            };
            gesture.set(next);
            if outcome != GestureOutcome::None {
                clog(&format!("swipe {:?} on {}", outcome, post_id));
                on_outcome.emit(outcome);
            }
        }
    };
    let abort = {
        let controller = controller.clone();
        let gesture = gesture.clone();
        move || {
            let next = {
                let mut c = controller.borrow_mut();
                c.on_gesture_cancel();
                c.state()
            };
            gesture.set(next);
        }
    };

    let ontouchstart = {
        let begin = begin.clone();
        let abort = abort.clone();
        Callback::from(move |e: TouchEvent| {
            let touches = e.touches();
            if touches.length() > 1 {
                abort();
                return;
            }
            if let Some(t0) = touches.item(0) {
                begin(t0.client_x() as f64);
            }
        })
    };
    let ontouchmove = {
        let drag = drag.clone();
        let abort = abort.clone();
        Callback::from(move |e: TouchEvent| {
            let touches = e.touches();
            if touches.length() != 1 {
                abort();
                return;
            }
            if let Some(t0) = touches.item(0) {
                drag(t0.client_x() as f64);
            }
        })
    };
    let ontouchend = {
        let release = release.clone();
        Callback::from(move |e: TouchEvent| {
            if e.touches().length() == 0 {
                release();
            }
        })
    };
    let ontouchcancel = {
        let abort = abort.clone();
        Callback::from(move |_: TouchEvent| abort())
    };
    let onmousedown = {
        let begin = begin.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() == 0 {
                begin(e.client_x() as f64);
            }
        })
    };
    let onmousemove = {
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| drag(e.client_x() as f64))
    };
    let onmouseup = Callback::from(move |_: MouseEvent| release());
    let onmouseleave = Callback::from(move |_: MouseEvent| abort());

    let tap = |outcome: GestureOutcome| {
        let cb = props.on_outcome.clone();
        Callback::from(move |_: MouseEvent| cb.emit(outcome))
    };

    let (offset, direction, active, armed) = {
        let c = controller.borrow();
        (c.offset(), c.direction(), c.is_active(), c.pending_outcome())
    };
    let transition = if active { "none" } else { "transform 0.2s ease" };
    let edge = match (direction, armed) {
        (Direction::Right, GestureOutcome::Boost) => "inset 6px 0 0 #238636",
        (Direction::Right, _) => "inset 3px 0 0 #2ea04366",
        (Direction::Left, GestureOutcome::Deboost) => "inset -6px 0 0 #f85149",
        (Direction::Left, _) => "inset -3px 0 0 #f8514966",
        (Direction::None, _) => "none",
    };
    let card_style = format!(
        "background:#161b22; border:1px solid #30363d; border-radius:16px; padding:16px 20px; display:flex; gap:16px; touch-action:pan-y; user-select:none; transform:translateX({}px); transition:{}; box-shadow:{};",
        offset, transition, edge
    );
    let hint = match armed {
        GestureOutcome::Boost => html! { <div style="font-size:11px; color:#3fb950;">{"Release to boost"}</div> },
        GestureOutcome::Deboost => html! { <div style="font-size:11px; color:#f85149;">{"Release to deboost"}</div> },
        GestureOutcome::None => html! {},
    };

    let vote = props.vote;
    let count_color = if vote.boosted { "#3fb950" } else if vote.count < 0 { "#f85149" } else { "#8b949e" };
    let boost_style = if vote.boosted {
        "padding:6px 10px; border-radius:999px; background:#238636; color:#fff; border:none;"
    } else {
        "padding:6px 10px; border-radius:999px; background:transparent; color:#8b949e; border:1px solid #30363d;"
    };
    let author = &props.post.author;

    html! {
        <div style={card_style}
            {ontouchstart} {ontouchmove} {ontouchend} {ontouchcancel}
            {onmousedown} {onmousemove} {onmouseup} {onmouseleave}>
            <div style="display:flex; flex-direction:column; align-items:center; gap:4px;">
                <button onclick={tap(GestureOutcome::Boost)} style={boost_style} title="Boost">{"▲"}</button>
                <span style={format!("font-weight:600; font-size:18px; color:{};", count_color)}>{ vote.count.to_string() }</span>
                <button onclick={tap(GestureOutcome::Deboost)} style="padding:6px 10px; border-radius:999px; background:transparent; color:#8b949e; border:1px solid #30363d;" title="Deboost">{"▼"}</button>
            </div>
            <div style="flex:1; display:flex; flex-direction:column; gap:10px;">
                <div style="display:flex; align-items:center; gap:8px;">
                    <RevealProgress
                        is_revealed={author.is_revealed}
                        avatar_url={author.avatar_url.clone()}
                        current_votes={author.current_votes}
                        vote_threshold={author.vote_threshold}
                        progress={author.reveal_progress()} />
                    <div style="font-size:13px;">
                        <div style="font-weight:500;" title={author.is_revealed.then(|| format!("@{}", author.id))}>{ author.display_name().to_string() }</div>
                        <div style="font-size:11px; opacity:0.7;">{ format_date(&props.post.created_at) }</div>
                    </div>
                </div>
                <p style="margin:0; line-height:1.5;">{ props.post.content.clone() }</p>
                <div style="font-size:12px; opacity:0.7;">{ format!("{} comments", props.post.comment_count) }</div>
                { hint }
            </div>
        </div>
    }
}
