use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::model::{DraftError, MAX_POST_LEN, validate_draft};

#[derive(Properties, PartialEq, Clone)]
pub struct CreatePostProps {
    pub on_publish: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn CreatePost(props: &CreatePostProps) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(el.value());
        })
    };
    let checked = validate_draft(&draft);
    let publish_cb = {
        let draft = draft.clone();
        let on_publish = props.on_publish.clone();
        let checked = checked.clone();
        Callback::from(move |_| {
            if let Ok(content) = &checked {
                on_publish.emit(content.clone());
                draft.set(String::new());
            }
        })
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let used = draft.chars().count();
    let counter_color = if used > MAX_POST_LEN { "#f85149" } else { "#8b949e" };
    let problem = match &checked {
        Err(e @ DraftError::TooLong { .. }) => html! { <div style="font-size:11px; color:#f85149;">{ e.to_string() }</div> },
        _ => html! {},
    };

    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:16px; padding:16px; display:flex; flex-direction:column; gap:10px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <h3 style="margin:0; font-size:16px;">{"Post anonymously"}</h3>
            <button onclick={close_cb} style="padding:2px 8px;">{"Close"}</button>
        </div>
        <textarea value={(*draft).clone()} {oninput} rows="4"
            placeholder="Your identity stays hidden until the community votes it visible."
            style="resize:vertical; background:#0e1116; color:inherit; border:1px solid #30363d; border-radius:8px; padding:8px;"></textarea>
        { problem }
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <span style={format!("font-size:12px; color:{};", counter_color)}>{ format!("{}/{}", used, MAX_POST_LEN) }</span>
            <button onclick={publish_cb} disabled={checked.is_err()}>{"Publish"}</button>
        </div>
    </div>}
}
