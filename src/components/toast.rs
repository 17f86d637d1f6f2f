use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

pub const TOAST_MS: i32 = 2500;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    /// Distinguishes repeats of the same text so the timer restarts.
    pub id: u64,
    pub text: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // One-shot dismissal timer; cleared when a newer message arrives or on unmount.
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.message.as_ref().map(|m| m.id);
        use_effect_with(id, move |id| {
            let mut handle = None;
            let mut closure = None;
            if id.is_some() {
                if let Some(win) = web_sys::window() {
                    let cb = Closure::wrap(Box::new(move || on_dismiss.emit(())) as Box<dyn FnMut()>);
                    handle = win
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            cb.as_ref().unchecked_ref(),
                            TOAST_MS,
                        )
                        .ok();
                    closure = Some(cb);
                }
            }
            move || {
                if let (Some(win), Some(h)) = (web_sys::window(), handle) {
                    win.clear_timeout_with_handle(h);
                }
                let _keep_alive = closure;
            }
        });
    }

    let Some(msg) = &props.message else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:fixed; bottom:24px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:10px; padding:10px 16px; display:flex; gap:12px; align-items:center; z-index:50;">
        <span>{ msg.text.clone() }</span>
        <button onclick={close_cb} style="padding:2px 8px; font-size:12px;">{"×"}</button>
    </div>}
}
