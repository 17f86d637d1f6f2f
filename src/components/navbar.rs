use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

const SCROLLED_PX: f64 = 10.0;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub on_compose: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let scroll_cb = {
                let window = window.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    let y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    scrolled.set(y > SCROLLED_PX);
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let compose_cb = {
        let cb = props.on_compose.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let bg = if *scrolled {
        "background:rgba(14,17,22,0.85); box-shadow:0 1px 4px rgba(0,0,0,0.4);"
    } else {
        "background:transparent;"
    };
    html! {<header id="top-bar" style={format!("position:fixed; top:0; left:0; right:0; z-index:40; padding:12px 20px; transition:all 0.3s; {}", bg)}>
        <div style="max-width:720px; margin:0 auto; display:flex; align-items:center; justify-content:space-between;">
            <div style="display:flex; align-items:center; gap:8px;">
                <div style="height:32px; width:32px; border-radius:50%; background:#000; color:#fff; display:flex; align-items:center; justify-content:center; font-weight:700;">{"A"}</div>
                <span style="font-weight:600; font-size:18px;">{"Anonym"}</span>
            </div>
            <button onclick={compose_cb} style="padding:6px 14px; border-radius:999px;">{"Create Post"}</button>
        </div>
    </header>}
}
