use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProgressProps {
    pub is_revealed: bool,
    pub avatar_url: Option<String>,
    pub current_votes: u32,
    pub vote_threshold: u32,
    /// 0..=100
    pub progress: f64,
}

#[function_component(RevealProgress)]
pub fn reveal_progress(props: &RevealProgressProps) -> Html {
    if props.is_revealed {
        if let Some(url) = &props.avatar_url {
            return html! {<img src={url.clone()} alt="avatar" style="height:32px; width:32px; border-radius:50%; object-fit:cover;" />};
        }
        return html! {<div style="height:32px; width:32px; border-radius:50%; background:#30363d; display:flex; align-items:center; justify-content:center;">{"👤"}</div>};
    }
    let title = format!("{}/{} votes to reveal", props.current_votes, props.vote_threshold);
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:3px;" title={title}>
        <div style="height:32px; width:32px; border-radius:50%; background:#000; display:flex; align-items:center; justify-content:center;">{"🔒"}</div>
        <div style="height:4px; width:32px; border-radius:2px; background:#30363d; overflow:hidden;">
            <div style={format!("height:100%; width:{:.0}%; background:#c9d1d9; transition:width 0.3s;", props.progress)}></div>
        </div>
    </div>}
}
