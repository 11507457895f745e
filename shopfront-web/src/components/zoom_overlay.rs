use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub src: AttrValue,
    pub alt: AttrValue,
    pub on_close: Callback<()>,
}

/// Full-screen image zoom on the detail page. Closes on backdrop click;
/// Escape goes through the app-level overlay handler, which gives zoom the
/// highest closing precedence.
#[function_component(ZoomOverlay)]
pub fn zoom_overlay(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }
    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="zoom-overlay" role="presentation" onclick={on_close.clone()}>
            <img class="zoom-overlay__image" src={p.src.clone()} alt={p.alt.clone()} />
            <button class="zoom-overlay__close" aria-label="Close zoom" onclick={on_close}>
                {"X"}
            </button>
        </div>
    }
}
