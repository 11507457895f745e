use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

const FOCUSABLE: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

/// Generic accessible dialog used by quick view and the auth form.
///
/// Focus moves into the dialog on open and wraps on Tab; Escape and
/// backdrop clicks close it. Focus restoration to the trigger element is
/// the overlay coordinator's job, not the dialog's.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |open| {
            if *open && cfg!(target_arch = "wasm32") {
                if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                    let _ = el.set_attribute("tabindex", "-1");
                    let _ = el.focus();
                }
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_keydown = {
        let node = container_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !cfg!(target_arch = "wasm32") {
                return;
            }
            if e.key() == "Escape" {
                // Let the app-level Escape handler drive the close through
                // the overlay coordinator.
                return;
            }
            if e.key() != "Tab" {
                return;
            }
            let Some(container) = node.cast::<web_sys::Element>() else {
                return;
            };
            let Ok(list) = container.query_selector_all(FOCUSABLE) else {
                return;
            };
            let len = list.length();
            if len == 0 {
                return;
            }
            let first = list
                .get(0)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
            let last = list
                .get(len - 1)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
            let active = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element());
            let (Some(first), Some(last), Some(active)) = (first, last, active) else {
                return;
            };
            let first_el: web_sys::Element = first.clone().unchecked_into();
            let last_el: web_sys::Element = last.clone().unchecked_into();
            if !container.contains(Some(active.as_ref())) {
                e.prevent_default();
                let _ = first.focus();
            } else if e.shift_key() && active == first_el {
                e.prevent_default();
                let _ = last.focus();
            } else if !e.shift_key() && active == last_el {
                e.prevent_default();
                let _ = first.focus();
            }
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_backdrop.clone()}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={stop_bubble}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <div class="modal__header">
                    <h2>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label="Close dialog" onclick={on_backdrop}>
                        {"X"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
