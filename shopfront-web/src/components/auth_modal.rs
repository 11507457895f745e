use crate::components::modal::Modal;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

/// Simulated authentication: the form toggles between sign-in and register
/// and "submits" without any request, per the demo contract.
#[function_component(AuthModal)]
pub fn auth_modal(p: &Props) -> Html {
    let mode = use_state(|| Mode::SignIn);

    let toggle_mode = {
        let mode = mode.clone();
        Callback::from(move |_| {
            mode.set(match *mode {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            });
        })
    };

    let on_submit = {
        let on_close = p.on_close.clone();
        let mode = *mode;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                .and_then(|form| {
                    form.query_selector("input[type='email']")
                        .ok()
                        .flatten()
                        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                })
                .map(|input| input.value())
                .unwrap_or_default();
            let verb = match mode {
                Mode::SignIn => "Signed in",
                Mode::Register => "Registered",
            };
            crate::a11y::set_status(&format!("{verb} as {email} (demo only)"));
            on_close.emit(());
        })
    };

    let (title, submit_label, switch_label) = match *mode {
        Mode::SignIn => ("Sign in", "Sign in", "Need an account? Register"),
        Mode::Register => ("Register", "Create account", "Have an account? Sign in"),
    };

    html! {
        <Modal open={p.open} title={title} on_close={p.on_close.clone()}>
            <form class="auth-form" onsubmit={on_submit}>
                <label for="auth-email">{"Email"}</label>
                <input id="auth-email" type="email" required=true autocomplete="email" />
                <label for="auth-password">{"Password"}</label>
                <input id="auth-password" type="password" required=true autocomplete="current-password" />
                if *mode == Mode::Register {
                    <label for="auth-password-confirm">{"Confirm password"}</label>
                    <input id="auth-password-confirm" type="password" required=true />
                }
                <button type="submit" class="btn btn-primary">{ submit_label }</button>
            </form>
            <button type="button" class="btn btn-ghost" onclick={toggle_mode}>
                { switch_label }
            </button>
        </Modal>
    }
}
