use crate::models::{Toast, plan_toast_timers};
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

const TOAST_TTL_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

/// Bottom-right stack; each toast dismisses itself a few seconds after it
/// first appears.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let running: Vec<u64> = timers.keys().copied().collect();
                let plan = plan_toast_timers(&running, list);
                for id in plan.cancel {
                    timers.remove(&id);
                }
                for id in plan.start {
                    let on_dismiss = on_dismiss.clone();
                    timers.insert(id, Timeout::new(TOAST_TTL_MS, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class="toast toast-end" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", format!("alert-{}", toast.kind.tone()))} role="status">
            <span>{toast.message.clone()}</span>
            <button type="button" class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
