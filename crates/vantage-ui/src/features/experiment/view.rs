//! SRM warning banner and explanation dialog.
//!
//! # Design
//! - Render nothing unless `SrmDisclosure::evaluate` flags the value.
//! - The dialog starts closed on every mount and owns no other state.

use crate::components::daisy::{Alert, Button, DaisyColor, DaisySize, DaisyVariant, Modal};
use crate::features::experiment::srm::{CAUSE_GROUPS, REFERENCE_URL, SrmDisclosure};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SrmWarningProps {
    /// Pre-computed SRM p-value; `None` when the check did not run.
    pub p_value: Option<f64>,
}

#[function_component(SrmWarning)]
pub(crate) fn srm_warning(props: &SrmWarningProps) -> Html {
    let open = use_state(|| false);
    let Some(disclosure) = SrmDisclosure::evaluate(props.p_value) else {
        return Html::default();
    };
    let p_value = disclosure.p_value().to_string();

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };

    let odds = disclosure.odds_denominator().map_or_else(Html::default, |odds| {
        html! {
            <span>
                {" That means there's only a "}
                <strong>{format!("1 in {odds}")}</strong>
                {" chance the observed traffic split happened by random chance."}
            </span>
        }
    });

    html! {
        <>
            <Modal open={*open} header="Sample Ratio Mismatch (SRM)" on_close={on_close}>
                <p>
                    {"SRM happens when the actual traffic split is different from what you expect. \
                      For example, seeing a 48/52 split when you are expecting a 50/50 split."}
                </p>
                <p>
                    {"For this test, the p-value of the SRM check is "}
                    <code>{p_value.clone()}</code>
                    {"."}
                    {odds}
                </p>
                <p>
                    {"This is a very strong indication that something is fishy with the results. \
                      Below are the most common causes:"}
                </p>
                <ul class="list-disc pl-6">
                    {for CAUSE_GROUPS.iter().map(|group| html! {
                        <li>
                            {group.title}
                            <ul class="list-[circle] pl-6">
                                {for group.causes.iter().map(|cause| html! { <li>{*cause}</li> })}
                            </ul>
                        </li>
                    })}
                </ul>
                <p>
                    {"If you are interested, there is a detailed write-up of common SRM issues at "}
                    <a class="link" target="_blank" rel="noreferrer" href={REFERENCE_URL}>{REFERENCE_URL}</a>
                </p>
            </Modal>
            <Alert tone={DaisyColor::Error}>
                <span>
                    <strong>{"Warning: Do not trust the results!"}</strong>
                    {" A Sample Ratio Mismatch (SRM) was detected with p-value of "}
                    <code>{p_value}</code>
                    {". There is likely a bug in the implementation."}
                </span>
                <Button variant={DaisyVariant::Link} size={DaisySize::Sm} onclick={on_open}>
                    {"Learn More"}
                </Button>
            </Alert>
        </>
    }
}
