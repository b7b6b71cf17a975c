use crate::components::daisy::foundations::{DaisyColor, push_tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AlertProps {
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Alert)]
pub(crate) fn alert(props: &AlertProps) -> Html {
    let mut classes = classes!("alert", props.class.clone());
    push_tone(&mut classes, "alert", props.tone);
    html! {
        <div class={classes} role="alert">
            { for props.children.iter() }
        </div>
    }
}
