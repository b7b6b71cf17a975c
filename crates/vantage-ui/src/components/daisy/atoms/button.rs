use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, push_tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let mut classes = classes!(
        "btn",
        props.variant.as_class(),
        props.size.with_prefix("btn"),
        props.class.clone()
    );
    push_tone(&mut classes, "btn", props.tone);

    html! {
        <button
            type="button"
            class={classes}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
