use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    // Color pickers get no text-input chrome.
    let base = if &*props.input_type == "color" {
        "input-color"
    } else {
        "input input-bordered"
    };
    html! {
        <input
            class={classes!(base, props.size.with_prefix("input"))}
            type={props.input_type.clone()}
            id={props.id.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            disabled={props.disabled}
            {oninput}
        />
    }
}
