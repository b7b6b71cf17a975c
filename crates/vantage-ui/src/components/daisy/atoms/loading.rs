use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingProps {
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Blocking spinner used while a page waits on its first fetch.
#[function_component(Loading)]
pub(crate) fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-overlay flex justify-center p-8">
            <span
                class={classes!("loading", "loading-spinner", props.size.with_prefix("loading"))}
                role="status"
                aria-label={props.label.clone()}
            />
        </div>
    }
}
