use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    pub header: AttrValue,
    #[prop_or(AttrValue::from("Close"))]
    pub close_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    /// Extra footer buttons rendered before the close button.
    #[prop_or_default]
    pub actions: Html,
    pub on_close: Callback<()>,
}

/// Dialog closable from its footer button and from the backdrop.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("modal", "modal-open", props.class.clone())} role="dialog" aria-modal="true">
            <div class="modal-box max-w-3xl">
                <h3 class="text-lg font-bold">{props.header.clone()}</h3>
                <div class="py-4 space-y-3">
                    { for props.children.iter() }
                </div>
                <div class="modal-action">
                    {props.actions.clone()}
                    <button type="button" class="btn" onclick={close.clone()}>
                        {props.close_label.clone()}
                    </button>
                </div>
            </div>
            <button type="button" class="modal-backdrop" aria-label="close" onclick={close}></button>
        </div>
    }
}
