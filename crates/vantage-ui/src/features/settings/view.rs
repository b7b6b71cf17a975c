//! General settings page.
//!
//! # Design
//! - The page owns one `SettingsSession`; callbacks mutate it and re-render.
//! - Network completions go through the session so stale ones are dropped.
//! - The save button mirrors `SettingsSession::can_save`, and `begin_save`
//!   re-checks the gate so a forced click stays inert.

use crate::app::api::ApiCtx;
use crate::components::daisy::{
    Alert, Button, Checkbox, DaisyColor, DaisySize, DaisyVariant, Input, Loading, Modal,
};
use crate::core::store::AppStore;
use crate::features::settings::actions::SettingsEdit;
use crate::features::settings::api::{load_settings, rename_organization, save_settings};
use crate::features::settings::logic::category_label;
use crate::features::settings::reconcile::{complete_rename, complete_save};
use crate::features::settings::state::{
    RenameForm, SessionPhase, SettingsDraft, SettingsSession,
};
use crate::models::{ImplementationType, OrganizationView, subscription_label};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let active_org = use_selector(|store: &AppStore| store.session.active_org_id.clone());
    let session = use_mut_ref(SettingsSession::new);
    let rerender = use_force_update();

    {
        let session = session.clone();
        let rerender = rerender.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |active_org: &Option<String>| {
                let ticket = session.borrow_mut().begin_load();
                rerender.force_update();
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    client.set_organization(active_org.clone());
                    let session = session.clone();
                    yew::platform::spawn_local(async move {
                        let applied = match load_settings(&client).await {
                            Ok(organization) => {
                                session.borrow_mut().load_succeeded(ticket, organization)
                            }
                            Err(err) => session.borrow_mut().load_failed(ticket, err.to_string()),
                        };
                        if applied {
                            rerender.force_update();
                        }
                    });
                }
                move || session.borrow_mut().invalidate()
            },
            (*active_org).clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <Alert tone={DaisyColor::Error}>{"Missing API context."}</Alert>
        };
    };

    let on_edit = {
        let session = session.clone();
        let rerender = rerender.clone();
        Callback::from(move |edit: SettingsEdit| {
            if session.borrow_mut().apply(edit) {
                rerender.force_update();
            }
        })
    };

    let on_save = {
        let session = session.clone();
        let rerender = rerender.clone();
        let active_org = active_org.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(ticket) = session.borrow_mut().begin_save() else {
                return;
            };
            rerender.force_update();
            let client = client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            let org_id = (*active_org).clone();
            let session = session.clone();
            let rerender = rerender.clone();
            yew::platform::spawn_local(async move {
                let outcome = save_settings(&client, &ticket.payload).await;
                let mut applied = false;
                dispatch.reduce_mut(|store| {
                    let mut session = session.borrow_mut();
                    applied =
                        complete_save(store, &mut session, org_id.as_deref(), &ticket, outcome);
                });
                if applied {
                    rerender.force_update();
                }
            });
        })
    };

    let on_rename = {
        let session = session.clone();
        let client = api_ctx.client;
        Callback::from(move |action: RenameAction| {
            let (changed, ticket) = {
                let mut current = session.borrow_mut();
                match action {
                    RenameAction::Open => (current.open_rename(), None),
                    RenameAction::Input(value) => (current.set_rename_value(value), None),
                    RenameAction::Close => (current.close_rename(), None),
                    RenameAction::Submit => {
                        let ticket = current.begin_rename();
                        (ticket.is_some(), ticket)
                    }
                }
            };
            if changed {
                rerender.force_update();
            }
            let Some(ticket) = ticket else {
                return;
            };
            let client = client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            let org_id = (*active_org).clone();
            let session = session.clone();
            let rerender = rerender.clone();
            yew::platform::spawn_local(async move {
                let outcome = rename_organization(&client, &ticket.name).await;
                let mut applied = false;
                dispatch.reduce_mut(|store| {
                    let mut session = session.borrow_mut();
                    applied =
                        complete_rename(store, &mut session, org_id.as_deref(), &ticket, outcome);
                });
                if applied {
                    rerender.force_update();
                }
            });
        })
    };

    let current = session.borrow();
    match current.phase() {
        SessionPhase::Loading => html! { <Loading size={DaisySize::Lg} label="Loading settings" /> },
        SessionPhase::Errored(message) => html! {
            <Alert tone={DaisyColor::Error}>{format!("An error occurred: {message}")}</Alert>
        },
        SessionPhase::Ready | SessionPhase::Saving => {
            let saving = matches!(current.phase(), SessionPhase::Saving);
            let can_save = current.can_save();
            html! {
                <section class="settings-page space-y-6 p-6">
                    <h1 class="text-2xl font-semibold">{"General Settings"}</h1>
                    {render_organization(current.organization(), &on_rename)}
                    {render_rename(current.rename_form(), &on_rename)}
                    {render_types(current.draft(), saving, &on_edit)}
                    {render_customization(current.draft(), saving, &on_edit)}
                    <div class="flex flex-row-reverse gap-2">
                        <Button
                            tone={can_save.then_some(DaisyColor::Primary)}
                            disabled={!can_save}
                            onclick={on_save}
                        >
                            {if saving { "Saving…" } else { "Save" }}
                        </Button>
                        <Button
                            variant={DaisyVariant::Ghost}
                            disabled={saving || !current.changes().any()}
                            onclick={{
                                let on_edit = on_edit.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(SettingsEdit::Reset))
                            }}
                        >
                            {"Discard changes"}
                        </Button>
                    </div>
                </section>
            }
        }
    }
}

/// Events from the organization rename dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
enum RenameAction {
    Open,
    Input(String),
    Submit,
    Close,
}

fn render_organization(
    organization: Option<&OrganizationView>,
    on_rename: &Callback<RenameAction>,
) -> Html {
    let Some(organization) = organization else {
        return html! {
            <Alert tone={DaisyColor::Info}>{"No organization details available."}</Alert>
        };
    };
    let on_open = on_rename.reform(|_: MouseEvent| RenameAction::Open);
    html! {
        <div class="card bg-base-100 border">
            <div class="card-body gap-2">
                <h2 class="card-title">{"Organization"}</h2>
                <p>
                    <strong>{"Name: "}</strong>{organization.name.clone()}
                    <Button variant={DaisyVariant::Link} size={DaisySize::Sm} onclick={on_open}>
                        {"✎ Edit"}
                    </Button>
                </p>
                <p><strong>{"Owner: "}</strong>{organization.owner_email.clone()}</p>
                <p class="text-sm opacity-70">
                    {format!("{} members, {} pending invites", organization.members.len(), organization.invites.len())}
                </p>
                {organization.subscription.as_ref().map_or_else(Html::default, |subscription| html! {
                    <p><strong>{"Subscription: "}</strong>{subscription_label(subscription.status)}</p>
                })}
                {organization.slack_team.as_ref().map_or_else(Html::default, |team| html! {
                    <Alert tone={DaisyColor::Success} class="py-2">
                        <span title={format!("Team: {team}")}>{"✓ Connected to Slack"}</span>
                    </Alert>
                })}
            </div>
        </div>
    }
}

fn render_rename(form: Option<&RenameForm>, on_rename: &Callback<RenameAction>) -> Html {
    let Some(form) = form else {
        return Html::default();
    };
    let actions = html! {
        <Button
            tone={DaisyColor::Primary}
            disabled={form.pending || form.value.trim().is_empty()}
            onclick={on_rename.reform(|_: MouseEvent| RenameAction::Submit)}
        >
            {if form.pending { "Saving…" } else { "Save" }}
        </Button>
    };
    html! {
        <Modal
            open=true
            header="Edit Organization"
            close_label="Cancel"
            {actions}
            on_close={on_rename.reform(|()| RenameAction::Close)}
        >
            <label class="form-control" for="organization-name">
                <span class="label-text">{"Company Name"}</span>
                <Input
                    id="organization-name"
                    value={form.value.clone()}
                    disabled={form.pending}
                    oninput={on_rename.reform(RenameAction::Input)}
                />
            </label>
        </Modal>
    }
}

fn render_types(draft: &SettingsDraft, saving: bool, on_edit: &Callback<SettingsEdit>) -> Html {
    html! {
        <div class="card bg-base-100 border">
            <div class="card-body gap-2">
                <h2 class="card-title">{"Implementation types"}</h2>
                {for ImplementationType::ALL.into_iter().map(|kind| {
                    let on_edit = on_edit.clone();
                    html! {
                        <Checkbox
                            id={AttrValue::from(format!("checkbox-type-{}", kind.as_str()))}
                            label={category_label(kind)}
                            checked={draft.types.get(kind)}
                            disabled={saving}
                            onchange={Callback::from(move |enabled: bool| on_edit.emit(SettingsEdit::ToggleCategory(kind, enabled)))}
                        />
                    }
                })}
            </div>
        </div>
    }
}

fn render_customization(
    draft: &SettingsDraft,
    saving: bool,
    on_edit: &Callback<SettingsEdit>,
) -> Html {
    let edit = |make: fn(String) -> SettingsEdit| {
        let on_edit = on_edit.clone();
        Callback::from(move |value: String| on_edit.emit(make(value)))
    };
    let on_customized = {
        let on_edit = on_edit.clone();
        Callback::from(move |enabled: bool| on_edit.emit(SettingsEdit::SetCustomized(enabled)))
    };

    html! {
        <div class="card bg-base-100 border">
            <div class="card-body gap-3">
                <h2 class="card-title">{"Customization"}</h2>
                <Checkbox
                    id="checkbox-customized"
                    label="Enable customization"
                    checked={draft.customized}
                    disabled={saving}
                    onchange={on_customized}
                />
                if draft.customized {
                    <label class="form-control" for="customlogo">
                        <span class="label-text">{"Custom logo"}</span>
                        <Input
                            id="customlogo"
                            placeholder="/path/to/logo.png"
                            value={draft.logo_path.clone()}
                            disabled={saving}
                            oninput={edit(SettingsEdit::SetLogoPath)}
                        />
                        <small class="opacity-70">{"Logo will be scaled to fit 225 x 46"}</small>
                    </label>
                    <label class="form-control" for="primarycolor">
                        <span class="label-text">{"Primary Color"}</span>
                        <Input
                            id="primarycolor"
                            input_type="color"
                            size={DaisySize::Sm}
                            value={draft.primary_color.clone()}
                            disabled={saving}
                            oninput={edit(SettingsEdit::SetPrimaryColor)}
                        />
                    </label>
                    <label class="form-control" for="secondarycolor">
                        <span class="label-text">{"Secondary Color"}</span>
                        <Input
                            id="secondarycolor"
                            input_type="color"
                            size={DaisySize::Sm}
                            value={draft.secondary_color.clone()}
                            disabled={saving}
                            oninput={edit(SettingsEdit::SetSecondaryColor)}
                        />
                    </label>
                }
            </div>
        </div>
    }
}
