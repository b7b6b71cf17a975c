use crate::app::api::ApiCtx;
use crate::components::daisy::{Alert, DaisyColor};
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, seed_session};
use crate::features::experiment::view::SrmWarning;
use crate::features::settings::view::SettingsPage;
use crate::models::ToastKind;
use gloo::console;
use preferences::{api_base_url, load_active_org, persist_active_org};
pub(crate) use routes::Route;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;
mod routes;

#[function_component(VantageApp)]
pub(crate) fn vantage_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let dispatch = Dispatch::<AppStore>::new();
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());
    let email = use_selector(|store: &AppStore| store.session.email.clone());

    {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |()| {
                spawn_local(async move {
                    match client.fetch_user().await {
                        Ok(user) => {
                            let preferred = load_active_org();
                            dispatch.reduce_mut(|store| seed_session(store, user, preferred));
                            let active = dispatch.get().session.active_org_id.clone();
                            persist_active_org(active.as_deref());
                        }
                        Err(err) => {
                            console::warn!("session bootstrap failed", err.to_string());
                            dispatch.reduce_mut(|store| {
                                store.toasts.push(
                                    ToastKind::Info,
                                    format!("Could not load your session: {err}"),
                                );
                            });
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(|store| store.toasts.dismiss(id)))
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <div class="min-h-screen bg-base-200">
                    <header class="navbar bg-base-100 border-b px-6">
                        <Link<Route> to={Route::Settings} classes="btn btn-ghost text-lg">{"Vantage"}</Link<Route>>
                        <span class="ml-auto text-sm opacity-70">{(*email).clone().unwrap_or_default()}</span>
                    </header>
                    <main class="container mx-auto">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
                <ToastHost toasts={(*toasts).clone()} {on_dismiss} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Settings} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::Experiment { id } => html! { <ExperimentPage {id} /> },
        Route::NotFound => html! {
            <Alert tone={DaisyColor::Info} class="m-6">{"Page not found."}</Alert>
        },
    }
}

#[derive(Deserialize, Default)]
struct ExperimentQuery {
    srm: Option<f64>,
}

#[derive(Properties, PartialEq)]
struct ExperimentPageProps {
    id: String,
}

/// Experiment results header; the SRM p-value arrives as `?srm=`.
#[function_component(ExperimentPage)]
fn experiment_page(props: &ExperimentPageProps) -> Html {
    let location = use_location();
    let query = location
        .and_then(|location| location.query::<ExperimentQuery>().ok())
        .unwrap_or_default();

    html! {
        <section class="space-y-4 p-6">
            <h1 class="text-2xl font-semibold">{format!("Experiment {}", props.id)}</h1>
            <SrmWarning p_value={query.srm} />
        </section>
    }
}

/// Mount the application into `#root`, or the document body as a fallback.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VantageApp>::with_root(root).render();
    } else {
        yew::Renderer::<VantageApp>::new().render();
    }
}
