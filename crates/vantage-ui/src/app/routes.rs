//! Routing definitions for the Vantage UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/settings")]
    Settings,
    #[at("/experiments/:id")]
    Experiment { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
