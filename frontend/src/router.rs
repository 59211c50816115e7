use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{appointments::AppointmentManager, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <AppointmentManager /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
