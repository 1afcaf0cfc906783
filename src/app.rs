//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::ApiConfig;
use crate::pages::fleet::FleetPage;
use crate::state::toast::ToastState;

fn resolve_config() -> ApiConfig {
    match ApiConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; falling back to default API config");
            ApiConfig::default()
        }
    }
}

/// Root application component.
///
/// Provides the API config and toast queue, then routes to the fleet page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = resolve_config();
    log::info!("transporter API at {}", config.base_url);
    provide_context(config);
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/fleet-forms.css"/>
        <Title text="Fleet"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FleetPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
