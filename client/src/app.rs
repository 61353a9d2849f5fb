//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Redirect, Route, Router, Routes},
};

use crate::components::notice_stack::NoticeStack;
use crate::config::ApiConfig;
use crate::net::api::{HttpApi, SharedApi};
use crate::net::credentials::LocalStorageCredentials;
use crate::pages::{
    edit_property::EditPropertyPage, properties::PropertiesPage, property_detail::PropertyDetailPage,
    testimonials::TestimonialsPage,
};
use crate::state::notices::NoticesState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The REST collaborator provided by `App`.
pub fn api_handle() -> SharedApi {
    expect_context::<SharedApi>()
}

/// Root application component.
///
/// Provides the API handle and the notice stack, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api: SharedApi = Arc::new(HttpApi::new(
        ApiConfig::from_build_env(),
        Arc::new(LocalStorageCredentials::default()),
    ));
    provide_context(api);
    provide_context(RwSignal::new(NoticesState::default()));

    view! {
        <Title text="Rental admin"/>

        <Router>
            <nav class="app-nav">
                <A href="/properties">"Properties"</A>
                <A href="/testimonials">"Testimonials"</A>
            </nav>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/properties"/> }/>
                    <Route path=StaticSegment("properties") view=PropertiesPage/>
                    <Route
                        path=(StaticSegment("properties"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditPropertyPage
                    />
                    <Route path=(StaticSegment("properties"), ParamSegment("id")) view=PropertyDetailPage/>
                    <Route path=StaticSegment("testimonials") view=TestimonialsPage/>
                </Routes>
            </main>
            <NoticeStack/>
        </Router>
    }
}
