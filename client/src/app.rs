//! Root application component with layout, error boundary and routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::crash_screen::CrashScreen;
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::pages::{game::GamePage, home::HomePage, not_found::NotFoundPage};

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

/// Root application component.
///
/// Header and footer sit outside the error boundary so a crashed page still
/// shows site navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/arcade.css"/>
        <Title text="Paper.io Unblocked"/>

        <Router>
            <div class="site">
                <SiteHeader/>
                <main class="site__main">
                    <ErrorBoundary fallback=|errors| {
                        let messages = Signal::derive(move || {
                            errors.get().into_iter().map(|(_, err)| err.to_string()).collect::<Vec<_>>()
                        });
                        view! { <CrashScreen messages/> }
                    }>
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=(StaticSegment("game"), ParamSegment("id")) view=GamePage/>
                        </Routes>
                    </ErrorBoundary>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
