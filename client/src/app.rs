//! Root application component with routing and the board context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::quote_board::QuoteBoardPage;
use crate::state::quotes::QuoteBoard;

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
/// Owns the single `QuoteBoard` signal for the tab; nothing survives a reload.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(QuoteBoard::default());
    provide_context(board);

    view! {
        <Stylesheet id="leptos" href="/pkg/quoteboard.css"/>
        <Title text="Quote Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=QuoteBoardPage/>
            </Routes>
        </Router>
    }
}
