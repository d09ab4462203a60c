//! Ordered, reorderable list of quotes.

use leptos::prelude::*;

use crate::components::quote_row::QuoteRow;
use crate::state::quotes::QuoteBoard;

/// Renders every quote as a [`QuoteRow`] in list order.
#[component]
pub fn QuoteList() -> impl IntoView {
    let board = expect_context::<RwSignal<QuoteBoard>>();
    // Rows rebuild only when the list itself changes, not on drag hover.
    let quotes = Memo::new(move |_| board.with(|b| b.quotes.clone()));

    view! {
        <div class="quote-list">
            {move || {
                quotes
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, quote)| view! { <QuoteRow index=index quote=quote/> })
                    .collect_view()
            }}
            <Show when=move || quotes.with(Vec::is_empty)>
                <p class="quote-list__empty">"No quotes yet."</p>
            </Show>
        </div>
    }
}
