//! Quote board page: input row, reorderable list, and edit dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires the edit dialog's callbacks to the
//! board's edit transitions; the input row and list talk to the board
//! through context themselves.

use leptos::prelude::*;

use crate::components::edit_quote_dialog::EditQuoteDialog;
use crate::components::quote_input::QuoteInput;
use crate::components::quote_list::QuoteList;
use crate::state::quotes::QuoteBoard;

#[component]
pub fn QuoteBoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<QuoteBoard>>();

    let edit_open = Memo::new(move |_| board.with(|b| b.edit_session.is_open()));
    let draft = Signal::derive(move || board.with(|b| b.edit_session.draft().to_owned()));

    let on_input = Callback::new(move |text: String| board.update(|b| b.update_draft(&text)));
    let on_cancel = Callback::new(move |_| board.update(QuoteBoard::cancel_edit));
    let on_save = Callback::new(move |_| {
        board.update(|b| {
            b.commit_edit();
        });
    });

    view! {
        <main class="quote-board">
            <QuoteInput/>
            <QuoteList/>
            <Show when=move || edit_open.get()>
                <EditQuoteDialog draft=draft on_input=on_input on_cancel=on_cancel on_save=on_save/>
            </Show>
        </main>
    }
}
