//! Input row for adding quotes.

#[cfg(test)]
#[path = "quote_input_test.rs"]
mod quote_input_test;

use leptos::prelude::*;

use crate::state::quotes::QuoteBoard;

/// Whether a keydown in the add field should submit it.
pub(crate) fn input_key_submits(key: &str) -> bool {
    key == "Enter"
}

/// Text field bound to the board's pending input plus an "Add" button.
#[component]
pub fn QuoteInput() -> impl IntoView {
    let board = expect_context::<RwSignal<QuoteBoard>>();

    let add = move || {
        board.update(|b| {
            b.add_pending();
        });
    };

    view! {
        <div class="quote-input">
            <input
                class="quote-input__field"
                type="text"
                placeholder="Add a new quote"
                prop:value=move || board.with(|b| b.pending_input.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    board.update(|b| b.set_pending_input(&text));
                }
                on:keydown=move |ev| {
                    if input_key_submits(&ev.key()) {
                        ev.prevent_default();
                        add();
                    }
                }
            />
            <button class="btn quote-input__add" on:click=move |_| add()>
                "Add"
            </button>
        </div>
    }
}
