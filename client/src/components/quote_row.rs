//! One draggable quote row with edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's native drag-and-drop recognizes the gesture. Handlers here
//! translate `dragstart`/`dragover`/`drop`/`dragend` into `QuoteBoard` drag
//! transitions; `dragend` after a handled `drop` is a no-op.

#[cfg(test)]
#[path = "quote_row_test.rs"]
mod quote_row_test;

use leptos::prelude::*;

use crate::state::quotes::{Quote, QuoteBoard};

/// CSS classes for a row given its role in the current drag.
pub(crate) fn row_class(is_source: bool, is_target: bool) -> String {
    let mut class = String::from("quote-row");
    if is_source {
        class.push_str(" quote-row--dragging");
    } else if is_target {
        class.push_str(" quote-row--drop-target");
    }
    class
}

#[component]
pub fn QuoteRow(index: usize, quote: Quote) -> impl IntoView {
    let board = expect_context::<RwSignal<QuoteBoard>>();

    let class = move || {
        board.with(|b| row_class(b.drag.source_index() == Some(index), b.drag.over_index() == Some(index)))
    };

    let drag_id = quote.id.clone();
    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        {
            // Firefox will not start a drag without payload data.
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                let _ = transfer.set_data("text/plain", &drag_id);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&ev, &drag_id);
        board.update(|b| b.start_drag(index));
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if board.with_untracked(|b| b.drag.is_dragging() && b.drag.over_index() != Some(index)) {
            board.update(|b| b.drag_over(Some(index)));
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        board.update(|b| {
            b.drop_on(index);
        });
    };

    let on_dragend = move |_| {
        if board.with_untracked(|b| b.drag.is_dragging()) {
            board.update(|b| {
                b.end_drag();
            });
        }
    };

    view! {
        <div
            class=class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <span class="quote-row__content">{quote.content}</span>
            <div class="quote-row__actions">
                <button
                    class="btn quote-row__edit"
                    on:click=move |_| {
                        board.update(|b| {
                            b.begin_edit(index);
                        });
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn quote-row__delete"
                    on:click=move |_| {
                        board.update(|b| {
                            b.delete_quote(index);
                        });
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
