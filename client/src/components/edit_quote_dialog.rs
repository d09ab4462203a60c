//! Modal dialog for editing one quote.

#[cfg(test)]
#[path = "edit_quote_dialog_test.rs"]
mod edit_quote_dialog_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DialogKey {
    Save,
    Cancel,
}

/// Map a keydown inside the dialog to its action.
pub(crate) fn dialog_key_action(key: &str) -> Option<DialogKey> {
    match key {
        "Enter" => Some(DialogKey::Save),
        "Escape" => Some(DialogKey::Cancel),
        _ => None,
    }
}

/// Dialog shown while an edit session is open.
///
/// Backdrop click, the header close button, Escape, and "Close" all hide the
/// dialog through `on_cancel`.
#[component]
pub fn EditQuoteDialog(
    draft: Signal<String>,
    on_input: Callback<String>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match dialog_key_action(&ev.key()) {
        Some(DialogKey::Save) => {
            ev.prevent_default();
            on_save.run(());
        }
        Some(DialogKey::Cancel) => {
            ev.prevent_default();
            on_cancel.run(());
        }
        None => {}
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--edit-quote"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2 class="dialog__title">"Edit Quote"</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_cancel.run(())>
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Edit quote"
                        prop:value=move || draft.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                        autofocus=true
                    />
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Save Changes"
                    </button>
                </div>
            </div>
        </div>
    }
}
