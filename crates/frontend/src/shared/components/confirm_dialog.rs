use leptos::prelude::*;

use crate::shared::datagrid::dispatcher::ConfirmCopy;

/// Confirmation step of a bulk action.
///
/// The confirm button disarms itself after the first click so a double
/// click cannot launch the request twice.
#[component]
pub fn ConfirmDialog(
    copy: ConfirmCopy,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submitted = RwSignal::new(false);
    let confirm_class = if copy.danger {
        "button button--warning"
    } else {
        "button button--primary"
    };

    view! {
        <div class="modal-header">
            <h2 class="modal-title">{copy.title}</h2>
        </div>
        <div class="modal-body">
            <p class="modal-message">{copy.message}</p>
            <div class="modal-actions">
                <button
                    class=confirm_class
                    prop:disabled=move || submitted.get()
                    on:click=move |_| {
                        if submitted.get_untracked() {
                            return;
                        }
                        submitted.set(true);
                        on_confirm.run(());
                    }
                >
                    {copy.confirm_label}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Batal"
                </button>
            </div>
        </div>
    }
}
