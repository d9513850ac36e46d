//! Dialog chrome for the auth modals: backdrop, title, optional step counter
//! and a close button. Visibility is owned by the caller.

use leptos::prelude::*;

#[component]
pub fn ModalShell(
    title: &'static str,
    /// `(current, total)` for multi-step dialogs.
    #[prop(optional, into)]
    step: Option<Signal<(u8, u8)>>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 px-4"
            role="dialog"
            aria-modal="true"
        >
            <div class="relative w-full max-w-md rounded-lg bg-white p-6 shadow dark:bg-gray-800">
                <div class="mb-4 flex items-center justify-between">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{title}</h3>
                    <div class="flex items-center gap-3">
                        {step
                            .map(|step| {
                                view! {
                                    <span class="text-sm text-gray-500 dark:text-gray-400">
                                        {move || {
                                            let (current, total) = step.get();
                                            format!("{current} / {total}")
                                        }}
                                    </span>
                                }
                            })}
                        <button
                            type="button"
                            class="rounded-lg p-1.5 text-gray-400 hover:bg-gray-200 hover:text-gray-900 dark:hover:bg-gray-600 dark:hover:text-white"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            <span class="material-symbols-outlined text-base">"close"</span>
                        </button>
                    </div>
                </div>
                {children()}
            </div>
        </div>
    }
}
