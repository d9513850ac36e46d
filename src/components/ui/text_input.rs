use leptos::{html, prelude::*};

/// Labelled input bound to `value`, with an inline field error.
#[component]
pub fn TextInput(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_default();

    view! {
        <div class="mb-4">
            <label
                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                for=id
            >
                {label}
            </label>
            <input
                id=id
                node_ref=node_ref
                type=input_type.unwrap_or("text")
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                class:border-red-500=move || error.with(Option::is_some)
                autocomplete=autocomplete
                placeholder=placeholder
                maxlength=max_length.map(|length| length.to_string())
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p class="mt-1 text-sm text-red-600 dark:text-red-400">{message}</p>
                        }
                    })
            }}
        </div>
    }
}
