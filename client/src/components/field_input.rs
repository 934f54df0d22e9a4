//! Controlled single-line text input with a label.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use leptos::prelude::*;

const DEFAULT_INPUT_TYPE: &str = "text";

fn resolve_input_type(input_type: Option<&'static str>) -> &'static str {
    input_type.unwrap_or(DEFAULT_INPUT_TYPE)
}

/// Labeled input whose displayed text always mirrors `value`.
///
/// Every edit is reported through `on_change`; the component keeps no copy
/// of the text, so a parent that ignores the callback freezes the field.
#[component]
pub fn FieldInput(
    label: &'static str,
    /// HTML input type; `"text"` when omitted.
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label">{label}</label>
            <input
                class="field__input"
                type=resolve_input_type(input_type)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
