//! Sign-up page: account fields, terms consent, and the submission flow.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::{AuthCard, PromoCopy};
use crate::components::field_input::FieldInput;
use crate::net::api::HttpAuthApi;
use crate::state::sign_up::{SignUpField, SignUpForm, submit_sign_up};
use crate::util::navigate::RouterNavigator;

const PROMO: PromoCopy = PromoCopy {
    title: "Discovering the Best Furniture for Your Home",
    blurb: "Our practice is Designing Complete Environments exceptional buildings communities and place in special situations",
    badges: [("✓", "100% Guarantee"), ("🚚", "Free delivery London area")],
};

fn submit_label(loading: bool) -> &'static str {
    if loading { "Creating account..." } else { "Sign Up" }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = RwSignal::new(SignUpForm::default());
    // Local storage keeps the router handle out of the view's `Send` captures.
    let navigator = StoredValue::new_local(RouterNavigator::new(use_navigate()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigator = navigator.get_value();
        leptos::task::spawn_local(async move {
            let api = HttpAuthApi::from_config();
            submit_sign_up(&form, &api, &navigator).await;
        });
    };

    let inputs = SignUpField::ALL
        .into_iter()
        .map(|field| {
            let spec = field.spec();
            view! {
                <FieldInput
                    label=spec.label
                    input_type=spec.input_type
                    placeholder=spec.placeholder
                    value=Signal::derive(move || form.with(|f| f.fields.get(field).to_owned()))
                    on_change=Callback::new(move |value: String| {
                        form.update(|f| f.fields.set(field, value));
                    })
                />
            }
        })
        .collect_view();

    let loading = move || form.with(SignUpForm::is_loading);

    view! {
        <AuthCard
            title="Create your account"
            subtitle="Let's get started with your 30 days free trial"
            promo=PROMO
        >
            <form class="auth-form" on:submit=on_submit>
                {inputs}
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.agree_to_terms)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.agree_to_terms = checked);
                        }
                    />
                    <span>"I agree to all Terms, Privacy Policy and Fees"</span>
                </label>
                <Show when=move || form.with(|f| f.error_message().is_some())>
                    <div class="form-error">{move || form.with(SignUpForm::error_message)}</div>
                </Show>
                <button
                    class="submit-button"
                    type="submit"
                    disabled=loading
                >
                    {move || submit_label(loading())}
                </button>
                <p class="auth-form__switch">
                    "Already have an account? "
                    <a href="/log-in">"Log in"</a>
                </p>
            </form>
        </AuthCard>
    }
}
