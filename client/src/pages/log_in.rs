//! Log-in page. Submitting captures the values but sends nothing.

use leptos::prelude::*;

use crate::components::auth_card::{AuthCard, PromoCopy};
use crate::components::field_input::FieldInput;
use crate::state::log_in::{LogInField, LogInForm};

const PROMO: PromoCopy = PromoCopy {
    title: "Welcome Back to Your Furniture Journey",
    blurb: "Continue exploring our collection of exceptional furniture pieces designed to transform your space",
    badges: [("✓", "Secure login"), ("🔒", "Privacy protected")],
};

#[component]
pub fn LogInPage() -> impl IntoView {
    let form = RwSignal::new(LogInForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // TODO: send the captured values once the backend exposes a log-in endpoint.
        let _captured = form.with_untracked(LogInForm::submit);
    };

    let inputs = LogInField::ALL
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

    view! {
        <AuthCard
            title="Welcome back"
            subtitle="Please enter your details to sign in"
            promo=PROMO
        >
            <form class="auth-form" on:submit=on_submit>
                {inputs}
                <div class="auth-form__row">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.remember_me)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.remember_me = checked);
                            }
                        />
                        <span>"Remember me"</span>
                    </label>
                    <a href="#" class="auth-form__link">"Forgot password?"</a>
                </div>
                <button class="submit-button" type="submit">"Sign In"</button>
                <p class="auth-form__switch">
                    "Don't have an account? "
                    <a href="/sign-up">"Sign up"</a>
                </p>
            </form>
        </AuthCard>
    }
}
