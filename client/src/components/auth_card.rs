//! Two-column card framing the auth forms.
//!
//! The left column holds the page heading, the Google placeholder button and
//! the form passed as children. The right column is static promo copy.

use leptos::prelude::*;

const GOOGLE_ICON_PATH: &str = "M12.545,10.239v3.821h5.445c-0.712,2.315-2.647,3.972-5.445,3.972c-3.332,0-6.033-2.701-6.033-6.032s2.701-6.032,6.033-6.032c1.498,0,2.866,0.549,3.921,1.453l2.814-2.814C17.503,2.988,15.139,2,12.545,2C7.021,2,2.543,6.477,2.543,12s4.478,10,10.002,10c8.396,0,10.249-7.85,9.426-11.748L12.545,10.239z";

/// Copy for the promo column.
#[derive(Clone, Copy, Debug)]
pub struct PromoCopy {
    pub title: &'static str,
    pub blurb: &'static str,
    /// `(icon, caption)` pairs rendered as pills.
    pub badges: [(&'static str, &'static str); 2],
}

#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    promo: PromoCopy,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__form">
                    <div class="auth-card__header">
                        <h2>{title}</h2>
                        <p class="auth-card__subtitle">{subtitle}</p>
                    </div>
                    <GoogleButton/>
                    <div class="auth-divider">
                        <span>"or"</span>
                    </div>
                    {children()}
                </div>
                <PromoPanel copy=promo/>
            </div>
        </div>
    }
}

/// Non-functional OAuth placeholder.
#[component]
fn GoogleButton() -> impl IntoView {
    view! {
        <button type="button" class="oauth-button">
            <svg class="oauth-button__icon" viewBox="0 0 24 24">
                <path fill="currentColor" d=GOOGLE_ICON_PATH></path>
            </svg>
            "Login with Google"
        </button>
    }
}

#[component]
fn PromoPanel(copy: PromoCopy) -> impl IntoView {
    let badges = copy
        .badges
        .into_iter()
        .map(|(icon, caption)| {
            view! {
                <div class="promo__badge">
                    <span class="promo__badge-icon">{icon}</span>
                    <span>{caption}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="auth-card__promo">
            <div class="promo">
                <h2>{copy.title}</h2>
                <p>{copy.blurb}</p>
                <div class="promo__badges">{badges}</div>
            </div>
        </div>
    }
}
