//! Placeholder landing page; sign-up navigates here on success.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <h1>"Home Page"</h1> }
}
