//! Navigation capability.
//!
//! The sign-up flow only needs "go to this path". Pages wrap the router's
//! `use_navigate` handle in [`RouterNavigator`]; tests record the paths.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use leptos_router::NavigateOptions;

/// Something that can move the app to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// [`Navigator`] over the handle returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
