//! Where a form model lives while a submission is in flight.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use leptos::prelude::*;

/// Mutable access to a form model held somewhere else.
///
/// Returns `None` when the backing storage is gone, e.g. a signal disposed
/// because the page unmounted mid-request.
pub trait FormStore<T> {
    fn update_form<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> FormStore<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn update_form<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> FormStore<T> for RefCell<T> {
    fn update_form<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
