use leptos::*;

use yplaces_core::flow::StateCell;

/// Runs the flows of `yplaces-core` on a reactive signal.
pub struct SignalCell<T: 'static>(pub RwSignal<T>);

impl<T> StateCell<T> for SignalCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
