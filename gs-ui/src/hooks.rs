//! Custom hooks.

use dioxus::core::Task;
use dioxus::prelude::*;
use gs_core::debounce::Debouncer;

/// Resolve after `ms` milliseconds using the browser's `setTimeout`.
pub async fn sleep_ms(ms: u32) {
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Follow `source`, but only after it has been unchanged for `delay_ms`.
///
/// Every change restarts the wait and cancels the pending timer task; only
/// the latest value is ever published. Unmounting the owner cancels any
/// pending emission.
pub fn use_debounce<T: Clone + PartialEq + 'static>(source: Signal<T>, delay_ms: u32) -> Signal<T> {
    let mut debounced = use_signal(|| source.peek().clone());
    let mut gate = use_signal(Debouncer::<T>::new);
    let mut timer: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let value = source();
        if *debounced.peek() == value && !gate.peek().is_pending() {
            return;
        }
        let ticket = gate.write().push(value);
        if let Some(previous) = timer.write().take() {
            previous.cancel();
        }
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            let settled = gate.write().fire(ticket);
            if let Some(value) = settled {
                debounced.set(value);
            }
        });
        timer.set(Some(task));
    });

    use_drop(move || {
        if let Ok(mut gate) = gate.try_write() {
            gate.cancel();
        }
        if let Ok(mut timer) = timer.try_write() {
            if let Some(task) = timer.take() {
                task.cancel();
            }
        }
    });

    debounced
}
