//! Silencing the panic hook while a panic is being contained
//!
//! The process-wide hook is wrapped once. Panics on a thread that holds a
//! [`SilencePanics`] guard are logged at debug level instead of printed;
//! every other panic goes to the previously installed hook unchanged.

use std::cell::Cell;
use std::marker::PhantomData;
use std::panic;
use std::sync::Once;
use tracing::debug;

static INSTALL: Once = Once::new();

thread_local! {
    static SILENCED: Cell<usize> = const { Cell::new(0) };
}

/// While alive, panics on this thread skip the default `panicked at` output.
/// Guards nest.
pub(crate) struct SilencePanics {
    // Tied to the thread whose counter it bumped
    _not_send: PhantomData<*const ()>,
}

impl SilencePanics {
    pub(crate) fn new() -> Self {
        INSTALL.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if is_silenced() {
                    debug!(%info, "contained panic");
                } else {
                    previous(info);
                }
            }));
        });
        SILENCED.with(|depth| depth.set(depth.get() + 1));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for SilencePanics {
    fn drop(&mut self) {
        SILENCED.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

pub(crate) fn is_silenced() -> bool {
    SILENCED.with(|depth| depth.get() > 0)
}
