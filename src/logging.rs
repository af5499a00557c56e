use std::cell::Cell;
use std::panic::{self, UnwindSafe};
use std::sync::Once;
use std::thread;
use crate::net::blocking::WORKER_THREAD_NAME;

// Guards the panic hook as well as the logger: chaining the hook more than once would stack
// wrappers around the host's hook.
static INIT: Once = Once::new();

thread_local! {
    static IN_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

/// Installs `env_logger` and the panic hook the first time it is called.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`, so a host can silence diagnostics with
/// `RUST_LOG=off`. The logger is left alone when the host process already set one up.
///
/// Panics raised on the download path (inside [`catch_unwind_logged`] or on the runtime worker
/// threads) are reported through `log` instead of the default stderr hook. All other panics go
/// to whatever hook was installed before.
pub fn init() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("warn");
        let _ = env_logger::Builder::from_env(env).try_init();

        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if routes_to_log() {
                log::error!("hydra_download: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// `catch_unwind` whose panic message goes to the logger instead of stderr.
pub(crate) fn catch_unwind_logged<F, T>(operation: F) -> thread::Result<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    let was_inside = IN_BOUNDARY.with(|inside| inside.replace(true));
    let outcome = panic::catch_unwind(operation);
    IN_BOUNDARY.with(|inside| inside.set(was_inside));
    outcome
}

fn routes_to_log() -> bool {
    IN_BOUNDARY.with(Cell::get) || thread::current().name() == Some(WORKER_THREAD_NAME)
}
