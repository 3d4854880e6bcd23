mod test_rank;

use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output of the crate through `env_logger` once per test binary.
/// `RUST_LOG` overrides the `debug` default.
pub fn init() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("debug");
        let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
    });
}
