// Shared handles for the background entry points (router + lifecycle listener)

use futures::lock::Mutex;

use crate::config::ExtensionConfig;

pub struct CoreContext<S, H> {
    pub store: S,
    pub host: H,
    pub config: ExtensionConfig,
    /// Held across every read-modify-write of `keyboardEnabled`, never
    /// across tab messaging
    pub keyboard_lock: Mutex<()>,
}

impl<S, H> CoreContext<S, H> {
    pub fn new(store: S, host: H, config: ExtensionConfig) -> Self {
        Self {
            store,
            host,
            config,
            keyboard_lock: Mutex::new(()),
        }
    }
}
