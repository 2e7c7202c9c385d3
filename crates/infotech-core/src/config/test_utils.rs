//! Process environment helpers for tests.

use std::env;
use std::sync::Mutex;

/// Held by every test that touches process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Puts a variable back the way it was when the guard drops.
pub struct EnvVarGuard {
    key: &'static str,
    saved: Option<String>,
}

impl EnvVarGuard {
    fn remember(key: &'static str) -> Self {
        Self {
            key,
            saved: env::var(key).ok(),
        }
    }

    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::remember(key);
        unsafe { env::set_var(key, value) };
        guard
    }

    #[allow(unsafe_code)]
    pub fn unset(key: &'static str) -> Self {
        let guard = Self::remember(key);
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        match self.saved.take() {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}
