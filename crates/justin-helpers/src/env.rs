use std::{
    env,
    sync::{Mutex, MutexGuard, PoisonError},
};

// All environment mutation in test code funnels through this lock; see the
// SAFETY comments below.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

///
/// EnvGuard
///
/// Scoped environment override. Applies the requested variables, holds the
/// process-wide env lock for its lifetime, and restores the previous state
/// on drop.
///
/// At most one guard may be alive per thread; overlapping guards deadlock.
/// Override several variables with a single `apply` call instead.
///

#[derive(Debug)]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Override a single variable.
    #[must_use]
    pub fn set(key: &str, value: &str) -> Self {
        Self::apply(&[(key, value)])
    }

    /// Override several variables in order; later entries win on duplicates.
    #[must_use]
    pub fn apply(vars: &[(&str, &str)]) -> Self {
        let lock = lock_env();
        let mut saved = Vec::with_capacity(vars.len());

        for (key, value) in vars {
            saved.push(((*key).to_string(), env::var(key).ok()));
            // SAFETY: mutation happens only while ENV_LOCK is held, so no
            // other thread using these helpers reads or writes concurrently.
            unsafe { env::set_var(key, value) };
        }

        Self { saved, _lock: lock }
    }

    /// Remove a variable for the guard's lifetime.
    #[must_use]
    pub fn remove(key: &str) -> Self {
        let lock = lock_env();
        let saved = vec![(key.to_string(), env::var(key).ok())];
        // SAFETY: as in `apply`, ENV_LOCK is held.
        unsafe { env::remove_var(key) };

        Self { saved, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Restore in reverse so duplicate keys end up at their oldest value.
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: the guard still holds ENV_LOCK until after this runs.
            unsafe {
                match previous {
                    Some(value) => env::set_var(&key, value),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

/// Run a closure with the given environment overrides in place.
pub fn with_env<T>(vars: &[(&str, &str)], run: impl FnOnce() -> T) -> T {
    let _guard = EnvGuard::apply(vars);
    run()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "JUSTIN_HELPERS_ENV_TEST";

    #[test]
    fn guard_applies_and_restores_on_drop() {
        let guard = EnvGuard::set(KEY, "scoped");
        assert_eq!(env::var(KEY).as_deref(), Ok("scoped"));
        drop(guard);

        assert!(env::var(KEY).is_err(), "guard must remove what it added");
    }

    #[test]
    fn with_env_scopes_the_override() {
        let observed = with_env(&[(KEY, "scoped")], || env::var(KEY).ok());
        assert_eq!(observed.as_deref(), Some("scoped"));
        assert!(env::var(KEY).is_err(), "value must not leak past the scope");
    }

    #[test]
    fn apply_takes_the_last_value_for_duplicate_keys() {
        let observed = with_env(&[(KEY, "first"), (KEY, "second")], || env::var(KEY).ok());
        assert_eq!(observed.as_deref(), Some("second"));
        assert!(env::var(KEY).is_err(), "restore must unwind to the start");
    }
}
