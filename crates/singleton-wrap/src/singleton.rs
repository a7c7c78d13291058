use std::any;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::OnceCell;

use crate::config::SingletonConfig;
use crate::construct::Construct;
use crate::error::{SingletonError, SingletonResult};

/// Lifecycle of a singleton. The transition to `Instantiated` happens exactly
/// once and is terminal; there is no reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonState {
    Uninstantiated,
    Instantiated,
}

/// Accessor enforcing single-instance semantics for a `T: Construct`.
///
/// The cached instance lives in a write-once cell owned by the accessor, so
/// the wrapped type itself is never touched. `get` is the zero-argument
/// construction call and always succeeds; `get_with` passes caller arguments
/// through to the first construction and fails with
/// [`SingletonError::InvalidUsage`] once the instance exists.
pub struct Singleton<T: Construct> {
    cell: OnceCell<T>,
    preset: Mutex<Option<T::Args>>,
}

impl<T: Construct> Singleton<T> {
    /// Wraps `T` according to `config`. With `instantiate` set, the instance
    /// is constructed before this returns, from the preset arguments if any.
    pub fn new(config: SingletonConfig<T::Args>) -> Self {
        let singleton = Self {
            cell: OnceCell::new(),
            preset: Mutex::new(config.arguments),
        };

        if config.instantiate {
            singleton.get();
        }

        singleton
    }

    /// Returns the instance, constructing it on first access from the preset
    /// arguments (or `Args::default()` when none were configured).
    ///
    /// A zero-argument access is always valid, even after instantiation.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            let args = self.take_preset().unwrap_or_default();
            tracing::debug!(singleton = any::type_name::<T>(), "constructing instance");
            T::construct(args)
        })
    }

    /// Returns the instance, constructing it with exactly `args` when no
    /// instance exists yet. Caller arguments win over any preset arguments.
    ///
    /// Fails with [`SingletonError::InvalidUsage`] when the instance already
    /// exists, whether it was constructed lazily or eagerly. The cached
    /// instance is left untouched.
    pub fn get_with(&self, args: T::Args) -> SingletonResult<&T> {
        let mut pending = Some(args);
        let instance = self.cell.get_or_init(|| {
            tracing::debug!(
                singleton = any::type_name::<T>(),
                "constructing instance with caller arguments"
            );
            T::construct(pending.take().unwrap_or_default())
        });

        // The initializer consumed `pending` only if this call won the
        // construction.
        if pending.is_none() {
            return Ok(instance);
        }

        tracing::debug!(
            singleton = any::type_name::<T>(),
            "rejecting arguments for an already instantiated singleton"
        );
        Err(SingletonError::InvalidUsage {
            singleton: any::type_name::<T>(),
        })
    }

    pub fn state(&self) -> SingletonState {
        if self.cell.get().is_some() {
            SingletonState::Instantiated
        } else {
            SingletonState::Uninstantiated
        }
    }

    pub fn is_instantiated(&self) -> bool {
        self.state() == SingletonState::Instantiated
    }

    // Construction through the cell is idempotent, so a poisoned preset lock
    // is safe to recover.
    fn take_preset(&self) -> Option<T::Args> {
        self.preset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<T: Construct> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("type", &any::type_name::<T>())
            .field("state", &self.state())
            .finish()
    }
}
