//! Wrap a constructible type into a singleton accessor.
//!
//! [`wrap`] takes any type implementing [`Construct`] and returns a
//! [`Singleton`] that constructs the instance at most once — lazily on first
//! access by default, or eagerly at wrap time via
//! [`SingletonConfig::eager`]. Arguments given to the first access (or preset
//! through [`SingletonConfig::with_arguments`]) feed the one-time
//! construction; passing arguments after the instance exists is a programmer
//! error and fails with [`SingletonError::InvalidUsage`].
//!
//! ```
//! use singleton_wrap::{wrap, Construct, SingletonConfig};
//!
//! struct Counter {
//!     start: u32,
//! }
//!
//! impl Construct for Counter {
//!     type Args = u32;
//!
//!     fn construct(start: u32) -> Self {
//!         Counter { start }
//!     }
//! }
//!
//! let accessor = wrap::<Counter>(SingletonConfig::with_arguments(7));
//! assert_eq!(accessor.get().start, 7);
//! assert!(accessor.get_with(9).is_err());
//! ```

mod config;
mod construct;
mod error;
mod singleton;

pub use config::SingletonConfig;
pub use construct::Construct;
pub use error::{SingletonError, SingletonResult};
pub use singleton::{Singleton, SingletonState};

/// Wraps `T` into a singleton accessor. Equivalent to [`Singleton::new`].
pub fn wrap<T: Construct>(config: SingletonConfig<T::Args>) -> Singleton<T> {
    Singleton::new(config)
}
