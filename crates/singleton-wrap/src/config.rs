/// Options accepted by [`wrap`](crate::wrap).
#[derive(Debug, Clone)]
pub struct SingletonConfig<A> {
    /// Construct the instance at wrap time instead of on first access.
    pub instantiate: bool,
    /// Preset constructor arguments, used only for the one-time initial
    /// construction and only when the first access passes none of its own.
    pub arguments: Option<A>,
}

// Derived `Default` would bound `A: Default`.
impl<A> Default for SingletonConfig<A> {
    fn default() -> Self {
        Self {
            instantiate: false,
            arguments: None,
        }
    }
}

impl<A> SingletonConfig<A> {
    /// Lazy singleton with preset arguments.
    pub fn with_arguments(arguments: A) -> Self {
        Self {
            instantiate: false,
            arguments: Some(arguments),
        }
    }

    /// Eager singleton constructed from `Args::default()` at wrap time.
    pub fn eager() -> Self {
        Self {
            instantiate: true,
            arguments: None,
        }
    }

    /// Eager singleton constructed from `arguments` at wrap time.
    pub fn eager_with_arguments(arguments: A) -> Self {
        Self {
            instantiate: true,
            arguments: Some(arguments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_lazy_without_preset_arguments() {
        let config = SingletonConfig::<(u8, u8)>::default();
        assert!(!config.instantiate);
        assert!(config.arguments.is_none());
    }

    #[test]
    fn eager_with_arguments_sets_both_options() {
        let config = SingletonConfig::eager_with_arguments((1u8, 2u8));
        assert!(config.instantiate);
        assert_eq!(config.arguments, Some((1, 2)));
    }
}
