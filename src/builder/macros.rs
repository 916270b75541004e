//! Macros for ergonomic configuration construction.

/// Declare a configuration inline.
///
/// Expands to a [`ConfigurationBuilder`](crate::builder::ConfigurationBuilder)
/// chain and evaluates to `Result<Configuration, BuildError>`. State and
/// event names are written as bare identifiers.
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: normal,
///     normal { study => busy },
///     busy { get_tired => sleeping, get_hungry => hungry },
///     hungry { eat => normal },
///     sleeping { get_hungry => hungry, get_up => normal },
/// }
/// .unwrap();
///
/// assert_eq!(config.initial(), "normal");
/// assert_eq!(config.states().len(), 4);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        $(
            $state:ident {
                $($event:ident => $target:ident),* $(,)?
            }
        ),* $(,)?
    ) => {
        $crate::builder::ConfigurationBuilder::new()
            .initial(stringify!($initial))
            $(
                .declare(stringify!($state))
                $(.transition(stringify!($state), stringify!($event), stringify!($target)))*
            )*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;

    #[test]
    fn fsm_config_macro_builds_configuration() {
        let config = fsm_config! {
            initial: normal,
            normal { study => busy },
            busy { get_tired => sleeping, get_hungry => hungry },
            hungry { eat => normal },
            sleeping { get_hungry => hungry, get_up => normal },
        }
        .unwrap();

        assert_eq!(config.initial(), "normal");
        assert_eq!(
            config.state("sleeping").and_then(|s| s.target("get_up")).unwrap(),
            "normal"
        );
    }

    #[test]
    fn fsm_config_supports_states_without_transitions() {
        let config = fsm_config! {
            initial: start,
            start { finish => done },
            done {}
        }
        .unwrap();

        assert!(config.state("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn fsm_config_validates() {
        let result = fsm_config! {
            initial: start,
            start { finish => nowhere },
        };

        assert!(matches!(result, Err(BuildError::Invalid(_))));
    }
}
