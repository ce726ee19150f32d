//! Macros for ergonomic configuration literals.

/// Build a [`Configuration`](crate::core::Configuration) from identifiers.
///
/// State and event names are taken verbatim from the identifiers. Each
/// state lists its transitions as `event => target`; an empty block
/// declares a state with no outgoing transitions.
///
/// # Example
///
/// ```
/// use fsm_engine::fsm_config;
///
/// let config = fsm_config! {
///     initial: red,
///     states: {
///         red: { timer => green },
///         green: { timer => yellow },
///         yellow: { timer => red },
///         broken: {},
///     }
/// };
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.state("green").unwrap().target("timer"), Some("yellow"));
/// assert!(config.state("broken").unwrap().transitions.is_empty());
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident: {
                    $($event:ident => $target:ident),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::Table::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::core::Table::new();
            $(
                transitions.insert(stringify!($event), stringify!($target).to_string());
            )*
            states.insert(stringify!($state), $crate::core::StateDef::new(transitions));
        )*
        $crate::core::Configuration::new(stringify!($initial), states)
    }};
}
