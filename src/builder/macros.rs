//! Macros for ergonomic rulebook construction.

/// Build a [`Rulebook`](crate::core::Rulebook) from `(state, symbol, next_state)`
/// triples.
///
/// # Example
///
/// ```
/// use multistate::core::StateSet;
/// use multistate::rulebook;
///
/// let rulebook = rulebook![
///     (1, 'a', 1),
///     (1, 'b', 1),
///     (1, 'b', 2),
/// ];
///
/// assert_eq!(rulebook.len(), 3);
/// assert_eq!(
///     rulebook.next_states(&StateSet::singleton(1), &'b'),
///     StateSet::from([1, 2]),
/// );
/// ```
#[macro_export]
macro_rules! rulebook {
    ($(($state:expr, $symbol:expr, $next_state:expr)),* $(,)?) => {
        $crate::core::Rulebook::new(vec![
            $($crate::core::Rule::new($state, $symbol, $next_state)),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Rule, Rulebook, StateSet};

    #[test]
    fn rulebook_macro_builds_rules_in_order() {
        let rulebook = rulebook![(1u32, 'a', 2u32), (2, 'b', 3), (2, 'b', 3)];

        assert_eq!(
            rulebook.rules(),
            &[
                Rule::new(1, 'a', 2),
                Rule::new(2, 'b', 3),
                Rule::new(2, 'b', 3),
            ]
        );
        assert_eq!(
            rulebook.follow_rules_for(&2, &'b'),
            StateSet::singleton(3)
        );
    }

    #[test]
    fn rulebook_macro_supports_trailing_comma() {
        let rulebook = rulebook![(1u32, 'a', 1u32),];
        assert_eq!(rulebook.len(), 1);
    }

    #[test]
    fn rulebook_macro_accepts_empty_list() {
        let rulebook: Rulebook<u32, char> = rulebook![];
        assert!(rulebook.is_empty());
    }

    #[test]
    fn rulebook_macro_works_with_string_states() {
        let rulebook = rulebook![
            (String::from("even"), 1u8, String::from("odd")),
            (String::from("odd"), 1u8, String::from("even")),
        ];

        assert_eq!(
            rulebook.follow_rules_for(&String::from("even"), &1),
            StateSet::singleton(String::from("odd"))
        );
    }
}
