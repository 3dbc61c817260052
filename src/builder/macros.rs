//! Macros for declaring grammar state sets.

/// Declare a state enum and generate its State trait implementation.
///
/// The generated enum derives everything `State` requires. Variants listed
/// under `accepting:` report `is_accepting() == true`, variants listed under
/// `invalid:` report `is_invalid() == true`. The `Automaton` impl (initial
/// state and transition table) is still written by hand.
///
/// # Example
///
/// ```
/// use lexis::state_enum;
/// use lexis::core::State;
///
/// state_enum! {
///     pub enum SignState {
///         Start,
///         Signed,
///         Invalid,
///     }
///     accepting: [Signed]
///     invalid: [Invalid]
/// }
///
/// assert_eq!(SignState::Signed.name(), "Signed");
/// assert!(SignState::Signed.is_accepting());
/// assert!(SignState::Invalid.is_invalid());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(accepting: [$($accepting:ident),* $(,)?])?
        $(invalid: [$($invalid:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_accepting(&self) -> bool {
                match self {
                    $($(Self::$accepting => true,)*)?
                    _ => false,
                }
            }

            fn is_invalid(&self) -> bool {
                match self {
                    $($(Self::$invalid => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::charset::CharacterSets;
    use crate::core::{Automaton, State};

    state_enum! {
        /// Signed decimal: optional `-`, then digits.
        enum SignedState {
            /// Nothing consumed.
            Start,
            Minus,
            Digits,
            Invalid,
        }
        accepting: [Digits]
        invalid: [Invalid]
    }

    impl Automaton for SignedState {
        const INITIAL: Self = Self::Start;

        fn next(self, c: char, sets: &CharacterSets) -> Self {
            match self {
                Self::Start if c == '-' => Self::Minus,
                Self::Start | Self::Minus | Self::Digits if sets.digits.contains(c) => {
                    Self::Digits
                }
                _ => Self::Invalid,
            }
        }
    }

    fn run(input: &str) -> SignedState {
        let sets = CharacterSets::standard();
        input
            .chars()
            .fold(SignedState::INITIAL, |state, c| state.next(c, sets))
    }

    #[test]
    fn names_come_from_variant_identifiers() {
        assert_eq!(SignedState::Start.name(), "Start");
        assert_eq!(SignedState::Minus.name(), "Minus");
        assert_eq!(SignedState::Invalid.name(), "Invalid");
    }

    #[test]
    fn listed_variants_accept_or_sink() {
        assert!(SignedState::Digits.is_accepting());
        assert!(SignedState::Invalid.is_invalid());
        for state in [SignedState::Start, SignedState::Minus] {
            assert!(!state.is_accepting());
            assert!(!state.is_invalid());
        }
    }

    #[test]
    fn generated_states_drive_an_automaton() {
        assert_eq!(run("-42"), SignedState::Digits);
        assert_eq!(run("-"), SignedState::Minus);
        assert_eq!(run("4-2"), SignedState::Invalid);
    }

    #[test]
    fn declared_sink_absorbs() {
        let sets = CharacterSets::standard();
        for c in ['-', '7', 'x', ' '] {
            assert_eq!(SignedState::Invalid.next(c, sets), SignedState::Invalid);
        }
        assert_eq!(run("x123"), SignedState::Invalid);
    }

    #[test]
    fn grammar_without_sink_declares_no_invalid_state() {
        state_enum! {
            pub enum SeenState {
                Unseen,
                Seen,
            }
            accepting: [Seen]
        }

        assert!(SeenState::Seen.is_accepting());
        assert!(!SeenState::Unseen.is_invalid());
        assert!(!SeenState::Seen.is_invalid());
    }

    #[test]
    fn generated_states_serialize_by_name() {
        let json = serde_json::to_string(&SignedState::Minus).unwrap();
        assert_eq!(json, "\"Minus\"");
        let back: SignedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SignedState::Minus);
    }
}
