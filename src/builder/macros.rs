//! Macros for ergonomic chart construction.

/// Generate a State trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use headway::state_enum;
///
/// state_enum! {
///     pub enum SessionState {
///         SignedOut,
///         SignedIn,
///         Locked,
///         Expired,
///     }
///     final: [Expired]
///     error: [Expired]
/// }
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an Event trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use headway::event_enum;
///
/// event_enum! {
///     pub enum SessionEvent {
///         SignIn,
///         SignOut,
///         Lock,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum WizardState {
            Intro,
            Details,
            Confirm,
            Done,
            Abandoned,
        }
        final: [Done, Abandoned]
        error: [Abandoned]
    }

    event_enum! {
        enum WizardEvent {
            Next,
            Back,
            Quit,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = WizardState::Intro;
        assert_eq!(state.name(), "Intro");
        assert!(!state.is_final());
        assert!(!state.is_error());

        let done = WizardState::Done;
        assert!(done.is_final());
        assert!(!done.is_error());

        let abandoned = WizardState::Abandoned;
        assert!(abandoned.is_final());
        assert!(abandoned.is_error());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(WizardEvent::Next.name(), "Next");
        assert_eq!(WizardEvent::Quit.name(), "Quit");
        assert_ne!(WizardEvent::Next, WizardEvent::Back);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        let _state = PublicState::A;
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        assert!(!state.is_final());
        assert!(!state.is_error());
    }

    #[test]
    fn macro_enums_work_together_in_a_chart() {
        use crate::builder::{event_transition, ChartBuilder};

        let chart = ChartBuilder::new()
            .initial(WizardState::Intro)
            .states([
                WizardState::Intro,
                WizardState::Details,
                WizardState::Confirm,
                WizardState::Done,
                WizardState::Abandoned,
            ])
            .transitions(vec![
                event_transition(WizardState::Intro, WizardEvent::Next, WizardState::Details),
                event_transition(WizardState::Details, WizardEvent::Back, WizardState::Intro),
                event_transition(WizardState::Details, WizardEvent::Quit, WizardState::Abandoned),
            ])
            .build()
            .unwrap();

        assert_eq!(
            chart.next(&WizardState::Intro, &WizardEvent::Next),
            WizardState::Details
        );
    }
}
