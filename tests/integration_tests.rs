//! Integration tests for PassGen.
//!
//! These tests exercise the public API end to end:
//! - Password composition shape over many random trials
//! - Round-robin structure and truncation
//! - The app actions wired to a fake clipboard

// ============================================================================
// Test Module: Password Generation
// ============================================================================

mod password_tests {
    use passgen::password::classify;
    use passgen::{CharacterClass, GenerationError, GenerationRequest, generate_password, generate_password_with};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TRIALS: usize = 1000;

    /// Every non-empty combination of the four toggles
    fn all_configurations() -> Vec<[bool; 4]> {
        (1u8..16)
            .map(|bits| [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0])
            .collect()
    }

    fn request(flags: [bool; 4], length: usize) -> GenerationRequest {
        GenerationRequest::new(flags[0], flags[1], flags[2], flags[3], length)
    }

    #[test]
    fn test_length_is_exact_for_every_configuration() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for flags in all_configurations() {
            for length in 0..=40 {
                let pwd = generate_password_with(&request(flags, length), &mut rng).unwrap();
                assert_eq!(pwd.len(), length, "flags {:?}", flags);
            }
        }
    }

    #[test]
    fn test_only_selected_classes_appear() {
        for flags in all_configurations() {
            let req = request(flags, 17);
            let selected = req.selected_classes();
            for _ in 0..TRIALS {
                let pwd = req.generate().unwrap();
                assert_eq!(pwd.len(), 17);
                for c in pwd.chars() {
                    let class = classify(c).expect("unknown character");
                    assert!(selected.contains(&class), "{:?} not in {:?}", c, selected);
                }
            }
        }
    }

    #[test]
    fn test_round_robin_position_is_fixed() {
        for flags in all_configurations() {
            let req = request(flags, 20);
            let selected = req.selected_classes();
            for _ in 0..TRIALS {
                let pwd = req.generate().unwrap();
                for (i, c) in pwd.chars().enumerate() {
                    assert_eq!(classify(c), Some(selected[i % selected.len()]));
                }
            }
        }
    }

    #[test]
    fn test_even_split_when_length_divides() {
        let req = GenerationRequest::new(true, true, true, true, 16);
        for _ in 0..TRIALS {
            let pwd = req.generate().unwrap();
            for class in CharacterClass::ALL {
                let count = pwd.chars().filter(|c| class.contains(*c)).count();
                assert_eq!(count, 4);
            }
        }
    }

    #[test]
    fn test_truncation_drops_trailing_classes() {
        // k = 3, length 7: L U N L U N L
        let req = GenerationRequest::new(true, true, true, false, 7);
        let pwd = req.generate().unwrap();
        let lower = pwd.chars().filter(|c| c.is_ascii_lowercase()).count();
        let upper = pwd.chars().filter(|c| c.is_ascii_uppercase()).count();
        let digits = pwd.chars().filter(|c| c.is_ascii_digit()).count();
        assert_eq!((lower, upper, digits), (3, 2, 2));
    }

    #[test]
    fn test_scenario_all_classes_ten() {
        let (pwd, ok) = generate_password(true, true, true, true, 10);
        assert!(ok);
        let bytes = pwd.as_bytes();
        assert_eq!(bytes.len(), 10);
        for i in [0, 4, 8] {
            assert!(bytes[i].is_ascii_lowercase());
        }
        for i in [1, 5, 9] {
            assert!(bytes[i].is_ascii_uppercase());
        }
        for i in [2, 6] {
            assert!(bytes[i].is_ascii_digit());
        }
        for i in [3, 7] {
            assert!(b"!@#$%^&*(){}[]=<>/,.".contains(&bytes[i]));
        }
    }

    #[test]
    fn test_scenario_nothing_selected() {
        for length in [0, 1, 12, 500] {
            assert_eq!(generate_password(false, false, false, false, length), (String::new(), false));
        }
        let req = GenerationRequest::new(false, false, false, false, 12);
        assert_eq!(req.generate(), Err(GenerationError::NoClassSelected));
    }

    #[test]
    fn test_every_symbol_is_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let req = GenerationRequest::new(false, false, false, true, 5000);
        let pwd = generate_password_with(&req, &mut rng).unwrap();
        for &s in CharacterClass::Symbol.charset() {
            assert!(pwd.contains(s as char), "symbol {} never drawn", s as char);
        }
    }
}

// ============================================================================
// Test Module: App Actions
// ============================================================================

mod app_tests {
    use passgen::ClipboardError;
    use passgen::app::PassGenApp;
    use passgen::clipboard::ClipboardSink;
    use passgen::notification::{NO_CLASS_SELECTED, NotificationKind, PASSWORD_COPIED};
    use passgen::settings::AppSettings;
    use passgen::stepper::StepOutcome;

    #[derive(Default)]
    struct FakeClipboard {
        history: Vec<String>,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.history.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_generate_then_copy_flow() {
        let mut app = PassGenApp::new(AppSettings {
            default_length: 8,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..AppSettings::default()
        });
        app.generate();
        assert_eq!(app.generated_password.len(), 8);
        assert!(app.generated_password.chars().all(|c| c.is_ascii_lowercase()));

        let mut clipboard = FakeClipboard::default();
        app.copy(&mut clipboard);
        assert_eq!(clipboard.history.len(), 1);
        assert_eq!(clipboard.history[0].len(), 8);
        assert!(app.generated_password.is_empty());
        let last = app.notifications.latest().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, PASSWORD_COPIED);

        // second copy has nothing left
        app.copy(&mut clipboard);
        assert_eq!(clipboard.history.len(), 1);
        assert_eq!(app.notifications.latest().unwrap().kind, NotificationKind::Warning);
    }

    #[test]
    fn test_no_classes_gives_warning_and_empty_output() {
        let mut app = PassGenApp::new(AppSettings {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..AppSettings::default()
        });
        app.generate();
        assert!(app.generated_password.is_empty());
        assert_eq!(app.notifications.latest().unwrap().message, NO_CLASS_SELECTED);
    }

    #[test]
    fn test_stepper_drives_generated_length() {
        let mut app = PassGenApp::default();
        while let StepOutcome::Changed(_) = app.decrement_length() {}
        app.generate();
        assert_eq!(app.generated_password.len(), 5);

        while let StepOutcome::Changed(_) = app.increment_length() {}
        app.generate();
        assert_eq!(app.generated_password.len(), 20);
    }
}
