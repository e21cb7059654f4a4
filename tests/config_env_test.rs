//! Environment overrides for Settings.
//!
//! Kept in its own test binary: it mutates process environment.

use primer::config::Settings;

#[test]
fn given_primer_env_vars_when_loading_then_override_defaults() {
    // Arrange
    std::env::set_var("PRIMER_PI_ITERATIONS", "1000");
    std::env::set_var("PRIMER_CIRCLE__COLOR", "green");
    std::env::set_var("PRIMER_REVERSE_DATA", "3,2,1");
    std::env::set_var("PRIMER_SAMPLE_DATA", "5");
    std::env::set_var("PRIMER_VOWEL_TEXT", "True");
    std::env::set_var("PRIMER_RECTANGLE__FILLED", "true");

    // Act
    let settings = Settings::load_layers(None, None).expect("load settings");

    // Assert
    assert_eq!(settings.pi_iterations, 1000);
    assert_eq!(settings.circle.color, "green");
    assert_eq!(settings.reverse_data, vec![3, 2, 1]);
    assert_eq!(settings.sample_data, vec![5.0]);
    assert_eq!(settings.vowel_text, "True");
    assert!(settings.rectangle.filled);
    assert_eq!(settings.isqrt_input, 50);

    // Cleanup
    std::env::remove_var("PRIMER_PI_ITERATIONS");
    std::env::remove_var("PRIMER_CIRCLE__COLOR");
    std::env::remove_var("PRIMER_REVERSE_DATA");
    std::env::remove_var("PRIMER_SAMPLE_DATA");
    std::env::remove_var("PRIMER_VOWEL_TEXT");
    std::env::remove_var("PRIMER_RECTANGLE__FILLED");
}
