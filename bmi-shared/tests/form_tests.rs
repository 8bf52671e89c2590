//! Tests for the form state machine (calculate / reset).

use bmi_shared::{Category, FormState, Rgba};

fn filled(name: &str, weight: &str, height: &str) -> FormState {
    let mut form = FormState::default();
    form.name = name.into();
    form.weight = weight.into();
    form.height = height.into();
    form
}

#[test]
fn starts_neutral() {
    let form = FormState::default();
    assert!(form.outcome().is_none());
    assert!(!form.is_warning());
    assert_eq!(form.headline(), "Result: ");
    assert_eq!(form.panel_color(), Rgba::NEUTRAL);
}

#[test]
fn calculate_shows_named_result() {
    let mut form = filled("Ana", "70", "1.75");
    form.calculate();

    let outcome = form.outcome().unwrap();
    assert_eq!(outcome.name, "Ana");
    assert_eq!(outcome.report.category, Category::Normal);
    assert_eq!(form.headline(), "Ana, your BMI is 22.86 (Normal)");
    assert_eq!(form.panel_color(), Category::Normal.color());
    assert!(!form.is_warning());
}

#[test]
fn empty_name_uses_fallback() {
    let mut form = filled("   ", "100", "1.75");
    form.calculate();
    assert_eq!(form.headline(), "User, your BMI is 32.65 (Obese)");

    let mut custom = FormState::new("Guest");
    custom.weight = "50".into();
    custom.height = "1.75".into();
    custom.calculate();
    assert_eq!(custom.headline(), "Guest, your BMI is 16.33 (Underweight)");
}

#[test]
fn invalid_input_raises_warning_and_keeps_everything() {
    let mut form = filled("Ana", "80", "1.75");
    form.calculate();
    let before = form.outcome().cloned();

    form.weight = "abc".into();
    form.calculate();

    assert!(form.is_warning());
    assert_eq!(form.name, "Ana");
    assert_eq!(form.weight, "abc");
    assert_eq!(form.height, "1.75");
    assert_eq!(form.outcome().cloned(), before);
    assert_eq!(form.panel_color(), Category::Overweight.color());

    form.dismiss_warning();
    assert!(!form.is_warning());
}

#[test]
fn reset_clears_fields_and_restores_neutral_panel() {
    let mut form = filled("Ana", "70", "1.75");
    form.calculate();
    form.weight = "0".into();
    form.calculate();
    assert!(form.is_warning());

    form.reset();

    assert!(form.name.is_empty());
    assert!(form.weight.is_empty());
    assert!(form.height.is_empty());
    assert!(form.outcome().is_none());
    assert!(!form.is_warning());
    assert_eq!(form.headline(), "Result: ");
    assert_eq!(form.panel_color(), Rgba::NEUTRAL);
}

#[test]
fn reset_requests_name_focus_once() {
    let mut form = FormState::default();
    assert!(!form.take_focus_request());

    form.reset();
    assert!(form.take_focus_request());
    assert!(!form.take_focus_request());
}
