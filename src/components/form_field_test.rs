use super::*;

#[test]
fn required_label_gets_marker() {
    assert_eq!(field_label("Truck Number", true), "Truck Number*");
    assert_eq!(field_label("Description", false), "Description");
}

#[test]
fn input_class_highlights_errors() {
    assert_eq!(input_class(false), "form-input");
    assert_eq!(input_class(true), "form-input form-input--error");
}
