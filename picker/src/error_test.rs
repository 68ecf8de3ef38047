use super::*;

#[test]
fn format_message_names_expected_shape() {
    let msg = CoordinateError::Format.to_string();
    assert!(msg.contains("Formato inválido"));
    assert!(msg.contains("latitud, longitud"));
}

#[test]
fn numeric_message() {
    assert_eq!(CoordinateError::Numeric.to_string(), "Las coordenadas deben ser números válidos");
}

#[test]
fn range_message_mentions_out_of_range() {
    let err = CoordinateError::Range { latitude: 95.0, longitude: 200.0 };
    assert!(err.to_string().contains("fuera de rango"));
}

#[test]
fn field_error_binds_to_coordinate_input() {
    let field = FieldError::coordinate_input(CoordinateError::Numeric);
    assert_eq!(field.field, COORDINATE_INPUT_FIELD);
    assert_eq!(field.message(), CoordinateError::Numeric.to_string());
}
