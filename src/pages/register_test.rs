use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Li Wei ", " liwei@example.com ", "secret"),
        Ok((
            "Li Wei".to_owned(),
            "liwei@example.com".to_owned(),
            "secret".to_owned()
        ))
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    let expected = Err("Fill in name, email, and password first.");
    assert_eq!(validate_register_input("", "a@b.c", "secret"), expected);
    assert_eq!(validate_register_input("Li Wei", "  ", "secret"), expected);
    assert_eq!(validate_register_input("Li Wei", "a@b.c", ""), expected);
}
