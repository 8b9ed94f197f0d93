use fieldguard::{FieldRule, ValidationError};

#[test]
fn test_apply_dispatches_email() {
    let rule = FieldRule::Email;
    assert_eq!(
        rule.apply("user@example.com"),
        Ok("user@example.com".to_string())
    );
    assert_eq!(
        rule.apply("not-an-email"),
        Err(ValidationError::NotAnEmail)
    );
}

#[test]
fn test_apply_dispatches_phone() {
    let rule = FieldRule::Phone;
    // Fewer than 4 digits
    assert_eq!(rule.apply("123"), Err(ValidationError::NotAPhone));
    assert_eq!(rule.apply("1234"), Ok("1234".to_string()));
}

#[test]
fn test_apply_dispatches_id_document() {
    let rule = FieldRule::IdDocument;
    // Success returns the uppercased form
    assert_eq!(rule.apply("ab12345"), Ok("AB12345".to_string()));
    assert_eq!(rule.apply("ab123"), Err(ValidationError::NotValidId));
}

#[test]
fn test_apply_dispatches_password() {
    let rule = FieldRule::Password;
    assert_eq!(rule.apply("abc"), Err(ValidationError::PasswordNotValid));
    assert_eq!(rule.apply("abc12345!"), Ok("abc12345!".to_string()));
}

#[test]
fn test_apply_dispatches_length_rules() {
    let min = FieldRule::MinLength { min: 5 };
    let max = FieldRule::MaxLength { max: 5 };
    assert_eq!(min.apply("abcde"), Ok("abcde".to_string()));
    assert_eq!(
        min.apply("abcd"),
        Err(ValidationError::MinLengthNotSatisfied)
    );
    assert_eq!(max.apply("abcde"), Ok("abcde".to_string()));
    assert_eq!(max.apply("abcdef"), Err(ValidationError::MaxLengthExceeded));
}

#[test]
fn test_rule_names() {
    assert_eq!(FieldRule::Email.name(), "IsEmail");
    assert_eq!(FieldRule::Phone.name(), "IsPhone");
    assert_eq!(FieldRule::IdDocument.name(), "IsIdDocument");
    assert_eq!(FieldRule::NotEmpty.name(), "NotEmpty");
    assert_eq!(FieldRule::Password.name(), "IsPassword");
    assert_eq!(FieldRule::MinLength { min: 1 }.name(), "WithMinLength");
    assert_eq!(FieldRule::MaxLength { max: 1 }.name(), "WithMaxLength");
}

#[test]
fn test_rule_equality_is_structural() {
    assert_eq!(FieldRule::MinLength { min: 3 }, FieldRule::MinLength { min: 3 });
    assert_ne!(FieldRule::MinLength { min: 3 }, FieldRule::MinLength { min: 4 });
    assert_ne!(
        FieldRule::MinLength { min: 3 },
        FieldRule::MaxLength { max: 3 }
    );
}

#[test]
fn test_apply_is_deterministic() {
    let rule = FieldRule::Password;
    let first = rule.apply("abc12345!");
    let second = rule.apply("abc12345!");
    assert_eq!(first, second);
}
