//! Construction and mutation tests for BaseUser and User.

use serde_json::json;

use user_domain::{BaseUser, DomainError, User};

fn valid_user(age: i64, password: &str) -> User {
    User::from_value(&json!({
        "email": "a@b.com",
        "first_name": "ivan",
        "last_name": "petrov",
        "password": password,
        "age": age,
    }))
    .unwrap()
}

#[test]
fn test_baseuser_names_are_capitalized() {
    for (first_name, last_name) in [("petya", "ivanov"), ("Petya", "Ivanov"), ("PETYA", "IVANOV")] {
        let user = BaseUser::from_value(&json!({
            "email": "a@b.com",
            "first_name": first_name,
            "last_name": last_name,
        }))
        .unwrap();

        assert_eq!(user.first_name(), "Petya");
        assert_eq!(user.last_name(), "Ivanov");
    }
}

#[test]
fn test_baseuser_rejects_blank_names() {
    for first_name in ["", "   "] {
        let result = BaseUser::from_value(&json!({
            "email": "a@b.com",
            "first_name": first_name,
            "last_name": "Ivanov",
        }));

        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(err.field(), "first_name");
    }
}

#[test]
fn test_baseuser_rejects_invalid_email() {
    let result = BaseUser::from_value(&json!({
        "email": "invalid-email",
        "first_name": "Petya",
        "last_name": "Ivanov",
    }));

    assert_eq!(result.unwrap_err().field(), "email");
}

#[test]
fn test_baseuser_rejects_undeclared_field() {
    let result = BaseUser::from_value(&json!({
        "email": "a@b.com",
        "first_name": "Petya",
        "last_name": "Ivanov",
        "extra": "x",
    }));

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Schema { kind: "BaseUser", .. }
    ));
}

#[test]
fn test_baseuser_rejects_missing_field() {
    let result = BaseUser::from_value(&json!({
        "email": "a@b.com",
        "first_name": "Petya",
    }));

    let err = result.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(err.field(), "last_name");
}

#[test]
fn test_baseuser_rejects_non_object_input() {
    assert!(BaseUser::from_value(&json!("not an object")).is_err());
    assert!(BaseUser::from_value(&json!(null)).is_err());
}

#[test]
fn test_user_accepts_strong_passwords() {
    for password in ["Abcdef1!", "Password123!"] {
        let user = valid_user(25, password);
        // Stored verbatim, no hashing or normalization
        assert_eq!(user.password(), password);
    }
}

#[test]
fn test_user_rejects_weak_passwords() {
    for password in [
        "Abcdefgh!", // no digit
        "Abcd1234",  // no special character
        "A1!",       // too short
    ] {
        let result = User::from_value(&json!({
            "email": "a@b.com",
            "first_name": "Ivan",
            "last_name": "Petrov",
            "password": password,
            "age": 25,
        }));

        assert_eq!(result.unwrap_err().field(), "password");
    }
}

#[test]
fn test_user_accepts_adult_ages() {
    for age in [18, 19, 25] {
        assert_eq!(valid_user(age, "Abcd1234!").age(), age);
    }
}

#[test]
fn test_user_rejects_underage_values() {
    for age in [17, 0, -5] {
        let result = User::from_value(&json!({
            "email": "a@b.com",
            "first_name": "Ivan",
            "last_name": "Petrov",
            "password": "Abcd1234!",
            "age": age,
        }));

        assert_eq!(result.unwrap_err().field(), "age");
    }
}

#[test]
fn test_user_rejects_non_integer_age() {
    for age in [json!(21.5), json!("25"), json!(true)] {
        let result = User::from_value(&json!({
            "email": "a@b.com",
            "first_name": "Ivan",
            "last_name": "Petrov",
            "password": "Abcd1234!",
            "age": age,
        }));

        assert_eq!(result.unwrap_err().field(), "age");
    }
}

#[test]
fn test_failed_age_assignment_keeps_previous_value() {
    let mut user = valid_user(25, "Abcd1234!");

    assert!(user.set_age(17).is_err());
    assert_eq!(user.age(), 25);
}

#[test]
fn test_failed_name_assignment_keeps_previous_value() {
    let mut user = valid_user(25, "Abcd1234!");

    assert!(user.set_first_name("   ").is_err());
    assert_eq!(user.first_name(), "Ivan");
}

#[test]
fn test_assignment_reruns_normalization() {
    let mut user = valid_user(25, "Abcd1234!");

    user.set_first_name("  maria  ").unwrap();
    assert_eq!(user.first_name(), "Maria");

    user.set_age(30).unwrap();
    assert_eq!(user.age(), 30);

    user.set_password("NewPass99!").unwrap();
    assert_eq!(user.password(), "NewPass99!");

    assert!(user.set_email("not-an-email").is_err());
    assert_eq!(user.email(), "a@b.com");
}

#[test]
fn test_user_serialization_skips_password() {
    let user = valid_user(25, "Abcd1234!");
    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["first_name"], "Ivan");
    assert_eq!(value["age"], 25);
    assert!(value.get("password").is_none());
}
