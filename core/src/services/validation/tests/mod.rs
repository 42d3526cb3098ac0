
use chrono::NaiveDate;

use crate::domain::entities::user::User;

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference "today" shared by the tests
pub(super) fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub(super) fn valid_user() -> User {
    User::new("testuser", date(2000, 1, 1), "France")
        .with_phone_number("1234567890")
        .with_gender("Male")
}

pub(super) fn message_of(result: crate::errors::DomainResult<()>) -> String {
    match result {
        Err(crate::errors::DomainError::Validation { message }) => message,
        other => panic!("expected validation failure, got {:?}", other),
    }
}
