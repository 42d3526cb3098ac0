//! Redaction of sensitive values before they reach the logs.
//!
//! Every value written by the call-boundary logger goes through [`Sanitize`].
//! Rendering never fails and never grows unbounded:
//!
//! | Value                              | Rendering                         |
//! |------------------------------------|-----------------------------------|
//! | absent (`None`, unit)              | `null`                            |
//! | gender word (any case)             | `***`                             |
//! | 10+ ASCII digits (phone number)    | `***` + last 4 characters         |
//! | any other string                   | first 2 characters + `****`       |
//! | date                               | `<year>-01-01`                    |
//! | sequence                           | `[a, b, ...]`, items sanitized    |
//! | record declaring its fields        | `{field=value, ...}`              |
//! | anything else                      | display form, cut at 100 chars    |

use chrono::{Datelike, NaiveDate};
use std::fmt::Display;

/// Placeholder for redacted free text
pub const REDACTED: &str = "****";

/// Placeholder for fully masked values
pub const MASKED: &str = "***";

/// Longest display form emitted before truncation
pub const MAX_PLAIN_LEN: usize = 100;

const GENDER_WORDS: [&str; 3] = ["Male", "Female", "Other"];
const PHONE_MIN_DIGITS: usize = 10;

/// A value that can render itself safely for logging.
///
/// Record types implement this by listing their fields through
/// [`sanitize_fields`], so each field is redacted by its own rule.
pub trait Sanitize {
    fn sanitize(&self) -> String;
}

/// Redact a string according to its shape
pub fn sanitize_str(value: &str) -> String {
    if GENDER_WORDS.iter().any(|g| g.eq_ignore_ascii_case(value)) {
        return MASKED.to_string();
    }

    if is_phone_like(value) {
        return mask_phone(value);
    }

    let mut chars = value.chars();
    let prefix: String = chars.by_ref().take(2).collect();
    if chars.next().is_some() {
        format!("{}{}", prefix, REDACTED)
    } else {
        REDACTED.to_string()
    }
}

fn is_phone_like(value: &str) -> bool {
    value.len() >= PHONE_MIN_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

fn mask_phone(phone: &str) -> String {
    // ASCII-only at this point, byte slicing is safe
    let tail = &phone[phone.len().saturating_sub(4)..];
    format!("{}{}", MASKED, tail)
}

/// Cut a display form at [`MAX_PLAIN_LEN`] characters, appending `...` when cut
pub fn truncate(value: &str) -> String {
    match value.char_indices().nth(MAX_PLAIN_LEN) {
        Some((idx, _)) => format!("{}...", &value[..idx]),
        None => value.to_string(),
    }
}

/// Render a value with no sensitive meaning through its display form
pub fn sanitize_display(value: &dyn Display) -> String {
    truncate(&value.to_string())
}

/// Render a list of call arguments as `[a, b, ...]`; no arguments gives `[]`
pub fn sanitize_args(args: &[&dyn Sanitize]) -> String {
    join_list(args.iter().map(|a| a.sanitize()))
}

/// Render declared record fields as `{name=value, ...}`
pub fn sanitize_fields(fields: &[(&str, &dyn Sanitize)]) -> String {
    let body = fields
        .iter()
        .map(|(name, value)| format!("{}={}", name, value.sanitize()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

fn join_list(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

impl Sanitize for str {
    fn sanitize(&self) -> String {
        sanitize_str(self)
    }
}

impl Sanitize for String {
    fn sanitize(&self) -> String {
        sanitize_str(self)
    }
}

impl Sanitize for NaiveDate {
    fn sanitize(&self) -> String {
        format!("{}-01-01", self.year())
    }
}

impl Sanitize for () {
    fn sanitize(&self) -> String {
        "null".to_string()
    }
}

impl<T: Sanitize> Sanitize for Option<T> {
    fn sanitize(&self) -> String {
        match self {
            Some(value) => value.sanitize(),
            None => "null".to_string(),
        }
    }
}

impl<T: Sanitize> Sanitize for [T] {
    fn sanitize(&self) -> String {
        join_list(self.iter().map(Sanitize::sanitize))
    }
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitize(&self) -> String {
        self.as_slice().sanitize()
    }
}

impl<T: Sanitize + ?Sized> Sanitize for &T {
    fn sanitize(&self) -> String {
        (**self).sanitize()
    }
}

macro_rules! sanitize_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sanitize for $ty {
                fn sanitize(&self) -> String {
                    sanitize_display(self)
                }
            }
        )*
    };
}

sanitize_via_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, bool);
