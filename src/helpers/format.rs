// SPDX-License-Identifier: MPL-2.0
//! Locale-aware date/time formatting and phone number formatting.

use super::validation::digits_only;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use unic_langid::LanguageIdentifier;

/// Date and time field order used by a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateStyle {
    /// `M/D/YYYY`, `h:MM:SS AM`
    UnitedStates,
    /// `DD/MM/YYYY`, `HH:MM:SS`
    DayFirst,
}

impl DateStyle {
    fn for_locale(locale: &LanguageIdentifier) -> Self {
        let is_us = locale.language.as_str() == "en"
            && locale
                .region
                .is_none_or(|region| region.as_str() == "US");
        if is_us {
            DateStyle::UnitedStates
        } else {
            DateStyle::DayFirst
        }
    }
}

/// Formats the time of day of `datetime` for `locale`.
///
/// `pt-BR` gives `14:05:09`, `en-US` gives `2:05:09 PM`.
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>, locale: &LanguageIdentifier) -> String {
    match DateStyle::for_locale(locale) {
        DateStyle::UnitedStates => {
            let (is_pm, hour) = datetime.hour12();
            format!(
                "{hour}:{:02}:{:02} {}",
                datetime.minute(),
                datetime.second(),
                if is_pm { "PM" } else { "AM" }
            )
        }
        DateStyle::DayFirst => format!(
            "{:02}:{:02}:{:02}",
            datetime.hour(),
            datetime.minute(),
            datetime.second()
        ),
    }
}

/// Formats the calendar date of `datetime` for `locale`.
///
/// `pt-BR` gives `05/03/2026`, `en-US` gives `3/5/2026`.
#[must_use]
pub fn format_date<Tz: TimeZone>(datetime: &DateTime<Tz>, locale: &LanguageIdentifier) -> String {
    match DateStyle::for_locale(locale) {
        DateStyle::UnitedStates => format!(
            "{}/{}/{}",
            datetime.month(),
            datetime.day(),
            datetime.year()
        ),
        DateStyle::DayFirst => format!(
            "{:02}/{:02}/{}",
            datetime.day(),
            datetime.month(),
            datetime.year()
        ),
    }
}

/// Current local time of day for `locale`.
#[must_use]
pub fn format_timestamp_now(locale: &LanguageIdentifier) -> String {
    format_timestamp(&Local::now(), locale)
}

/// Current local date for `locale`.
#[must_use]
pub fn format_date_now(locale: &LanguageIdentifier) -> String {
    format_date(&Local::now(), locale)
}

/// Formats a 13-digit number as `+CC (AA) NNNNN-NNNN`.
///
/// Any other input is returned unchanged.
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    let cleaned = digits_only(phone);
    if cleaned.len() != 13 {
        return phone.to_string();
    }
    format!(
        "+{} ({}) {}-{}",
        &cleaned[0..2],
        &cleaned[2..4],
        &cleaned[4..9],
        &cleaned[9..]
    )
}
