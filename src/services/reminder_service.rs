//! Birthday reminder service.
//!
//! Finds the contacts whose birthday falls within the next week and works
//! out the working day on which to congratulate them.

use crate::domain::Birthday;
use crate::models::{AddressBook, Record};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// How many days ahead of today birthdays are reported.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// Format of the congratulation date in reminder lines.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// Name of the contact
    pub name: String,
    /// Birthday this year, moved off the weekend
    pub congratulation_date: NaiveDate,
}

impl BirthdayReminder {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} should be congratulated at {}",
            self.name,
            self.formatted_date()
        )
    }
}

/// The birthday's month and day in `year`.
///
/// A 29 February birthday is observed on 1 March in non-leap years.
pub fn birthday_in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Move a Saturday or Sunday to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Reminder for one record, if its birthday is 1 to 7 days after `today`.
///
/// Only this calendar year's occurrence is considered.
pub fn reminder_for(record: &Record, today: NaiveDate) -> Option<BirthdayReminder> {
    let birthday = record.birthday()?;
    let this_year = birthday_in_year(birthday, today.year())?;

    let days_ahead = (this_year - today).num_days();
    if !(1..=REMINDER_WINDOW_DAYS).contains(&days_ahead) {
        return None;
    }

    Some(BirthdayReminder {
        name: record.name().to_string(),
        congratulation_date: congratulation_date(this_year),
    })
}

/// Lazily yield the upcoming birthday reminders, in address book order.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
) -> impl Iterator<Item = BirthdayReminder> + '_ {
    book.iter().filter_map(move |record| reminder_for(record, today))
}

/// One line per reminder; empty string when there are none.
pub fn format_reminders<I>(reminders: I) -> String
where
    I: IntoIterator<Item = BirthdayReminder>,
{
    reminders
        .into_iter()
        .map(|reminder| reminder.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
