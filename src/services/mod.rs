//! Application service layer.
//!
//! Services hold the business logic that spans the whole address book
//! rather than a single record.

mod reminder_service;

pub use reminder_service::{
    birthday_in_year, congratulation_date, format_reminders, reminder_for, upcoming_birthdays,
    BirthdayReminder, CONGRATULATION_DATE_FORMAT, REMINDER_WINDOW_DAYS,
};
