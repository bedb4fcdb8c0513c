//! Tests for the upcoming birthday reminders.
//!
//! "Today" is pinned to Wednesday 2024-01-10 unless a test says otherwise.

use chrono::NaiveDate;
use contact_assistant::services::{format_reminders, upcoming_birthdays, BirthdayReminder};
use contact_assistant::{AddressBook, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn wednesday() -> NaiveDate {
    date(2024, 1, 10)
}

fn book_with(birthdays: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in birthdays {
        let mut record = Record::new(*name);
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

fn reminders(book: &AddressBook, today: NaiveDate) -> Vec<(String, String)> {
    upcoming_birthdays(book, today)
        .map(|r| (r.name.clone(), r.formatted_date()))
        .collect()
}

#[test]
fn test_weekday_birthday_is_not_shifted() {
    let book = book_with(&[("Fri", "12.01.1990")]);
    assert_eq!(
        reminders(&book, wednesday()),
        [("Fri".to_string(), "2024.01.12".to_string())]
    );
}

#[test]
fn test_saturday_birthday_moves_to_monday() {
    let book = book_with(&[("Sat", "13.01.1990")]);
    assert_eq!(
        reminders(&book, wednesday()),
        [("Sat".to_string(), "2024.01.15".to_string())]
    );
}

#[test]
fn test_sunday_birthday_moves_to_monday() {
    let book = book_with(&[("Sun", "14.01.1990")]);
    assert_eq!(
        reminders(&book, wednesday()),
        [("Sun".to_string(), "2024.01.15".to_string())]
    );
}

#[test]
fn test_today_past_and_far_birthdays_are_excluded() {
    let book = book_with(&[
        ("Today", "10.01.1985"),
        ("Yesterday", "09.01.1985"),
        ("LastSummer", "15.06.1985"),
        ("EightDays", "18.01.1985"),
    ]);
    assert!(reminders(&book, wednesday()).is_empty());
    assert_eq!(format_reminders(upcoming_birthdays(&book, wednesday())), "");
}

#[test]
fn test_contacts_without_birthday_are_skipped() {
    let mut book = book_with(&[("Fri", "12.01.1990")]);
    let mut no_birthday = Record::new("Nobody");
    no_birthday.add_phone("1111111111").unwrap();
    book.add_record(no_birthday);

    assert_eq!(upcoming_birthdays(&book, wednesday()).count(), 1);
}

#[test]
fn test_results_follow_book_order_not_date_order() {
    let book = book_with(&[
        ("Later", "16.01.1990"),
        ("Sooner", "11.01.1990"),
        ("Middle", "13.01.1990"),
    ]);

    let names: Vec<String> = upcoming_birthdays(&book, wednesday())
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Later", "Sooner", "Middle"]);
}

#[test]
fn test_formatted_reminder_lines() {
    let book = book_with(&[("John", "12.01.1990"), ("Jane", "14.01.1992")]);

    assert_eq!(
        format_reminders(upcoming_birthdays(&book, wednesday())),
        "John should be congratulated at 2024.01.12\n\
         Jane should be congratulated at 2024.01.15"
    );
}

#[test]
fn test_scan_is_restartable() {
    let book = book_with(&[("John", "12.01.1990")]);

    let first: Vec<BirthdayReminder> = upcoming_birthdays(&book, wednesday()).collect();
    let second: Vec<BirthdayReminder> = upcoming_birthdays(&book, wednesday()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_shift_can_cross_month_boundary() {
    // 2024-03-30 is a Saturday
    let book = book_with(&[("Spring", "30.03.1970")]);
    assert_eq!(
        reminders(&book, date(2024, 3, 27)),
        [("Spring".to_string(), "2024.04.01".to_string())]
    );
}

#[test]
fn test_new_year_birthdays_are_not_seen_from_december() {
    let book = book_with(&[("NewYear", "02.01.1990")]);
    assert!(reminders(&book, date(2024, 12, 28)).is_empty());
}

#[test]
fn test_leap_day_birthday_in_non_leap_year() {
    let book = book_with(&[("Leap", "29.02.2000")]);

    // 2025-03-01 is a Saturday, observed on Monday 2025-03-03
    assert_eq!(
        reminders(&book, date(2025, 2, 26)),
        [("Leap".to_string(), "2025.03.03".to_string())]
    );

    // In a leap year the real date is used: 2024-02-29 is a Thursday
    assert_eq!(
        reminders(&book, date(2024, 2, 26)),
        [("Leap".to_string(), "2024.02.29".to_string())]
    );
}
