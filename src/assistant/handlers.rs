//! Command handlers.
//!
//! Each handler takes the address book and the command's arguments and
//! returns the reply to show the user. Core failures are returned as
//! `BookError` and turned into messages by the session.

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use crate::services::{format_reminders, upcoming_birthdays};
use chrono::NaiveDate;

/// Reply to a blank input line.
pub const EMPTY_INPUT: &str = "Enter a command.";

/// Reply to a command the assistant does not know.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Reply to `all` when there are no contacts.
pub const EMPTY_BOOK: &str = "Address book is empty";

/// Plain-text usage summary shown by `help`.
pub const HELP_TEXT: &str = "\
add [name] [phone] - add a new contact to an Address book
change [name] [old_phone] [new_phone] - change phone number
delete-phone [name] [phone] - delete phone number from a contact
add-birthday [name] [birthday] - add birthday
phone [name] - show phone numbers
show-birthday [name] - show birthday
birthdays - show upcoming birthdays
delete-contact [name] - delete contact from Address book
all - show all contacts
exit or close - close program and save Address book";

fn arg(args: &[String], index: usize) -> BookResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArgument)
}

fn existing<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

/// `add [name] [phone]`: add a phone, creating the contact if needed.
///
/// A new contact is only filed once its first phone has been accepted.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(record.describe());
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    let reply = record.describe();
    book.add_record(record);
    Ok(reply)
}

/// `change [name] [old_phone] [new_phone]`
pub fn change_phone(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    existing(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Successfully changed".to_string())
}

/// `delete-phone [name] [phone]`
pub fn delete_phone(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let record = existing(book, name)?;
    if record.find_phone(phone).is_none() {
        return Ok(format!(
            "{} contact has no added {} phone number",
            record.name(),
            phone
        ));
    }

    record.remove_phone(phone)?;
    Ok(format!(
        "{} phone number is successfully deleted from {} contact",
        phone,
        record.name()
    ))
}

/// `add-birthday [name] [DD.MM.YYYY]`
pub fn add_birthday(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    let record = existing(book, name)?;
    record.add_birthday(birthday)?;
    Ok(birthday_line(record))
}

/// `show-birthday [name]`
pub fn show_birthday(book: &AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;
    Ok(birthday_line(record))
}

fn birthday_line(record: &Record) -> String {
    format!(
        "Name: {}, Birthday: {}",
        record.name(),
        record.birthday_text()
    )
}

/// `phone [name]`: the contact's phones as a two-column table.
pub fn show_phone(book: &AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;
    Ok(phone_table(record))
}

/// Render a record's phones as a `Name|Phone` table.
///
/// The name column is two characters wider than the longer of the name
/// and the `Name` header.
pub fn phone_table(record: &Record) -> String {
    let name = record.name().as_str();
    let width = name.chars().count().max(4) + 2;

    let mut lines = vec![
        format!("{:<width$}|{:<10}", "Name", "Phone", width = width),
        format!("{}|{}", "-".repeat(width), "-".repeat(10)),
    ];
    lines.extend(
        record
            .phones()
            .iter()
            .map(|phone| format!("{:<width$}|{:<10}", name, phone.as_str(), width = width)),
    );
    lines.join("\n")
}

/// `birthdays`: reminders for the week after `today`.
pub fn show_birthdays(book: &AddressBook, today: NaiveDate) -> String {
    format_reminders(upcoming_birthdays(book, today))
}

/// `all`
pub fn display_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        EMPTY_BOOK.to_string()
    } else {
        book.to_string()
    }
}

/// `delete-contact [name]`
pub fn delete_contact(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let name = arg(args, 0)?;
    book.delete(name)?;
    Ok(format!("{} contact is successfully deleted", name))
}
