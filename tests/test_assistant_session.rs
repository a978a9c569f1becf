//! Full assistant sessions driven through the REPL.

mod common;

use common::fixtures::*;
use contact_book::{run_repl, Assistant, BirthdayPolicy, Config, FixedClock};
use std::io::Cursor;
use std::sync::Arc;

fn run_session(config: Config, today: chrono::NaiveDate, script: &str) -> Vec<String> {
    let mut assistant = Assistant::with_clock(config, Arc::new(FixedClock(today)));
    let mut output = Vec::new();
    run_repl(&mut assistant, Cursor::new(script), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| line.trim_start_matches("Enter a command: ").to_string())
        .collect()
}

#[test]
fn test_full_session() {
    let script = "\
hello
add John 1234567890
add John 5555555555
add-birthday John 16.07.1990
add Jane 9876543210
add-birthday Jane 20.07.1995
all
birthdays
show-birthday Jane
phone Johm
close
";
    let lines = run_session(Config::default(), date(14, 7, 2026), script);

    assert_eq!(
        lines,
        vec![
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Birthday added.",
            "Contact added.",
            "Birthday added.",
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 16.07.1990",
            "Contact name: Jane, phones: 9876543210, birthday: 20.07.1995",
            "John: 16.07.2026",
            "Jane: 20.07.2026",
            "20.07.1995",
            "Contact not found. Did you mean: John?",
            "Good bye!",
        ]
    );
}

#[test]
fn test_errors_do_not_end_the_session() {
    let script = "\
add Bob 12345
add-birthday Bob 01.01.2000
add Bob 0123456789
add-birthday Bob 31.02.2000
change Bob
exit
";
    let lines = run_session(Config::default(), date(1, 1, 2026), script);

    assert_eq!(
        lines,
        vec![
            "Welcome to the assistant bot!",
            "Error: Phone number must be 10 digits",
            "Contact not found.",
            "Contact added.",
            "Error: Invalid date format. Use DD.MM.YYYY",
            "Error: Give me name, old phone and new phone please.",
            "Good bye!",
        ]
    );
}

#[test]
fn test_configured_window_reaches_next_year() {
    let config = Config {
        birthday_policy: BirthdayPolicy {
            window_days: 10,
            wrap_year_end: true,
        },
        ..Config::default()
    };
    let script = "\
add Nadia 1112223333
add-birthday Nadia 05.01.1988
birthdays
";
    let lines = run_session(config, date(28, 12, 2026), script);

    assert_eq!(lines[3], "Nadia: 05.01.2027");
    assert_eq!(lines.last().map(String::as_str), Some("Good bye!"));
}

#[test]
fn test_default_window_ignores_next_year() {
    let script = "\
add Nadia 1112223333
add-birthday Nadia 02.01.1988
birthdays
exit
";
    let lines = run_session(Config::default(), date(28, 12, 2026), script);
    assert_eq!(lines[3], "No upcoming birthdays.");
}
