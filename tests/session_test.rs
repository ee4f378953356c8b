use event_reservations::core::session::{CANCEL_PROMPT, CHOICE_PROMPT, RESERVE_PROMPT};
use event_reservations::{
    Event, LineTerminal, ReservationError, ReservationSession, SessionEnd, Settings,
};
use std::io::Cursor;

fn settings_with_capacity(capacity: u64) -> Settings {
    Settings {
        capacity: Some(capacity),
        ..Default::default()
    }
}

fn run_script(settings: &Settings, script: &str) -> (SessionEnd, Event, String) {
    let terminal = LineTerminal::new(Cursor::new(script.to_string()), Vec::new());
    let mut session = ReservationSession::setup(terminal, settings).unwrap();
    let end = session.run().unwrap();
    let event = session.event().clone();
    let output = String::from_utf8(session.into_terminal().into_output()).unwrap();
    (end, event, output)
}

#[test]
fn test_reserve_reject_and_cancel_walkthrough() {
    // capacity 10; reserve 5; try 6, 0 and "abc" before settling on 1; cancel 3
    let script = "10\n2\n5\n2\n6\n0\nabc\n1\n3\n3\n1\n4\n";
    let (end, event, output) = run_script(&Settings::default(), script);

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(event.capacity(), 10);
    assert_eq!(event.reserved(), 3);
    assert_eq!(event.available(), 7);

    assert!(output.contains("Event created successfully! Capacity: 10 seats"));
    assert!(output
        .contains("Reservation completed successfully!\n - Reserved: 5\n - Available: 5\n"));
    assert!(output.contains("Requested quantity (6) exceeds the available seats (5)!"));
    assert!(output.contains("Quantity must be greater than zero!"));
    assert!(output.contains("Please enter a valid number!"));
    assert!(output
        .contains("Reservation completed successfully!\n - Reserved: 6\n - Available: 4\n"));
    assert!(output
        .contains("Cancellation completed successfully!\n - Reserved: 3\n - Available: 7\n"));
    assert!(output.contains("The event has 10 seats in total:\n - Reserved: 3\n - Available: 7\n"));
    assert!(output.contains("Thank you for using the Reservation System!\nGoodbye!\n"));
}

#[test]
fn test_exact_transcript_of_a_short_session() {
    let settings = Settings {
        capacity: Some(3),
        rule_width: 20,
        ..Default::default()
    };
    let (end, _, output) = run_script(&settings, "4\n");

    let rule = "-".repeat(20);
    let banner = |title: &str, padding: usize| {
        format!("\n{rule}\n{} {title}\n{rule}\n\n", " ".repeat(padding))
    };
    let section_end = format!("{rule}\n\n\n");

    let mut expected = String::new();
    expected.push_str(&banner("EVENT SETUP", 4));
    expected.push_str("Event created successfully! Capacity: 3 seats\n");
    expected.push_str(&section_end);
    expected.push_str(&banner("MAIN MENU", 5));
    expected.push_str("Available options:\n");
    expected.push_str("  1. View event status\n");
    expected.push_str("  2. Make a reservation\n");
    expected.push_str("  3. Cancel a reservation\n");
    expected.push_str("  4. Exit the system\n");
    expected.push_str(&section_end);
    expected.push_str(CHOICE_PROMPT);
    expected.push_str(&section_end);
    expected.push_str(&banner("SYSTEM FINISHED", 2));
    expected.push_str("Thank you for using the Reservation System!\n");
    expected.push_str("Goodbye!\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(output, expected);
}

#[test]
fn test_sold_out_event_skips_the_quantity_prompt() {
    let (_, event, output) = run_script(&settings_with_capacity(2), "2\n2\n2\n4\n");

    assert_eq!(event.reserved(), 2);
    assert_eq!(output.matches(RESERVE_PROMPT).count(), 1);
    assert!(output.contains("There are no more seats available for the event!"));
}

#[test]
fn test_cancel_without_reservations_is_refused() {
    let (_, event, output) = run_script(&settings_with_capacity(5), "3\n4\n");

    assert_eq!(event.reserved(), 0);
    assert!(!output.contains(CANCEL_PROMPT));
    assert!(output.contains("There are no reservations to cancel!"));
}

#[test]
fn test_cancel_more_than_reserved_reprompts() {
    let settings = Settings {
        capacity: Some(10),
        initial_reserved: 2,
        ..Default::default()
    };
    let (_, event, output) = run_script(&settings, "3\n5\n2\n1\n4\n");

    assert_eq!(event.reserved(), 0);
    assert!(output.contains(" - Reserved: 2\n - Available: 8\n"));
    assert!(output.contains("Requested quantity (5) exceeds the existing reservations (2)!"));
    assert_eq!(output.matches(CANCEL_PROMPT).count(), 2);
    assert!(output.contains("The event has 10 seats in total:\nNo reservations registered yet!\n"));
}

#[test]
fn test_capacity_prompt_rejects_bad_values() {
    let (_, event, output) = run_script(&Settings::default(), "abc\n0\n-3\n8\n4\n");

    assert_eq!(event.capacity(), 8);
    assert_eq!(output.matches("Please enter a valid number!").count(), 1);
    assert_eq!(output.matches("Capacity must be greater than zero!").count(), 2);
}

#[test]
fn test_invalid_menu_choices_reprompt() {
    let (end, _, output) = run_script(&settings_with_capacity(5), "9\nx\n0\n4\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(output.matches("Invalid option! Choose between 1 and 4.").count(), 2);
    assert_eq!(output.matches("Please enter a valid number!").count(), 1);
    assert_eq!(output.matches(CHOICE_PROMPT).count(), 4);
}

#[test]
fn test_status_before_any_reservation() {
    let (_, _, output) = run_script(&settings_with_capacity(7), "1\n4\n");

    assert!(output.contains("EVENT STATUS"));
    assert!(output.contains("The event has 7 seats in total:\nNo reservations registered yet!\n"));
}

#[test]
fn test_input_closing_mid_prompt_ends_session() {
    let (end, event, output) = run_script(&settings_with_capacity(5), "2\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(event.reserved(), 0);
    assert!(output.ends_with(RESERVE_PROMPT));
    assert!(!output.contains("Goodbye!"));
}

#[test]
fn test_non_utf8_quantity_is_reprompted() {
    let mut script = b"2\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"3\n4\n");

    let terminal = LineTerminal::new(Cursor::new(script), Vec::new());
    let mut session = ReservationSession::setup(terminal, &settings_with_capacity(5)).unwrap();
    let end = session.run().unwrap();

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(session.event().reserved(), 3);

    let output = String::from_utf8(session.into_terminal().into_output()).unwrap();
    assert_eq!(output.matches(RESERVE_PROMPT).count(), 2);
    assert!(output.contains(&format!("{RESERVE_PROMPT}Please enter a valid number!\n")));
}

#[test]
fn test_input_closing_during_setup() {
    let terminal = LineTerminal::new(Cursor::new(String::new()), Vec::new());
    let result = ReservationSession::setup(terminal, &Settings::default());

    assert!(matches!(result, Err(ReservationError::InputClosed)));
}

#[test]
fn test_reservations_fill_capacity_exactly() {
    for capacity in 1..=6u64 {
        let mut script = String::new();
        for _ in 0..capacity {
            script.push_str("2\n1\n");
        }
        // one more attempt once full, then leave
        script.push_str("2\n4\n");

        let (_, event, output) = run_script(&settings_with_capacity(capacity), &script);
        assert_eq!(event.reserved(), capacity);
        assert_eq!(event.available(), 0);
        assert_eq!(
            output
                .matches("There are no more seats available for the event!")
                .count(),
            1
        );
    }
}
