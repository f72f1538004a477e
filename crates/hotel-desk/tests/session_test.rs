use hotel_desk::config::DeskConfig;
use hotel_desk::lifecycle::HotelSystem;
use hotel_desk::session::menu::MANAGER_MENU;
use hotel_desk::session::{Session, SessionOutcome};
use tempfile::{tempdir, TempDir};

struct Transcript {
    outcome: SessionOutcome,
    out: String,
    err: String,
}

async fn run_with(config: DeskConfig, script: &str) -> Transcript {
    let system = HotelSystem::new(&config);
    let mut session = Session::new(
        &system,
        config.room_count,
        script.as_bytes(),
        Vec::new(),
        Vec::new(),
    );
    let outcome = session.run().await.unwrap();
    let (out, err) = session.into_writers();
    system.shutdown().await.unwrap();

    Transcript {
        outcome,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

async fn run(dir: &TempDir, script: &str) -> Transcript {
    run_with(DeskConfig::default().with_data_dir(dir.path()), script).await
}

fn with_manager() -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("managers.txt"), "mgr pw123\n").unwrap();
    dir
}

#[tokio::test]
async fn test_sign_up_then_log_in_then_exit() {
    let dir = tempdir().unwrap();

    let transcript = run(&dir, "1\nmgr\npw123\nmgr pw123\n6\n").await;

    assert_eq!(transcript.outcome, SessionOutcome::Exited);
    assert_eq!(transcript.outcome.exit_code(), 0);
    assert_eq!(
        transcript.out,
        format!(
            "1. Sign Up\n2. Log In\nChoose an option: \
             Enter new username: Enter new password: \
             Sign-up successful! Please log in.\n\
             Enter username: Enter password: \
             Login successful!\n\
             {MANAGER_MENU}Exiting program...\n"
        )
    );
    assert!(transcript.err.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("managers.txt")).unwrap(),
        "mgr pw123\n"
    );
}

#[tokio::test]
async fn test_wrong_password_fails_with_status_one() {
    let dir = with_manager();

    let transcript = run(&dir, "2\nmgr wrong\n6\n").await;

    assert_eq!(transcript.outcome, SessionOutcome::LoginFailed);
    assert_eq!(transcript.outcome.exit_code(), 1);
    assert_eq!(transcript.err, "Login failed. Invalid credentials.\n");
    assert!(!transcript.out.contains("Manager Menu:"));
}

#[tokio::test]
async fn test_log_in_without_any_registration_fails() {
    let dir = tempdir().unwrap();

    let transcript = run(&dir, "2 mgr pw123").await;

    assert_eq!(transcript.outcome, SessionOutcome::LoginFailed);
    assert_eq!(transcript.err, "Login failed. Invalid credentials.\n");
}

#[tokio::test]
async fn test_non_numeric_start_choice_goes_to_login() {
    let dir = with_manager();

    let transcript = run(&dir, "login mgr pw123 6").await;

    assert_eq!(transcript.outcome, SessionOutcome::Exited);
    assert!(!transcript.out.contains("Enter new username: "));
    assert!(transcript.out.contains("Login successful!\n"));
}

#[tokio::test]
async fn test_input_ending_during_login_is_a_failed_login() {
    let dir = with_manager();

    assert_eq!(run(&dir, "").await.outcome, SessionOutcome::LoginFailed);
    assert_eq!(run(&dir, "2\nmgr\n").await.outcome, SessionOutcome::LoginFailed);
    assert_eq!(run(&dir, "1\nnew\n").await.outcome, SessionOutcome::LoginFailed);
}

#[tokio::test]
async fn test_input_ending_at_the_menu_ends_cleanly() {
    let dir = with_manager();

    let transcript = run(&dir, "2 mgr pw123\n").await;

    assert_eq!(transcript.outcome, SessionOutcome::EndOfInput);
    assert_eq!(transcript.outcome.exit_code(), 0);
    assert!(transcript.out.ends_with(MANAGER_MENU));
}

#[tokio::test]
async fn test_manage_roster_through_the_menu() {
    let dir = with_manager();

    let transcript = run(
        &dir,
        "2 mgr pw123\n\
         1 Alice 1 Receptionist\n\
         1 Bob 2 Chef\n\
         5\n\
         2 Ali\n\
         5\n\
         6\n",
    )
    .await;

    assert_eq!(transcript.outcome, SessionOutcome::Exited);
    assert!(transcript.err.is_empty());
    assert_eq!(transcript.out.matches("Employee added successfully.\n").count(), 2);
    assert!(transcript.out.contains(
        "\nAll Employees:\n\
         Name: Alice, ID: 1, Role: Receptionist\n\
         Name: Bob, ID: 2, Role: Chef\n"
    ));
    assert!(transcript.out.contains(&format!(
        "Employee deleted successfully.\n{MANAGER_MENU}\nAll Employees:\nName: Bob, ID: 2, Role: Chef\n{MANAGER_MENU}"
    )));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("employees.txt")).unwrap(),
        "Bob 2 Chef\n"
    );
}

#[tokio::test]
async fn test_delete_is_confirmed_even_without_a_match() {
    let dir = with_manager();

    let transcript = run(&dir, "2 mgr pw123 2 Nobody 6").await;

    assert!(transcript.out.contains("Enter Employee Name to Delete: Employee deleted successfully.\n"));
}

#[tokio::test]
async fn test_invalid_employee_id_returns_to_menu() {
    let dir = with_manager();

    let transcript = run(&dir, "2 mgr pw123 1 Dana seven 5 6").await;

    assert_eq!(transcript.outcome, SessionOutcome::Exited);
    assert!(transcript.out.contains("Enter Employee ID: Invalid employee ID.\n"));
    assert!(!transcript.out.contains("Enter Employee Role"));
    assert!(transcript.out.contains("\nAll Employees:\n\nManager Menu:"));
    assert!(!dir.path().join("employees.txt").exists());
}

#[tokio::test]
async fn test_food_stock_rooms_and_invalid_choices() {
    let dir = with_manager();

    let transcript = run(&dir, "2 mgr pw123 3 4 9 abc 6").await;

    assert!(transcript.out.contains(
        "\nFood Stock:\n\
         Food Items:\n\
         Category: Fast Food, Name: Burger, Price: $5.99\n\
         Drink Items:\n\
         Type: Soda, Name: Coke, Price: $1.99\n"
    ));
    assert!(transcript.out.contains("Number of rooms: 10\n"));
    assert_eq!(
        transcript
            .out
            .matches("Invalid choice. Please enter a valid option.\n")
            .count(),
        2
    );
}

#[tokio::test]
async fn test_room_count_comes_from_configuration() {
    let dir = with_manager();
    let config = DeskConfig::default()
        .with_data_dir(dir.path())
        .with_room_count(3);

    let transcript = run_with(config, "2 mgr pw123 4 6").await;

    assert!(transcript.out.contains("Number of rooms: 3\n"));
}

#[tokio::test]
async fn test_store_fault_is_reported_and_menu_continues() {
    let dir = with_manager();
    // A directory where the roster file should be makes every write fail.
    std::fs::create_dir(dir.path().join("employees.txt")).unwrap();

    let transcript = run(&dir, "2 mgr pw123 1 Eve 4 Chef 2 Eve 6").await;

    assert_eq!(transcript.outcome, SessionOutcome::Exited);
    let errors: Vec<&str> = transcript.err.lines().collect();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Error: Roster storage error: cannot write"));
    assert!(errors[1].starts_with("Error: Roster storage error: cannot read"));
    assert!(!transcript.out.contains("Employee added successfully."));
    assert!(transcript.out.ends_with("Exiting program...\n"));
}
