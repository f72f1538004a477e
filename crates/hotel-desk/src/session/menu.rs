//! Prompts and choice parsing for the console session.

pub const START_PROMPT: &str = "1. Sign Up\n2. Log In\nChoose an option: ";

pub const MANAGER_MENU: &str = "\nManager Menu:\n\
                                1. Add Employee\n\
                                2. Delete Employee\n\
                                3. Check Food Stock\n\
                                4. Check Number of Rooms\n\
                                5. View All Employees\n\
                                6. Exit\n\
                                Enter your choice: ";

/// What to do before logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    SignUp,
    LogIn,
}

impl StartChoice {
    /// `1` signs up first; anything else goes straight to login.
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(1) => StartChoice::SignUp,
            _ => StartChoice::LogIn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    DeleteEmployee,
    FoodStock,
    RoomCount,
    ListEmployees,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(1) => MenuChoice::AddEmployee,
            Ok(2) => MenuChoice::DeleteEmployee,
            Ok(3) => MenuChoice::FoodStock,
            Ok(4) => MenuChoice::RoomCount,
            Ok(5) => MenuChoice::ListEmployees,
            Ok(6) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_means_sign_up() {
        assert_eq!(StartChoice::parse("1"), StartChoice::SignUp);
        assert_eq!(StartChoice::parse("2"), StartChoice::LogIn);
        assert_eq!(StartChoice::parse("7"), StartChoice::LogIn);
        assert_eq!(StartChoice::parse("abc"), StartChoice::LogIn);
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::AddEmployee);
        assert_eq!(MenuChoice::parse("+3"), MenuChoice::FoodStock);
        assert_eq!(MenuChoice::parse("6"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("six"), MenuChoice::Invalid);
    }

    #[test]
    fn test_menu_lists_six_entries() {
        assert!(MANAGER_MENU.starts_with("\nManager Menu:\n1. Add Employee\n"));
        assert!(MANAGER_MENU.ends_with("6. Exit\nEnter your choice: "));
    }
}
