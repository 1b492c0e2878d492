//! Main menu choices

use std::fmt;

/// An entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    ViewAccount,
    Deposit,
    Withdraw,
    DeleteAccount,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::CreateAccount,
        MenuChoice::ViewAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::DeleteAccount,
        MenuChoice::Exit,
    ];

    /// Parse operator input, `None` for anything that is not a menu number
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateAccount),
            "2" => Some(MenuChoice::ViewAccount),
            "3" => Some(MenuChoice::Deposit),
            "4" => Some(MenuChoice::Withdraw),
            "5" => Some(MenuChoice::DeleteAccount),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::CreateAccount => 1,
            MenuChoice::ViewAccount => 2,
            MenuChoice::Deposit => 3,
            MenuChoice::Withdraw => 4,
            MenuChoice::DeleteAccount => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create a Bank Account",
            MenuChoice::ViewAccount => "See your Bank Account Information",
            MenuChoice::Deposit => "Deposit Money",
            MenuChoice::Withdraw => "Withdraw Money",
            MenuChoice::DeleteAccount => "Delete Bank Account",
            MenuChoice::Exit => "Exit App",
        }
    }

    /// Full menu text
    pub fn render_menu() -> String {
        let mut menu = String::from("Choose an Option\n\n");
        for choice in MenuChoice::ALL {
            menu.push_str(&format!("{choice}\n"));
        }
        menu
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::create("1", MenuChoice::CreateAccount)]
    #[case::view("2", MenuChoice::ViewAccount)]
    #[case::deposit("3", MenuChoice::Deposit)]
    #[case::withdraw("4", MenuChoice::Withdraw)]
    #[case::delete("5", MenuChoice::DeleteAccount)]
    #[case::exit(" 6 ", MenuChoice::Exit)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(MenuChoice::parse(input), Some(expected));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::seven("7")]
    #[case::word("exit")]
    #[case::empty("")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_eq!(MenuChoice::parse(input), None);
    }

    #[test]
    fn test_numbers_round_trip_through_parse() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_render_menu_lists_entries_in_order() {
        let menu = MenuChoice::render_menu();
        let lines: Vec<&str> = menu.lines().skip(2).collect();

        assert_eq!(lines[0], "1. Create a Bank Account");
        assert_eq!(lines[5], "6. Exit App");
        assert_eq!(lines.len(), 6);
    }
}
