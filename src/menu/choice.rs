//! Menu answers

/// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Insert,
    Search,
    Exit,
}

impl MainChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MainChoice::Insert),
            "2" => Some(MainChoice::Search),
            "3" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

/// Action on a found student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    Edit,
    Remove,
    Back,
}

impl ResultAction {
    /// Case-insensitive `E` / `R` / `V`
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_uppercase().as_str() {
            "E" => Some(ResultAction::Edit),
            "R" => Some(ResultAction::Remove),
            "V" => Some(ResultAction::Back),
            _ => None,
        }
    }
}
