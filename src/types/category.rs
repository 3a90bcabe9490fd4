use crate::types::errors::ParseError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The closed set of categories a transaction can be filed under.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Category {
    Salary,
    Groceries,
    Utilities,
    Rent,
    Transport,
    Dining,
    Shopping,
    Health,
    Entertainment
}

impl Category {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [Category; 9] = [
        Category::Salary,
        Category::Groceries,
        Category::Utilities,
        Category::Rent,
        Category::Transport,
        Category::Dining,
        Category::Shopping,
        Category::Health,
        Category::Entertainment
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent",
            Category::Transport => "Transport",
            Category::Dining => "Dining",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment"
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        Category::ALL.iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseError::UnknownCategory(value.to_string()))
    }
}
