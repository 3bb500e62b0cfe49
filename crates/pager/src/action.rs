use std::fmt;
use std::str::FromStr;

use pagination::PaginationState;

/// A navigation step applied to the pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    First,
    Last,
    GoTo(u32),
    Size(u32),
    Total(u64),
}

impl Action {
    /// Applies the step, returning whether the state changed.
    pub fn apply(self, state: &mut PaginationState) -> bool {
        match self {
            Self::Next => state.next_page(),
            Self::Prev => state.prev_page(),
            Self::First => state.first_page(),
            Self::Last => state.last_page(),
            Self::GoTo(page) => state.go_to_page(page),
            Self::Size(size) => state.change_page_size(size),
            Self::Total(total) => {
                let changed = state.total() != total;
                state.set_total(total);
                changed
            }
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let (name, argument) = match normalized.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (normalized.as_str(), None),
        };

        match (name, argument) {
            ("next", None) => Ok(Self::Next),
            ("prev", None) => Ok(Self::Prev),
            ("first", None) => Ok(Self::First),
            ("last", None) => Ok(Self::Last),
            ("goto", Some(page)) => parse_number(page, s).map(Self::GoTo),
            ("size", Some(size)) => parse_number(size, s).map(Self::Size),
            ("total", Some(total)) => parse_number(total, s).map(Self::Total),
            _ => Err(format!(
                "Unknown action '{}'. Expected next, prev, first, last, goto:N, size:N or total:N",
                s
            )),
        }
    }
}

fn parse_number<N: FromStr>(value: &str, action: &str) -> Result<N, String> {
    value
        .parse()
        .map_err(|_| format!("Action '{}' needs a non-negative number", action))
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Prev => write!(f, "prev"),
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
            Self::GoTo(page) => write!(f, "goto:{}", page),
            Self::Size(size) => write!(f, "size:{}", size),
            Self::Total(total) => write!(f, "total:{}", total),
        }
    }
}
