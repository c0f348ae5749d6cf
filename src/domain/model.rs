use crate::utils::error::CalcError;
use std::str::FromStr;

/// One of the four actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Factorial,
    Prime,
    Reverse,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Factorial),
            "2" => Ok(MenuChoice::Prime),
            "3" => Ok(MenuChoice::Reverse),
            "4" => Ok(MenuChoice::Exit),
            other => Err(CalcError::InvalidChoice {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Factorial);
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::Prime);
        assert_eq!("3".parse::<MenuChoice>().unwrap(), MenuChoice::Reverse);
        assert_eq!(" 4 ".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!("5".parse::<MenuChoice>().is_err());
        assert!("one".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }
}
