use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("invalid integer for {field}: {input:?}")]
    InvalidInteger { field: String, input: String },

    #[error("negative value for {field}: {value}")]
    NegativeInput { field: String, value: i64 },

    #[error("factorial of {n} does not fit in 128 bits")]
    FactorialOverflow { n: u64 },

    #[error("invalid menu choice: {input:?}")]
    InvalidChoice { input: String },

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    /// Message shown to the user at the prompt. Input errors keep the
    /// wording the menu has always used.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInteger { .. } => {
                "Invalid input! Please enter an integer.".to_string()
            }
            CalcError::NegativeInput { .. } => {
                "Invalid input! Please enter a non-negative integer.".to_string()
            }
            CalcError::FactorialOverflow { n } => {
                format!("The factorial of {} is too large to represent.", n)
            }
            CalcError::InvalidChoice { .. } => {
                "Invalid choice! Please select a valid option (1-4).".to_string()
            }
            CalcError::Io(e) => format!("Console I/O failed: {}", e),
            CalcError::ConfigError { message } => format!("Configuration error: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::InvalidInteger { .. } => {
                "Enter digits only, with an optional leading minus sign".to_string()
            }
            CalcError::NegativeInput { .. } => "Enter 0 or a positive integer".to_string(),
            CalcError::FactorialOverflow { .. } => "Enter a value of 34 or less".to_string(),
            CalcError::InvalidChoice { .. } => "Enter a number between 1 and 4".to_string(),
            CalcError::Io(_) => "Check that stdin/stdout are connected to a terminal".to_string(),
            CalcError::ConfigError { .. } => "Check the command-line flags".to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InvalidInteger { .. }
            | CalcError::NegativeInput { .. }
            | CalcError::FactorialOverflow { .. }
            | CalcError::InvalidChoice { .. } => ErrorSeverity::Low,
            CalcError::Io(_) => ErrorSeverity::High,
            CalcError::ConfigError { .. } => ErrorSeverity::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let e = CalcError::InvalidInteger {
            field: "factorial input".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(e.severity(), ErrorSeverity::Low);
        assert_eq!(e.user_friendly_message(), "Invalid input! Please enter an integer.");
    }

    #[test]
    fn test_io_errors_are_high_severity() {
        let e = CalcError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(e.severity(), ErrorSeverity::High);
    }
}
