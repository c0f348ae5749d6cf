use crate::core::ops;
use crate::domain::model::MenuChoice;
use crate::domain::ports::Console;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation;

const MENU: &[&str] = &[
    "",
    "======= MENU =======",
    "1. Calculate Factorial",
    "2. Check Prime Numbers",
    "3. Reverse a String",
    "4. Exit",
    "====================",
];

const GOODBYE: &str = "Exiting the program. Goodbye!";

/// Read-validate-dispatch loop over a [`Console`].
///
/// Every input error is reported on the console and recovered within the
/// same iteration; only I/O failures on the console itself propagate.
pub struct MenuEngine<C: Console> {
    console: C,
}

impl<C: Console> MenuEngine<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            for line in MENU {
                self.console.print(line)?;
            }
            let Some(choice_line) = self.console.prompt("Please select an option (1-4): ")?
            else {
                tracing::debug!("input stream closed, leaving menu loop");
                self.console.print(GOODBYE)?;
                return Ok(());
            };

            match choice_line.parse::<MenuChoice>() {
                Ok(MenuChoice::Factorial) => self.run_factorial()?,
                Ok(MenuChoice::Prime) => self.run_prime()?,
                Ok(MenuChoice::Reverse) => self.run_reverse()?,
                Ok(MenuChoice::Exit) => {
                    tracing::debug!("exit selected");
                    self.console.print(GOODBYE)?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(input = %choice_line.trim(), "invalid menu choice");
                    self.console.print(&e.user_friendly_message())?;
                }
            }
        }
    }

    fn run_factorial(&mut self) -> Result<()> {
        let Some(line) = self.console.prompt("Enter a non-negative integer: ")? else {
            return Ok(());
        };
        let n = match validation::parse_integer("factorial input", &line)
            .and_then(|v| validation::validate_non_negative("factorial input", v))
        {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(input = %line.trim(), "rejected factorial input: {}", e);
                return self.console.print(&e.user_friendly_message());
            }
        };

        match ops::factorial(n) {
            Some(result) => {
                tracing::debug!(n, "computed factorial");
                self.console
                    .print(&format!("The factorial of {} is {}.", n, result))
            }
            None => {
                let e = CalcError::FactorialOverflow { n };
                tracing::debug!(n, "factorial overflow");
                self.console.print(&e.user_friendly_message())
            }
        }
    }

    fn run_prime(&mut self) -> Result<()> {
        let Some(line) = self.console.prompt("Enter an integer: ")? else {
            return Ok(());
        };
        match validation::parse_integer("primality input", &line) {
            Ok(num) => {
                let prime = ops::is_prime(num);
                tracing::debug!(num, prime, "checked primality");
                if prime {
                    self.console.print(&format!("{} is a prime number.", num))
                } else {
                    self.console
                        .print(&format!("{} is not a prime number.", num))
                }
            }
            Err(e) => {
                tracing::debug!(input = %line.trim(), "rejected primality input: {}", e);
                self.console.print(&e.user_friendly_message())
            }
        }
    }

    fn run_reverse(&mut self) -> Result<()> {
        let Some(line) = self.console.prompt("Enter a string: ")? else {
            return Ok(());
        };
        self.console
            .print(&format!("The reversed string is: '{}'.", ops::reverse(&line)))
    }
}
