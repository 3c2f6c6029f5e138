//! Example walking integer division through the outcome container.

use std::io::{self, Write};

use outcome::{MessageError, Outcome};

/// Divides `dividend` by `divisor`, refusing the undefined case.
fn checked_division(dividend: i64, divisor: i64) -> Outcome<i64, MessageError> {
    if divisor == 0 {
        Outcome::failure(MessageError::new(format!(
            "{dividend} cannot be divided by zero"
        )))
    } else {
        Outcome::success(dividend / divisor)
    }
}

fn main() -> Result<(), String> {
    let mut stdout = io::stdout().lock();
    for (dividend, divisor) in [(84, 2), (1, 0)] {
        let line = match &checked_division(dividend, divisor) {
            Outcome::Success(quotient) => format!("{dividend} / {divisor} = {quotient}"),
            Outcome::Failure(error) => format!("{dividend} / {divisor} failed: {error}"),
        };
        writeln!(stdout, "{line}").map_err(|err| err.to_string())?;
    }
    Ok(())
}
