use crate::error::CommandResult;

pub const GREETING: &str = "Hello, world!";

/// Returns the greeting message.
pub fn message() -> CommandResult<&'static str> {
    Ok(GREETING)
}
