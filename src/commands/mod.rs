pub mod greet;

use crate::cli::{Args, Command};
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args) -> CommandResult<&'static str> {
    tracing::debug!(command = ?args.command, "dispatching");
    match args.command {
        Command::Greet => greet::message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_dispatches_to_the_greeting() {
        let args = Args {
            command: Command::Greet,
        };
        let message = execute(&args).expect("dispatch succeeds");
        assert_eq!(message, greet::GREETING);
    }
}
