use thiserror::Error;

pub type CommandResult<T> = Result<T, TokError>;

#[derive(Debug, Error)]
pub enum TokError {
    #[error("unrecognized command `{0}`")]
    UnrecognizedCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_command_names_the_offender() {
        let err = TokError::UnrecognizedCommand("shout".into());
        assert_eq!(err.to_string(), "unrecognized command `shout`");
    }
}
