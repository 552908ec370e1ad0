//! # Domain Types
//!
//! The result type returned by leaf commands, and argument accessors that produce it.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Outcome of running a leaf command.
pub type CommandResult = Result<(), CommandError>;

/// Errors a leaf command can report back to the dispatcher.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A required positional argument was not supplied.
    #[error("missing argument at position {index}")]
    MissingArgument { index: usize },

    /// A positional argument was supplied but could not be interpreted.
    #[error("invalid argument {value:?} at position {index}: {reason}")]
    InvalidArgument {
        index: usize,
        value: String,
        reason: String,
    },

    /// A user-facing failure; the text is shown to the sender verbatim.
    #[error("{0}")]
    Usage(String),

    /// Something broke that the sender cannot fix. Logged, never shown.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Argument-shape problems get the generic "invalid parameter" reply.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::InvalidArgument { .. }
        )
    }
}

/// Returns the argument at `index` or `MissingArgument`.
pub fn arg(args: &[String], index: usize) -> Result<&str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument { index })
}

/// Parses the argument at `index` into `T`.
pub fn parse_arg<T>(args: &[String], index: usize) -> Result<T, CommandError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = arg(args, index)?;
    value
        .parse::<T>()
        .map_err(|e| CommandError::InvalidArgument {
            index,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arg_present_and_missing() {
        let a = args(&["give", "bob"]);
        assert_eq!(arg(&a, 1).unwrap(), "bob");

        let err = arg(&a, 2).unwrap_err();
        assert!(matches!(err, CommandError::MissingArgument { index: 2 }));
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_parse_arg() {
        let a = args(&["bob", "25", "lots"]);
        assert_eq!(parse_arg::<i64>(&a, 1).unwrap(), 25);

        let err = parse_arg::<i64>(&a, 2).unwrap_err();
        match &err {
            CommandError::InvalidArgument { index, value, .. } => {
                assert_eq!(*index, 2);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_argument_error());
        assert!(matches!(
            parse_arg::<i64>(&a, 3),
            Err(CommandError::MissingArgument { index: 3 })
        ));
    }

    #[test]
    fn test_usage_and_internal_are_not_argument_errors() {
        assert!(!CommandError::usage("no").is_argument_error());
        let internal: CommandError = anyhow::anyhow!("disk on fire").into();
        assert!(!internal.is_argument_error());
        assert_eq!(internal.to_string(), "disk on fire");
    }
}
