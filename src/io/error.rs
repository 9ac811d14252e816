//! Error types and context management for command processing

use std::fmt;
use std::path::PathBuf;

/// Main error type for the command adapter
///
/// The plane itself never fails; every variant here describes input that was
/// rejected before reaching it, or a failure of the surrounding I/O.
#[derive(Debug)]
pub enum InterpreterError {
    /// First token of a line is not a known command
    UnknownCommand {
        /// The unrecognized token
        name: String,
    },

    /// A command ended before one of its required arguments
    MissingArgument {
        /// Command being parsed
        command: &'static str,
        /// Name of the absent argument
        argument: &'static str,
    },

    /// An argument that must be an integer could not be parsed
    InvalidInteger {
        /// Name of the argument
        argument: &'static str,
        /// Text that failed to parse
        value: String,
    },

    /// An argument parsed but is outside its allowed range
    InvalidParameter {
        /// Name of the argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A path token is not one of the eight direction tokens
    UnknownDirection {
        /// The unrecognized token
        token: String,
    },

    /// A command received more arguments than it takes
    UnexpectedArgument {
        /// Command being parsed
        command: &'static str,
        /// First surplus token
        token: String,
    },

    /// Another error located at a script line
    AtLine {
        /// 1-based line number
        line: usize,
        /// The underlying error
        source: Box<InterpreterError>,
    },

    /// Reading the script or writing output failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { name } => write!(f, "Unknown command '{name}'"),
            Self::MissingArgument { command, argument } => {
                write!(f, "Command '{command}' is missing argument '{argument}'")
            }
            Self::InvalidInteger { argument, value } => {
                write!(f, "Argument '{argument}' = '{value}' is not an integer")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownDirection { token } => {
                write!(f, "Unknown direction '{token}'")
            }
            Self::UnexpectedArgument { command, token } => {
                write!(f, "Command '{command}' got unexpected argument '{token}'")
            }
            Self::AtLine { line, source } => write!(f, "Line {line}: {source}"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for InterpreterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AtLine { source, .. } => Some(source.as_ref()),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl InterpreterError {
    /// Whether this error comes from malformed input rather than I/O
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Self::AtLine { source, .. } => source.is_malformed_input(),
            Self::FileSystem { .. } => false,
            _ => true,
        }
    }
}

/// Convenience type alias for adapter results
pub type Result<T> = std::result::Result<T, InterpreterError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script line being processed
    pub line: Option<usize>,
    /// Path of the script or output involved
    pub path: Option<PathBuf>,
}

/// Enriches errors with the position in the script
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the line number
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped with its line
    fn at_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<InterpreterError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file system errors carry a path worth replacing
            if let (InterpreterError::FileSystem { path, .. }, Some(known)) =
                (&mut error, context.path)
            {
                *path = known;
            }
            match context.line {
                Some(line) => InterpreterError::AtLine {
                    line,
                    source: Box::new(error),
                },
                None => error,
            }
        })
    }

    fn at_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for InterpreterError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> InterpreterError {
    InterpreterError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> InterpreterError {
    InterpreterError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
