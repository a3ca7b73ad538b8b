use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    MissingArgument,
    InvalidTypeHint,
    InvalidArray,
    InvalidValue,
    TypeConversionFailed,
    SerializationFailed,
    Io,
}

impl ErrorKind {
    /// Fallback text for errors built without a message.
    pub fn summary(self) -> &'static str {
        match self {
            ErrorKind::Internal => "internal error",
            ErrorKind::Usage => "usage error",
            ErrorKind::MissingArgument => "missing argument",
            ErrorKind::InvalidTypeHint => "invalid --type",
            ErrorKind::InvalidArray => "invalid --array",
            ErrorKind::InvalidValue => "invalid --value",
            ErrorKind::TypeConversionFailed => "type conversion failed",
            ErrorKind::SerializationFailed => "serialization failed",
            ErrorKind::Io => "i/o error",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    hint: Option<String>,
    input: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            hint: None,
            input: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Raw argument text that triggered the failure, when it helps diagnosis.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::MissingArgument => 3,
        ErrorKind::InvalidTypeHint => 4,
        ErrorKind::InvalidArray => 5,
        ErrorKind::InvalidValue => 6,
        ErrorKind::TypeConversionFailed => 7,
        ErrorKind::SerializationFailed => 8,
        ErrorKind::Io => 9,
    }
}
