use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Index failure for the "too large" case.
    pub fn index_too_large(index: i32, count: usize) -> Error {
        Error(
            ErrorKind::IndexOutOfRange {
                message: format!("{index} is larger than {count}"),
            }
            .into(),
        )
    }

    /// Index failure for the "negative" case. Same kind as [`Error::index_too_large`],
    /// distinct message.
    pub fn index_negative(index: i32) -> Error {
        Error(
            ErrorKind::IndexOutOfRange {
                message: format!("index can't be negative: {index}"),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("index out of range: {message}")]
    IndexOutOfRange { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_messages_distinct() {
        let neg = Error::index_negative(-3);
        let big = Error::index_too_large(7, 5);
        assert!(matches!(neg.kind(), ErrorKind::IndexOutOfRange { .. }));
        assert!(matches!(big.kind(), ErrorKind::IndexOutOfRange { .. }));
        assert_ne!(neg.to_string(), big.to_string());
        assert!(neg.to_string().contains("negative"));
        assert!(big.to_string().contains("larger than 5"));
    }

    #[test]
    fn test_invalid_arg_display() {
        let err = Error::invalid_arg("capacity", "capacity >= 0");
        assert_eq!(
            err.to_string(),
            "invalid argument capacity: capacity >= 0"
        );
        assert!(matches!(
            err.into_kind(),
            ErrorKind::InvalidArgument { name, .. } if name == "capacity"
        ));
    }
}
