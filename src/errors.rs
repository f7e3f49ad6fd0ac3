pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised by the typed accessors.
///
/// Both variants carry the variable name. Configuration errors are treated as
/// unrecoverable at startup: callers either propagate them with `?` or match
/// explicitly to make a variable optional.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Env '{0}' was not found.")]
    NotFound(String),
    #[error("Env '{name}' has to be of type {kind}")]
    InvalidType { name: String, kind: String },
}

impl Error {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound(name.to_string())
    }

    pub(crate) fn invalid_type(name: &str, kind: &str) -> Self {
        Self::InvalidType {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Name of the environment variable the error refers to.
    pub fn env(&self) -> &str {
        match self {
            Self::NotFound(name) => name,
            Self::InvalidType { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_variable() {
        let err = Error::not_found("DATABASE_URL");
        assert_eq!(err.to_string(), "Env 'DATABASE_URL' was not found.");
        assert_eq!(err.env(), "DATABASE_URL");
    }

    #[test]
    fn invalid_type_message_names_variable_and_type() {
        let err = Error::invalid_type("PORT", "int");
        assert_eq!(err.to_string(), "Env 'PORT' has to be of type int");
        assert_eq!(err.env(), "PORT");
    }
}
