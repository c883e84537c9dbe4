use std::fmt::Display;

pub trait ResultExt<T, InitialError> {
    /// Map an error to a string-based error variant
    ///
    /// Converts `Result<T, InitialError>` to `Result<T, FinalError>` where FinalError has a variant
    /// that takes a String, using the Display implementation of InitialError.
    ///
    /// # Example
    /// ```rust
    /// use periph_util::result_ext::ResultExt;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum ConfigError {
    ///     #[error("unable to read config: {0}")]
    ///     Read(String),
    /// }
    ///
    /// fn load() -> Result<String, ConfigError> {
    ///     std::fs::read_to_string("does-not-exist.json").map_err_str(ConfigError::Read)
    /// }
    ///
    /// assert!(load().is_err());
    /// ```
    fn map_err_str<FinalError, F>(self, f: F) -> Result<T, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError;
}

impl<Type, InitialError> ResultExt<Type, InitialError> for Result<Type, InitialError> {
    fn map_err_str<FinalError, F>(self, f: F) -> Result<Type, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError,
    {
        self.map_err(|e| f(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Wrapped {
        Message(String),
    }

    #[test]
    fn test_map_err_str_uses_display() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let mapped = result.map_err_str(Wrapped::Message);
        assert_eq!(
            mapped,
            Err(Wrapped::Message("an error occurred when formatting an argument".into()))
        );
    }
}
