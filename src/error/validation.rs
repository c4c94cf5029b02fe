use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid parameter format '{value}', use key=value.")]
    InvalidParameter { value: String },
    #[error("You must specify a url (set --url, config url, or restore a session).")]
    MissingTarget,
    #[error("You must specify a method (set --method, config method, or restore a session).")]
    MissingMethod,
    #[error("Invalid wait '{value}'. Expected a non-negative number of seconds.")]
    InvalidWait { value: String },
    #[error("`--cert` cannot be combined with `--no-verify`.")]
    CertWithNoVerify,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
