use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Local precondition failure; never reaches the network.
    Validation(String),
    /// The service answered with a handled rejection (wrong OTP, duplicate
    /// account, field errors). The message is shown to the user as-is.
    Service(String),
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Service(message) => write!(formatter, "{message}"),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_facing_variants_display_bare_messages() {
        assert_eq!(
            AppError::Validation("Please enter a valid OTP".to_string()).to_string(),
            "Please enter a valid OTP"
        );
        assert_eq!(
            AppError::Service("Invalid OTP".to_string()).to_string(),
            "Invalid OTP"
        );
    }

    #[test]
    fn transport_variants_display_with_context() {
        assert_eq!(
            AppError::Http {
                status: 502,
                message: "bad gateway".to_string()
            }
            .to_string(),
            "Request failed (502): bad gateway"
        );
        assert!(AppError::Network("offline".to_string())
            .to_string()
            .starts_with("Network error:"));
    }
}
