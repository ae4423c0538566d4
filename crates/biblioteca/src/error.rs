/// Failure taxonomy surfaced to the user.
///
/// Every remote or validation failure is caught at the call site, rendered
/// as a notification (see [`crate::alerts`]) and never propagated further.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    /// Transport-level failure: the API could not be reached at all.
    #[error("Error de conexión con el backend: {0}")]
    Network(String),

    /// Non-2xx response. Carries the server message verbatim, which is
    /// exactly what the alert shows.
    #[error("{0}")]
    Api(String),

    /// Stock exhaustion, shown in its own dialog rather than the generic
    /// error banner.
    #[error("{0}")]
    OutOfStock(String),

    /// Client-side validation rejected the input before any request.
    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_shown_verbatim() {
        let err = Error::Api("El libro no existe".to_string());

        assert_eq!(err.to_string(), "El libro no existe");
    }

    #[test]
    fn test_network_message_carries_prefix() {
        let err = Error::Network("connection refused".to_string());

        assert!(err.to_string().starts_with("Error de conexión con el backend"));
        assert!(err.to_string().contains("connection refused"));
    }
}
