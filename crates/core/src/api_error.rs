use serde::Deserialize;

/// Error body the API attaches to non-2xx responses. Both fields are
/// optional; older servers send only `message`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Fallback text when the server sends no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error desconocido.";

/// Structured code for stock-exhaustion failures on loan creation.
pub const OUT_OF_STOCK_CODE: &str = "OUT_OF_STOCK";

/// Remote-failure category the UI distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The loan cannot be created because the book has no stock. Rendered
    /// in its own dialog, separate from generic errors.
    OutOfStock(String),
    /// Any other failure, carrying the server message verbatim.
    Other(String),
}

impl ErrorKind {
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfStock(m) | Self::Other(m) => m,
        }
    }
}

/// Classify a decoded error body.
///
/// A structured `code` wins. The `stock` keyword match on the message is
/// kept only as a fallback for servers that do not send a code yet.
pub fn classify(body: &ApiErrorBody) -> ErrorKind {
    let message = body
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

    match body.code.as_deref() {
        Some(OUT_OF_STOCK_CODE) => ErrorKind::OutOfStock(message),
        Some(_) => ErrorKind::Other(message),
        None if message.to_lowercase().contains("stock") => ErrorKind::OutOfStock(message),
        None => ErrorKind::Other(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: Option<&str>, code: Option<&str>) -> ApiErrorBody {
        ApiErrorBody {
            message: message.map(str::to_string),
            code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_structured_code_wins() {
        let kind = classify(&body(
            Some("No hay ejemplares disponibles"),
            Some(OUT_OF_STOCK_CODE),
        ));

        assert_eq!(
            kind,
            ErrorKind::OutOfStock("No hay ejemplares disponibles".to_string())
        );
    }

    #[test]
    fn test_other_code_is_generic_even_with_stock_keyword() {
        let kind = classify(&body(
            Some("El stock no pudo actualizarse"),
            Some("CONFLICT"),
        ));

        assert!(matches!(kind, ErrorKind::Other(_)));
    }

    #[test]
    fn test_keyword_fallback_without_code() {
        let kind = classify(&body(Some("No hay STOCK disponible para \"Rayuela\""), None));

        assert!(matches!(kind, ErrorKind::OutOfStock(_)));
        assert_eq!(kind.message(), "No hay STOCK disponible para \"Rayuela\"");
    }

    #[test]
    fn test_plain_message_is_generic() {
        let kind = classify(&body(Some("El libro no existe"), None));

        assert_eq!(kind, ErrorKind::Other("El libro no existe".to_string()));
    }

    #[test]
    fn test_missing_message_uses_fallback_text() {
        let kind = classify(&body(None, None));

        assert_eq!(kind, ErrorKind::Other(GENERIC_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_blank_message_uses_fallback_text() {
        let kind = classify(&body(Some("   "), None));

        assert_eq!(kind.message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_body_deserializes_with_unknown_fields() {
        let json = r#"{"message":"boom","code":"OUT_OF_STOCK","traceId":"abc"}"#;

        let parsed: ApiErrorBody = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.message.as_deref(), Some("boom"));
        assert_eq!(parsed.code.as_deref(), Some(OUT_OF_STOCK_CODE));
    }

    #[test]
    fn test_body_deserializes_empty_object() {
        let parsed: ApiErrorBody = serde_json::from_str("{}").unwrap();

        assert!(parsed.message.is_none());
        assert!(parsed.code.is_none());
    }
}
