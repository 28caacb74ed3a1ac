//! Reading the QR code from the scanned page URL.

use url::Url;

use premio_core::QrCode;

/// Extract the QR code from the page URL's query string.
///
/// Looks up the first occurrence of `param` (percent-decoded). A missing
/// parameter, an empty value, or a blank value all yield `None`. No I/O.
pub fn extract_qr_code(page_url: &Url, param: &str) -> Option<QrCode> {
    page_url
        .query_pairs()
        .find(|(key, _)| key == param)
        .and_then(|(_, value)| QrCode::new(value.into_owned()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn reads_named_parameter() {
        let code = extract_qr_code(&url("https://premio.example/?qr=QR001"), "qr").unwrap();
        assert_eq!(code.as_str(), "QR001");
    }

    #[test]
    fn ignores_other_parameters() {
        let code =
            extract_qr_code(&url("https://premio.example/?utm=x&qr=QR002&y=1"), "qr").unwrap();
        assert_eq!(code.as_str(), "QR002");
    }

    #[test]
    fn first_occurrence_wins() {
        let code = extract_qr_code(&url("https://premio.example/?qr=A&qr=B"), "qr").unwrap();
        assert_eq!(code.as_str(), "A");
    }

    #[test]
    fn percent_decodes_value() {
        let code = extract_qr_code(&url("https://premio.example/?qr=QR%20003"), "qr").unwrap();
        assert_eq!(code.as_str(), "QR 003");
    }

    #[test]
    fn absent_or_empty_is_none() {
        assert!(extract_qr_code(&url("https://premio.example/"), "qr").is_none());
        assert!(extract_qr_code(&url("https://premio.example/?qr="), "qr").is_none());
        assert!(extract_qr_code(&url("https://premio.example/?code=QR001"), "qr").is_none());
    }

    #[test]
    fn custom_parameter_name() {
        let code = extract_qr_code(&url("https://premio.example/?code=QR9"), "code").unwrap();
        assert_eq!(code.as_str(), "QR9");
    }
}
