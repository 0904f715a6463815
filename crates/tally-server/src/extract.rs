use axum::http::HeaderMap;

use tally_types::AccountId;

use crate::error::{ServerError, ServerResult};

/// Pull the caller identity out of the trusted identity header.
///
/// The header is set by the fronting layer under the deployment's trust
/// model; the ledger itself never validates identities, so rejection here is
/// a transport concern and the request never reaches the ledger.
pub fn caller_identity(headers: &HeaderMap, header_name: &str) -> ServerResult<AccountId> {
    let value = headers
        .get(header_name)
        .ok_or_else(|| ServerError::MissingIdentity(header_name.to_string()))?;
    let text = value.to_str().map_err(|_| {
        ServerError::InvalidIdentity(tally_types::TypeError::InvalidHex(
            "header value is not valid ASCII".to_string(),
        ))
    })?;
    Ok(AccountId::from_hex(text)?)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    const HEADER: &str = "x-tally-caller";

    #[test]
    fn extracts_hex_identity() {
        let id = AccountId::from_bytes([0xaa; 20]);
        let mut headers = HeaderMap::new();
        headers.insert(HEADER, HeaderValue::from_str(&id.to_hex()).unwrap());
        assert_eq!(caller_identity(&headers, HEADER).unwrap(), id);
    }

    #[test]
    fn accepts_0x_prefix() {
        let id = AccountId::from_bytes([0x11; 20]);
        let mut headers = HeaderMap::new();
        let value = format!("0x{}", id.to_hex());
        headers.insert(HEADER, HeaderValue::from_str(&value).unwrap());
        assert_eq!(caller_identity(&headers, HEADER).unwrap(), id);
    }

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert!(matches!(
            caller_identity(&headers, HEADER),
            Err(ServerError::MissingIdentity(_))
        ));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER, HeaderValue::from_static("not-hex"));
        assert!(matches!(
            caller_identity(&headers, HEADER),
            Err(ServerError::InvalidIdentity(_))
        ));
    }
}
