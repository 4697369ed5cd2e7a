//! Handshake header helpers on top of the `http` crate

use super::key::{derive_accept, verify_accept, SecWebSocketAccept, SecWebSocketKey};
use crate::{Error, Result};
use http::header::{HeaderMap, HeaderValue, SEC_WEBSOCKET_ACCEPT, SEC_WEBSOCKET_KEY};

impl SecWebSocketKey {
    /// Value for the `Sec-WebSocket-Key` request header
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_bytes(self.as_bytes())?)
    }
}

impl SecWebSocketAccept {
    /// Value for the `Sec-WebSocket-Accept` response header
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_bytes(self.as_bytes())?)
    }
}

/// Derive the accept token for an upgrade request's headers
pub fn accept_for_request(headers: &HeaderMap) -> Result<SecWebSocketAccept> {
    let value = headers
        .get(SEC_WEBSOCKET_KEY)
        .ok_or(Error::MissingHeader("sec-websocket-key"))?;
    let key = value
        .to_str()
        .map_err(|e| Error::InvalidHeader(e.to_string()))?;

    derive_accept(key.trim())
}

/// Check an upgrade response's accept header against the key that was sent
pub fn verify_response(key: &SecWebSocketKey, headers: &HeaderMap) -> bool {
    match headers.get(SEC_WEBSOCKET_ACCEPT) {
        Some(accept) => verify_accept(key, accept.as_bytes()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_headers(key: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(SEC_WEBSOCKET_KEY, HeaderValue::from_static(key));
        headers
    }

    #[test]
    fn test_accept_for_request() {
        let accept = accept_for_request(&request_headers("dGhlIHNhbXBsZSBub25jZQ==")).unwrap();
        assert_eq!(accept.as_str(), "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
    }

    #[test]
    fn test_accept_for_request_trims_whitespace() {
        let accept = accept_for_request(&request_headers(" dGhlIHNhbXBsZSBub25jZQ== ")).unwrap();
        assert_eq!(accept.as_str(), "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
    }

    #[test]
    fn test_accept_for_request_missing_key() {
        assert!(matches!(
            accept_for_request(&HeaderMap::new()),
            Err(Error::MissingHeader("sec-websocket-key"))
        ));
    }

    #[test]
    fn test_accept_for_request_oversized_key() {
        let headers = request_headers("dGhlIHNhbXBsZSBub25jZQ==dGhlIHNhbXBsZSBub25jZQ==");
        assert!(matches!(
            accept_for_request(&headers),
            Err(Error::InvalidArgument { len: 48, max: 24 })
        ));
    }

    #[test]
    fn test_round_trip_through_headers() {
        let key = crate::generate_key().unwrap();
        let mut request = HeaderMap::new();
        request.insert(SEC_WEBSOCKET_KEY, key.to_header_value().unwrap());

        let accept = accept_for_request(&request).unwrap();
        let mut response = HeaderMap::new();
        response.insert(SEC_WEBSOCKET_ACCEPT, accept.to_header_value().unwrap());

        assert!(verify_response(&key, &response));
        assert!(!verify_response(&key, &HeaderMap::new()));
    }
}
