// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use mime::Mime;
use sha2::{Digest, Sha256};

/// Strong validator: quoted, base64 SHA-256 of the body.
pub fn etag_for(body: &[u8]) -> String {
    format!("\"{}\"", URL_SAFE_NO_PAD.encode(Sha256::digest(body)))
}

fn matches_etag(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || tag == etag || tag.strip_prefix("W/") == Some(etag))
}

/// Static file response with an ETag; 304 when the client already has it.
pub fn asset_response(body: Vec<u8>, content_type: &str, if_none_match: Option<&str>) -> ResultResp {
    let etag = etag_for(&body);

    let builder = ResponseBuilder::new()
        .header("ETag", etag.as_str())
        .header("Cache-Control", "no-cache");

    let resp = if if_none_match.is_some_and(|inm| matches_etag(inm, &etag)) {
        builder.status(304).body(Body::empty())
    } else {
        builder
            .status(200)
            .header("Content-Type", content_type)
            .body(Body::from(body))
    };

    resp.map_err(|_| ServerError::InternalError)
}

/// Content type for files in the wasm bundle directory.
pub fn content_type_for(file_name: &str) -> Mime {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("wasm") => "application/wasm"
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
