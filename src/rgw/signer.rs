// RADOS Gateway Admin Rust Library
// Copyright 2026 rgw-admin Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! S3 request signing: signature V2 (header and query string) and
//! signature V4 (header).
//!
//! All functions are pure; the caller supplies the signing time.

use crate::rgw::header_constants::{
    AUTHORIZATION, AWS_ACCESS_KEY_ID, DATE, EXPIRES, SIGNATURE, X_AMZ_SECURITY_TOKEN,
};
use crate::rgw::utils::{
    Multimap, UtcTime, b64encode, encode_sorted_with, sha256_hash, to_amz_date,
    to_http_header_value, to_signer_date, uri_escape,
};
use hex::encode as hexencode;
use hmac::{Hmac, Mac};
use http::Method;
use sha1::Sha1;
use sha2::Sha256;
use std::collections::BTreeMap;

/// Returns HMAC hash for given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns hex encoded HMAC hash for given key and data
pub fn hmac_hash_hex(key: &[u8], data: &[u8]) -> String {
    hexencode(hmac_hash(key, data))
}

/// Returns base64 encoded HMAC-SHA1 of given data, as used by signature V2
pub fn hmac_sha1_b64(key: &[u8], data: &[u8]) -> String {
    let mut hasher = Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    b64encode(hasher.finalize().into_bytes())
}

// ---------------------------------------------------------------------------
// Signature V2
// ---------------------------------------------------------------------------

/// Returns `x-amz-*` headers in canonical V2 form: lower-cased names, sorted,
/// one `name:value\n` line each.
pub fn get_canonical_amz_headers(headers: &Multimap) -> String {
    let mut btmap: BTreeMap<String, String> = BTreeMap::new();
    for (k, values) in headers.iter_all() {
        let key = k.to_lowercase();
        if !key.starts_with("x-amz-") {
            continue;
        }
        btmap.insert(key, values.join(","));
    }

    let mut out = String::new();
    for (key, value) in &btmap {
        out.push_str(key);
        out.push(':');
        out.push_str(value.trim());
        out.push('\n');
    }
    out
}

/// Returns the V2 string-to-sign.
///
/// `date_or_expires` is the `Date` header value for header authentication,
/// or the `Expires` unix timestamp for query-string authentication.
pub fn get_string_to_sign_v2(
    method: &Method,
    date_or_expires: &str,
    canonical_amz_headers: &str,
    resource: &str,
) -> String {
    // StringToSign =
    //   HTTP-Verb + "\n" +
    //   Content-MD5 + "\n" +
    //   Content-Type + "\n" +
    //   Date|Expires + "\n" +
    //   CanonicalizedAmzHeaders +
    //   CanonicalizedResource
    format!("{method}\n\n\n{date_or_expires}\n{canonical_amz_headers}{resource}")
}

/// S3 sub-resources that become part of the V2 canonical resource when the
/// query string starts with them.
pub const SUB_RESOURCES_V2: [&str; 15] = [
    "acl",
    "lifecycle",
    "location",
    "logging",
    "notification",
    "partNumber",
    "policy",
    "requestPayment",
    "torrent",
    "uploadId",
    "uploads",
    "versionId",
    "versioning",
    "versions",
    "website",
];

/// Returns the V2 canonical resource for `path` and the raw, unsigned `query`.
///
/// The path is followed by `?name` when the first query component is one of
/// [`SUB_RESOURCES_V2`]; its value, if any, is not signed.
pub fn get_canonical_resource_v2(path: &str, query: &str) -> String {
    let first = query.split('&').next().unwrap_or_default();
    let name = first.split_once('=').map_or(first, |(k, _)| k);
    if SUB_RESOURCES_V2.contains(&name) {
        return format!("{path}?{name}");
    }
    path.to_string()
}

/// Signs and updates headers with a V2 `Authorization` and `Date` header
pub fn sign_v2(
    method: &Method,
    resource: &str,
    headers: &mut Multimap,
    access_key: &str,
    secret_key: &str,
    date: UtcTime,
) {
    let date = to_http_header_value(date);
    let string_to_sign = get_string_to_sign_v2(
        method,
        &date,
        &get_canonical_amz_headers(headers),
        resource,
    );
    let signature = hmac_sha1_b64(secret_key.as_bytes(), string_to_sign.as_bytes());

    headers.insert(DATE.to_string(), date);
    headers.insert(
        AUTHORIZATION.to_string(),
        format!("AWS {access_key}:{signature}"),
    );
}

/// Adds V2 query-string authentication parameters valid until `expires`
/// (unix seconds).
pub fn presign_v2(
    method: &Method,
    resource: &str,
    query_params: &mut Multimap,
    access_key: &str,
    secret_key: &str,
    session_token: Option<&str>,
    expires: i64,
) {
    let mut amz_headers = Multimap::new();
    if let Some(token) = session_token {
        amz_headers.insert(X_AMZ_SECURITY_TOKEN.to_string(), token.to_string());
        query_params.insert(X_AMZ_SECURITY_TOKEN.to_string(), token.to_string());
    }

    let expires = expires.to_string();
    let string_to_sign = get_string_to_sign_v2(
        method,
        &expires,
        &get_canonical_amz_headers(&amz_headers),
        resource,
    );
    let signature = hmac_sha1_b64(secret_key.as_bytes(), string_to_sign.as_bytes());

    query_params.insert(AWS_ACCESS_KEY_ID.to_string(), access_key.to_string());
    query_params.insert(EXPIRES.to_string(), expires);
    query_params.insert(SIGNATURE.to_string(), signature);
}

// ---------------------------------------------------------------------------
// Signature V4
// ---------------------------------------------------------------------------

/// Returns scope value of given date, region and service name
pub fn get_scope(date: UtcTime, region: &str, service_name: &str) -> String {
    format!(
        "{}/{}/{}/aws4_request",
        to_signer_date(date),
        region,
        service_name
    )
}

/// Converts headers to signed headers and canonical headers
pub fn get_canonical_headers(headers: &Multimap) -> (String, String) {
    let mut btmap: BTreeMap<String, String> = BTreeMap::new();

    for (k, values) in headers.iter_all() {
        let key = k.to_lowercase();
        if "authorization" == key || "user-agent" == key {
            continue;
        }

        let mut vs = values.clone();
        vs.sort();

        let value = vs
            .iter()
            .map(|v| v.split(' ').filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join(",");
        btmap.insert(key, value);
    }

    let mut signed_headers = String::new();
    let mut canonical_headers = String::new();
    let mut add_delim = false;
    for (key, value) in &btmap {
        if add_delim {
            signed_headers.push(';');
            canonical_headers.push('\n');
        }

        signed_headers.push_str(key);

        canonical_headers.push_str(key);
        canonical_headers.push(':');
        canonical_headers.push_str(value);

        add_delim = true;
    }

    (signed_headers, canonical_headers)
}

/// Returns the V4 canonical query string: sorted keys, `%20` for space
pub fn get_canonical_query_string(query_params: &Multimap) -> String {
    encode_sorted_with(query_params, uri_escape)
}

/// Returns hex encoded SHA256 hash of canonical request
pub fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    signed_headers: &str,
    content_sha256: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n\n' +
    //   SignedHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n\n{}\n{}",
        method, uri, query_string, headers, signed_headers, content_sha256
    );
    sha256_hash(canonical_request.as_bytes())
}

/// Returns string-to-sign value of given date, scope and canonical request hash
pub fn get_string_to_sign(date: UtcTime, scope: &str, canonical_request_hash: &str) -> String {
    format!(
        "AWS4-HMAC-SHA256\n{}\n{}\n{}",
        to_amz_date(date),
        scope,
        canonical_request_hash
    )
}

/// Returns signing key of given secret key, date, region and service name
pub fn get_signing_key(
    secret_key: &str,
    date: UtcTime,
    region: &str,
    service_name: &str,
) -> Vec<u8> {
    let mut key: Vec<u8> = b"AWS4".to_vec();
    key.extend(secret_key.as_bytes());

    let date_key = hmac_hash(key.as_slice(), to_signer_date(date).as_bytes());
    let date_region_key = hmac_hash(date_key.as_slice(), region.as_bytes());
    let date_region_service_key = hmac_hash(date_region_key.as_slice(), service_name.as_bytes());
    hmac_hash(date_region_service_key.as_slice(), b"aws4_request")
}

/// Returns signature value for given signing key and string-to-sign
pub fn get_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hmac_hash_hex(signing_key, string_to_sign)
}

/// Returns authorization value for given access key, scope, signed headers and signature
pub fn get_authorization(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
        access_key, scope, signed_headers, signature
    )
}

/// Signs and updates headers for given parameters for S3 request
///
/// `headers` must already hold `Host`, `x-amz-date` and
/// `x-amz-content-sha256`.
pub fn sign_v4_s3(
    method: &Method,
    uri: &str,
    region: &str,
    headers: &mut Multimap,
    query_params: &Multimap,
    access_key: &str,
    secret_key: &str,
    content_sha256: &str,
    date: UtcTime,
) {
    let scope = get_scope(date, region, "s3");
    let (signed_headers, canonical_headers) = get_canonical_headers(headers);
    let canonical_query_string = get_canonical_query_string(query_params);
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &canonical_query_string,
        &canonical_headers,
        &signed_headers,
        content_sha256,
    );
    let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(secret_key, date, region, "s3");
    let signature = get_signature(signing_key.as_slice(), string_to_sign.as_bytes());
    let authorization = get_authorization(access_key, &scope, &signed_headers, &signature);

    headers.insert(AUTHORIZATION.to_string(), authorization);
}
