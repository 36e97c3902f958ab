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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use multimap::MultiMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use sha2::{Digest, Sha256};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Multimap for string key and string value
pub type Multimap = MultiMap<String, String>;

/// SHA256 hash of an empty payload. Admin requests never carry a body.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Characters kept as-is in a query component: `A-Z a-z 0-9 - _ . ~`.
const QUERY_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Gets HTTP header value of given time, e.g. `Fri, 24 May 2013 00:00:00 GMT`
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Encodes a query key or value the way HTML forms do: unreserved characters
/// stay, space becomes `+`, everything else is percent-encoded.
pub fn query_escape(value: &str) -> String {
    value
        .split(' ')
        .map(|piece| utf8_percent_encode(piece, QUERY_COMPONENT_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Encodes a query key or value for a V4 canonical query string, where space
/// is `%20`.
pub fn uri_escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT_ENCODE_SET).to_string()
}

/// Decodes a query component, treating `+` as space.
pub fn query_unescape(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Encodes the multimap as a query string with keys in sorted order.
///
/// Values of the same key keep their insertion order.
pub fn encode_sorted(map: &Multimap) -> String {
    encode_sorted_with(map, query_escape)
}

pub(crate) fn encode_sorted_with(map: &Multimap, escape: fn(&str) -> String) -> String {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut query = String::new();
    for key in keys {
        if let Some(values) = map.get_vec(key) {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&escape(key));
                query.push('=');
                query.push_str(&escape(value));
            }
        }
    }
    query
}

/// Parses a raw `k=v&k2` fragment into a multimap. Keys without `=` map to an
/// empty value.
pub fn parse_query(raw: &str) -> Multimap {
    let mut map = Multimap::new();
    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        map.insert(query_unescape(k), query_unescape(v));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_escape_space_as_plus() {
        assert_eq!(query_escape("2 3"), "2+3");
        assert_eq!(query_escape(" lead"), "+lead");
        assert_eq!(query_escape("trail "), "trail+");
    }

    #[test]
    fn test_query_escape_reserved() {
        assert_eq!(query_escape("a&b=c"), "a%26b%3Dc");
        assert_eq!(query_escape("x+y"), "x%2By");
        assert_eq!(query_escape("-_.~"), "-_.~");
        assert_eq!(query_escape("ü"), "%C3%BC");
    }

    #[test]
    fn test_uri_escape_space() {
        assert_eq!(uri_escape("2 3"), "2%203");
    }

    #[test]
    fn test_encode_sorted_orders_keys() {
        let mut map = Multimap::new();
        map.insert("uid".into(), "john doe".into());
        map.insert("format".into(), "json".into());
        map.insert("caps".into(), "users=*".into());
        assert_eq!(
            encode_sorted(&map),
            "caps=users%3D%2A&format=json&uid=john+doe"
        );
    }

    #[test]
    fn test_encode_sorted_keeps_value_order() {
        let mut map = Multimap::new();
        map.insert("k".into(), "b".into());
        map.insert("k".into(), "a".into());
        assert_eq!(encode_sorted(&map), "k=b&k=a");
    }

    #[test]
    fn test_encode_sorted_empty() {
        assert_eq!(encode_sorted(&Multimap::new()), "");
    }

    #[test]
    fn test_parse_query() {
        let map = parse_query("quota&uid=john+doe&bucket=a%26b");
        assert_eq!(map.get("quota").map(String::as_str), Some(""));
        assert_eq!(map.get("uid").map(String::as_str), Some("john doe"));
        assert_eq!(map.get("bucket").map(String::as_str), Some("a&b"));
    }

    #[test]
    fn test_time_formats() {
        let t = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(to_signer_date(t), "20130524");
        assert_eq!(to_amz_date(t), "20130524T000000Z");
        assert_eq!(to_http_header_value(t), "Fri, 24 May 2013 00:00:00 GMT");
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
    }

    quickcheck! {
        fn prop_query_escape_roundtrips(s: String) -> bool {
            query_unescape(&query_escape(&s)) == s
        }

        fn prop_query_escape_has_no_raw_separators(s: String) -> bool {
            let e = query_escape(&s);
            !e.contains('&') && !e.contains('=') && !e.contains(' ')
        }
    }
}
