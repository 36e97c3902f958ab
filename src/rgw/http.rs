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

//! Gateway endpoint and request URL representation

use crate::rgw::error::Error;
use http::Uri;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Base URL of a RADOS Gateway, e.g. `http://rgw.example.com:8080`
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Path prefix without trailing slash, empty when the gateway is served
    /// from the root.
    prefix: String,
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port, or 0 when it is the scheme's default.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Returns the request URL for `route` with an already encoded `query`.
    pub fn build_url(&self, route: &str, query: &str) -> Url {
        let mut path = self.prefix.clone();
        if !route.starts_with('/') {
            path.push('/');
        }
        path.push_str(route);

        Url {
            https: self.https,
            host: self.host_header_value(),
            path,
            query: query.to_string(),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::rgw::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://192.168.124.63:8080".parse().unwrap();
    /// assert_eq!(base_url.host_header_value(), "192.168.124.63:8080");
    /// // scheme defaults to https
    /// let base_url: BaseUrl = "rgw.example.com".parse().unwrap();
    /// assert!(base_url.https);
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let url = s
            .parse::<Uri>()
            .map_err(|e| Error::InvalidBaseUrl(format!("{s}: {e}")))?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(Error::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(Error::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };
        let host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.query().is_some() {
            return Err(Error::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host,
            port,
            prefix: url.path().trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scheme = if self.https { "https" } else { "http" };
        write!(f, "{scheme}://{}{}", self.host_header_value(), self.prefix)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Fully resolved request URL
pub struct Url {
    pub https: bool,
    /// Host with port, as sent in the `Host` header
    pub host: String,
    pub path: String,
    /// Encoded query string without the leading `?`
    pub query: String,
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host)?;
        f.write_str(&self.path)?;

        // The admin API always carries a query string, even an empty one.
        f.write_str("?")?;
        f.write_str(&self.query)
    }
}
