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

//! Credential providers

use crate::rgw::error::Error;
use std::env;
use std::fmt;

/// Environment variable holding the admin user's access key
pub const ENV_ACCESS_KEY: &str = "RGW_ACCESS_KEY";
/// Environment variable holding the admin user's secret key
pub const ENV_SECRET_KEY: &str = "RGW_SECRET_KEY";
/// Optional environment variable holding an STS session token
pub const ENV_SESSION_TOKEN: &str = "RGW_SESSION_TOKEN";

#[derive(Clone)]
/// Credentials contain access key, secret key and session token optionally
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given access key, secret key and optional session token
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::rgw::creds::StaticProvider;
    /// let provider = StaticProvider::new("admin", "secret", None);
    /// ```
    pub fn new(access_key: &str, secret_key: &str, session_token: Option<&str>) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
                session_token: session_token.map(|v| v.to_string()),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

/// Provider reading `RGW_ACCESS_KEY`, `RGW_SECRET_KEY` and optionally
/// `RGW_SESSION_TOKEN` once, at construction.
#[derive(Clone, Debug)]
pub struct EnvProvider {
    inner: StaticProvider,
}

impl EnvProvider {
    pub fn new() -> Result<EnvProvider, Error> {
        let (ak, sk) = (env::var(ENV_ACCESS_KEY), env::var(ENV_SECRET_KEY));
        match (ak, sk) {
            (Ok(ak), Ok(sk)) => {
                let token = env::var(ENV_SESSION_TOKEN).ok();
                Ok(EnvProvider {
                    inner: StaticProvider::new(&ak, &sk, token.as_deref()),
                })
            }
            _ => Err(Error::MissingCredentials(format!(
                "missing {ENV_ACCESS_KEY} or {ENV_SECRET_KEY} environment variables"
            ))),
        }
    }
}

impl Provider for EnvProvider {
    fn fetch(&self) -> Credentials {
        self.inner.fetch()
    }
}
