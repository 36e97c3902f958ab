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

//! Admin request descriptor

use crate::rgw::error::Error;
use crate::rgw::utils::{Multimap, encode_sorted, parse_query};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// One admin API call: verb, route, query arguments and an optional raw
/// sub-query fragment.
///
/// ```
/// use rgw_admin::rgw::AdminRequest;
/// use rgw_admin::rgw::client::Method;
/// use rgw_admin::rgw::utils::Multimap;
///
/// let mut args = Multimap::new();
/// args.insert("uid".into(), "john doe".into());
/// let req = AdminRequest::builder()
///     .method(Method::PUT)
///     .route("/admin/user")
///     .args(args)
///     .sub("quota")
///     .build();
/// assert_eq!(req.query_string(), "quota&uid=john+doe");
/// ```
pub struct AdminRequest {
    #[builder(!default)] // force required
    method: Method,

    #[builder(setter(into))]
    route: String,

    #[builder(default)]
    args: Multimap,

    /// Trusted verbatim: not encoded, placed before the arguments.
    #[builder(default, setter(into, strip_option))]
    sub: Option<String>,
}

impl AdminRequest {
    /// Creates a request from its parts; the builder is more convenient when
    /// `sub` is known statically.
    pub fn new(method: Method, route: impl Into<String>, args: Multimap, sub: Option<String>) -> Self {
        AdminRequest {
            method,
            route: route.into(),
            args,
            sub,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn args(&self) -> &Multimap {
        &self.args
    }

    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Returns `[sub&]encoded-args`. Arguments are sorted by key.
    pub fn query_string(&self) -> String {
        let args = encode_sorted(&self.args);
        match &self.sub {
            Some(sub) => format!("{sub}&{args}"),
            None => args,
        }
    }

    /// Returns every query parameter the gateway will see, decoded: the
    /// arguments plus the pairs of the sub fragment.
    pub fn query_params(&self) -> Multimap {
        let mut params = self.args.clone();
        if let Some(sub) = &self.sub {
            for (k, values) in parse_query(sub) {
                for v in values {
                    params.insert(k.clone(), v);
                }
            }
        }
        params
    }

    /// Rejects requests that cannot be expressed as a single admin URL.
    pub fn validate(&self) -> Result<(), Error> {
        if !matches!(
            self.method,
            Method::GET | Method::PUT | Method::POST | Method::DELETE
        ) {
            return Err(Error::InvalidRequest(format!(
                "unsupported method {}",
                self.method
            )));
        }
        if self.route.contains(['?', '#']) {
            return Err(Error::InvalidRequest(format!(
                "route must not contain a query or fragment: {}",
                self.route
            )));
        }
        if let Some(sub) = &self.sub {
            if sub.contains('#') {
                return Err(Error::InvalidRequest(format!(
                    "sub-resource must not contain a fragment: {sub}"
                )));
            }
        }
        Ok(())
    }
}
