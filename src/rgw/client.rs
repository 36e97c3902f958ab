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

//! Admin client performing signed requests against a RADOS Gateway.
//!
//! Each call builds one URL, signs it, sends it once and classifies the
//! result. There is no retry, no region discovery and no connection reuse:
//! the transport is configured to keep no idle connections.

use bytes::{Bytes, BytesMut};
use http::HeaderMap;
pub use http::Method;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::rgw::creds::{Provider, StaticProvider};
use crate::rgw::error::{Error, ErrorResponse};
use crate::rgw::header_constants::*;
use crate::rgw::http::{BaseUrl, Url};
use crate::rgw::request::AdminRequest;
use crate::rgw::response::AdminResponse;
use crate::rgw::signer::{get_canonical_resource_v2, presign_v2, sign_v2, sign_v4_s3};
use crate::rgw::utils::{EMPTY_SHA256, Multimap, UtcTime, encode_sorted, to_amz_date, utc_now};

/// The default region used in the signature V4 scope. RGW accepts any region
/// matching its zonegroup; `us-east-1` is the usual default.
pub const DEFAULT_REGION: &str = "us-east-1";

/// How long a query-string signature stays valid.
pub const DEFAULT_SIGNATURE_TTL: Duration = Duration::from_secs(60);

/// Largest response body buffered by default.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 64 * 1024 * 1024; // 64 MiB

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Request signing scheme
pub enum SigningScheme {
    /// Signature V2 in the query string (`AWSAccessKeyId`, `Expires`,
    /// `Signature`), expiring after the configured signature TTL.
    #[default]
    QueryV2,
    /// Signature V2 `Authorization: AWS <key>:<sig>` header with a `Date` header.
    HeaderV2,
    /// Signature V4 `Authorization: AWS4-HMAC-SHA256 ...` header.
    HeaderV4,
}

/// Builder for [`AdminClient`].
#[derive(Debug)]
pub struct AdminClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    signing_scheme: SigningScheme,
    signature_ttl: Duration,
    region: String,
    max_body_size: Option<u64>,
    timeout: Option<Duration>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: bool,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
}

impl AdminClientBuilder {
    /// Creates a builder given the base URL of the gateway.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            signing_scheme: SigningScheme::default(),
            signature_ttl: DEFAULT_SIGNATURE_TTL,
            region: DEFAULT_REGION.to_string(),
            max_body_size: Some(DEFAULT_MAX_BODY_SIZE),
            timeout: None,
            ssl_cert_file: None,
            ignore_cert_check: false,
            app_info: None,
        }
    }

    /// Set the credential provider of the admin user. Required.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    pub fn signing_scheme(mut self, scheme: SigningScheme) -> Self {
        self.signing_scheme = scheme;
        self
    }

    /// Validity window declared by query-string signatures.
    pub fn signature_ttl(mut self, ttl: Duration) -> Self {
        self.signature_ttl = ttl;
        self
    }

    /// Region of the signature V4 scope.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Cap on the buffered response body. `None` reads bodies of any size.
    pub fn max_body_size(mut self, limit: Option<u64>) -> Self {
        self.max_body_size = limit;
        self
    }

    /// Timeout for the whole round trip. By default the transport's own
    /// behaviour applies.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: bool) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<AdminClient, Error> {
        let provider = self.provider.ok_or_else(|| {
            Error::MissingCredentials("no credential provider configured".into())
        })?;

        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .pool_max_idle_per_host(0);

        let mut user_agent = String::from("rgw-admin (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") rgw-admin-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if self.ignore_cert_check {
            log::warn!("TLS certificate verification is disabled for `{}`", self.base_url);
            builder = builder.danger_accept_invalid_certs(true);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v)?;
            file.read_to_end(&mut buf)?;

            let certs =
                reqwest::Certificate::from_pem_bundle(&buf).map_err(Error::ClientConfig)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        log::info!(
            "Configured RGW admin client for `{}` ({:?})",
            self.base_url,
            self.signing_scheme
        );

        Ok(AdminClient {
            http_client: builder.build().map_err(Error::ClientConfig)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                signing_scheme: self.signing_scheme,
                signature_ttl: self.signature_ttl,
                region: self.region,
                max_body_size: self.max_body_size,
            }),
        })
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Arc<dyn Provider + Send + Sync + 'static>,
    pub(crate) signing_scheme: SigningScheme,
    pub(crate) signature_ttl: Duration,
    pub(crate) region: String,
    pub(crate) max_body_size: Option<u64>,
}

/// RADOS Gateway admin API client.
///
/// Immutable once built; clones share the same configuration and can be
/// used from many tasks at once.
#[derive(Clone, Debug)]
pub struct AdminClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl AdminClient {
    /// Returns a client for `host` signing with the given admin key pair,
    /// with every other setting at its default.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::rgw::AdminClient;
    ///
    /// let client = AdminClient::new("http://rgw.example.com:8080", "admin", "secret").unwrap();
    /// assert_eq!(client.base_url().to_string(), "http://rgw.example.com:8080");
    /// ```
    pub fn new(host: &str, access_key: &str, secret_key: &str) -> Result<Self, Error> {
        AdminClientBuilder::new(host.parse()?)
            .provider(StaticProvider::new(access_key, secret_key, None))
            .build()
    }

    pub fn builder(base_url: BaseUrl) -> AdminClientBuilder {
        AdminClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn signing_scheme(&self) -> SigningScheme {
        self.shared.signing_scheme
    }

    /// Sends a GET request to `route` with `args` and an optional raw `sub`
    /// fragment placed before the encoded arguments.
    pub async fn get(
        &self,
        route: &str,
        args: &Multimap,
        sub: Option<&str>,
    ) -> Result<AdminResponse, Error> {
        self.call(Method::GET, route, args, sub).await
    }

    /// Sends a PUT request. See [`AdminClient::get`].
    pub async fn put(
        &self,
        route: &str,
        args: &Multimap,
        sub: Option<&str>,
    ) -> Result<AdminResponse, Error> {
        self.call(Method::PUT, route, args, sub).await
    }

    /// Sends a POST request. See [`AdminClient::get`].
    pub async fn post(
        &self,
        route: &str,
        args: &Multimap,
        sub: Option<&str>,
    ) -> Result<AdminResponse, Error> {
        self.call(Method::POST, route, args, sub).await
    }

    /// Sends a DELETE request. See [`AdminClient::get`].
    pub async fn delete(
        &self,
        route: &str,
        args: &Multimap,
        sub: Option<&str>,
    ) -> Result<AdminResponse, Error> {
        self.call(Method::DELETE, route, args, sub).await
    }

    async fn call(
        &self,
        method: Method,
        route: &str,
        args: &Multimap,
        sub: Option<&str>,
    ) -> Result<AdminResponse, Error> {
        let req = AdminRequest::new(method, route, args.clone(), sub.map(str::to_string));
        self.execute(&req).await
    }

    /// Signs and sends `req` once.
    ///
    /// The result is `Ok` only for status 200 without an error code in the
    /// body. On [`Error::Api`] and [`Error::Status`] the body is kept in the
    /// error.
    pub async fn execute(&self, req: &AdminRequest) -> Result<AdminResponse, Error> {
        req.validate()?;

        // Signatures are never reused: sample the clock on every call.
        let (url, headers) = self.prepare(req, utc_now());

        log::debug!(
            "{} {} ({:?})",
            req.method(),
            url.path,
            self.shared.signing_scheme
        );

        let mut request = self.http_client.request(req.method().clone(), url.to_string());
        for (key, values) in headers.iter_all() {
            for value in values {
                request = request.header(key, value);
            }
        }

        let resp = request.send().await.map_err(Error::Transport)?;

        let status = resp.status().as_u16();
        let resp_headers = resp.headers().clone();
        let body = self.read_body(resp, status).await?;

        log::debug!(
            "{} {} -> {} ({} bytes)",
            req.method(),
            url.path,
            status,
            body.len()
        );

        classify(status, resp_headers, body)
    }

    /// Returns the final URL and headers of `req` signed at `date`.
    pub(crate) fn prepare(&self, req: &AdminRequest, date: UtcTime) -> (Url, Multimap) {
        let shared = &self.shared;
        let mut url = shared.base_url.build_url(req.route(), &req.query_string());
        let mut headers = Multimap::new();
        let creds = shared.provider.fetch();

        match shared.signing_scheme {
            SigningScheme::QueryV2 => {
                let resource = get_canonical_resource_v2(&url.path, &url.query);
                let expires = date.timestamp() + shared.signature_ttl.as_secs() as i64;
                let mut auth = Multimap::new();
                presign_v2(
                    req.method(),
                    &resource,
                    &mut auth,
                    &creds.access_key,
                    &creds.secret_key,
                    creds.session_token.as_deref(),
                    expires,
                );
                if !url.query.is_empty() && !url.query.ends_with('&') {
                    url.query.push('&');
                }
                url.query.push_str(&encode_sorted(&auth));
            }
            SigningScheme::HeaderV2 => {
                if let Some(token) = &creds.session_token {
                    headers.insert(X_AMZ_SECURITY_TOKEN.to_string(), token.clone());
                }
                sign_v2(
                    req.method(),
                    &get_canonical_resource_v2(&url.path, &url.query),
                    &mut headers,
                    &creds.access_key,
                    &creds.secret_key,
                    date,
                );
            }
            SigningScheme::HeaderV4 => {
                headers.insert(HOST.to_string(), url.host.clone());
                headers.insert(X_AMZ_DATE.to_string(), to_amz_date(date));
                headers.insert(X_AMZ_CONTENT_SHA256.to_string(), EMPTY_SHA256.to_string());
                if let Some(token) = &creds.session_token {
                    headers.insert(X_AMZ_SECURITY_TOKEN.to_string(), token.clone());
                }
                sign_v4_s3(
                    req.method(),
                    &url.path,
                    &shared.region,
                    &mut headers,
                    &req.query_params(),
                    &creds.access_key,
                    &creds.secret_key,
                    EMPTY_SHA256,
                    date,
                );
            }
        }

        (url, headers)
    }

    async fn read_body(&self, mut resp: reqwest::Response, status: u16) -> Result<Bytes, Error> {
        let Some(limit) = self.shared.max_body_size else {
            return resp
                .bytes()
                .await
                .map_err(|source| Error::BodyRead { status, source });
        };

        if let Some(len) = resp.content_length() {
            if len > limit {
                log::warn!("response body of {len} bytes exceeds limit of {limit} bytes");
                return Err(Error::BodyTooLarge { status, limit });
            }
        }

        let mut buf = BytesMut::new();
        while let Some(chunk) = resp
            .chunk()
            .await
            .map_err(|source| Error::BodyRead { status, source })?
        {
            if (buf.len() + chunk.len()) as u64 > limit {
                log::warn!("streamed response body exceeds limit of {limit} bytes");
                return Err(Error::BodyTooLarge { status, limit });
            }
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }
}

/// Turns a fully read response into the call result.
///
/// An error code in the body wins over the status; a non-200 status without
/// one is still an error.
pub(crate) fn classify(status: u16, headers: HeaderMap, body: Bytes) -> Result<AdminResponse, Error> {
    if let Some(response) = ErrorResponse::parse(&body) {
        return Err(Error::Api {
            status,
            response,
            body,
        });
    }
    if status != 200 {
        return Err(Error::Status { status, body });
    }
    Ok(AdminResponse {
        status,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgw::signer::{get_string_to_sign_v2, hmac_sha1_b64};
    use crate::rgw::utils::parse_query;
    use chrono::{TimeZone, Utc};

    fn client(scheme: SigningScheme) -> AdminClient {
        AdminClientBuilder::new("http://rgw.local:8080".parse().unwrap())
            .provider(StaticProvider::new("admin", "secret", None))
            .signing_scheme(scheme)
            .build()
            .unwrap()
    }

    fn date() -> UtcTime {
        Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap()
    }

    fn user_request() -> AdminRequest {
        let mut args = Multimap::new();
        args.insert("uid".into(), "john doe".into());
        args.insert("format".into(), "json".into());
        AdminRequest::new(Method::GET, "/admin/user", args, None)
    }

    #[test]
    fn test_classify_success() {
        let resp = classify(200, HeaderMap::new(), Bytes::from_static(br#"{"user_id":"a"}"#)).unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.body().as_ref(), br#"{"user_id":"a"}"#);
    }

    #[test]
    fn test_classify_code_with_200_is_error() {
        let err = classify(200, HeaderMap::new(), Bytes::from_static(br#"{"Code":"UserExists"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "[200]: UserExists");
        assert_eq!(err.code(), Some("UserExists"));
    }

    #[test]
    fn test_classify_non_200() {
        let err = classify(404, HeaderMap::new(), Bytes::from_static(br#"{"Code":"NoSuchUser"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "[404]: NoSuchUser");

        let err = classify(502, HeaderMap::new(), Bytes::from_static(b"Bad Gateway")).unwrap_err();
        assert!(err.to_string().contains("502"));
        assert_eq!(err.body().unwrap().as_ref(), b"Bad Gateway");
    }

    #[test]
    fn test_classify_201_is_error() {
        let err = classify(201, HeaderMap::new(), Bytes::new()).unwrap_err();
        assert!(matches!(err, Error::Status { status: 201, .. }));
    }

    #[test]
    fn test_prepare_query_v2() {
        let c = client(SigningScheme::QueryV2);
        let (url, headers) = c.prepare(&user_request(), date());
        assert!(headers.is_empty());
        assert_eq!(url.path, "/admin/user");
        assert!(url.query.starts_with("format=json&uid=john+doe&"));

        let params = parse_query(&url.query);
        let expires = date().timestamp() + 60;
        assert_eq!(params.get(AWS_ACCESS_KEY_ID).map(String::as_str), Some("admin"));
        assert_eq!(params.get(EXPIRES), Some(&expires.to_string()));

        let expected = hmac_sha1_b64(
            b"secret",
            get_string_to_sign_v2(&Method::GET, &expires.to_string(), "", "/admin/user").as_bytes(),
        );
        assert_eq!(params.get(SIGNATURE), Some(&expected));
    }

    #[test]
    fn test_prepare_query_v2_sub_without_args() {
        let c = client(SigningScheme::QueryV2);
        let req = AdminRequest::new(Method::GET, "/admin/bucket", Multimap::new(), Some("policy".into()));
        let (url, _) = c.prepare(&req, date());
        assert!(url.query.starts_with("policy&AWSAccessKeyId=admin&Expires="));
    }

    fn policy_request() -> AdminRequest {
        let mut args = Multimap::new();
        args.insert("bucket".into(), "photos".into());
        AdminRequest::new(Method::GET, "/admin/bucket", args, Some("policy".into()))
    }

    #[test]
    fn test_prepare_query_v2_signs_sub_resource() {
        let c = client(SigningScheme::QueryV2);
        let (url, _) = c.prepare(&policy_request(), date());
        assert!(url.query.starts_with("policy&bucket=photos&AWSAccessKeyId=admin&"));

        let params = parse_query(&url.query);
        assert_eq!(
            params.get(SIGNATURE).map(String::as_str),
            Some("cKujekRE5ldpv4vUs8tk0gKonzE=")
        );
    }

    #[test]
    fn test_prepare_header_v2_signs_sub_resource() {
        let c = client(SigningScheme::HeaderV2);
        let (_, headers) = c.prepare(&policy_request(), date());
        let date_header = headers.get(DATE).unwrap();
        let expected = hmac_sha1_b64(
            b"secret",
            get_string_to_sign_v2(&Method::GET, date_header, "", "/admin/bucket?policy").as_bytes(),
        );
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&format!("AWS admin:{expected}"))
        );
    }

    #[test]
    fn test_prepare_header_v2() {
        let c = client(SigningScheme::HeaderV2);
        let (url, headers) = c.prepare(&user_request(), date());
        assert_eq!(url.query, "format=json&uid=john+doe");
        assert_eq!(
            headers.get(DATE).map(String::as_str),
            Some("Fri, 24 May 2013 00:00:00 GMT")
        );
        assert!(headers.get(AUTHORIZATION).unwrap().starts_with("AWS admin:"));
    }

    #[test]
    fn test_prepare_header_v4() {
        let c = client(SigningScheme::HeaderV4);
        let (url, headers) = c.prepare(&user_request(), date());
        assert_eq!(url.query, "format=json&uid=john+doe");
        assert_eq!(headers.get(HOST).map(String::as_str), Some("rgw.local:8080"));
        assert_eq!(
            headers.get(X_AMZ_DATE).map(String::as_str),
            Some("20130524T000000Z")
        );
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=admin/20130524/us-east-1/s3/aws4_request, SignedHeaders=host;x-amz-content-sha256;x-amz-date, Signature="
        ));
    }

    #[test]
    fn test_prepare_resigns_with_new_date() {
        let c = client(SigningScheme::QueryV2);
        let (a, _) = c.prepare(&user_request(), date());
        let (b, _) = c.prepare(&user_request(), date() + chrono::Duration::seconds(1));
        assert_ne!(a.query, b.query);
    }

    #[test]
    fn test_session_token_is_signed() {
        let c = AdminClientBuilder::new("http://rgw.local".parse().unwrap())
            .provider(StaticProvider::new("admin", "secret", Some("tok")))
            .signing_scheme(SigningScheme::HeaderV2)
            .build()
            .unwrap();
        let (_, headers) = c.prepare(&user_request(), date());
        assert_eq!(
            headers.get(X_AMZ_SECURITY_TOKEN).map(String::as_str),
            Some("tok")
        );
    }

    #[test]
    fn test_build_without_provider_fails() {
        let res = AdminClientBuilder::new("http://rgw.local".parse().unwrap()).build();
        assert!(matches!(res, Err(Error::MissingCredentials(_))));
    }

    #[test]
    fn test_new_rejects_bad_host() {
        assert!(matches!(
            AdminClient::new("ftp://rgw.local", "a", "b"),
            Err(Error::InvalidBaseUrl(_))
        ));
    }
}
