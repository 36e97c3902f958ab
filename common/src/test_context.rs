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

use rgw_admin::rgw::client::{AdminClient, AdminClientBuilder, SigningScheme};
use rgw_admin::rgw::creds::StaticProvider;
use rgw_admin::rgw::http::BaseUrl;
use wiremock::MockServer;

pub const ACCESS_KEY: &str = "0555b35654ad1656d804";
pub const SECRET_KEY: &str = "h7GhxuBLTrlhVUyxSPUKUV8r/2EI4ngqJxD7iBdBYLhwluN30JaT3Q==";

/// A mock gateway plus a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: AdminClient,
    pub base_url: BaseUrl,
    pub access_key: String,
    pub secret_key: String,
}

impl TestContext {
    /// Starts a mock gateway and builds a client with the default settings.
    pub async fn new() -> Self {
        Self::with_builder(|b| b).await
    }

    pub async fn with_scheme(scheme: SigningScheme) -> Self {
        Self::with_builder(|b| b.signing_scheme(scheme)).await
    }

    /// Starts a mock gateway and lets the caller adjust the client builder.
    pub async fn with_builder<F>(configure: F) -> Self
    where
        F: FnOnce(AdminClientBuilder) -> AdminClientBuilder,
    {
        crate::utils::init_logger();

        let server = MockServer::start().await;
        log::debug!("mock gateway listening at {}", server.uri());

        let base_url: BaseUrl = server.uri().parse().unwrap();
        let builder = AdminClientBuilder::new(base_url.clone())
            .provider(StaticProvider::new(ACCESS_KEY, SECRET_KEY, None));
        let client = configure(builder).build().unwrap();

        Self {
            server,
            client,
            base_url,
            access_key: ACCESS_KEY.to_string(),
            secret_key: SECRET_KEY.to_string(),
        }
    }
}
