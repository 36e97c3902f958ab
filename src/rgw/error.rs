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

//! Error definitions for admin API operations

use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Structured error payload returned by the gateway, e.g.
/// `{"Code":"NoSuchUser","RequestId":"tx00..","HostId":"a1b2-default"}`
pub struct ErrorResponse {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "RequestId")]
    pub request_id: String,
    #[serde(rename = "HostId")]
    pub host_id: String,
    #[serde(rename = "Resource")]
    pub resource: String,
}

impl ErrorResponse {
    /// Decodes `body` as an error payload. Returns `None` if the body is not a
    /// JSON object or carries no error code.
    pub fn parse(body: &[u8]) -> Option<ErrorResponse> {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(er) if !er.code.is_empty() => Some(er),
            _ => None,
        }
    }
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response: DNS, connect, TLS or timeout.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its body could not be read.
    #[error("[{status}]: failed to read response body: {source}")]
    BodyRead {
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    #[error("[{status}]: response body exceeds limit of {limit} bytes")]
    BodyTooLarge { status: u16, limit: u64 },

    /// The body carried a non-empty `Code`, whatever the status.
    #[error("[{status}]: {}", .response.code)]
    Api {
        status: u16,
        response: ErrorResponse,
        body: Bytes,
    },

    /// Non-200 status without a structured error code.
    #[error("[{status}]: no error code in response")]
    Status { status: u16, body: Bytes },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    MissingCredentials(String),

    /// The HTTP transport could not be configured, e.g. an unusable CA bundle.
    #[error("failed to configure HTTP client: {0}")]
    ClientConfig(#[source] reqwest::Error),

    #[error("unable to read CA certificate file: {0}")]
    CertificateFile(#[from] std::io::Error),

    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Response body, when a response was obtained and read.
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Error::Api { body, .. } | Error::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status code, when a response was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BodyRead { status, .. }
            | Error::BodyTooLarge { status, .. }
            | Error::Api { status, .. }
            | Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured error code reported by the gateway, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { response, .. } => Some(response.code.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}
