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

//! Implementation of the RADOS Gateway admin API client

pub mod client;
pub mod creds;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod request;
pub mod response;
pub mod signer;
pub mod utils;


pub use client::{AdminClient, AdminClientBuilder, SigningScheme};
pub use error::{Error, ErrorResponse};
pub use request::AdminRequest;
pub use response::AdminResponse;
