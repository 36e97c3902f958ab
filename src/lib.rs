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

//! # RADOS Gateway admin client (`rgw-admin`)
//!
//! This crate sends signed requests to the administrative HTTP API of a Ceph
//! RADOS Gateway. It does not model users, buckets or quotas: it builds the
//! URL for a verb/route/arguments triple, signs it with the S3 credentials of
//! an admin user, performs exactly one round trip and classifies the result.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use rgw_admin::rgw::AdminClient;
//! use rgw_admin::rgw::utils::Multimap;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AdminClient::new("http://localhost:8080", "admin", "secret").unwrap();
//!
//!     let mut args = Multimap::new();
//!     args.insert("uid".into(), "johndoe".into());
//!
//!     match client.get("/admin/user", &args, None).await {
//!         Ok(resp) => println!("{}", resp.text().unwrap_or_default()),
//!         Err(e) => eprintln!("request failed: {e}; body: {:?}", e.body()),
//!     }
//! }
//! ```
//!
//! ## Design
//! - [`rgw::AdminClient`] is immutable after construction and can be shared
//!   between tasks
//! - Every call is a single attempt; retries belong to the caller
//! - Errors keep the response body, see [`rgw::error::Error::body`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod rgw;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
