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

use rand::distr::{Alphanumeric, SampleString};
use rgw_admin::rgw::utils::Multimap;

/// Note: set environment variable RUST_LOG="debug" to see client logs
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rand_uid() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_bucket_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

/// Builds query arguments from string pairs.
pub fn args(pairs: &[(&str, &str)]) -> Multimap {
    let mut m = Multimap::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v.to_string());
    }
    m
}

/// Returns the decoded value of `key` in a raw query string.
pub fn query_value(query: &str, key: &str) -> Option<String> {
    rgw_admin::rgw::utils::parse_query(query).get(key).cloned()
}
