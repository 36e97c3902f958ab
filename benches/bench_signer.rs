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

use criterion::{Criterion, criterion_group, criterion_main};
use rgw_admin::rgw::client::Method;
use rgw_admin::rgw::signer::{presign_v2, sign_v2, sign_v4_s3};
use rgw_admin::rgw::utils::{EMPTY_SHA256, Multimap, encode_sorted, to_amz_date, utc_now};

const ACCESS_KEY: &str = "0555b35654ad1656d804";
const SECRET_KEY: &str = "h7GhxuBLTrlhVUyxSPUKUV8r/2EI4ngqJxD7iBdBYLhwluN30JaT3Q==";

fn user_args() -> Multimap {
    let mut args = Multimap::new();
    args.insert("uid".into(), "john doe".into());
    args.insert("display-name".into(), "John Doe".into());
    args.insert("email".into(), "john@example.com".into());
    args
}

fn bench_signer(c: &mut Criterion) {
    let date = utc_now();
    let args = user_args();

    c.bench_function("encode_sorted", |b| b.iter(|| encode_sorted(&args)));

    c.bench_function("presign_v2", |b| {
        b.iter(|| {
            let mut query = Multimap::new();
            presign_v2(
                &Method::PUT,
                "/admin/user",
                &mut query,
                ACCESS_KEY,
                SECRET_KEY,
                None,
                date.timestamp() + 60,
            );
            query
        })
    });

    c.bench_function("sign_v2", |b| {
        b.iter(|| {
            let mut headers = Multimap::new();
            sign_v2(&Method::PUT, "/admin/user", &mut headers, ACCESS_KEY, SECRET_KEY, date);
            headers
        })
    });

    c.bench_function("sign_v4_s3", |b| {
        b.iter(|| {
            let mut headers = Multimap::new();
            headers.insert("host".into(), "rgw.local:7480".into());
            headers.insert("x-amz-date".into(), to_amz_date(date));
            headers.insert("x-amz-content-sha256".into(), EMPTY_SHA256.into());
            sign_v4_s3(
                &Method::PUT,
                "/admin/user",
                "us-east-1",
                &mut headers,
                &args,
                ACCESS_KEY,
                SECRET_KEY,
                EMPTY_SHA256,
                date,
            );
            headers
        })
    });
}

criterion_group!(benches, bench_signer);
criterion_main!(benches);
