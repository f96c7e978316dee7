use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use once_cell::sync::Lazy;
use chirpsign_core::{Context, SignRequest};
use chirpsign_twitter::{
    legacy_nonce, sign, splice_entities, Credential, EntityRange, OAuthRequest, RequestSigner,
};

criterion_group!(benches, bench_sign, bench_splice);
criterion_main!(benches);

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

fn credential() -> Credential {
    Credential::new(
        "consumer-key",
        "consumer-secret",
        "access-token",
        "access-token-secret",
    )
}

pub fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("twitter_oauth1");

    group.bench_function("sign", |b| {
        let cred = credential();
        let req = OAuthRequest::get("https://api.twitter.com/1.1/statuses/user_timeline.json")
            .param("screen_name", "yuschick")
            .param("count", 10)
            .param("tweet_mode", "extended");

        b.iter(|| sign(&req, &cred, || 1609459200, legacy_nonce).expect("must success"))
    });

    group.bench_function("request_signer", |b| {
        let cred = credential();
        let s = RequestSigner::new();
        let ctx = Context::new();

        b.to_async(&*RUNTIME).iter(|| async {
            let mut req = http::Request::new("");
            *req.method_mut() = http::Method::GET;
            *req.uri_mut() =
                "https://api.twitter.com/1.1/statuses/user_timeline.json?screen_name=yuschick"
                    .parse()
                    .expect("url must be valid");

            let (mut parts, _) = req.into_parts();
            s.sign_request(&ctx, &mut parts, Some(&cred), None)
                .await
                .expect("must success")
        })
    });

    group.finish();
}

pub fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("twitter_entities");

    let text = "🎃 check #horror out @yuschick and #rust, see https://t.co/abcdef ".repeat(4);
    let ranges: Vec<EntityRange> = (0..4)
        .flat_map(|i| {
            let base = i * 65;
            [
                EntityRange::new(base + 8, base + 15),
                EntityRange::new(base + 20, base + 29),
                EntityRange::new(base + 34, base + 39),
                EntityRange::new(base + 45, base + 64).with_url("https://example.com"),
            ]
        })
        .collect();

    group.bench_function("splice_entities", |b| {
        b.iter(|| splice_entities(&text, &ranges).expect("must success"))
    });

    group.finish();
}
