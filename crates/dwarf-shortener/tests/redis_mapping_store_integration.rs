//! Runs the mapping store on a real Redis server. Needs Docker:
//! `cargo test -p dwarf-shortener -- --ignored`.

use dwarf_core::{StoreError, UrlStore};
use dwarf_generator::AlphaGenerator;
use dwarf_shortener::{AllocationPolicy, KeySpace, MappingStore};
use dwarf_storage::{KvBackend, RedisBackend};
use dwarf_test_infra::redis::{RedisConfig, RedisServer};
use std::collections::HashSet;

/// Keeps the Redis container alive and exposes a raw handle on the same
/// server next to the store.
struct Fixture {
    _redis: RedisServer,
    raw: RedisBackend,
    store: MappingStore<RedisBackend, AlphaGenerator>,
}

impl Fixture {
    async fn start(char_floor: usize) -> Self {
        let redis = RedisServer::new(RedisConfig::default())
            .await
            .expect("Failed to start Redis");
        let url = redis.url().await.expect("Failed to get Redis url");
        let raw = RedisBackend::connect(&url)
            .await
            .expect("Failed to connect to Redis");

        let policy = AllocationPolicy::builder().char_floor(char_floor).build();
        let store = MappingStore::new(raw.clone(), AlphaGenerator::new(), policy)
            .expect("Invalid policy");

        Self {
            _redis: redis,
            raw,
            store,
        }
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_store_allocates_unique_stable_codes() {
    let fixture = Fixture::start(2).await;
    let store = &fixture.store;

    let urls: Vec<String> = (1..=1000).map(|i| format!("http://{i}.com")).collect();

    let mut codes = Vec::with_capacity(urls.len());
    for url in &urls {
        codes.push(store.save(url).await.unwrap());
    }

    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), urls.len());

    for (url, code) in urls.iter().zip(&codes) {
        assert_eq!(&store.save(url).await.unwrap(), code);
        assert_eq!(&store.load(code.as_str()).await.unwrap(), url);
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_store_unknown_code_is_not_found() {
    let fixture = Fixture::start(3).await;

    let err = fixture.store.load("zzzzzz").await.unwrap_err();
    assert_eq!(err, StoreError::NotFound("zzzzzz".to_string()));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_store_writes_both_index_keys() {
    let fixture = Fixture::start(3).await;

    let code = fixture.store.save("https://example.com/a?b=c").await.unwrap();

    assert_eq!(
        fixture
            .raw
            .get("dwarf:code:https://example.com/a?b=c")
            .await
            .unwrap()
            .as_deref(),
        Some(code.as_str())
    );
    assert_eq!(
        fixture
            .raw
            .get(&format!("dwarf:url:{code}"))
            .await
            .unwrap()
            .as_deref(),
        Some("https://example.com/a?b=c")
    );
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_store_legacy_namespace_layout() {
    let fixture = Fixture::start(3).await;
    let store = fixture.store.clone().with_key_space(KeySpace::new("dwarf:"));

    let code = store.save("http://a.com").await.unwrap();

    assert!(fixture
        .raw
        .exists("dwarf::code:http://a.com")
        .await
        .unwrap());
    assert!(fixture
        .raw
        .exists(&format!("dwarf::url:{code}"))
        .await
        .unwrap());
}
