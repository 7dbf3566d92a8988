//! Integration Tests against a live Redis server
//!
//! These tests flush the target database. They are ignored by default; run
//! them with `cargo test -- --ignored` and point `REDIS_URL` at a disposable
//! server (defaults to redis://127.0.0.1:6379/).

use std::sync::{Mutex, MutexGuard};

use redis_cache::{Cache, CacheError, Config, KeyValueStore, RedisStore};

// Every test flushes the same database, so they must not overlap.
static SERIAL: Mutex<()> = Mutex::new(());

// == Helper Functions ==

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn redis_url() -> String {
    Config::from_env().redis_url
}

fn create_test_cache() -> Cache<RedisStore> {
    Cache::new(RedisStore::connect(&redis_url()).unwrap()).unwrap()
}

// == Round-trip Tests ==

#[test]
#[ignore = "requires a running Redis server"]
fn test_store_and_get_each_type() {
    let _guard = serial();
    let mut cache = create_test_cache();

    let text = cache.store("hello").unwrap();
    let blob = cache.store(vec![0u8, 255, 10]).unwrap();
    let int = cache.store(42).unwrap();
    let float = cache.store(0.1).unwrap();

    assert_eq!(cache.get(&text).unwrap(), Some(b"hello".to_vec()));
    assert_eq!(cache.get(&blob).unwrap(), Some(vec![0u8, 255, 10]));
    assert_eq!(cache.get(&int).unwrap(), Some(b"42".to_vec()));
    assert_eq!(cache.get(&float).unwrap(), Some(b"0.1".to_vec()));
}

#[test]
#[ignore = "requires a running Redis server"]
fn test_typed_getters() {
    let _guard = serial();
    let mut cache = create_test_cache();

    let text = cache.store("hello").unwrap();
    let int = cache.store(42).unwrap();
    let float = cache.store(-1.25).unwrap();

    assert_eq!(cache.get_str(&text).unwrap(), Some("hello".to_string()));
    assert_eq!(cache.get_int(&int).unwrap(), Some(42));
    assert_eq!(cache.get_float(&float).unwrap(), Some(-1.25));
}

#[test]
#[ignore = "requires a running Redis server"]
fn test_missing_key_skips_converter() {
    let _guard = serial();
    let mut cache = create_test_cache();

    let result: Option<i64> = cache
        .get_with("never-stored", |_| panic!("converter must not run"))
        .unwrap();

    assert!(result.is_none());
}

#[test]
#[ignore = "requires a running Redis server"]
fn test_identical_values_distinct_keys() {
    let _guard = serial();
    let mut cache = create_test_cache();

    let first = cache.store("same").unwrap();
    let second = cache.store("same").unwrap();

    assert_ne!(first, second);
}

// == Flush Tests ==

#[test]
#[ignore = "requires a running Redis server"]
fn test_new_cache_flushes_previous_entries() {
    let _guard = serial();
    let mut first = create_test_cache();
    let key = first.store("old").unwrap();

    let mut second = create_test_cache();

    assert_eq!(second.get(&key).unwrap(), None);
}

#[test]
#[ignore = "requires a running Redis server"]
fn test_config_without_flush_keeps_entries() {
    let _guard = serial();
    let mut first = create_test_cache();
    let key = first.store("kept").unwrap();

    let config = Config {
        redis_url: redis_url(),
        flush_on_start: false,
    };
    let mut second = Cache::from_config(&config).unwrap();

    assert_eq!(second.get_str(&key).unwrap(), Some("kept".to_string()));
}

#[test]
#[ignore = "requires a running Redis server"]
fn test_raw_store_sees_cache_entries() {
    let _guard = serial();
    let mut cache = create_test_cache();
    let key = cache.store(7).unwrap();

    let mut raw = RedisStore::connect(&redis_url()).unwrap();

    assert_eq!(raw.get(&key).unwrap(), Some(b"7".to_vec()));
}

// == Error Tests ==

#[test]
fn test_unreachable_server_is_connection_error() {
    let config = Config {
        redis_url: "redis://127.0.0.1:1/".to_string(),
        flush_on_start: true,
    };

    let result = Cache::from_config(&config);

    assert!(matches!(result, Err(CacheError::Connection(_))));
}
