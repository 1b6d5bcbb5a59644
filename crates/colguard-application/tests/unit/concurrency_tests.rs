//! Concurrent resolution tests

use crate::test_utils::{
    CountingPrimitives, GatedDerivation, SALT, credential, credentials, two_provider_set,
};
use colguard_application::{ProtectionServiceInterface, ProviderRegistry};
use colguard_domain::value_objects::Credential;
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::time::Duration;

const CALLERS: usize = 16;

/// Enough names to share a map shard with any other name
const CACHED_PROVIDERS: usize = 256;

const SLOW_PASSWORD: &str = "slow derivation password";

#[test]
fn test_concurrent_get_or_create_derives_once() {
    let crypto = Arc::new(CountingPrimitives::default());
    let registry = ProviderRegistry::new(two_provider_set(), crypto.clone());
    let barrier = Barrier::new(CALLERS);

    let entries: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|i| {
                let registry = &registry;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let name = if i % 2 == 0 { "Default" } else { "DEFAULT" };
                    registry.get_or_create(name).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(crypto.derivations(), 1);
    assert_eq!(registry.len(), 1);
    for entry in &entries[1..] {
        assert!(Arc::ptr_eq(&entries[0], entry));
    }
}

#[test]
fn test_concurrent_create_has_one_winner() {
    let crypto = Arc::new(CountingPrimitives::default());
    let registry = ProviderRegistry::new(two_provider_set(), crypto.clone());
    let barrier = Barrier::new(CALLERS);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let registry = &registry;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    registry.create("Billing")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| r.as_ref().is_err_and(|e| e.is_duplicate_provider()))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(duplicates, CALLERS - 1);
    assert_eq!(crypto.derivations(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_encryption_from_blocking_tasks() {
    let crypto = Arc::new(CountingPrimitives::default());
    let registry = Arc::new(ProviderRegistry::new(two_provider_set(), crypto.clone()));

    let mut tasks = Vec::new();
    for i in 0..CALLERS {
        let registry = Arc::clone(&registry);
        let provider = if i % 2 == 0 { "Default" } else { "Billing" };
        tasks.push(tokio::task::spawn_blocking(move || {
            let plaintext = format!("value-{i}");
            let sealed = registry.encrypt_text(provider, &plaintext).unwrap();
            (plaintext, registry.decrypt_text(provider, &sealed).unwrap())
        }));
    }

    for task in tasks {
        let (plaintext, opened) = task.await.unwrap();
        assert_eq!(plaintext, opened);
    }

    assert_eq!(crypto.derivations(), 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_slow_derivation_does_not_block_other_providers() {
    let (crypto, started, release) = GatedDerivation::new(SLOW_PASSWORD);
    let mut entries: Vec<Credential> = (0..CACHED_PROVIDERS)
        .map(|i| credential(&format!("p{i}"), None))
        .collect();
    entries.push(Credential::new("Slow", SLOW_PASSWORD, SALT, None).unwrap());
    let registry = Arc::new(ProviderRegistry::new(credentials(entries), Arc::new(crypto)));

    for i in 0..CACHED_PROVIDERS {
        registry.get_or_create(&format!("p{i}")).unwrap();
    }

    let slow = {
        let registry = Arc::clone(&registry);
        std::thread::spawn(move || registry.get_or_create("Slow").map(|e| e.iterations()))
    };
    started.recv_timeout(Duration::from_secs(10)).unwrap();

    let (done_tx, done_rx) = mpsc::channel();
    let cached = {
        let registry = Arc::clone(&registry);
        std::thread::spawn(move || {
            for i in 0..CACHED_PROVIDERS {
                let name = format!("p{i}");
                let sealed = registry.encrypt_bytes(&name, b"payload").unwrap();
                assert_eq!(registry.decrypt_bytes(&name, &sealed).unwrap(), b"payload");
                assert!(registry.contains(&name));
            }
            assert!(!registry.contains("Slow"));
            let _ = done_tx.send(());
        })
    };

    let finished_while_deriving = done_rx.recv_timeout(Duration::from_secs(10)).is_ok();
    release.send(()).unwrap();
    cached.join().unwrap();

    assert!(
        finished_while_deriving,
        "cached providers waited on another provider's derivation"
    );
    assert_eq!(slow.join().unwrap().unwrap(), 10_000);
    assert_eq!(registry.len(), CACHED_PROVIDERS + 1);
}

#[test]
fn test_waiters_share_a_slow_derivation() {
    let (crypto, started, release) = GatedDerivation::new(SLOW_PASSWORD);
    let registry = Arc::new(ProviderRegistry::new(
        credentials(vec![Credential::new("Slow", SLOW_PASSWORD, SALT, None).unwrap()]),
        Arc::new(crypto),
    ));

    let first = {
        let registry = Arc::clone(&registry);
        std::thread::spawn(move || registry.get_or_create("Slow").unwrap())
    };
    started.recv_timeout(Duration::from_secs(10)).unwrap();
    let second = {
        let registry = Arc::clone(&registry);
        std::thread::spawn(move || registry.get_or_create("slow").unwrap())
    };

    release.send(()).unwrap();
    let first = first.join().unwrap();
    let second = second.join().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(
        started.try_recv().is_err(),
        "the gated derivation ran more than once"
    );
}
