use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dealfinder_core::config::{Strictness, VerificationConfig};
use dealfinder_core::deal::{Deal, Descriptors};
use dealfinder_core::traits::{IUrlProber, ProbeVerdict};
use dealfinder_verify::VerificationEngine;

fn make_deal(number: u32, title: &str, url: &str, price: &str) -> Deal {
    Deal {
        result_number: number,
        result_id: format!("id{number:09}"),
        title: title.to_string(),
        clean_name: title.to_string(),
        price: price.to_string(),
        original_price: None,
        discount: None,
        store: "Amazon".to_string(),
        rating: Some(4.0),
        url: url.to_string(),
        content: format!("{title} for sale"),
        keywords: vec![],
        descriptors: Descriptors::default(),
        verification: None,
        scoring: None,
    }
}

/// Prober with canned verdicts per URL; everything else is reachable.
struct StubProber {
    verdicts: HashMap<String, ProbeVerdict>,
}

impl StubProber {
    fn reachable() -> Self {
        Self {
            verdicts: HashMap::new(),
        }
    }

    fn with(mut self, url: &str, verdict: ProbeVerdict) -> Self {
        self.verdicts.insert(url.to_string(), verdict);
        self
    }
}

#[async_trait]
impl IUrlProber for StubProber {
    async fn probe(&self, url: &str) -> ProbeVerdict {
        self.verdicts
            .get(url)
            .cloned()
            .unwrap_or_else(|| ProbeVerdict::valid("URL accessible"))
    }
}

fn engine(strictness: Strictness, prober: Arc<dyn IUrlProber>) -> VerificationEngine {
    let config = VerificationConfig {
        strictness,
        ..Default::default()
    };
    VerificationEngine::new(config, prober)
}

#[tokio::test]
async fn complete_deals_pass_moderate() {
    let engine = engine(Strictness::Moderate, Arc::new(StubProber::reachable()));
    let deals = vec![
        make_deal(1, "iPhone 15", "https://a.com/1", "$699.00"),
        make_deal(2, "iPhone 15 Pro", "https://a.com/2", "$799.00"),
        make_deal(3, "iPhone 15 Plus", "https://a.com/3", "$899.00"),
    ];

    let (passing, summary) = engine.verify_batch(&deals, "iPhone 15 deals").await;
    assert_eq!(passing.len(), 3);
    assert_eq!(summary.verified_count, 3);
    assert_eq!(summary.filtered_count, 0);
    assert!(passing.iter().all(|d| d.is_verified()));
}

#[tokio::test]
async fn missing_required_fields_fail_every_mode() {
    for strictness in [Strictness::Strict, Strictness::Moderate, Strictness::Lenient] {
        let engine = engine(strictness, Arc::new(StubProber::reachable()));
        let deals = vec![make_deal(1, "Widget", "", "$10.00")];

        let (passing, summary) = engine.verify_batch(&deals, "widget").await;
        assert!(passing.is_empty(), "strictness {strictness}");
        assert_eq!(summary.filtered_count, 1);
    }
}

#[tokio::test]
async fn strict_fails_on_any_missing_important_field() {
    let mut deal = make_deal(1, "Widget", "https://a.com/1", "N/A");
    deal.rating = Some(5.0);
    deal.discount = Some("50% off".to_string());

    let strict = engine(Strictness::Strict, Arc::new(StubProber::reachable()));
    let (passing, _) = strict.verify_batch(std::slice::from_ref(&deal), "widget").await;
    assert!(passing.is_empty());

    let moderate = engine(Strictness::Moderate, Arc::new(StubProber::reachable()));
    let (passing, _) = moderate.verify_batch(std::slice::from_ref(&deal), "widget").await;
    assert_eq!(passing.len(), 1);
}

#[tokio::test]
async fn moderate_tolerates_one_missing_important_field_only() {
    // Price and content both missing: two important fields.
    let mut deal = make_deal(1, "Widget", "https://a.com/1", "N/A");
    deal.content = String::new();

    let moderate = engine(Strictness::Moderate, Arc::new(StubProber::reachable()));
    let (passing, _) = moderate.verify_batch(std::slice::from_ref(&deal), "widget").await;
    assert!(passing.is_empty());

    let lenient = engine(Strictness::Lenient, Arc::new(StubProber::reachable()));
    let (passing, _) = lenient.verify_batch(std::slice::from_ref(&deal), "widget").await;
    assert_eq!(passing.len(), 1);
}

#[tokio::test]
async fn unreachable_url_force_fails_only_in_strict() {
    let prober = || {
        Arc::new(
            StubProber::reachable().with("https://a.com/1", ProbeVerdict::invalid("Page not found (404)")),
        )
    };
    let deal = make_deal(1, "iPhone 15", "https://a.com/1", "$699.00");

    let strict = engine(Strictness::Strict, prober());
    let (passing, _) = strict.verify_batch(std::slice::from_ref(&deal), "iphone").await;
    assert!(passing.is_empty());

    let moderate = engine(Strictness::Moderate, prober());
    let (passing, _) = moderate.verify_batch(std::slice::from_ref(&deal), "iphone").await;
    assert_eq!(passing.len(), 1);
    let record = passing[0].verification.as_ref().unwrap();
    assert!(!record.url_valid);
}

#[tokio::test]
async fn verification_is_idempotent() {
    let engine = engine(Strictness::Moderate, Arc::new(StubProber::reachable()));
    let deals = vec![make_deal(1, "iPhone 15", "https://a.com/1", "$699.00")];

    let (first, _) = engine.verify_batch(&deals, "iphone").await;
    let (second, _) = engine.verify_batch(&first, "iphone").await;

    let a = first[0].verification.as_ref().unwrap();
    let b = second[0].verification.as_ref().unwrap();
    assert_eq!(a.verified, b.verified);
    assert!((a.overall_score - b.overall_score).abs() < 1e-9);
}

#[tokio::test]
async fn output_is_capped_by_input_order_not_score() {
    let prober = Arc::new(StubProber::reachable());
    let config = VerificationConfig {
        strictness: Strictness::Lenient,
        max_verified_results: 2,
        ..Default::default()
    };
    let engine = VerificationEngine::new(config, prober);

    // Third deal has the best rating but arrives last; the cap keeps 1 and 2.
    let mut deals = vec![
        make_deal(1, "Widget A", "https://a.com/1", "$50.00"),
        make_deal(2, "Widget B", "https://a.com/2", "$60.00"),
        make_deal(3, "Widget C", "https://a.com/3", "$70.00"),
    ];
    deals[2].rating = Some(5.0);

    let (passing, _) = engine.verify_batch(&deals, "widget").await;
    let numbers: Vec<u32> = passing.iter().map(|d| d.result_number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

/// Prober that records the peak number of concurrent probes.
struct ConcurrencyProbe {
    current: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl IUrlProber for ConcurrencyProbe {
    async fn probe(&self, _url: &str) -> ProbeVerdict {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.current.fetch_sub(1, Ordering::SeqCst);
        ProbeVerdict::valid("URL accessible")
    }
}

#[tokio::test]
async fn probes_are_bounded_by_the_worker_pool() {
    let prober = Arc::new(ConcurrencyProbe {
        current: AtomicUsize::new(0),
        peak: AtomicUsize::new(0),
    });
    let config = VerificationConfig {
        strictness: Strictness::Lenient,
        probe_workers: 3,
        ..Default::default()
    };
    let engine = VerificationEngine::new(config, Arc::clone(&prober) as Arc<dyn IUrlProber>);

    let deals: Vec<Deal> = (1..=12)
        .map(|i| make_deal(i, "Widget", &format!("https://a.com/{i}"), "$10.00"))
        .collect();

    let (passing, _) = engine.verify_batch(&deals, "widget").await;
    assert_eq!(passing.len(), 12);
    assert!(prober.peak.load(Ordering::SeqCst) <= 3);
}

#[tokio::test]
async fn accept_all_respects_the_cap() {
    let config = VerificationConfig {
        max_verified_results: 2,
        ..Default::default()
    };
    let engine = VerificationEngine::new(config, Arc::new(StubProber::reachable()));
    let deals: Vec<Deal> = (1..=5)
        .map(|i| make_deal(i, "Widget", &format!("https://a.com/{i}"), "$10.00"))
        .collect();

    let (accepted, summary) = engine.accept_all(&deals);
    assert_eq!(accepted.len(), 2);
    assert_eq!(summary.total_input, 5);
}
