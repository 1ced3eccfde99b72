// leakgate-core/tests/scan_integration_tests.rs
//! End-to-end tests of the scan pipeline: configuration in, report out.

use test_log::test;

use leakgate_core::config::IgnoreEntry;
use leakgate_core::{
    Addition, AggressiveDetector, ConfiguredIgnores, ContentDetector, DetectionReport, ScanConfig,
    ScanStatus,
};

// Two independent high-entropy strings; both clear the 4.5-bit threshold.
const SECRET_A: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";
const SECRET_B: &str = "R9kLm3XqV7wJh2YtB8nC4dPzS6fG0aEu";

fn default_detector() -> ContentDetector {
    let config = ScanConfig::load_default().unwrap();
    ContentDetector::new(&config.detector).unwrap()
}

#[test]
fn test_high_entropy_addition_is_flagged() {
    let additions = vec![Addition::new(
        "config/prod.env",
        format!("AWS_SECRET_ACCESS_KEY={}\n", SECRET_A).into_bytes(),
    )];
    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ConfiguredIgnores::empty(), &mut report);

    assert_eq!(report.entries().len(), 1);
    let entry = &report.entries()[0];
    assert_eq!(entry.path, "config/prod.env");
    assert_eq!(entry.status, ScanStatus::Failed);
    assert!(entry.message.contains(SECRET_A));
}

#[test]
fn test_clean_addition_passes_silently() {
    let additions = vec![Addition::new(
        "README.md",
        b"Ordinary prose with nothing resembling a credential.".to_vec(),
    )];
    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ConfiguredIgnores::empty(), &mut report);

    assert!(report.is_empty());
}

#[test]
fn test_ignore_takes_precedence_over_detection() {
    let ignores = ConfiguredIgnores::from_entries(&[IgnoreEntry {
        path: "vendored/*".to_string(),
        checksum: None,
    }])
    .unwrap();
    let additions = vec![Addition::new(
        "vendored/fixture.txt",
        format!("token={}", SECRET_A).into_bytes(),
    )];
    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ignores, &mut report);

    // Exactly one ignore entry and no failure, despite the secret inside.
    assert_eq!(report.ignored().count(), 1);
    assert_eq!(report.failures().count(), 0);
    let entry = &report.entries()[0];
    assert_eq!(entry.status, ScanStatus::Ignored);
    assert!(entry.message.contains("vendored/fixture.txt"));
}

#[test]
fn test_first_match_short_circuits_per_file() {
    let additions = vec![Addition::new(
        "creds.txt",
        format!("first={}\nsecond={}\n", SECRET_A, SECRET_B).into_bytes(),
    )];
    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ConfiguredIgnores::empty(), &mut report);

    assert_eq!(report.entries().len(), 1);
    let message = &report.entries()[0].message;
    assert!(message.contains(SECRET_A));
    assert!(!message.contains(SECRET_B));
}

#[test]
fn test_scan_is_deterministic() {
    let additions = vec![
        Addition::new("a.txt", format!("x={}", SECRET_A).into_bytes()),
        Addition::new("b.txt", b"clean".to_vec()),
        Addition::new("c.txt", format!("y={}", SECRET_B).into_bytes()),
    ];
    let detector = default_detector();

    let mut first = DetectionReport::new();
    detector.scan(&additions, &ConfiguredIgnores::empty(), &mut first);
    let mut second = DetectionReport::new();
    detector.scan(&additions, &ConfiguredIgnores::empty(), &mut second);

    assert_eq!(first, second);
    assert_eq!(first.entries().len(), 2);
}

#[test]
fn test_checksum_pinned_ignore_stops_applying_after_an_edit() {
    let original = Addition::new("fixtures/sample.txt", format!("k={}", SECRET_A).into_bytes());
    let ignores = ConfiguredIgnores::from_entries(&[IgnoreEntry {
        path: "fixtures/sample.txt".to_string(),
        checksum: Some(original.checksum()),
    }])
    .unwrap();
    let detector = default_detector();

    let mut report = DetectionReport::new();
    detector.scan(std::slice::from_ref(&original), &ignores, &mut report);
    assert_eq!(report.ignored().count(), 1);
    assert!(!report.has_failures());

    // The same path with edited content is scanned again and flagged.
    let edited = Addition::new(
        "fixtures/sample.txt",
        format!("k={} extra", SECRET_A).into_bytes(),
    );
    let mut report = DetectionReport::new();
    detector.scan(std::slice::from_ref(&edited), &ignores, &mut report);
    assert!(report.has_failures());
}

#[test]
fn test_aggressive_fallback_catches_non_alphabet_randomness() {
    // Mostly punctuation: no alphabet run ever qualifies, so only the
    // aggressive detector can see the randomness.
    let token = "!@#$%^&*()-_=+[]{};:<>,.?/";
    let additions = vec![Addition::new("weird.txt", format!("x {}", token).into_bytes())];

    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ConfiguredIgnores::empty(), &mut report);
    assert!(report.is_empty());

    let config = ScanConfig::load_default().unwrap();
    let detector = ContentDetector::new(&config.detector)
        .unwrap()
        .with_fallback(Box::new(AggressiveDetector::new(&config.aggressive).unwrap()));

    let mut report = DetectionReport::new();
    detector.scan(&additions, &ConfiguredIgnores::empty(), &mut report);
    assert!(report.has_failures());
    assert!(report.entries()[0].message.contains(token));
}

#[test]
fn test_non_utf8_addition_is_scanned_as_text() {
    let mut data = vec![0xFF, 0xFE, 0x00];
    data.extend_from_slice(format!("\nkey={}\n", SECRET_B).as_bytes());
    let additions = vec![Addition::new("mixed.bin", data)];

    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ConfiguredIgnores::empty(), &mut report);

    assert!(report.has_failures());
    assert!(report.entries()[0].message.contains(SECRET_B));
}

#[test]
fn test_report_round_trips_through_json() {
    let additions = vec![Addition::new(
        "creds.txt",
        format!("k={}", SECRET_A).into_bytes(),
    )];
    let mut report = DetectionReport::new();
    default_detector().scan(&additions, &ConfiguredIgnores::empty(), &mut report);

    let json = report.to_json_string().unwrap();
    let parsed: DetectionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
