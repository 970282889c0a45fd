//! End-to-end pipeline tests
//!
//! File input → Producer → Queue → Resolver → output files, with the real
//! regex classifiers and file adapters and a fixed host table for lookups.

use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::Arc;

use linesift_core::application::{DrainReport, Producer, Resolver, ResolverOptions};
use linesift_core::domain::Queue;
use linesift_core::port::host_resolver::mocks::StaticResolver;
use linesift_core::port::HostResolver;
use linesift_infra_system::{standard_classifiers, FileLineSource, FileSinkFactory};

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

async fn run_pipeline(
    input: &Path,
    output_dir: &Path,
    host_resolver: Arc<dyn HostResolver>,
) -> DrainReport {
    let queue = Queue::new();
    if let Ok(mut source) = FileLineSource::open(input).await {
        Producer::populate(&queue, &mut source).await.unwrap();
    }

    let resolver = Resolver::new(
        Arc::new(standard_classifiers().unwrap()),
        host_resolver,
        Arc::new(FileSinkFactory::new(output_dir)),
        ResolverOptions::default(),
    );
    resolver.drain(&queue).await.unwrap()
}

/// Sample from the tool's documentation: one line per category
#[tokio::test]
async fn test_three_line_sample() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "example.com\nuser@example.com\n415-555-0100\n").unwrap();

    let hosts = StaticResolver::new().with_host("example.com", Ipv4Addr::new(93, 184, 216, 34));
    let report = run_pipeline(&input, dir.path(), Arc::new(hosts)).await;

    assert_eq!(
        read(dir.path(), "dnslookup.txt"),
        "Domain: example.com\tIP: 93.184.216.34\n"
    );
    assert_eq!(read(dir.path(), "emailAddrs.txt"), "user@example.com\n");
    assert_eq!(read(dir.path(), "phoneNumbers.txt"), "415-555-0100\n");
    assert_eq!(report.polled, 3);
}

#[tokio::test]
async fn test_unresolvable_domain_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "example.com\nuser@example.com\n415-555-0100\n").unwrap();

    let report = run_pipeline(&input, dir.path(), Arc::new(StaticResolver::new())).await;

    assert_eq!(read(dir.path(), "dnslookup.txt"), "");
    assert_eq!(read(dir.path(), "emailAddrs.txt"), "user@example.com\n");
    assert_eq!(read(dir.path(), "phoneNumbers.txt"), "415-555-0100\n");
    assert_eq!(report.resolution_failures, 1);
}

#[tokio::test]
async fn test_mixed_input_keeps_source_order_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(
        &input,
        [
            "b@example.org",
            "not a match",
            "",
            "(212) 555-0199",
            "www.example.com",
            "a@example.org",
            "+1 415.555.0100",
            "missing.net",
            "example.com trailing words",
        ]
        .join("\r\n"),
    )
    .unwrap();

    let hosts = StaticResolver::new().with_host("www.example.com", Ipv4Addr::new(10, 1, 2, 3));
    let report = run_pipeline(&input, dir.path(), Arc::new(hosts.clone())).await;

    assert_eq!(
        read(dir.path(), "emailAddrs.txt"),
        "b@example.org\na@example.org\n"
    );
    assert_eq!(
        read(dir.path(), "phoneNumbers.txt"),
        "(212) 555-0199\n+1 415.555.0100\n"
    );
    assert_eq!(
        read(dir.path(), "dnslookup.txt"),
        "Domain: www.example.com\tIP: 10.1.2.3\n"
    );
    assert_eq!(hosts.calls(), vec!["www.example.com", "missing.net"]);
    assert_eq!(report.polled, 9);
    assert_eq!(report.unclassified, 3);
}

#[tokio::test]
async fn test_missing_input_still_creates_empty_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_pipeline(
        &dir.path().join("nope.txt"),
        dir.path(),
        Arc::new(StaticResolver::new()),
    )
    .await;

    assert_eq!(report.polled, 0);
    for name in ["dnslookup.txt", "emailAddrs.txt", "phoneNumbers.txt"] {
        assert_eq!(read(dir.path(), name), "", "{}", name);
    }
}

#[tokio::test]
async fn test_rerun_overwrites_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");

    std::fs::write(&input, "first@example.com\n").unwrap();
    run_pipeline(&input, dir.path(), Arc::new(StaticResolver::new())).await;

    std::fs::write(&input, "second@example.com\n").unwrap();
    run_pipeline(&input, dir.path(), Arc::new(StaticResolver::new())).await;

    assert_eq!(read(dir.path(), "emailAddrs.txt"), "second@example.com\n");
}
