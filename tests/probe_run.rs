//! End-to-end probe run tests against a fake probe executable.
//!
//! A small shell script stands in for `ping`, so the full pipeline
//! (spawn, stream, extract, summarize, render) runs without network
//! access or elevated privileges.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use pingstat::{report, stats, ExitOutcome, ProbeConfig, RunError, StreamCollector};

/// Write an executable fake probe that receives `-c <count> <target>`.
fn fake_probe(dir: &tempfile::TempDir, body: &str) -> String {
    let path = dir.path().join("fake-ping");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

/// A fake probe emitting `count` replies with the given latencies.
fn reply_script(latencies: &[f64]) -> String {
    let mut body = String::from("echo \"PING target: 56 data bytes\"\n");
    for (i, latency) in latencies.iter().enumerate() {
        body.push_str(&format!(
            "echo \"64 bytes from 10.0.0.1: icmp_seq={} ttl=64 time={latency} ms\"\n",
            i + 1
        ));
    }
    body.push_str("echo \"--- target ping statistics ---\"");
    body
}

#[tokio::test]
async fn full_run_produces_report() {
    let dir = tempfile::tempdir().unwrap();
    let latencies = [8.1, 9.7, 7.9, 8.8, 9.1, 8.5, 9.0, 8.2, 8.6, 9.3];
    let probe = fake_probe(&dir, &reply_script(&latencies));

    let config = ProbeConfig::new("target.example", 10).with_probe_command(probe);
    config.validate().unwrap();

    let mut echoed = Vec::new();
    let result = StreamCollector::new(config)
        .run(|line| echoed.push(line.to_string()))
        .await
        .unwrap();

    // Header, 10 replies, trailer: everything reaches the observer.
    assert_eq!(echoed.len(), 12);
    assert_eq!(result.samples.len(), 10);
    assert_eq!(result.exit, ExitOutcome::Success);
    assert_eq!(result.samples[0].sequence_index, 1);
    assert_eq!(result.samples[9].sequence_index, 10);

    let summary = stats::summarize(&result.samples).unwrap();
    assert_eq!(summary.min, 7.9);
    assert_eq!(summary.max, 9.7);
    assert!(summary.p50 <= summary.p90 && summary.p90 <= summary.p99);

    let report = report::render(&summary);
    assert!(report.contains("round-trip min/avg/max/stddev = 7.900/"));
    assert!(report.contains("Median Latency (p50):"));
}

#[tokio::test]
async fn lossy_run_keeps_only_successes() {
    let dir = tempfile::tempdir().unwrap();
    let probe = fake_probe(
        &dir,
        concat!(
            "echo \"64 bytes from 10.0.0.1: icmp_seq=1 ttl=64 time=12.0 ms\"\n",
            "echo \"Request timeout for icmp_seq 2\"\n",
            "echo \"Request timeout for icmp_seq 3\"\n",
            "echo \"64 bytes from 10.0.0.1: icmp_seq=4 ttl=64 time=14.0 ms\"\n",
            "exit 2",
        ),
    );

    let config = ProbeConfig::new("flaky.example", 10).with_probe_command(probe);
    let result = StreamCollector::new(config).run(|_| {}).await.unwrap();

    // Two successes out of four probes; indices follow arrival order,
    // not the probe's icmp_seq, and the non-zero exit is preserved.
    assert_eq!(result.samples.len(), 2);
    assert_eq!(result.samples[1].sequence_index, 2);
    assert_eq!(result.samples[1].latency_ms, 14.0);
    assert_eq!(result.exit, ExitOutcome::NonZero(2));
}

#[tokio::test]
async fn missing_probe_means_no_summary() {
    let config = ProbeConfig::new("target.example", 10).with_probe_command("no-such-probe");
    let result = StreamCollector::new(config).run(|_| {}).await;

    match result {
        Err(RunError::ProbeUnavailable(_)) => {}
        other => panic!("expected ProbeUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_run_fails_summarize_at_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let probe = fake_probe(&dir, "echo \"Request timeout for icmp_seq 1\"");

    let config = ProbeConfig::new("down.example", 10).with_probe_command(probe);
    let result = StreamCollector::new(config).run(|_| {}).await.unwrap();

    assert!(result.samples.is_empty());
    assert!(matches!(
        stats::summarize(&result.samples),
        Err(RunError::InsufficientData)
    ));
}
