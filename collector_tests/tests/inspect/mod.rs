use anyhow::Result;
use clap::Parser;
use collector_inspector::config::Config;
use collector_inspector::run::{run, Summary};
use collector_tests::fixture::{self, COLLECTOR_PAYLOAD_B64};

fn inspect(args: &[&str], input: &str) -> Result<(Summary, String)> {
    let conf = Config::try_parse_from(
        std::iter::once("collector-inspect").chain(args.iter().copied()),
    )?;
    let mut out = vec![];
    let summary = run(&conf, input.as_bytes(), &mut out)?;
    Ok((summary, String::from_utf8(out)?))
}

#[test]
fn summary_of_captured_payload() -> Result<()> {
    let (summary, out) = inspect(&["--format", "summary"], COLLECTOR_PAYLOAD_B64)?;
    assert_eq!(summary.decoded, 1);

    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some("POST https://badbucket.invalid/com.snowplowanalytics.snowplow/tp2")
    );
    assert_eq!(lines.next(), Some("    Timeout-Access: <function1>"));
    assert_eq!(lines.count(), fixture::HEADERS.len() - 2);
    Ok(())
}

#[test]
fn json_of_captured_payload() -> Result<()> {
    let (summary, out) = inspect(&[], COLLECTOR_PAYLOAD_B64)?;
    assert_eq!(summary.decoded, 1);
    let head = format!(
        "{{\"schema\":\"{}\",\"ipAddress\":\"{}\",\"timestamp\":{},",
        fixture::SCHEMA,
        fixture::IP_ADDRESS,
        fixture::TIMESTAMP
    );
    assert!(out.starts_with(&head), "{out}");
    assert!(out.contains(&format!("\"networkUserId\":\"{}\"", fixture::NETWORK_USER_ID)));
    Ok(())
}

#[test]
fn wrong_dialect_fails_the_run() -> Result<()> {
    let (summary, out) = inspect(&["--dialect", "standard"], COLLECTOR_PAYLOAD_B64)?;
    assert!(summary.is_failure());
    assert!(out.is_empty());
    Ok(())
}
