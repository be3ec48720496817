//! Filters time-stamped samples read from stdin.
//!
//! ```text
//! one_euro_filter [KIND] [key=value ...] < samples.txt
//! ```
//!
//! Each input line is `timestamp c1 .. cN`; blank lines and `#` comments
//! are skipped. Each output line is `timestamp f1 .. fN`.

use anyhow::{anyhow, bail, Context, Result};
use one_euro_core::{DynamicFilter, FilterParams, Sample, SignalKind};
use std::collections::HashMap;
use std::io::{self, BufRead, BufWriter, Write};

fn main() -> Result<()> {
    env_logger::init();

    let (kind, params) = parse_args(std::env::args().skip(1))?;
    log::info!("Filtering {} samples with {:?}", kind, params);

    let mut filter = DynamicFilter::new(kind, params)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut count = 0usize;
    for (index, line) in stdin.lock().lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_number))?;

        let sample = match parse_sample(&line) {
            Some(sample) => sample.with_context(|| format!("line {}", line_number))?,
            None => continue,
        };

        let filtered = filter
            .filter(&sample.value, Some(sample.timestamp))
            .with_context(|| format!("line {}", line_number))?;

        write!(out, "{}", sample.timestamp)?;
        for value in filtered {
            write!(out, " {}", value)?;
        }
        writeln!(out)?;
        count += 1;
    }

    out.flush()?;
    log::info!("Filtered {} samples", count);
    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<(SignalKind, FilterParams)> {
    let mut kind = SignalKind::Scalar;
    let mut overrides = HashMap::new();

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                if !FilterParams::KEYS.iter().any(|known| *known == key) {
                    bail!(
                        "unknown parameter `{}`, expected one of {:?}",
                        key,
                        FilterParams::KEYS
                    );
                }
                let value: f64 = value
                    .parse()
                    .with_context(|| format!("invalid value for `{}`", key))?;
                overrides.insert(key.to_string(), value);
            }
            None => kind = arg.parse()?,
        }
    }

    let mut params = FilterParams::default();
    params.configure(&overrides)?;
    Ok((kind, params))
}

/// `None` for lines without data
fn parse_sample(line: &str) -> Option<Result<Sample<Vec<f64>>>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let parsed = line
        .split_whitespace()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|e| anyhow!("invalid number `{}`: {}", field, e))
        })
        .collect::<Result<Vec<f64>>>();

    Some(parsed.and_then(|mut fields| {
        if fields.len() < 2 {
            bail!("expected a timestamp followed by at least one value");
        }
        let timestamp = fields.remove(0);
        Ok(Sample::new(timestamp, fields))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args_defaults() {
        let (kind, params) = parse_args(args(&[])).unwrap();
        assert_eq!(kind, SignalKind::Scalar);
        assert_eq!(params, FilterParams::default());
    }

    #[test]
    fn test_parse_args_kind_and_overrides() {
        let (kind, params) =
            parse_args(args(&["vector3", "frequency=60", "beta=0.25"])).unwrap();
        assert_eq!(kind, SignalKind::Vector3);
        assert_eq!(params.frequency, 60.0);
        assert_eq!(params.beta, 0.25);
        assert_eq!(params.min_cutoff, 1.0);
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(args(&["matrix"])).is_err());
        assert!(parse_args(args(&["gain=2"])).is_err());
        assert!(parse_args(args(&["min_cutoff=abc"])).is_err());
        assert!(parse_args(args(&["min_cutoff=0"])).is_err());
    }

    #[test]
    fn test_parse_sample() {
        assert!(parse_sample("").is_none());
        assert!(parse_sample("  # comment").is_none());

        let sample = parse_sample("0.5 1 2 3").unwrap().unwrap();
        assert_eq!(sample.timestamp, 0.5);
        assert_eq!(sample.value, vec![1.0, 2.0, 3.0]);

        assert!(parse_sample("0.5").unwrap().is_err());
        assert!(parse_sample("0.5 x").unwrap().is_err());
    }
}
