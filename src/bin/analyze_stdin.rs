//! Simple CLI that reads a job description from stdin and outputs JSON to stdout.
//!
//! Logs go to stderr; set `RUST_LOG=jd_extract=debug` to see which
//! heuristics fired.

use clap::Parser;
use jd_extract::encoding::read_to_utf8;
use jd_extract::{analyze_with_options, extract_all_keywords, Options};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "analyze_stdin")]
#[command(about = "Extract structured fields from a job description on stdin", long_about = None)]
struct Cli {
    /// Only analyze the first N characters of input
    #[arg(long)]
    max_input_len: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print every keyword in the input as a JSON array instead
    #[arg(long)]
    keywords: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = Options {
        max_input_len: cli.max_input_len,
        ..Options::default()
    };

    let text = match read_input(io::stdin().lock()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let output = if cli.keywords {
        to_json(&extract_all_keywords(options.bounded(&text)), cli.pretty)
    } else {
        to_json(&analyze_with_options(&text, &options), cli.pretty)
    };

    println!("{output}");
}

/// Reads and transcodes the whole input.
fn read_input<R: Read>(reader: R) -> jd_extract::Result<String> {
    let text = read_to_utf8(reader)?;
    tracing::debug!(bytes = text.len(), "read job description");
    Ok(text)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jd_extract::Error;

    struct ClosedStdin;

    impl Read for ClosedStdin {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn read_input_decodes_legacy_bytes() {
        let input: &[u8] = b"Caf\xE9 Manager";
        match read_input(input) {
            Ok(text) => assert_eq!(text, "Café Manager"),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn read_input_failure_is_io_error() {
        assert!(matches!(read_input(ClosedStdin), Err(Error::Io(_))));
    }

    #[test]
    fn keyword_output_is_json_array() {
        let json = to_json(&extract_all_keywords("Rust; Tokio"), false);
        assert_eq!(json, r#"["rust","tokio"]"#);
    }
}
