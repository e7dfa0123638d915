use std::fs;
use std::net::UdpSocket;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tzsp_core::{DEFAULT_TZSP_PORT, PacketSummary, decode_packet};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("TZSP_BUILD_COMMIT"),
    ", ",
    env!("TZSP_BUILD_DATE"),
    ")"
);

/// Largest datagram a UDP socket can hand us.
const RECV_BUFFER_LEN: usize = 64 * 1024;

const EXAMPLES: &str = "Examples:\n  tzsp listen --addr 0.0.0.0:37008 --json\n  tzsp listen --count 10 --log-level debug\n  tzsp decode 01000012120106010b\n  tzsp decode --file packet.bin --pretty";

#[derive(Parser, Debug)]
#[command(name = "tzsp")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for TZSP sniffer streams and the 802.11 frames they carry.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "tzsp_core=trace")
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Receive TZSP datagrams on a UDP socket and summarize each one.
    Listen {
        /// Local address to bind
        #[arg(long, default_value_t = format!("0.0.0.0:{DEFAULT_TZSP_PORT}"))]
        addr: String,

        /// Stop after this many datagrams
        #[arg(long)]
        count: Option<u64>,

        /// Print one JSON summary per line to stdout
        #[arg(long)]
        json: bool,
    },
    /// Decode a single TZSP packet given as hex or read from a file.
    Decode {
        /// Packet bytes as hex; whitespace and ':' separators are ignored
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        hex: Option<String>,

        /// Read raw packet bytes from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(&cli.log_level).and_then(|()| match cli.command {
        Commands::Listen { addr, count, json } => listen(&addr, count, json),
        Commands::Decode { hex, file, pretty } => decode(hex.as_deref(), file, pretty),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(2)
        }
    }
}

/// User-facing failure: one `error:` line and an optional `hint:` line.
#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<&'static str>,
}

impl CliError {
    fn hinted(message: impl Into<String>, hint: &'static str) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
            hint: None,
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| {
            CliError::hinted(
                format!("invalid log level '{level}': {err}"),
                "expected a tracing filter such as 'info' or 'tzsp_core=debug'",
            )
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn listen(addr: &str, count: Option<u64>, json: bool) -> Result<(), CliError> {
    let socket = UdpSocket::bind(addr).map_err(|err| {
        CliError::hinted(
            format!("failed to bind {addr}: {err}"),
            "check the address and that the port is not already in use",
        )
    })?;
    let local = socket
        .local_addr()
        .context("Failed to read local socket address")?;
    info!(addr = %local, "listening for TZSP datagrams");

    let mut buf = vec![0u8; RECV_BUFFER_LEN];
    let mut received = 0u64;
    while count.is_none_or(|limit| received < limit) {
        let (len, peer) = socket
            .recv_from(&mut buf)
            .context("Failed to receive datagram")?;
        received += 1;
        let datagram = buf[..len].to_vec();

        let packet = match decode_packet(&datagram) {
            Ok(packet) => packet,
            Err(err) => {
                warn!(src = %peer, len, error = %err, "unable to decode TZSP packet");
                continue;
            }
        };
        let summary = PacketSummary::from_packet(&packet);
        let frame = summary.frame.as_ref();
        info!(
            src = %peer,
            header_type = %summary.header_type,
            protocol = %summary.protocol,
            signal_dbm = ?summary.signal_dbm,
            channel = ?summary.channel,
            rate = summary.rate.as_deref().unwrap_or("-"),
            kind = frame.map(|f| f.kind.as_str()).unwrap_or("-"),
            ssid = frame.and_then(|f| f.ssid.as_deref()).unwrap_or("-"),
            "tzsp packet"
        );
        if let Some(err) = &summary.frame_error {
            debug!(src = %peer, error = %err, "802.11 payload not decoded");
        }
        if json {
            println!("{}", to_json(&summary, false)?);
        }
    }
    debug!(received, "listener stopped");
    Ok(())
}

fn decode(hex: Option<&str>, file: Option<PathBuf>, pretty: bool) -> Result<(), CliError> {
    let bytes = match (hex, file) {
        (_, Some(path)) => fs::read(&path)
            .with_context(|| format!("Failed to read packet file: {}", path.display()))?,
        (Some(hex), None) => parse_hex(hex)?,
        (None, None) => {
            return Err(CliError::hinted(
                "missing packet input",
                "pass hex bytes or --file <PATH>",
            ));
        }
    };

    let packet = decode_packet(&bytes).map_err(|err| {
        CliError::hinted(
            format!("TZSP decode failed: {err}"),
            "input must start with a 4-byte TZSP header (version 1)",
        )
    })?;
    println!("{}", to_json(&PacketSummary::from_packet(&packet), pretty)?);
    Ok(())
}

/// Parse hex digits, ignoring whitespace and ':' separators.
fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).map_err(|err| {
        CliError::hinted(
            format!("invalid hex input: {err}"),
            "use pairs of hex digits, e.g. 01 00 00 12",
        )
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    Ok(json.context("JSON serialization failed")?)
}

#[cfg(test)]
mod tests {
    use super::parse_hex;

    #[test]
    fn parse_hex_ignores_separators() {
        assert_eq!(
            parse_hex("01 00:00 12\n01").unwrap(),
            vec![0x01, 0x00, 0x00, 0x12, 0x01]
        );
        assert_eq!(parse_hex("ABcd").unwrap(), vec![0xab, 0xcd]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_rejects_bad_digits() {
        let err = parse_hex("0").unwrap_err();
        assert!(err.message.starts_with("invalid hex input"));

        let err = parse_hex("0g").unwrap_err();
        assert!(err.message.contains("'g'"));
        assert!(err.hint.is_some());
    }
}
