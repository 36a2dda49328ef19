//! Command-line toolbox for RCT Power devices.
//!
//! Reads and writes object values on a live device, runs the simulator and
//! exports the object registry as CSV. Log output goes to stderr so values
//! on stdout stay scriptable.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use strum::IntoEnumIterator;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rctkit::client::{Client, DEFAULT_PORT};
use rctkit::protocol::Value;
use rctkit::registry::{ObjectInfo, REGISTRY};
use rctkit::simulator::run_simulator;
use rctkit::types::{DataType, ObjectGroup};

#[derive(Debug, Parser)]
#[command(name = "rctkit", version, about = "RCT Power device toolbox")]
struct Cli {
    /// Enable debug output on stderr.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Send a read request and print the response value.
    ReadValue(ReadValueArgs),
    /// Encode a value, write it to the device and print the acknowledgement.
    WriteValue(WriteValueArgs),
    /// Run the device simulator.
    Simulator(SimulatorArgs),
    /// Export the object registry as per-group CSV listings.
    RegistryCsv(RegistryCsvArgs),
    /// List object names, optionally filtered by prefix.
    Names { prefix: Option<String> },
}

#[derive(Debug, Args)]
struct Target {
    /// Host address or IP of the device.
    #[arg(short = 'H', long)]
    host: String,

    /// Port at which the device listens.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Object id to query, e.g. "0x959930BF".
    #[arg(short, long, conflicts_with = "name")]
    id: Option<String>,

    /// Object name to query, e.g. "battery.soc".
    #[arg(short, long)]
    name: Option<String>,

    /// Receive timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

impl Target {
    fn resolve(&self) -> Result<&'static ObjectInfo> {
        match (&self.id, &self.name) {
            (Some(id), None) => {
                let digits = id
                    .strip_prefix("0x")
                    .or_else(|| id.strip_prefix("0X"))
                    .unwrap_or(id);
                let id = u32::from_str_radix(digits, 16)
                    .with_context(|| format!("cannot parse object id '{id}'"))?;
                debug!("parsed object id {id:#010X}");
                Ok(REGISTRY.get_by_id(id)?)
            }
            (None, Some(name)) => Ok(REGISTRY.get_by_name(name)?),
            _ => bail!("specify exactly one of --id or --name"),
        }
    }
}

#[derive(Debug, Args)]
struct ReadValueArgs {
    #[command(flatten)]
    target: Target,

    /// Print index, id, name and description along with the value.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct WriteValueArgs {
    #[command(flatten)]
    target: Target,

    /// The value to write, parsed according to the object's request type.
    #[arg(short, long)]
    value: String,
}

#[derive(Debug, Args)]
struct SimulatorArgs {
    /// Address to bind to.
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Port to bind to.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[derive(Debug, Args)]
struct RegistryCsvArgs {
    /// Directory the CSV files are written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "rctkit=debug" } else { "rctkit=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Cmd::ReadValue(args) => cmd_read_value(args).await,
        Cmd::WriteValue(args) => cmd_write_value(args).await,
        Cmd::Simulator(args) => run_simulator(&args.host, args.port).await,
        Cmd::RegistryCsv(args) => cmd_registry_csv(args),
        Cmd::Names { prefix } => {
            for name in REGISTRY.prefix_complete_name(prefix.as_deref().unwrap_or("")) {
                println!("{name}");
            }
            Ok(())
        }
    }
}

async fn cmd_read_value(args: ReadValueArgs) -> Result<()> {
    let info = args.target.resolve()?;
    let mut client = Client::connect(&args.target.host, args.target.port).await?;

    // Objects without a known payload layout are hexdumped as-is.
    let rendered = if info.response_data_type == DataType::Unknown {
        let frame = tokio::time::timeout(
            Duration::from_secs(args.target.timeout),
            client.read_raw(info),
        )
        .await
        .context("timed out waiting for the response")??;
        format!("0x{}", hex::encode(&frame.data))
    } else {
        let value = tokio::time::timeout(
            Duration::from_secs(args.target.timeout),
            client.read_value(info),
        )
        .await
        .context("timed out waiting for the response")??;
        render_value(info, &value)?
    };
    if args.verbose {
        println!(
            "#{:<3} {:#010X} {:width$} {:75} {} {}",
            info.index,
            info.object_id,
            info.name,
            info.description.unwrap_or(""),
            rendered,
            info.unit.unwrap_or(""),
            width = REGISTRY.name_max_length()
        );
    } else {
        println!("{rendered}");
    }
    Ok(())
}

/// Renders a decoded value for the terminal. Time series get ISO
/// timestamps, event tables one hex-formatted record per line, enums their
/// display string when one is known.
fn render_value(info: &ObjectInfo, value: &Value) -> Result<String> {
    match value {
        Value::Timeseries(series) => {
            let mut parts = Vec::with_capacity(series.samples.len());
            for (ts, val) in &series.samples {
                parts.push(format!("{}={val:.4}", ts.format(&Rfc3339)?));
            }
            Ok(parts.join(", "))
        }
        Value::EventTable(table) => {
            let mut out = String::new();
            for entry in table.entries.values() {
                out.push_str(&format!(
                    "{:#04X},{},{:#X},{:#X},{:#X}\n",
                    entry.entry_type,
                    entry.timestamp.format(&Rfc3339)?,
                    entry.element2,
                    entry.element3,
                    entry.element4
                ));
            }
            Ok(out)
        }
        Value::U8(code) if info.request_data_type == DataType::Enum => {
            Ok(match info.enum_str(*code) {
                Ok(label) => format!("{label} ({code})"),
                Err(_) => code.to_string(),
            })
        }
        other => Ok(other.to_string()),
    }
}

async fn cmd_write_value(args: WriteValueArgs) -> Result<()> {
    let info = args.target.resolve()?;
    let value = parse_value(info.request_data_type, &args.value)?;
    let mut client = Client::connect(&args.target.host, args.target.port).await?;

    let ack = tokio::time::timeout(
        Duration::from_secs(args.target.timeout),
        client.write_value(info, &value),
    )
    .await
    .context("timed out waiting for the acknowledgement")??;

    println!(
        "{} acknowledged with {} payload bytes",
        info.name,
        ack.data.len()
    );
    Ok(())
}

/// Parses a command-line string into a value matching the data type.
fn parse_value(data_type: DataType, text: &str) -> Result<Value> {
    let value = match data_type {
        DataType::Bool => Value::Bool(matches!(text, "true" | "1" | "on")),
        DataType::Uint8 | DataType::Enum => Value::U8(text.parse()?),
        DataType::Int8 => Value::I8(text.parse()?),
        DataType::Uint16 => Value::U16(text.parse()?),
        DataType::Int16 => Value::I16(text.parse()?),
        DataType::Uint32 => Value::U32(text.parse()?),
        DataType::Int32 => Value::I32(text.parse()?),
        DataType::Float => Value::Float(text.parse()?),
        DataType::String => Value::String(text.to_string()),
        other => bail!("objects of type {other} cannot be written"),
    };
    Ok(value)
}

/// One row of the registry export.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "OID")]
    oid: String,
    #[serde(rename = "Request Type")]
    request_type: String,
    #[serde(rename = "Response Type")]
    response_type: String,
    #[serde(rename = "Unit")]
    unit: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Enum Values")]
    enum_values: String,
}

fn cmd_registry_csv(args: RegistryCsvArgs) -> Result<()> {
    for group in ObjectGroup::iter() {
        let path = args
            .out_dir
            .join(format!("objectgroup_{}.csv", group.to_string().to_lowercase()));
        let file = File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        let mut writer = csv::Writer::from_writer(file);

        for info in REGISTRY.all().filter(|info| info.group == group) {
            let enum_values = info
                .enum_map
                .map(|map| {
                    map.iter()
                        .map(|(code, label)| format!("{code}={label}"))
                        .collect::<Vec<_>>()
                        .join("; ")
                })
                .unwrap_or_default();
            writer.serialize(CsvRow {
                oid: format!("{:#010X}", info.object_id),
                request_type: info.request_data_type.to_string(),
                response_type: info.response_data_type.to_string(),
                unit: info.unit.unwrap_or(""),
                name: info.name,
                description: info.description.unwrap_or(""),
                enum_values,
            })?;
        }
        writer.flush()?;
    }
    Ok(())
}
