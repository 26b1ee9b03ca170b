use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

use amf0::{Amf0Object, Amf0Value};
use bytes::Bytes;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::{CliArgs, Command};

fn main() {
    let args = CliArgs::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    if let Err(err) = run(args) {
        error!("{err}");
        exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Inspect { input } => inspect(&input),
        Command::Repair { input, output } => repair(&input, output),
        Command::Rewrite { input, output, set } => rewrite(&input, output, &set),
    }
}

fn read_input(path: &Path) -> Result<Bytes, std::io::Error> {
    Ok(Bytes::from(fs::read(path)?))
}

fn default_output(input: &Path, label: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}.{label}.flv"))
}

fn inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let file = flv::parse(data, &input.display().to_string())?;

    println!("{}", file.header);

    if file.metadata.is_empty() {
        println!("No onMetaData tag found");
    } else {
        println!("Metadata ({} entries):", file.metadata.len());
        for (key, value) in &file.metadata {
            println!("  {key} = {value}");
        }
    }

    println!("Tags ({}):", file.tags.len());
    for (index, tag) in file.tags.iter().enumerate() {
        print!(
            "  #{index:<4} offset {:<10} {:<12} size {:<8} ts {:>10}ms  {}",
            tag.offset,
            tag.tag_type.to_string(),
            tag.data_size,
            tag.timestamp_ms,
            tag.details,
        );
        if let Some(analysis) = &tag.analysis {
            print!("  [{analysis}]");
        }
        println!();
    }

    Ok(())
}

fn repair(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let repaired = flv::repair(&data)?;

    let output = output.unwrap_or_else(|| default_output(input, "repaired"));
    fs::write(&output, &repaired)?;

    if repaired.len() < data.len() {
        info!(
            "Trimmed {} trailing bytes from a truncated recording",
            data.len() - repaired.len()
        );
    }
    info!("Wrote {} ({} bytes)", output.display(), repaired.len());

    Ok(())
}

fn rewrite(
    input: &Path,
    output: Option<PathBuf>,
    overrides: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;

    // Start from the metadata already in the file and layer the edits on.
    let file = flv::parse(data.clone(), &input.display().to_string())?;
    let mut metadata = file.metadata;

    for entry in overrides {
        let Some((key, raw)) = entry.split_once('=') else {
            return Err(format!("invalid --set value '{entry}', expected KEY=VALUE").into());
        };
        apply_override(&mut metadata, key, parse_value(raw));
    }

    let rewritten = flv::rewrite_metadata(&data, &metadata)?;

    let output = output.unwrap_or_else(|| default_output(input, "rewritten"));
    fs::write(&output, &rewritten)?;
    info!(
        "Wrote {} ({} bytes, {} metadata entries)",
        output.display(),
        rewritten.len(),
        metadata.len()
    );

    Ok(())
}

fn apply_override(metadata: &mut Amf0Object, key: &str, value: Amf0Value) {
    match metadata.iter_mut().find(|(entry_key, _)| entry_key == key) {
        Some((_, existing)) => *existing = value,
        None => metadata.push((key.to_string(), value)),
    }
}

fn parse_value(raw: &str) -> Amf0Value {
    if raw.eq_ignore_ascii_case("true") {
        return Amf0Value::Boolean(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Amf0Value::Boolean(false);
    }
    if let Ok(number) = raw.parse::<f64>() {
        return Amf0Value::Number(number);
    }
    Amf0Value::String(raw.to_string())
}
