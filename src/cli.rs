use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Define CLI arguments
#[derive(Parser)]
#[command(
    version,
    about = "FLV inspection and repair tool",
    long_about = "Inspect, repair and rewrite FLV (Flash Video) files.\n\
                  \n\
                  The inspect command decodes the file header, every tag, and the\n\
                  onMetaData script tag, and flags timestamp jumps that look like\n\
                  dropped frames. The repair command re-emits every structurally\n\
                  complete tag, trimming a truncated recording to its last good tag.\n\
                  The rewrite command replaces the onMetaData metadata with edited\n\
                  values."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable detailed debug logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a file and print its header, metadata and tag table
    Inspect {
        /// Path to the FLV file to inspect
        input: PathBuf,
    },

    /// Copy every complete tag into a new file, dropping a truncated tail
    Repair {
        /// Path to the FLV file to repair
        input: PathBuf,

        /// Output path (default: <input>.repaired.flv)
        #[arg(short, long, help = "Where to write the repaired file")]
        output: Option<PathBuf>,
    },

    /// Replace the onMetaData tag with edited metadata
    Rewrite {
        /// Path to the FLV file to rewrite
        input: PathBuf,

        /// Output path (default: <input>.rewritten.flv)
        #[arg(short, long, help = "Where to write the rewritten file")]
        output: Option<PathBuf>,

        /// Metadata overrides as key=value pairs; true/false become booleans,
        /// numeric literals become numbers, everything else a string
        #[arg(
            short,
            long = "set",
            value_name = "KEY=VALUE",
            help = "Override a metadata entry (repeatable)"
        )]
        set: Vec<String>,
    },
}
