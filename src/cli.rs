// Command-line interface
// Parses arguments, runs one checksum command and renders the output as text or JSON

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::checksum::{
    classify, digest_hex, digest_hex_each, ChecksumAlgorithm, DirectoryDigest, EntryOrder,
    FileChecksum, HashRegistry, HashResult, RollingChecksumKind,
};

/// hashsum - checksums for files, directory trees and text
#[derive(Parser)]
#[command(name = "hashsum")]
#[command(about = "Checksums for files, directory trees and text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Digest files or directory trees
    Digest {
        /// Files or directories to digest
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Algorithm provider name (MD2, MD4, MD5, SHA-1, SHA-256, SHA-384, SHA-512)
        #[arg(short, long, default_value = "SHA-256", value_parser = parse_algorithm)]
        algorithm: ChecksumAlgorithm,
        /// Fold directory entries sorted by file name
        #[arg(long)]
        sorted: bool,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Digest text given on the command line
    Text {
        /// Text arguments, digested as one message in order
        #[arg(required = true)]
        texts: Vec<String>,
        #[arg(short, long, default_value = "SHA-256", value_parser = parse_algorithm)]
        algorithm: ChecksumAlgorithm,
        /// Digest every argument separately and concatenate the digests
        #[arg(long)]
        each: bool,
    },
    /// CRC-32 or Adler-32 checksum of a file
    Checksum {
        path: PathBuf,
        /// Use Adler-32 instead of CRC-32
        #[arg(long)]
        adler: bool,
        /// Print the checksum as a decimal number
        #[arg(long)]
        decimal: bool,
        /// Read buffer size in bytes
        #[arg(long)]
        buffer_size: Option<usize>,
    },
    /// Guess the algorithm that produced a hex digest
    Identify {
        checksum: String,
    },
    /// List supported algorithms
    List {
        #[arg(long)]
        json: bool,
    },
}

fn parse_algorithm(name: &str) -> Result<ChecksumAlgorithm, String> {
    ChecksumAlgorithm::from_name(name).map_err(|e| e.to_string())
}

impl Cli {
    /// Run the selected command and return what should be printed to stdout
    pub fn execute(&self) -> Result<String> {
        match &self.command {
            Commands::Digest {
                paths,
                algorithm,
                sorted,
                json,
            } => {
                let order = if *sorted {
                    EntryOrder::FileName
                } else {
                    EntryOrder::FileSystem
                };
                let computer = FileChecksum::new().with_entry_order(order);
                let walker = DirectoryDigest::new(*algorithm)?.with_order(order);

                let mut results = Vec::with_capacity(paths.len());
                for path in paths {
                    let hash = if path.is_dir() {
                        let (hash, stats) = walker.digest_with_stats(path)?;
                        info!(
                            path = %path.display(),
                            algorithm = %algorithm,
                            files = stats.files,
                            directories = stats.directories,
                            bytes = stats.bytes,
                            "digested directory"
                        );
                        hash
                    } else {
                        let hash = computer.digest(path, *algorithm)?;
                        info!(path = %path.display(), algorithm = %algorithm, "digested file");
                        hash
                    };
                    results.push(HashResult {
                        algorithm: algorithm.name().to_string(),
                        hash,
                        source: path.clone(),
                    });
                }

                if *json {
                    Ok(serde_json::to_string_pretty(&results)?)
                } else {
                    Ok(results
                        .iter()
                        .map(|r| format!("{}  {}", r.hash, r.source.display()))
                        .collect::<Vec<_>>()
                        .join("\n"))
                }
            }
            Commands::Text {
                texts,
                algorithm,
                each,
            } => {
                let buffers = texts.iter().map(String::as_bytes);
                let hash = if *each {
                    digest_hex_each(*algorithm, buffers)?
                } else {
                    digest_hex(*algorithm, buffers)?
                };
                Ok(hash)
            }
            Commands::Checksum {
                path,
                adler,
                decimal,
                buffer_size,
            } => {
                let kind = RollingChecksumKind::from_crc_flag(!*adler);
                let mut computer = FileChecksum::new();
                if let Some(size) = buffer_size {
                    computer = computer.with_buffer_size(*size);
                }

                let value = computer.rolling_checksum(path, kind)?;
                let rendered = if *decimal {
                    value.to_string()
                } else {
                    kind.format_hex(value)
                };
                Ok(format!("{}  {}", rendered, path.display()))
            }
            Commands::Identify { checksum } => Ok(classify(checksum).name().to_string()),
            Commands::List { json } => {
                let algorithms = HashRegistry::list_algorithms();
                if *json {
                    Ok(serde_json::to_string_pretty(&algorithms)?)
                } else {
                    Ok(algorithms
                        .iter()
                        .map(|a| {
                            let kind = if a.cryptographic { "digest" } else { "checksum" };
                            format!("{:<10} {:>4} bits  {}", a.name, a.output_bits, kind)
                        })
                        .collect::<Vec<_>>()
                        .join("\n"))
                }
            }
        }
    }
}
