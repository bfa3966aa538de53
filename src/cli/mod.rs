// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bytescope command-line interface.
//!
//! Every command takes one input, a path or `-` for stdin, and an optional
//! `--from` telling how to read it. Files default to their raw bytes; stdin
//! defaults to hex text, one or more lines, concatenated.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};

use bytescope::{InputFormat, TextEncoding};

#[derive(Parser)]
#[command(
    name = "bytescope",
    about = "Inspect, convert and decode byte buffers",
    version
)]
pub struct Cli {
    /// Log filter (e.g. "debug", "bytescope=trace"); overrides BYTESCOPE_LOG
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to interpret the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Raw file bytes
    Binary,
    /// Strict hex digit pairs
    Hex,
    /// Hex digit pairs with separators allowed between pairs
    HexLenient,
    /// Text, one byte per code unit
    Raw,
}

impl Source {
    pub fn input_format(self) -> InputFormat {
        match self {
            Source::Binary => InputFormat::Binary,
            Source::Hex => InputFormat::Text(TextEncoding::Hex),
            Source::HexLenient => InputFormat::Text(TextEncoding::HexLenient),
            Source::Raw => InputFormat::Text(TextEncoding::Raw),
        }
    }
}

#[derive(Args)]
pub struct Input {
    /// Input file, or "-" for stdin
    pub input: String,

    /// Input interpretation (default: binary for files, hex for stdin)
    #[arg(long, value_enum)]
    pub from: Option<Source>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a 16-column hex dump with an ASCII gutter
    Dump {
        #[command(flatten)]
        input: Input,

        /// Disable colors even on a TTY
        #[arg(long)]
        no_color: bool,
    },

    /// Print the input as a hex string
    Hex {
        #[command(flatten)]
        input: Input,

        /// Separator between byte pairs
        #[arg(short, long, default_value = "")]
        separator: String,

        /// Lowercase digits
        #[arg(long)]
        lower: bool,
    },

    /// Print length, CRC32 and ASCII-ness of the input
    Info {
        #[command(flatten)]
        input: Input,
    },

    /// Byte-wise AND of two equal-length hex strings
    And { left: String, right: String },

    /// Byte-wise OR of two equal-length hex strings
    Or { left: String, right: String },

    /// Byte-wise XOR of two equal-length hex strings
    Xor { left: String, right: String },

    /// Decode typed fields from the input and print them as JSON
    Decode {
        #[command(flatten)]
        input: Input,

        /// Comma-separated field kinds, e.g. "u8,u16be,i32le,bytes:4"
        #[arg(short, long)]
        layout: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
