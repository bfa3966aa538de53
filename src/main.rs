// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bytescope::io::{load, read_hex_lines};
use bytescope::{decode_fields, parse_layout, ByteBuffer, ByteCursor, InputFormat, TextEncoding};

mod cli;
use cli::display;
use cli::{Cli, Commands, Input};

/// Env var consulted when `--log` is not given.
const LOG_ENV: &str = "BYTESCOPE_LOG";

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Dump { input, no_color } => {
            let buffer = read_input(&input)?;
            if display::use_colors(no_color) {
                print!("{}", display::colored_dump(&buffer));
            } else {
                print!("{}", buffer.dump());
            }
        }
        Commands::Hex {
            input,
            separator,
            lower,
        } => {
            let buffer = read_input(&input)?;
            let hex = buffer.to_hex_with(&separator);
            println!("{}", if lower { hex.to_lowercase() } else { hex });
        }
        Commands::Info { input } => {
            let buffer = read_input(&input)?;
            print_info(&buffer);
        }
        Commands::And { left, right } => {
            let (left, right) = parse_operands(&left, &right)?;
            println!("{}", left.and(&right)?.to_hex());
        }
        Commands::Or { left, right } => {
            let (left, right) = parse_operands(&left, &right)?;
            println!("{}", left.or(&right)?.to_hex());
        }
        Commands::Xor { left, right } => {
            let (left, right) = parse_operands(&left, &right)?;
            println!("{}", left.xor(&right)?.to_hex());
        }
        Commands::Decode {
            input,
            layout,
            pretty,
        } => {
            let buffer = read_input(&input)?;
            let layout = parse_layout(&layout)?;
            let mut cursor = ByteCursor::new(&buffer);
            let values = decode_fields(&mut cursor, &layout)
                .with_context(|| format!("decoding {} fields", layout.len()))?;
            let json = if pretty {
                serde_json::to_string_pretty(&values)?
            } else {
                serde_json::to_string(&values)?
            };
            println!("{}", json);
            if cursor.remaining() > 0 {
                eprintln!("{} bytes left unread", cursor.remaining());
            }
        }
    }
    Ok(())
}

fn parse_operands(left: &str, right: &str) -> Result<(ByteBuffer, ByteBuffer)> {
    let left = ByteBuffer::from_hex(left).context("left operand")?;
    let right = ByteBuffer::from_hex(right).context("right operand")?;
    Ok((left, right))
}

fn print_info(buffer: &ByteBuffer) {
    println!(
        "length:   {} ({})",
        buffer.len(),
        display::format_size(buffer.len())
    );
    println!("crc32:    {:08X}", buffer.checksum());
    match buffer.as_ascii_str() {
        Some(text) => println!("ascii:    yes {:?}", text),
        None => println!("ascii:    no"),
    }
}

fn read_input(input: &Input) -> Result<ByteBuffer> {
    if input.input != "-" {
        let format = input
            .from
            .map_or(InputFormat::Binary, |source| source.input_format());
        return load(&input.input, format).with_context(|| format!("reading {}", input.input));
    }

    let format = input
        .from
        .map_or(InputFormat::Text(TextEncoding::Hex), |source| {
            source.input_format()
        });
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let buffer = match format {
        InputFormat::Binary => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).context("reading stdin")?;
            ByteBuffer::from(bytes)
        }
        InputFormat::Text(TextEncoding::Raw) => {
            let mut text = String::new();
            reader.read_to_string(&mut text).context("reading stdin")?;
            ByteBuffer::from_raw(&text)
        }
        InputFormat::Text(encoding) => concat_lines(&mut reader, encoding)?,
    };
    tracing::debug!(len = buffer.len(), ?format, "read stdin");
    Ok(buffer)
}

fn concat_lines<R: BufRead>(reader: R, encoding: TextEncoding) -> Result<ByteBuffer> {
    let mut buffer = ByteBuffer::new();
    for (number, line) in read_hex_lines(reader, encoding).enumerate() {
        let line = line.with_context(|| format!("stdin line {}", number + 1))?;
        buffer.join(&line);
    }
    Ok(buffer)
}
