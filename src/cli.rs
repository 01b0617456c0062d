// src/cli.rs
use std::env;
use std::path::PathBuf;

use crate::csv::Delim;
use crate::error::{CartError, Result};
use crate::params::{ExportMode, Params};
use crate::runner;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    let summary = runner::run(&params, None)?;

    if let Some(path) = &summary.out {
        println!(
            "Wrote {} ({} items, {} participants)",
            path.display(),
            summary.items,
            summary.participants
        );
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = need(&mut args, "--input")?;
                params.input = Some(PathBuf::from(v));
            }
            "-p" | "--participants" => {
                params.roster = Some(need(&mut args, "--participants")?);
            }
            "--save" => params.save_roster = true,
            "--assign" => {
                let v = need(&mut args, "--assign")?;
                let (idx, rest) = parse_indexed(&v, "--assign")?;
                let names = rest
                    .split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                params.assigns.push((idx, names));
            }
            "--split" => {
                let v = need(&mut args, "--split")?;
                let (idx, rest) = parse_indexed(&v, "--split")?;
                let n: u32 = rest
                    .trim()
                    .parse()
                    .map_err(|_| CartError::Cli(format!("Bad share count: {rest}")))?;
                if n == 0 {
                    return Err(CartError::Cli(s!("Share count must be at least 1")));
                }
                params.splits.push((idx, n));
            }
            "--mode" => {
                let v = need(&mut args, "--mode")?;
                params.mode = match v.to_ascii_lowercase().as_str() {
                    "matrix" => ExportMode::Matrix,
                    "flat" => ExportMode::Flat,
                    other => return Err(CartError::Cli(format!("Unknown mode: {other}"))),
                };
            }
            "--format" => {
                let v = need(&mut args, "--format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(CartError::Cli(format!("Unknown format: {other}"))),
                };
            }
            "-o" | "--out" => {
                let v = need(&mut args, "--out")?;
                params.out = Some(PathBuf::from(v));
            }
            "--title" => params.title = Some(need(&mut args, "--title")?),
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(CartError::Cli(format!("Unknown arg: {a}"))),
        }
    }
    Ok(())
}

fn need(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| CartError::Cli(format!("Missing value for {flag}")))
}

/// "2=Alice;Bob" → (2, "Alice;Bob")
fn parse_indexed<'a>(v: &'a str, flag: &str) -> Result<(usize, &'a str)> {
    let (idx, rest) = v
        .split_once('=')
        .ok_or_else(|| CartError::Cli(format!("{flag} expects <index>=<value>")))?;
    let idx: usize = idx
        .trim()
        .parse()
        .map_err(|_| CartError::Cli(format!("Bad item index: {idx}")))?;
    Ok((idx, rest))
}
