use anyhow::{Context, Result, bail};
use gdpr_config::Config;
use gdpr_core::{ObfuscationRequest, ObjectWriter, S3Location};
use gdpr_engine::{Obfuscated, Obfuscator};
use std::io::{Read, Write};
use std::path::Path;

use crate::cli::ObfuscateArgs;
use crate::commands::open_store;

pub fn handle(args: ObfuscateArgs, config: &Config) -> Result<()> {
    let request = build_request(&args, config)?;
    let store = open_store(&config.store)?;

    let output = Obfuscator::new(&*store).obfuscate_with_report(&request)?;

    match args.output.as_deref() {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&output.bytes)?;
            stdout.flush()?;
        }
        Some(target) if target.starts_with("s3://") => {
            let location = S3Location::parse(target)?;
            store.put(&location.bucket, &location.key, &output.bytes)?;
            eprintln!("✓ Uploaded to {}", location);
        }
        Some(path) => {
            std::fs::write(path, &output.bytes)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            eprintln!("✓ Wrote {}", path);
        }
    }

    print_summary(&request, &output, args.report)
}

fn build_request(args: &ObfuscateArgs, config: &Config) -> Result<ObfuscationRequest> {
    if let Some(json) = &args.request {
        return Ok(ObfuscationRequest::from_json(json)?);
    }

    if let Some(path) = &args.request_file {
        let json = read_request_file(path)?;
        return Ok(ObfuscationRequest::from_json(&json)?);
    }

    let Some(location) = &args.location else {
        bail!("One of --request, --request-file or --location is required");
    };

    let fields = if args.fields.is_empty() {
        config.redaction.default_fields.clone()
    } else {
        args.fields.clone()
    };

    Ok(ObfuscationRequest::new(location.clone(), fields))
}

fn read_request_file(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))
    }
}

fn print_summary(request: &ObfuscationRequest, output: &Obfuscated, report: bool) -> Result<()> {
    if report {
        eprintln!("{}", serde_json::to_string_pretty(&output.redactions)?);
        return Ok(());
    }

    eprintln!(
        "✓ Obfuscated {} ({}, {} bytes)",
        request.location,
        output.format,
        output.bytes.len()
    );
    if output.redactions.is_empty() {
        eprintln!("  No matching fields.");
    }
    for info in &output.redactions {
        eprintln!("  {}: {} value(s) redacted", info.field, info.count);
    }

    Ok(())
}
