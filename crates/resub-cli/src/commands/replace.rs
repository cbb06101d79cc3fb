use anyhow::{Context, Result, bail};
use resub_core::{Buffer, Cursor, MemoryBuffer, PatternReplacementPair};
use std::process::ExitCode;

use crate::cli::ReplaceArgs;
use crate::commands::{CliSession, finish};

pub fn handle(args: ReplaceArgs, session: &mut CliSession) -> Result<ExitCode> {
    let request = match args.recent {
        Some(index) => match session.recall(index) {
            Some(pair) => {
                tracing::debug!(index, %pair, "reusing recent expression");
                pair
            }
            None => {
                eprintln!("✗ No recent expression at index {}", index);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => PatternReplacementPair::new(args.pattern.unwrap_or_default(), args.replacement),
    };

    let cursor = match args.cursor.as_deref() {
        Some(raw) => parse_cursor(raw)?,
        None => Cursor::default(),
    };

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    tracing::debug!(file = %args.file.display(), bytes = content.len(), "loaded buffer");
    let mut buffer = MemoryBuffer::new(content).with_cursor(cursor);

    let outcome = match session.execute(&mut buffer, &request) {
        Ok(outcome) => outcome,
        Err(err) => return finish::<()>(Err(err)),
    };

    if outcome.replacements > 0 {
        let cursor = buffer.cursor();
        std::fs::write(&args.file, buffer.into_text())
            .with_context(|| format!("writing {}", args.file.display()))?;
        tracing::info!(file = %args.file.display(), replacements = outcome.replacements, "file rewritten");
        println!(
            "✓ Replaced {} match(es) in {}",
            outcome.replacements,
            args.file.display()
        );
        if args.cursor.is_some() {
            println!("  Cursor: {}:{}", cursor.line, cursor.column);
        }
    } else {
        println!("No matches for {} in {}", request.pattern, args.file.display());
    }

    if outcome.recorded {
        println!("  Saved to recent expressions: {}", request);
    }

    Ok(ExitCode::SUCCESS)
}

/// Parse `LINE:COL`
fn parse_cursor(raw: &str) -> Result<Cursor> {
    let Some((line, column)) = raw.split_once(':') else {
        bail!("cursor must be LINE:COL, got {:?}", raw);
    };
    let line = line
        .trim()
        .parse()
        .with_context(|| format!("invalid cursor line in {:?}", raw))?;
    let column = column
        .trim()
        .parse()
        .with_context(|| format!("invalid cursor column in {:?}", raw))?;
    Ok(Cursor::new(line, column))
}
