//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use tracing::debug;

use seqsort_cli::completion::generate_completion;
use seqsort_cli::input::{parse_inline_rows, parse_json_rows, read_input};
use seqsort_cli::output::write_to_file;
use seqsort_cli::{CLIResultPresenter, ResultPresenter, SequenceReport, SortReport};
use seqsort_core::registry::{
    ComparerFactory, ComparerSpec, DefaultComparerFactory, DefaultFormulaFactory, FormulaFactory,
    FormulaSpec,
};
use seqsort_core::sequence::SequenceBuilder;
use seqsort_core::sort::{checked_sort_counted, Key};
use seqsort_core::SeqError;

use crate::config::{AppConfig, Command, SequenceArgs, SortArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Command::Sequence(args) => run_sequence(config, args),
        Command::Sort(args) => run_sort(config, args),
        Command::Completion { shell } => {
            generate_completion::<AppConfig>(*shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Terms rendered as decimal strings, ending early on overflow.
type Terms = Box<dyn Iterator<Item = Result<String, SeqError>>>;

fn run_sequence(config: &AppConfig, args: &SequenceArgs) -> Result<()> {
    let spec = FormulaSpec::from_str(&args.formula)?;
    let terms = build_terms(&DefaultFormulaFactory::new(), args)?;

    if config.quiet && !config.json {
        return stream_terms(terms, config.output.as_deref());
    }

    let start = Instant::now();
    let mut produced = Vec::new();
    let mut failure = None;
    for term in terms {
        match term {
            Ok(term) => produced.push(term),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }
    let duration = start.elapsed();
    debug!(formula = %spec, terms = produced.len(), ?duration, "Sequence generated");

    let report = SequenceReport {
        formula: spec.to_string(),
        count: produced.len(),
        terms: produced,
    };
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json);
    presenter.present_sequence(&report, duration);

    if let Some(ref path) = config.output {
        write_to_file(path, &presenter.render_sequence(&report, duration, false))
            .with_context(|| format!("failed to write {path}"))?;
    }
    failure.map_or(Ok(()), |err| Err(err.into()))
}

/// Validate the arguments and return the lazy term stream.
fn build_terms(factory: &dyn FormulaFactory, args: &SequenceArgs) -> Result<Terms, SeqError> {
    if args.checked {
        let mut builder = SequenceBuilder::<i64, _>::new()
            .count(args.count)
            .calculator(factory.get_checked(&args.formula)?);
        if let Some(a) = parse_seed::<i64>("first", args.first.as_deref())? {
            builder = builder.first(a);
        }
        if let Some(b) = parse_seed::<i64>("second", args.second.as_deref())? {
            builder = builder.second(b);
        }
        let sequence = builder.build_checked()?;
        Ok(Box::new(sequence.map(|term| term.map(|t| t.to_string()))))
    } else {
        let mut builder = SequenceBuilder::<BigInt, _>::new()
            .count(args.count)
            .calculator(factory.get(&args.formula)?);
        if let Some(a) = parse_seed::<BigInt>("first", args.first.as_deref())? {
            builder = builder.first(a);
        }
        if let Some(b) = parse_seed::<BigInt>("second", args.second.as_deref())? {
            builder = builder.second(b);
        }
        let sequence = builder.build()?;
        Ok(Box::new(sequence.map(|t| Ok(t.to_string()))))
    }
}

/// Print each term as it is produced; terms before an overflow are kept.
fn stream_terms(terms: Terms, output: Option<&str>) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut file = output
        .map(|path| {
            File::create(path)
                .map(BufWriter::new)
                .with_context(|| format!("failed to write {path}"))
        })
        .transpose()?;

    let mut written = 0usize;
    let mut failure = None;
    for term in terms {
        match term {
            Ok(term) => {
                writeln!(out, "{term}")?;
                if let Some(file) = file.as_mut() {
                    writeln!(file, "{term}")?;
                }
                written += 1;
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    out.flush()?;
    if let Some(file) = file.as_mut() {
        file.flush()?;
    }
    debug!(terms = written, "Sequence streamed");
    failure.map_or(Ok(()), |err| Err(err.into()))
}

/// Parse an optional seed; a missing seed is left for the builder to reject.
fn parse_seed<T: FromStr>(which: &str, raw: Option<&str>) -> Result<Option<T>, SeqError> {
    raw.map(|s| {
        s.trim().parse::<T>().map_err(|_| {
            SeqError::InvalidArgument(format!("{which} seed is not an integer: '{s}'"))
        })
    })
    .transpose()
}

fn run_sort(config: &AppConfig, args: &SortArgs) -> Result<()> {
    let spec = ComparerSpec::from_str(&args.by)?;
    let comparer = DefaultComparerFactory::new().get(&args.by)?;

    let mut rows: Option<Vec<Option<Key>>> = match (&args.rows, &args.input) {
        (Some(inline), _) => Some(parse_inline_rows(inline)?),
        (None, Some(path)) => parse_json_rows(&read_input(path)?)?,
        (None, None) => parse_json_rows(&read_input("-")?)?,
    };

    let start = Instant::now();
    let stats = checked_sort_counted(rows.as_deref_mut(), Some(comparer.as_ref()))?;
    let duration = start.elapsed();
    debug!(comparer = %spec, ?stats, ?duration, "Rows sorted");

    let report = SortReport {
        comparer: spec.to_string(),
        rows: rows.unwrap_or_default().into_iter().flatten().collect(),
        stats,
    };
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json);
    presenter.present_sorted(&report, duration);

    if let Some(ref path) = config.output {
        write_to_file(path, &presenter.render_sorted(&report, duration, false))
            .with_context(|| format!("failed to write {path}"))?;
    }
    Ok(())
}
