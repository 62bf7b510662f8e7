use crate::reports;
use clap::Args;
use keylabels::error::{KeyLabelError, KlResult};
use keylabels::header;
use keylabels::layouts::KnownLayout;
use keylabels::verifier;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Header files to audit in addition to the built-in layouts.
    #[arg(long = "header")]
    pub headers: Vec<PathBuf>,

    /// Compare header values against this built-in layout.
    #[arg(short, long)]
    pub against: Option<KnownLayout>,
}

pub fn run(args: ValidateArgs) -> KlResult<()> {
    let mut failures = 0;

    println!("\n🔎 === LAYOUT AUDIT === 🔎");
    let tables: Vec<_> = KnownLayout::iter().map(|l| l.table()).collect();
    for table in &tables {
        let issues = verifier::audit(table);
        reports::print_issues(&table.name, &issues);
        failures += issues.len();
    }

    for (i, a) in tables.iter().enumerate() {
        for b in &tables[i + 1..] {
            let (only_a, only_b) = verifier::compare_names(a, b);
            if only_a.is_empty() && only_b.is_empty() {
                println!("✅ {} / {}: same label set", a.name, b.name);
            } else {
                println!(
                    "❌ {} / {}: only in first {:?}, only in second {:?}",
                    a.name, b.name, only_a, only_b
                );
                failures += only_a.len() + only_b.len();
            }
        }
    }

    for path in &args.headers {
        let name = path.display().to_string();
        let parsed = header::load_from_file(path)?;
        let table = parsed.table(&name);
        let issues = verifier::audit(&table);
        reports::print_issues(&name, &issues);
        failures += issues.len();

        if let Some(reference) = args.against {
            let diffs = verifier::diff_values(&reference.table(), &table);
            for (label, want, got) in &diffs {
                println!(
                    "   - {} = {} but {} has {}",
                    label,
                    got,
                    reference.display_name(),
                    want
                );
            }
            failures += diffs.len();
        }
    }

    if failures > 0 {
        warn!("Validation found {} problem(s)", failures);
        return Err(KeyLabelError::Validation(format!(
            "{} problem(s) found",
            failures
        )));
    }
    Ok(())
}
