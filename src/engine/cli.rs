//! CLI command handler: scan, print the leaderboard, then optionally build the feature prompt and export.

use anyhow::Result;
use log::{debug, warn};

use crate::ScanOpts;
use crate::engine::arg_parser::Cli;
use crate::engine::tools::validate_root;
use crate::pipeline::scan_labels;
use crate::report::{export_report, generate_feature_prompt, print_leaderboard, print_summary};
use crate::utils::{apply_file_to_opts, load_labelscan_toml, setup_logging};

/// Defaults, then `.labelscan.toml` from the scan directory, then CLI flags.
/// A settings file that cannot be read or parsed is reported at warn and ignored.
pub fn setup_opts(cli: &Cli) -> ScanOpts {
    let mut opts = ScanOpts::default();
    let loaded = load_labelscan_toml(&cli.dir);
    if let Ok(Some(ref file)) = loaded {
        apply_file_to_opts(file, &mut opts);
    }
    cli.apply_to_opts(&mut opts);
    setup_logging(opts.verbose);
    match loaded {
        Ok(Some(_)) => debug!("Loaded settings from {}", cli.dir.display()),
        Ok(None) => {}
        Err(e) => warn!("Ignoring settings file: {:#}", e),
    }
    opts
}

/// Run a full scan: leaderboard, optional feature prompt, optional export, summary.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let root = validate_root(&cli.dir)?;
    println!("Scanning directory: {}\n", root.display());

    let report = scan_labels(&root, &opts)?;
    if report.file_stats.is_empty() {
        println!("No label files found!");
        return Ok(());
    }

    print_leaderboard(&report);

    if opts.feature {
        generate_feature_prompt(&report, opts.top, opts.min_frequency, &opts.feature_path())?;
    }
    if opts.export {
        let path = opts.export_path();
        export_report(&report, &path)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    print_summary(&report, &root);
    Ok(())
}
