use clap::Parser;
use tracing::{debug, error, info};

use viren::cli::Args;
use viren::output::display_result;
use viren::progress::Progress;
use viren::{AppError, EditorConfig, ExternalEditor, RenameOptions, RenameTransaction};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    viren::logging::init(args.verbose);
    debug!(verbosity = args.verbose, "Logging initialized");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("{}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let editor = ExternalEditor::new(EditorConfig::from_env()?);
    let mut progress = Progress::new_with_verbosity(args.verbose > 0);

    let options = RenameOptions { dry_run: args.dry };
    let transaction = RenameTransaction::new(&args.target_dir, &editor, options);

    info!(path = ?transaction.work_dir(), "Renaming entries");
    let report = transaction.run(&mut progress)?;

    display_result(&report, &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
