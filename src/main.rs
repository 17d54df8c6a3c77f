use anyhow::Result;
use clap::Parser;
use mixtape::{MixtapeConfig, MixtapePipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mixtape")]
#[command(about = "Apply a batch of playlist changes to a mixtape snapshot", long_about = None)]
struct Args {
    /// Input snapshot (users, songs, playlists)
    input: String,

    /// Changes file (new_playlists, remove_playlists, update_playlists)
    changes: String,

    /// Where to write the updated snapshot
    output: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Indent the output JSON
    #[arg(long)]
    pretty: bool,

    /// Re-read the output and check playlist references
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let input = PathBuf::from(shellexpand::tilde(&args.input).as_ref());
    let changes = PathBuf::from(shellexpand::tilde(&args.changes).as_ref());
    let output = PathBuf::from(shellexpand::tilde(&args.output).as_ref());

    log::info!("Mixtape");
    log::info!("===========================================");
    log::info!("Input:   {:?}", input);
    log::info!("Changes: {:?}", changes);
    log::info!("Output:  {:?}", output);

    let config = MixtapeConfig::new(input, changes, output.clone())
        .with_pretty(args.pretty)
        .with_validation(args.validate);

    let summary = MixtapePipeline::new(config).run()?;

    log::info!(
        "Final snapshot: {} users, {} songs, {} playlists",
        summary.user_count,
        summary.song_count,
        summary.playlist_count
    );

    if let Some(issues) = &summary.issues {
        if issues.is_empty() {
            log::info!("✅ Validation passed!");
        } else {
            log::warn!("Validation found {} issue(s)", issues.len());
        }
    }

    log::info!("Changes applied, output written to: {:?}", output);

    Ok(())
}
