use clap::Parser;
use keygrid::cli::Session;
use keygrid::cli::input::LineInput;
use keygrid::core::BoardEngine;
use keygrid::core::config;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "keygrid", about = "Key/value grid editor")]
struct Args {
    /// Board file to load and save
    file: Option<String>,

    /// Seed for generated cell values
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        config::KeygridConfig::default()
    });
    let resolved = config::resolve(&file_config, args.file.as_deref(), args.seed);

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Keygrid starting up with board file: {}",
        resolved.board_file.display()
    );

    let engine = match resolved.seed {
        Some(seed) => BoardEngine::seeded(seed),
        None => BoardEngine::with_defaults(),
    };

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock(), io::stdout());
    let mut out = io::stdout();

    let mut session = Session::open(engine, resolved.board_file, &mut input, &mut out)?;
    session.run(&mut input, &mut out)?;
    out.flush()?;

    log::info!("Keygrid shutting down");
    Ok(())
}
