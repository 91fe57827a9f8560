use super::print::print_messages;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use solidz::api::SolidzApi;
use solidz::config::SolidzConfig;
use solidz::error::{Result, SolidzError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: SolidzApi,
    config: SolidzConfig,
    local_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context()?;
    if cli.no_color || !ctx.config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Run { file }) => handle_run(&mut ctx, file),
        Some(Commands::Exec { lines }) => handle_exec(&mut ctx, &lines),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_run(&mut ctx, None),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context() -> Result<AppContext> {
    let local_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dirs = vec![local_dir.clone()];
    if let Some(proj_dirs) = ProjectDirs::from("com", "solidz", "solidz") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    let config = SolidzConfig::load_first(&dirs)?;
    debug!(?config, "loaded config");

    Ok(AppContext {
        api: SolidzApi::new(),
        config,
        local_dir,
    })
}

fn handle_run(ctx: &mut AppContext, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| ctx.config.input_file.clone());
    let reader = open_script(&path)?;
    let result = ctx.api.run_script(reader)?;
    print_messages(&result.messages);
    Ok(())
}

fn open_script(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        SolidzError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open '{}': {}", path.display(), e),
        ))
    })?;
    Ok(BufReader::new(file))
}

fn handle_exec(ctx: &mut AppContext, lines: &[String]) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        let result = ctx.api.execute_line(line, i + 1);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in SolidzConfig::keys() {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.local_dir)?;
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
    }
    Ok(())
}
