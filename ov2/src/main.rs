use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ov2gui::{ErrorPolicy, Interface, LoadOptions, LoadReport};

mod args;
use args::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = LoadOptions {
        recursive: cli.recursive,
        on_error: if cli.keep_going {
            ErrorPolicy::SkipFile
        } else {
            ErrorPolicy::Abort
        },
    };
    let (interface, report) = load(&cli.interface_dir, &options)?;

    match cli.command {
        Commands::Check => check(&interface, &report),
        Commands::Dump { output } => dump(&interface, output.as_deref())?,
        Commands::Lookup { name } => lookup(&interface, &name)?,
        Commands::Tree => tree(&interface),
    }

    Ok(())
}

fn load(dir: &Path, options: &LoadOptions) -> Result<(Interface, LoadReport)> {
    let mut interface = Interface::new();
    match interface.load_dir(dir, options) {
        Ok(report) => Ok((interface, report)),
        Err(e) => {
            log::error!("{}", e);
            Err(e).with_context(|| format!("Failed to load interface files from {}", dir.display()))
        }
    }
}

fn check(interface: &Interface, report: &LoadReport) {
    println!("files: {}", report.parsed.len());
    println!("sprites: {}", interface.sprites.len());
    println!(
        "widgets: {} ({} including children)",
        interface.widgets.len(),
        interface.widget_node_count()
    );
    println!("warnings: {}", interface.warnings.len());
    for path in report.ignored() {
        println!("ignored: {}", path.display());
    }
    for (path, e) in &report.failed {
        println!("failed: {}: {}", path.display(), e);
    }
}

fn dump(interface: &Interface, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(interface).context("Failed to serialize interface")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn lookup(interface: &Interface, name: &str) -> Result<()> {
    let sprite = interface.sprite(name);
    let widget = interface.find_widget(name);
    if sprite.is_none() && widget.is_none() {
        bail!("No sprite or widget named '{}'", name);
    }

    let json = serde_json::json!({ "sprite": sprite, "widget": widget });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn tree(interface: &Interface) {
    for root in &interface.widgets {
        root.walk(&mut |widget, depth| {
            println!(
                "{}{} {}",
                "  ".repeat(depth),
                widget.type_name(),
                widget.name.as_deref().unwrap_or("<unnamed>")
            );
        });
    }
}
