use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use devmap_core::DeviceDescriptor;
use devmap_store::{identity_for, process_device, ConfigStore, Outcome, Settings};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "devmap",
    about = "Resolve custom parameter bank configurations against device descriptors"
)]
struct Cli {
    /// Root directory holding devices.cfg, Devices/ and Unmapped/
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a device against its stored configuration, writing the
    /// unmapped report and seeding a draft config per the settings
    Resolve {
        /// Device descriptor (.json)
        device: PathBuf,
    },

    /// Seed a draft configuration for a device, regardless of the
    /// new-devices toggle
    Seed {
        /// Device descriptor (.json)
        device: PathBuf,

        /// Seed with Ignore = True
        #[arg(long)]
        ignore: bool,
    },

    /// Show a device's identity and configuration status
    Info {
        /// Device descriptor (.json)
        device: PathBuf,
    },
}

fn load_device(path: &Path) -> Result<DeviceDescriptor> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let device: DeviceDescriptor = serde_json::from_str(&text)
        .with_context(|| format!("parsing device descriptor {}", path.display()))?;
    Ok(device)
}

fn run_resolve(root: &Path, device_path: &Path) -> Result<()> {
    let device = load_device(device_path)?;
    let settings = Settings::load(root);
    let mut store = ConfigStore::new(root);

    match process_device(&device, &mut store, &settings)? {
        Outcome::Skipped => {
            println!("skipped: device filtered out or has no usable identity");
        }
        Outcome::NotConfigured { identity, seeded } => {
            println!("{identity}: no configuration found");
            if let Some(path) = seeded {
                println!("seeded draft config at {}", path.display());
            }
        }
        Outcome::Resolved {
            identity,
            resolution,
            unmapped,
        } => {
            println!("{identity}: {} bank(s)", resolution.banks.len());
            for bank in &resolution.banks {
                println!("[{}]", bank.name);
                for p in &bank.parameters {
                    let values = match (&p.value_list, &p.start_points) {
                        (Some(labels), Some(points)) => {
                            let pairs: Vec<String> = labels
                                .iter()
                                .zip(points)
                                .map(|(l, s)| format!("{l}@{s}"))
                                .collect();
                            format!("  [{}]", pairs.join(", "))
                        }
                        (Some(labels), None) => format!("  [{}]", labels.join(", ")),
                        _ => String::new(),
                    };
                    println!("  {:3}  {} -> {}{}", p.index, p.original_name, p.display_name, values);
                }
            }
            if unmapped.is_empty() {
                println!("all parameters mapped");
            } else {
                println!("{} unmapped parameter(s)", unmapped.len());
            }
        }
    }
    Ok(())
}

fn run_seed(root: &Path, device_path: &Path, ignore: bool) -> Result<()> {
    let device = load_device(device_path)?;
    let settings = Settings::load(root);

    let identity = identity_for(&device, &settings)
        .context("device has no usable identity")?;

    if devmap_store::seed_config(root, &identity, &device, ignore)? {
        println!(
            "seeded {}",
            devmap_store::config_path(root, &identity).display()
        );
    } else {
        println!("{identity}: config already exists, not overwriting");
    }
    Ok(())
}

fn run_info(root: &Path, device_path: &Path) -> Result<()> {
    let device = load_device(device_path)?;
    let settings = Settings::load(root);
    let mut store = ConfigStore::new(root);

    let Some(identity) = identity_for(&device, &settings) else {
        println!("device has no usable identity");
        return Ok(());
    };

    println!("Identity:    {identity}");
    println!("Parameters:  {}", device.matchable_parameters().len());

    match store.load(&identity)? {
        Some(config) => {
            println!("Config:      {}", devmap_store::config_path(root, &identity).display());
            println!("Banks:       {}", config.banks.len());
            let resolution = devmap_core::resolve_banks(&device, config);
            let unmapped = devmap_core::unmapped_parameters(&device, &resolution.used_names);
            println!("Mapped:      {}", resolution.used_names.len());
            println!("Unmapped:    {}", unmapped.len());
        }
        None => {
            println!("Config:      none");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    log::debug!("using root {}", cli.root.display());

    match cli.command {
        Command::Resolve { device } => run_resolve(&cli.root, &device),
        Command::Seed { device, ignore } => run_seed(&cli.root, &device, ignore),
        Command::Info { device } => run_info(&cli.root, &device),
    }
}
