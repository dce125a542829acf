use std::{io::IsTerminal, path::PathBuf, process::ExitCode};

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser, error::ErrorKind};
use ddfs::{BootSector, Image};

/// Inspects the boot sector of a ddfs image, then overwrites it
#[derive(Debug, Clone, Parser)]
#[command(name = "mkddfs", version)]
pub struct Args {
    /// Path to an existing image, it is never created
    image: PathBuf,
    /// Bytes per sector of the new boot sector
    #[arg(long, default_value_t = 512)]
    sector_size: u16,
    /// Sectors per cluster of the new boot sector
    #[arg(long, default_value_t = 1)]
    sectors_per_cluster: u8,
    /// Number of clusters of the new boot sector
    #[arg(long, default_value_t = 4)]
    clusters: u32,
    /// Read the boot sector back after writing it, and fail if it differs
    #[arg(long)]
    verify: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn boot_sector(&self) -> BootSector {
        BootSector::new(self.sector_size, self.sectors_per_cluster, self.clusters)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            if err.kind() != ErrorKind::MissingRequiredArgument {
                eprint!("{}", err.render());
            }
            println!("{}", Args::command().render_usage());
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{err:#}");
            println!("{err}");
            ExitCode::FAILURE
        }
    })
}

fn run(args: &Args) -> anyhow::Result<()> {
    println!("Image path: {}", args.image.display());

    let mut image = Image::open(&args.image).context("Could not open fs")?;
    let current = image.read_boot_sector().context("Could not read bs")?;
    println!("current boot_sector: {current}");
    log_geometry("current", &current);

    let bs = args.boot_sector();
    println!("writing boot_sector: {bs}");
    log_geometry("new", &bs);
    let written = image.write_boot_sector(&bs);

    if !args.verify {
        if let Err(err) = written {
            tracing::debug!(error = ?err, "ignoring failed boot sector write");
        }
        return Ok(());
    }

    written.context("Could not verify bs")?;
    let read_back = image.read_boot_sector().context("Could not verify bs")?;
    if read_back != bs {
        tracing::debug!(%read_back, expected = %bs, "boot sector mismatch");
        bail!("Could not verify bs");
    }
    tracing::info!("verified boot sector");
    Ok(())
}

fn log_geometry(which: &str, bs: &BootSector) {
    tracing::info!(
        "{which} geometry: cluster size {} bytes, total size {} bytes",
        bs.cluster_size(),
        bs.total_size()
    );
}
