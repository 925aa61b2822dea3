use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dirinfo_core::printer::print_tree;
use dirinfo_core::scanner::find_oldest;
use dirinfo_core::{build_snapshot, codec, export, logging, ScanOptions};

const USAGE: &str = "Proszę podać ścieżkę katalogu jako parametr wywołania programu.";

#[derive(Parser, Debug)]
#[command(name = "dirinfo-cli", about = "Directory tree listing with oldest-file report")]
struct Args {
    /// Root directory to list
    root: Option<PathBuf>,
    /// List children by name instead of filesystem order
    #[arg(long)]
    sorted: bool,
    /// Follow symbolic links
    #[arg(long)]
    follow_links: bool,
    /// Also write the encoded snapshot to this path
    #[arg(short, long)]
    json: Option<PathBuf>,
    /// Also write the snapshot as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();
    let Some(root) = args.root.as_deref() else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    match run(&args, root) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, root: &Path) -> Result<()> {
    let opts = ScanOptions {
        follow_links: args.follow_links,
        sort_entries: args.sorted,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Zawartość katalogu {}:", root.display())?;
    print_tree(root, &mut out, opts)?;
    writeln!(out)?;

    // a failed snapshot only skips the round-trip below
    let snapshot = build_snapshot(root, &opts);

    match find_oldest(root, &opts) {
        Some(oldest) => writeln!(
            out,
            "Najstarszy plik: {}, Data utworzenia: {}",
            oldest.name,
            oldest.display_timestamp()
        )?,
        None => writeln!(out, "Brak plików w katalogu.")?,
    }

    let snapshot =
        snapshot.with_context(|| format!("cannot build snapshot of {}", root.display()))?;
    let bytes = codec::encode(&snapshot)?;

    if let Some(path) = &args.json {
        std::fs::write(path, &bytes)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }
    if let Some(path) = &args.csv {
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        export::to_csv(&snapshot, BufWriter::new(file))?;
    }

    let decoded = codec::decode(&bytes).context("snapshot round-trip failed")?;
    writeln!(out, "Zawartość kolekcji po deserializacji:")?;
    for (name, value) in decoded.iter() {
        writeln!(out, "{name} -> {value} B")?;
    }
    tracing::debug!("round-tripped {} entries ({} bytes)", decoded.len(), bytes.len());
    Ok(())
}
