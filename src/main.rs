use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use vlpcheck::{format_text, verify_installation, InstallationReport, Manifest};

#[derive(Parser)]
#[command(
    name = "vlpcheck",
    version,
    about = "Installation checker for the Video Library Protect WordPress plugin"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for verification results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON report object
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the plugin installation (default when no command is given)
    #[command(alias = "check")]
    Verify {
        /// Root directory of the plugin project to inspect
        #[arg(long)]
        root: Option<PathBuf>,
        /// YAML file overriding the expected file lists
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Watch for changes and re-verify (requires 'watch' feature)
        #[arg(long)]
        watch: bool,
    },
    /// Print the effective manifest as JSON
    #[command(alias = "show-manifest")]
    Manifest {
        /// YAML file overriding the expected file lists
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Verify {
            root,
            manifest,
            format,
            watch,
        }) => {
            run_verify(root, manifest, format, watch);
        }
        Some(Commands::Manifest { manifest }) => {
            let manifest = load_manifest(manifest.as_deref());
            println!("{}", serde_json::to_string_pretty(&manifest).unwrap());
        }
        // Bare invocation verifies the current working directory.
        None => run_verify(None, None, Format::Text, false),
    }
}

fn run_verify(
    root: Option<PathBuf>,
    manifest_path: Option<PathBuf>,
    format: Format,
    watch: bool,
) {
    let manifest = load_manifest(manifest_path.as_deref());
    let root = root.unwrap_or_else(|| PathBuf::from("."));

    // Watch mode: re-run verification on filesystem changes.
    #[cfg(feature = "watch")]
    if watch {
        run_watch_mode(&root, &manifest);
        return;
    }
    #[cfg(not(feature = "watch"))]
    if watch {
        eprintln!(
            "Watch mode requires the 'watch' feature. Rebuild with: cargo build --features watch"
        );
        std::process::exit(1);
    }

    let report = verify_installation(&root, &manifest);
    print_report(&report, format);

    if !report.succeeded() {
        std::process::exit(1);
    }
}

fn print_report(report: &InstallationReport, format: Format) {
    match format {
        Format::Text => {
            for w in &report.shortcodes.warnings {
                eprintln!("warning: {}: {}", w.path, w.message);
            }
            print!("{}", format_text(report));
        }
        Format::Json => {
            // The report serializes its aggregates; append the derived
            // success flag so callers need not recompute it.
            let mut doc = serde_json::to_value(report).unwrap();
            doc["success"] = serde_json::Value::Bool(report.succeeded());
            println!("{}", serde_json::to_string_pretty(&doc).unwrap());
        }
    }
}

fn load_manifest(path: Option<&Path>) -> Manifest {
    match path {
        Some(p) => Manifest::from_file(p).unwrap_or_else(|e| {
            eprintln!("vlpcheck: cannot load manifest {}: {e}", p.display());
            std::process::exit(1);
        }),
        None => Manifest::default(),
    }
}

fn print_about() {
    println!(
        "vlpcheck: Video Library Protect Installation Checker\n\
         ├─ version:  {}\n\
         ├─ licence:  {}\n\
         └─ purpose:  verify plugin files, generated pages, and shortcodes",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    );
}

/// Run watch mode: re-verify on filesystem changes (requires `watch` feature).
#[cfg(feature = "watch")]
fn run_watch_mode(root: &Path, manifest: &Manifest) {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    run_watch_pass(root, manifest);

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(tx, Config::default()).unwrap_or_else(|e| {
        eprintln!("vlpcheck watch: failed to create watcher: {e}");
        std::process::exit(1);
    });
    if let Err(e) = watcher.watch(root, RecursiveMode::Recursive) {
        eprintln!("vlpcheck watch: failed to watch {}: {e}", root.display());
        std::process::exit(1);
    }

    eprintln!("Watching for changes... (press Ctrl+C to stop)");

    let debounce = Duration::from_millis(500);
    let mut last_run = Instant::now();

    loop {
        match rx.recv() {
            Ok(_event) => {
                // Debounce: skip if we ran too recently.
                if last_run.elapsed() < debounce {
                    // Drain pending events.
                    while rx.try_recv().is_ok() {}
                    continue;
                }

                // Clear terminal.
                eprint!("\x1b[2J\x1b[H");

                run_watch_pass(root, manifest);
                last_run = Instant::now();

                // Drain any queued events during verification.
                while rx.try_recv().is_ok() {}
            }
            Err(e) => {
                eprintln!("vlpcheck watch: watcher error: {e}");
                break;
            }
        }
    }
}

/// One verification pass inside watch mode; never exits the process.
#[cfg(feature = "watch")]
fn run_watch_pass(root: &Path, manifest: &Manifest) {
    let report = verify_installation(root, manifest);
    print_report(&report, Format::Text);
}
