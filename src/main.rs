//! CLI entry point for modsize

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use modsize::{
    ConsoleProgress, Manifest, OutputConfig, SizeWalker, TreeFormatter, WalkerConfig, check_root,
    parse_min_percentage, print_json,
};

/// Directory scanned inside the project.
const DEPENDENCY_ROOT: &str = "node_modules";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "modsize")]
#[command(about = "Show what is taking up space in node_modules")]
#[command(version)]
struct Args {
    /// Project directory containing node_modules and package.json
    #[arg(default_value = ".")]
    project: PathBuf,

    /// Hide entries smaller than this share of the total (0-100)
    #[arg(
        long = "min-percentage",
        visible_alias = "p",
        value_name = "PERCENT",
        default_value = "2",
        value_parser = parse_min_percentage
    )]
    min_percentage: f64,

    /// Descend only N levels deep in the printed tree
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not print scan progress
    #[arg(long = "no-progress")]
    no_progress: bool,

    /// Output the full size tree as JSON
    #[arg(long = "json")]
    json: bool,
}

/// Resolve the project directory against the working directory.
fn resolve_project(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if path == Path::new(".") {
        cwd
    } else {
        cwd.join(path)
    }
}

fn run(args: &Args) -> modsize::Result<()> {
    let project = resolve_project(&args.project);
    let root = project.join(DEPENDENCY_ROOT);

    // Both inputs are checked before any traversal starts.
    check_root(&root)?;
    let dev_dependencies = Manifest::load_project(&project)?.dev_dependency_names();

    log::debug!(
        "scanning {} (min percentage {}, {} dev dependencies)",
        root.display(),
        args.min_percentage,
        dev_dependencies.len()
    );

    let walker = SizeWalker::new(WalkerConfig::default());

    if args.json {
        let report = walker.walk(&root)?;
        print_json(&report)?;
        return Ok(());
    }

    let report = if args.no_progress {
        walker.walk(&root)?
    } else {
        walker.scan(&root, &mut ConsoleProgress::stdout())?
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        min_percentage: args.min_percentage,
        max_depth: args.level,
    };
    TreeFormatter::new(output_config, dev_dependencies).print(&report)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version are not errors
        if !e.use_stderr() {
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });

    if let Err(e) = run(&args) {
        eprintln!("modsize: {}", e);
        process::exit(1);
    }
}
