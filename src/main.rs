//! CLI entry point for drift

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use drift::{CompareConfig, FolderComparer, FsFolder, TextReporter};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(about = "Compare two folder trees and report every created, deleted and changed entry")]
#[command(version)]
#[command(after_help = "\
The first folder is the \"new\" side, the second the \"old\" side:\n\
Newer, Larger and friends always describe the first folder relative\n\
to the second. The comparison itself never writes anything.\n\n\
Exit code 0 means the comparison completed, however many differences\n\
were found; usage errors exit 2 and filesystem errors exit 1.")]
struct Args {
    /// The two folders to compare: <new> then <old>
    #[arg(value_name = "FOLDER")]
    folders: Vec<PathBuf>,

    /// Supply a folder to compare (equivalent to a positional folder)
    #[arg(long = "folder", value_name = "PATH")]
    folder: Vec<PathBuf>,

    /// Compare file modification times, treating differences of up to
    /// SECONDS seconds as equal. Useful when one side sits on a server
    /// whose clock is known to be out.
    #[arg(long = "timediff", value_name = "SECONDS")]
    timediff: Option<i64>,

    /// Also print files/folders that are unchanged between the two trees
    #[arg(long = "showequal")]
    showequal: bool,

    /// Don't compare the content of each file, just their sizes
    #[arg(long = "nocontent")]
    nocontent: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Merge positional folders and --folder occurrences in argv order, so
/// "a --folder b" and "--folder a b" both put `a` on the new side.
fn gather_folders(matches: &ArgMatches, args: &Args) -> Vec<PathBuf> {
    let mut found: Vec<(usize, PathBuf)> = Vec::new();

    if let Some(indices) = matches.indices_of("folders") {
        found.extend(indices.zip(args.folders.iter().cloned()));
    }
    if let Some(indices) = matches.indices_of("folder") {
        found.extend(indices.zip(args.folder.iter().cloned()));
    }

    found.sort_by_key(|(index, _)| *index);
    found.into_iter().map(|(_, path)| path).collect()
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("drift: argument parsing error: {}", e);
        process::exit(2);
    });

    let folders = gather_folders(&matches, &args);
    if folders.len() > 2 {
        eprintln!("drift: too many folders specified, maximum of two");
        process::exit(2);
    }
    if folders.len() != 2 {
        let mut command = Args::command();
        command.print_help().ok();
        process::exit(2);
    }

    let config = CompareConfig {
        compare_times: args.timediff.is_some(),
        time_epsilon: args.timediff.unwrap_or(0),
        compare_content: !args.nocontent,
    };

    let new_side = FsFolder::new(&folders[0]);
    let old_side = FsFolder::new(&folders[1]);
    let reporter = TextReporter::new(should_use_color(args.color), args.showequal);
    let mut comparer = FolderComparer::new(config, reporter);

    if let Err(e) = comparer.compare(Some(&new_side), Some(&old_side)) {
        eprintln!("drift: {}", e);
        process::exit(1);
    }
}
