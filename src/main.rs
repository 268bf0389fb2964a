//! Component Doc CLI
//!
//! Usage:
//!   component-doc [OPTIONS] [SCENE]
//!
//! Options:
//!   --select <ID>               Node to document, overriding the snapshot selection
//!   -s, --stylesheet <FILE>     Stylesheet file for colors and fonts (TOML format)
//!   -f, --format <FORMAT>       Output format: svg or json
//!   -o, --output <FILE>         Write output to a file instead of stdout
//!   --do-dont-rows <N>          Number of Do/Don't rows
//!   --match-by <STRATEGY>       How property highlights find their layer: name or path
//!   -d, --debug                 Print the laid-out tree and outline frames
//!   -v, --verbose               Debug logging on stderr
//!   -h, --help                  Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use component_doc::scene::NodeId;
use component_doc::{
    render_host, tracing_config, DocConfig, MatchStrategy, MemoryHost, OutputFormat, Stylesheet,
};

#[derive(Parser)]
#[command(name = "component-doc")]
#[command(about = "Generate documentation frames for design-system components")]
struct Cli {
    /// Scene snapshot in JSON (reads from stdin if not provided)
    scene: Option<PathBuf>,

    /// Node id to document; replaces the selection stored in the snapshot
    #[arg(long = "select", value_name = "ID")]
    select: Vec<String>,

    /// Stylesheet file for colors and fonts (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of Do/Don't rows
    #[arg(long, default_value_t = 1)]
    do_dont_rows: usize,

    /// How property highlights find their layer in a preview
    #[arg(long, value_enum, default_value_t = MatchBy::Name)]
    match_by: MatchBy,

    /// Debug mode: print the laid-out tree and outline frames
    #[arg(short, long)]
    debug: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum MatchBy {
    Name,
    Path,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tracing_config::init(cli.verbose) {
        eprintln!("Error initializing logging: {}", e);
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let source = match &cli.scene {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut host = match MemoryHost::from_json(&source) {
        Ok(host) => host,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if !cli.select.is_empty() {
        host.select(cli.select.iter().map(NodeId::new).collect());
    }

    let config = DocConfig::new()
        .with_stylesheet(stylesheet)
        .with_do_dont_rows(cli.do_dont_rows)
        .with_match_strategy(match cli.match_by {
            MatchBy::Name => MatchStrategy::Name,
            MatchBy::Path => MatchStrategy::Path,
        })
        .with_output(match cli.format {
            Format::Svg => OutputFormat::Svg,
            Format::Json => OutputFormat::Json,
        })
        .with_debug(cli.debug);

    let rendered = match render_host(&mut host, &config) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", rendered),
    }
}
