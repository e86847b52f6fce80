//! tokengen CLI
//!
//! Usage:
//!   tokengen [OPTIONS] --project <FILE> [TEMPLATE]
//!
//! Options:
//!   -p, --project <FILE>  Project assets exported as JSON
//!   -c, --config <FILE>   Configuration file (TOML format)
//!   -t, --tokens          Show token and transformation reference
//!   -v, --verbose         Log parsing progress to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tokengen::template::{COLOR_TOKENS, TEXT_STYLE_TOKENS};
use tokengen::transform::TransformationRegistry;
use tokengen::{generate_with_config, Config, ProjectAssets};

#[derive(Parser)]
#[command(name = "tokengen")]
#[command(about = "Generate platform source code from design assets")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    template: Option<PathBuf>,

    /// Project assets exported as JSON
    #[arg(short, long, required_unless_present = "tokens")]
    project: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show token and transformation reference
    #[arg(short, long)]
    tokens: bool,

    /// Log parsing progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("tokengen=debug")
    } else {
        EnvFilter::new("tokengen=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.tokens {
        print_tokens();
        return;
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    // Load project assets
    let Some(project_path) = &cli.project else {
        eprintln!("Error: --project is required");
        std::process::exit(1);
    };
    let assets = match ProjectAssets::from_file(project_path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error loading project '{}': {}", project_path.display(), e);
            std::process::exit(1);
        }
    };

    // Read template
    let (template, filename) = match &cli.template {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match generate_with_config(&template, &assets, &config) {
        Ok(output) => {
            print!("{}", output);
        }
        Err(e) => {
            eprint!("{}", e.format(&template, &filename));
            std::process::exit(1);
        }
    }
}

const DIRECTIVE_REFERENCE: &str = r#"TOKENGEN TEMPLATE REFERENCE
===========================

DIRECTIVES
----------
{{% FOR color %}} ... {{% ENDFOR %}}        Repeat for every project color
{{% FOR textStyle %}} ... {{% ENDFOR %}}    Repeat for every text style
{{% IF <token> %}} ... {{% ENDIF %}}        Keep body when the token has a value
{{% <token>|<transformation>... %}}         Substitute a token value

IF works on whole lines or inline:
    let x{{% IF color.identity %}} // named{{% ENDIF %}}
"#;

fn print_tokens() {
    println!("{}", DIRECTIVE_REFERENCE);

    println!("COLOR TOKENS\n------------");
    for token in COLOR_TOKENS {
        println!("{}", token);
    }

    println!("\nTEXT STYLE TOKENS\n-----------------");
    for token in TEXT_STYLE_TOKENS {
        println!("{}", token);
    }

    println!("\nTRANSFORMATIONS\n---------------");
    for name in TransformationRegistry::global().names() {
        println!("{}", name);
    }
}
