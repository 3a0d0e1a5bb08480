//! masthead - CMS header block decorator

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use masthead::{DecorateOptions, HeaderConfig, dom};

#[derive(Parser)]
#[command(name = "masthead")]
#[command(version, about = "Decorate CMS header blocks into navigation markup", long_about = None)]
#[command(after_help = "EXAMPLES:
    masthead page.html out.html    Decorate the header blocks in a page
    masthead -m page.html          Show the parsed config and nav model")]
struct Cli {
    /// Input HTML file containing one or more header blocks
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output HTML file
    #[arg(value_name = "OUTPUT", required_unless_present = "model")]
    output: Option<String>,

    /// Print the first block's config and nav model as JSON without decorating
    #[arg(short, long)]
    model: bool,

    /// Include the emitted event bindings in the JSON output
    #[arg(short, long)]
    bindings: bool,

    /// Class that marks a decoratable block
    #[arg(long, default_value = "header")]
    block_class: String,

    /// Code-base-relative prefix for the default logo location
    #[arg(long, default_value = "")]
    code_base_path: String,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = if cli.model {
        show_model(&cli)
    } else {
        convert(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(serde::Serialize)]
struct ModelDump {
    entries: std::collections::HashMap<String, String>,
    config: HeaderConfig,
    nav: Vec<masthead::NavEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bindings: Option<Vec<masthead::Binding>>,
}

fn show_model(cli: &Cli) -> Result<(), String> {
    let html = fs::read_to_string(&cli.input).map_err(|e| e.to_string())?;

    let page = dom::parse_html(&html);
    let block = dom::find_elements_with_class(&page.document, &cli.block_class)
        .into_iter()
        .next()
        .ok_or_else(|| format!("no block element with class \"{}\" found", cli.block_class))?;

    let entries = masthead::parse_rows(&block);
    let config = HeaderConfig::from_entries(&entries);
    let nav = masthead::parse_structure(config.nav_structure.as_deref());

    let bindings = cli.bindings.then(|| {
        let options = DecorateOptions {
            code_base_path: cli.code_base_path.clone(),
        };
        masthead::decorate_with(&block, &options)
    });

    let dump = ModelDump {
        entries,
        config,
        nav,
        bindings,
    };
    let json = serde_json::to_string_pretty(&dump).map_err(|e| e.to_string())?;
    println!("{json}");

    Ok(())
}

fn convert(cli: &Cli) -> Result<(), String> {
    let output = cli.output.as_deref().ok_or("output file required")?;

    let html = fs::read_to_string(&cli.input).map_err(|e| e.to_string())?;
    let options = DecorateOptions {
        code_base_path: cli.code_base_path.clone(),
    };
    let decorated = masthead::decorate_document_with(&html, &cli.block_class, &options)
        .map_err(|e| e.to_string())?;

    fs::write(output, &decorated.html).map_err(|e| e.to_string())?;

    if cli.bindings {
        let json = serde_json::to_string_pretty(&decorated.bindings).map_err(|e| e.to_string())?;
        println!("{json}");
    }

    if !cli.quiet {
        eprintln!(
            "decorated {} block(s): {} -> {}",
            decorated.blocks, cli.input, output
        );
    }

    Ok(())
}
