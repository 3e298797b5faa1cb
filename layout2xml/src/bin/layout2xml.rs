use anyhow::Context;
use clap::Parser;
use layout2xml::report::{self, BoardStyle, CharacterSetLiterals};
use layout2xml::{convert_layout_to_xml, default_output_path, Case, Conversion};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "8VIM layout to keyboard_actions.xml generator", long_about = None)]
struct Args {
    /// Input layout file path
    input: PathBuf,

    /// Output XML file path (defaults to input with .xml extension)
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Draw the boards in the compact style
    #[arg(long)]
    compact: bool,

    /// Only write the XML file, skip the boards and usage notes
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Determine output path
    let output_path = args.output.clone().unwrap_or_else(|| default_output_path(&args.input));

    log::info!("Converting {} to {}", args.input.display(), output_path.display());

    let conversion = convert_layout_to_xml(&args.input, &output_path)
        .with_context(|| format!("failed to generate {}", output_path.display()))?;

    if !args.quiet {
        let style = if args.compact { BoardStyle::Compact } else { BoardStyle::Regular };
        print_report(&conversion, &output_path, style);
    }

    Ok(())
}

fn print_report(conversion: &Conversion, output_path: &Path, style: BoardStyle) {
    let mut literals = Vec::with_capacity(conversion.config.layers.len());

    for (index, layer) in conversion.config.layers.iter().enumerate() {
        if conversion.config.layers.len() > 1 {
            println!("=== Layer {} ===", index);
        }
        for case in [Case::Lower, Case::Upper] {
            println!("{}", report::render_board(layer.get(case), case, style));
        }
        literals.push(CharacterSetLiterals::new(index, layer));
    }

    println!();
    print!("{}", report::usage_notes(&literals, output_path));
}
