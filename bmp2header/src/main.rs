///
/// bmp2header CLI - Embed binary image data as a C++ header
///
/// Usage: bmp2header <input.bmp> <output.h> <var_name>
///
/// Reads the input file as an opaque byte blob and generates a header
/// defining `<var_name>_data` (the raw bytes as a constant array) and
/// `<var_name>_len` (the byte count).
///
/// Exit status: 0 on success, 1 on a usage or conversion error. The
/// usage line goes to stdout; conversion errors go to stderr.
///

use std::path::PathBuf;

use clap::Parser;

use bmp2header::convert;

#[derive(Parser)]
#[command(name = "bmp2header")]
#[command(about = "Embed binary image data as a C++ header")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// The image file to embed
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// The header file to generate
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Symbol prefix for the generated constants
    #[arg(allow_hyphen_values = true)]
    var_name: String,
}

fn main() {
    // Anything other than exactly three positional arguments falls out
    // of the parse and lands on the usage line, status 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage();
            std::process::exit(1);
        }
    };

    match convert(&cli.input, &cli.output, &cli.var_name) {
        Ok(()) => {
            println!("Generated {}", cli.output.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bmp2header".to_string());
    println!("Usage: {program} <input.bmp> <output.h> <var_name>");
}
