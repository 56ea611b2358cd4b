//! `fontrom` CLI — extract an embedded bitmap-font table from a script
//! file and write it as a plain hex file for HDL/simulation tooling.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use fontrom_core::table::{FontTable, GLYPH_HEIGHT};
use fontrom_core::{emit, Scanner};

#[derive(Parser)]
#[command(
    version,
    about = "Convert an embedded bitmap-font table to a line-oriented hex file"
)]
struct Cli {
    /// Script file containing the font table as 0xNN literals
    #[arg(default_value = "fontlist.js")]
    input: PathBuf,

    /// Output hex file, one row per line
    #[arg(short, long, default_value = "font8x16.hex")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let text = match fs::read_to_string(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", cli.input.display());
            eprintln!(
                "Download 'fontlist.js' from the susam/pcface repo \
                 (out/modern-dos-8x16/fontlist.js) and place it here."
            );
            process::exit(1);
        }
    };
    println!("Reading {} ...", cli.input.display());

    let rows = Scanner::new(&text).scan_all();

    // A partial glyph is fatal: no output may be produced from it.
    let table = match FontTable::from_tokens(rows) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "Found {} glyphs of {GLYPH_HEIGHT} rows each",
        table.glyph_count()
    );
    if let Some(warn) = table.size_warning() {
        eprintln!("Warning: {warn}. Proceeding anyway.");
    }

    println!("Writing {} ...", cli.output.display());
    if let Err(e) = fs::write(&cli.output, emit(&table)) {
        eprintln!("Error writing {}: {e}", cli.output.display());
        process::exit(1);
    }

    println!("Done.");
    println!("Place the hex file where your simulator/synth can see it.");
}
