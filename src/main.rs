//! Tether CLI
//!
//! Usage:
//!   tether [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <FILE>   Theme file overriding the default arrow style (TOML)
//!   -o, --output <FILE>  Write SVG to a file instead of stdout
//!   -c, --compact        Emit compact SVG without indentation
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use tether::{Scene, SvgConfig, Theme};

#[derive(Parser)]
#[command(name = "tether")]
#[command(about = "Render arrow overlays between tracked elements to SVG")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Theme file overriding the default arrow style (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write SVG to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact SVG without indentation
    #[arg(short, long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => Some(theme),
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    // Read input
    let source = match &cli.input {
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

    let mut scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(theme) = &theme {
        scene.apply_theme(theme);
    }

    let config = SvgConfig::default().with_pretty_print(!cli.compact);
    let svg = scene.render(&config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

fn print_intro() {
    println!(
        r##"Tether - SVG arrow overlays between tracked elements

USAGE:
    tether [OPTIONS] [FILE]
    cat scene.toml | tether

OPTIONS:
    -t, --theme <FILE>   Theme file overriding the default arrow style
    -o, --output <FILE>  Write SVG to a file instead of stdout
    -c, --compact        Emit compact SVG without indentation
    -h, --help           Print help

SCENE FORMAT (TOML):
    [[element]]
    id = "a"
    rect = {{ top = 0.0, left = 0.0, width = 100.0, height = 50.0 }}

    [[element.relation]]
    target = "b"
    source_anchor = "bottom"
    target_anchor = "top"
    label = "flows to"

    [[element]]
    id = "b"
    rect = {{ top = 200.0, left = 0.0, width = 100.0, height = 50.0 }}

Anchors: top, bottom, left, right, middle
Relation style fields: stroke_color, stroke_width, stroke_dasharray,
arrow_length, arrow_thickness, end_shape (arrow | none)

THEME FORMAT (TOML):
    [arrow]
    stroke_color = "#2196f3"
    stroke_dasharray = "6,3""##
    );
}
