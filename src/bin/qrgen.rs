use clap::Parser;
use qrgen::{ECLevel, Encoder, EncoderOptions, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Encode text as a QR code")]
struct Cli {
    /// Text to encode (UTF-8)
    text: String,
    /// Error correction level: L, M, Q or H
    #[arg(long, default_value = "M", value_parser = parse_level)]
    level: ECLevel,
    /// Pixels per module for image output (1-100)
    #[arg(long, default_value_t = 2)]
    module_size: usize,
    /// Quiet zone in pixels (at least 4 modules, auto-raised)
    #[arg(long, default_value_t = 8)]
    quiet_zone: usize,
    /// ECI assignment value (0-999999)
    #[arg(long)]
    eci: Option<u32>,
    /// Write a PNG to this path instead of printing to the terminal
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_level(value: &str) -> Result<ECLevel, String> {
    match value.to_ascii_uppercase().as_str() {
        "L" => Ok(ECLevel::L),
        "M" => Ok(ECLevel::M),
        "Q" => Ok(ECLevel::Q),
        "H" => Ok(ECLevel::H),
        other => Err(format!("unknown EC level '{other}' (expected L, M, Q or H)")),
    }
}

fn main() {
    let cli = Cli::parse();

    let options = EncoderOptions {
        ec_level: cli.level,
        module_size: cli.module_size,
        quiet_zone: cli.quiet_zone,
        eci: cli.eci,
    };
    let encoder = match Encoder::with_options(options) {
        Ok(encoder) => encoder,
        Err(err) => {
            eprintln!("qrgen: {err}");
            std::process::exit(2);
        }
    };

    let symbol = match encoder.encode(cli.text.as_bytes()) {
        Ok(symbol) => symbol,
        Err(err) => {
            eprintln!("qrgen: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "version {} ({}x{} modules), EC level {:?}, mask {}",
        symbol.version.number(),
        symbol.dimension,
        symbol.dimension,
        symbol.ec_level,
        symbol.mask.index()
    );

    match cli.output {
        Some(path) => {
            let options = encoder.options();
            let img = render::to_luma_image(&symbol, options.module_size, options.quiet_zone);
            if let Err(err) = img.save(&path) {
                eprintln!("qrgen: failed to write {}: {err}", path.display());
                std::process::exit(1);
            }
            println!("wrote {} ({}x{} px)", path.display(), img.width(), img.height());
        }
        None => {
            println!("{}", render::to_ascii(&symbol));
        }
    }
}
