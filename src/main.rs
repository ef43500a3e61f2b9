//! pluscode: command line front end for pluscode-rs

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, CsvArgs, DecodeArgs, EncodeArgs, ReferenceArgs, ValidateArgs};
use pluscode_rs::{
    CsvPlusCodeConfig, csv_to_plus_code_csv, decode, encode, is_full, is_short, is_valid,
    recover_nearest, shorten,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Encode(args) => run_encode(args, cli.json),
        Commands::Decode(args) => run_decode(args, cli.json),
        Commands::Shorten(args) => run_shorten(args, cli.json),
        Commands::Recover(args) => run_recover(args, cli.json),
        Commands::Validate(args) => run_validate(args, cli.json),
        Commands::Csv(args) => run_csv(args),
    }
}

fn run_encode(args: &EncodeArgs, as_json: bool) -> anyhow::Result<()> {
    let code = encode(args.lat, args.lng, args.length)
        .with_context(|| format!("cannot encode {}, {}", args.lat, args.lng))?;
    if as_json {
        println!("{}", json!({ "code": code }));
    } else {
        println!("{}", code);
    }
    Ok(())
}

fn run_decode(args: &DecodeArgs, as_json: bool) -> anyhow::Result<()> {
    let area = decode(&args.code)?;
    let polygon = args.area.map(|format| format.render(&area));

    if as_json {
        let mut value = serde_json::to_value(area)?;
        if let Some(polygon) = polygon {
            value["area"] = json!(polygon);
        }
        println!("{}", value);
        return Ok(());
    }

    println!("center: {}, {}", area.latitude_center(), area.longitude_center());
    println!(
        "bounds: {}, {} / {}, {}",
        area.latitude_lo(),
        area.longitude_lo(),
        area.latitude_hi(),
        area.longitude_hi()
    );
    println!("length: {}", area.code_length());
    if let Some(polygon) = polygon {
        println!("area: {}", polygon);
    }
    Ok(())
}

fn run_shorten(args: &ReferenceArgs, as_json: bool) -> anyhow::Result<()> {
    let short = shorten(&args.code, args.lat, args.lng)?;
    print_code(&short, as_json);
    Ok(())
}

fn run_recover(args: &ReferenceArgs, as_json: bool) -> anyhow::Result<()> {
    let full = recover_nearest(&args.code, args.lat, args.lng)?;
    print_code(&full, as_json);
    Ok(())
}

fn print_code(code: &str, as_json: bool) {
    if as_json {
        println!("{}", json!({ "code": code }));
    } else {
        println!("{}", code);
    }
}

fn run_validate(args: &ValidateArgs, as_json: bool) -> anyhow::Result<()> {
    for code in &args.codes {
        let (valid, short, full) = (is_valid(code), is_short(code), is_full(code));
        if as_json {
            println!(
                "{}",
                json!({ "code": code, "valid": valid, "short": short, "full": full })
            );
        } else {
            println!("{}\tvalid={}\tshort={}\tfull={}", code, valid, short, full);
        }
    }
    Ok(())
}

fn run_csv(args: &CsvArgs) -> anyhow::Result<()> {
    let mut config = match &args.geometry_column {
        Some(column) => CsvPlusCodeConfig::new(column.clone(), args.length),
        None => CsvPlusCodeConfig::from_coords(
            args.lng_column.clone(),
            args.lat_column.clone(),
            args.length,
        ),
    }
    .exclude(args.exclude.clone())
    .lenient(args.lenient);

    if let Some(format) = args.area {
        config = config.with_area_geometry(format);
    }
    if let (Some(lat), Some(lng)) = (args.ref_lat, args.ref_lng) {
        config = config.with_reference(lat, lng);
    }

    csv_to_plus_code_csv(&args.input, &args.output, &config).with_context(|| {
        format!(
            "failed to convert {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;
    info!(output = %args.output.display(), "wrote CSV");
    Ok(())
}
