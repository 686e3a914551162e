// main.rs - CLI entry point

use argspec::cli::{validate_args, Args, Config};
use argspec::output::{render, write_options};
use argspec::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generators first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        eprintln!("💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }
    if args.generate_schema {
        println!("{}", Schema::generate_sample());
        eprintln!("💡 Save this content to a .toml file and use --schema /path/to/schema.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation_result = validate_args(&args)?;

    if args.check_schema {
        print_schema_summary(&validation_result.schema);
        return Ok(());
    }

    let parser = argspec::parser()
        .options(validation_result.schema)
        .shared_printer(validation_result.printer)
        .strict_positionals(validation_result.strict);

    // The printer has already reported the failure
    let Some(options) = parser.parse(&args.tokens) else {
        std::process::exit(1);
    };

    if !options.ignored().is_empty() {
        eprintln!(
            "⚠️  Ignored positional arguments: {}",
            options.ignored().join(" ")
        );
    }

    match &args.output {
        Some(path) => {
            write_options(path, &options, validation_result.format)?;
            eprintln!("✅ Options written to: {}", path);
        }
        None => print!("{}", render(&options, validation_result.format)?),
    }

    Ok(())
}

fn print_schema_summary(schema: &Schema) {
    println!("📋 {}", argspec::get_info());
    println!(
        "✅ Schema OK: {} options, {} positional",
        schema.len(),
        schema.positional_count()
    );

    for (name, spec) in schema.iter() {
        let mut details = Vec::new();
        if let Some(position) = spec.position {
            details.push(format!("position {}", position));
        }
        if spec.required {
            details.push("required".to_string());
        }
        if let Some(choices) = spec.allowed_choices() {
            details.push(format!("one of: {}", choices.join(", ")));
        }
        if let Some(default) = &spec.default {
            details.push(format!("default {}", default));
        }

        if details.is_empty() {
            println!("  --{}", name);
        } else {
            println!("  --{} ({})", name, details.join("; "));
        }
    }
}
