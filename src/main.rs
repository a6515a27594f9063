#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "avsc2graphql", about = "Convert Avro Schema to GraphQL SDL")]
struct Cli {
    /// Path or URL to the Avro schema input
    #[arg(value_name = "AVSC")]
    input: String,

    /// Path to the GraphQL output file (stdout if omitted)
    #[arg(value_name = "GRAPHQL")]
    output: Option<std::path::PathBuf>,

    /// Log conversion details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[cfg(feature = "cli")]
fn main() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level),
        )
        .init();

    if let Err(e) = avsc2graphql::convert_avsc_to_graphql(&cli.input, cli.output.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
