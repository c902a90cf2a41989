use clap::Parser;
use std::sync::Arc;

use muure_positioner::config::StoreConfig;
use muure_positioner::position::NetPositionProvider;
use muure_positioner::server;
use muure_positioner::store::TableStore;
use muure_positioner::workflow::{SubmitOutcome, Workflow, MSG_UPDATED};

/// Muure Positioner — capture the current device position and record it
/// in the hosted coordinates table.
///
/// Examples:
///   positioner --auto
///   positioner --auto --no-submit
///   positioner --lat 59.3293 --lon 18.0686
///   positioner --serve --port 8788
#[derive(Parser)]
#[command(name = "positioner", version, about, long_about = None)]
struct Cli {
    /// Latitude as typed (manual entry).
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<String>,

    /// Longitude as typed (manual entry).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<String>,

    /// Acquire the position from the geolocation provider.
    #[arg(long, short = 'a')]
    auto: bool,

    /// Display the acquired position without recording it.
    #[arg(long)]
    no_submit: bool,

    /// Serve the capture screen over HTTP instead of running once.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for --serve.
    #[arg(long, default_value_t = 8788)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    let store_config = StoreConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let store = Arc::new(TableStore::new(&store_config));

    // ── Web shell ───────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(
            &cli.host,
            cli.port,
            Box::new(NetPositionProvider::new()),
            store,
        ));
        return;
    }

    // ── Sensor variant ──────────────────────────────────────────

    if cli.auto {
        let mut workflow = Workflow::sensor(Box::new(NetPositionProvider::new()), store);
        workflow.activate();

        match workflow.coordinate() {
            Some(fix) if workflow.location_error().is_none() => {
                eprintln!("  Position: {}", fix);
            }
            _ => {
                eprintln!(
                    "Error: {}",
                    workflow.location_error().unwrap_or("position unavailable")
                );
                std::process::exit(1);
            }
        }

        if cli.no_submit {
            return;
        }
        report(workflow.submit());
        return;
    }

    // ── Manual variant ──────────────────────────────────────────

    if let (Some(lat), Some(lon)) = (&cli.lat, &cli.lon) {
        let mut workflow = Workflow::manual(store);
        workflow.set_latitude_field(lat.clone());
        workflow.set_longitude_field(lon.clone());
        report(workflow.submit());
        return;
    }

    // ── Nothing provided ────────────────────────────────────────

    eprintln!("Error: No position input.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  positioner --auto");
    eprintln!("  positioner --auto --no-submit");
    eprintln!("  positioner --lat 59.3293 --lon 18.0686");
    eprintln!("  positioner --serve [--host 0.0.0.0] [--port 8788]");
    std::process::exit(1);
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Completed => println!("{}", MSG_UPDATED),
        SubmitOutcome::Rejected(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        SubmitOutcome::Failed(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        SubmitOutcome::Busy => {}
    }
}
