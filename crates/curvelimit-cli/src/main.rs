use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use curvelimit_cli::commands::{
    check::handle_check, defaults::handle_defaults, report::handle_report, speed::handle_speed,
};
use curvelimit_cli::output::OutputFormat;
use curvelimit_cli::terminal::ColorPalette;
use curvelimit_cli::vehicle_args::{SearchArgs, VehicleArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Maximum safe curve speed for heavy vehicles in crosswinds"
)]
struct Cli {
    #[command(flatten)]
    vehicle: VehicleArgs,

    #[command(flatten)]
    search: SearchArgs,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the maximum safe speed for a list of curve radii.
    Report {
        /// Curve radius in metres; repeat for several (defaults to the reference radii).
        #[arg(long = "radius", allow_negative_numbers = true)]
        radii: Vec<f64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute the maximum safe speed for one curve radius.
    Speed {
        /// Curve radius in metres.
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Evaluate stability at one speed and report forces against limits.
    Check {
        /// Curve radius in metres.
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
        /// Forward speed in km/h.
        #[arg(long = "speed-kmh")]
        speed_kmh: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the resolved vehicle parameters as JSON.
    Defaults,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let model = cli.vehicle.resolve()?;
    let palette = ColorPalette::resolve(cli.no_color);

    match cli.command {
        Command::Report { radii, format } => handle_report(
            &model,
            &cli.search.search_config()?,
            &radii,
            format,
            &palette,
        ),
        Command::Speed { radius, format } => handle_speed(
            &model,
            &cli.search.search_config()?,
            radius,
            format,
            &palette,
        ),
        Command::Check {
            radius,
            speed_kmh,
            format,
        } => handle_check(
            &model,
            &cli.search.stability_config(),
            radius,
            speed_kmh,
            format,
            &palette,
        ),
        Command::Defaults => handle_defaults(&model),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
