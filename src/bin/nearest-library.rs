use anyhow::Result;
use clap::Parser;
use nearest_library::{Client, Coordinates, find_nearest};

#[derive(Parser, Debug)]
#[command(
    name = "nearest-library",
    version,
    about = "Provides the closest library name, address and popularity for a given latitude and longitude point in the city of Chicago"
)]
struct Cli {
    /// Latitude of a location
    #[arg(allow_negative_numbers = true)]
    latitude: f64,
    /// Longitude of a location
    #[arg(allow_negative_numbers = true)]
    longitude: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let query = Coordinates::new(cli.latitude, cli.longitude);

    let client = Client::new()?;
    let libraries = client.fetch_libraries()?;
    let visitors = client.fetch_visitors()?;

    let report = find_nearest(&libraries, &visitors, query)?;
    println!("{}", report);
    Ok(())
}
