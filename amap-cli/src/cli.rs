use amap_core::{Config, WeatherClient, WeatherReport};
use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "amap-weather", version, about = "Amap weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the Amap API key.
    Configure,

    /// Show current conditions for a city.
    Live {
        /// City name or Amap adcode.
        city: String,

        /// Response format requested from upstream: "json" or "xml".
        #[arg(long, default_value = "json")]
        output: String,
    },

    /// Show the forecast for a city.
    Forecast {
        /// City name or Amap adcode.
        city: String,

        /// Response format requested from upstream: "json" or "xml".
        #[arg(long, default_value = "json")]
        output: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Live { city, output } => {
                let report = client_from_config()?
                    .get_live_weather(&city, &output)
                    .await
                    .with_context(|| format!("Failed to fetch live weather for '{city}'"))?;
                print_report(&report)
            }
            Command::Forecast { city, output } => {
                let report = client_from_config()?
                    .get_forecast_weather(&city, &output)
                    .await
                    .with_context(|| format!("Failed to fetch forecast weather for '{city}'"))?;
                print_report(&report)
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("Amap API key:")
        .with_help_message("Create one at https://console.amap.com")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn client_from_config() -> anyhow::Result<WeatherClient> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?;

    let mut client = WeatherClient::new(api_key);
    client.set_transport_options(config.transport_options());

    Ok(client)
}

fn print_report(report: &WeatherReport) -> anyhow::Result<()> {
    match report {
        WeatherReport::Json(value) => {
            let pretty = serde_json::to_string_pretty(value)
                .context("Failed to render JSON response")?;
            println!("{pretty}");
        }
        WeatherReport::Xml(raw) => println!("{raw}"),
    }

    Ok(())
}
