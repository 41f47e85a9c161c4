use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use venlo_core::{Config, Dashboard, OpenMeteoSource, VENLO, WeatherClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "venlo", version, about = "Venlo weather dashboard (Open-Meteo)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Current conditions (default).
    Now,
    /// 48-hour table and charts.
    Hourly,
    /// 7-day table and charts.
    Daily,
    /// Map marker, wind indicator and coordinates.
    Map,
    /// Precipitation radar image link.
    Radar,
    /// Current conditions, hourly and daily views together.
    All,
    /// Menu-driven session with a refresh action.
    Interactive,
    /// Edit the configuration file.
    Configure,
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Now,
    Hourly,
    Daily,
    Map,
    Radar,
    All,
    Refresh,
    Quit,
}

impl MenuItem {
    /// The view this entry renders, if it is a view at all.
    fn view(self) -> Option<Command> {
        match self {
            MenuItem::Now => Some(Command::Now),
            MenuItem::Hourly => Some(Command::Hourly),
            MenuItem::Daily => Some(Command::Daily),
            MenuItem::Map => Some(Command::Map),
            MenuItem::Radar => Some(Command::Radar),
            MenuItem::All => Some(Command::All),
            MenuItem::Refresh | MenuItem::Quit => None,
        }
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MenuItem::Now => "🌡️ Huidig weer",
            MenuItem::Hourly => "📊 Uurlijks weer",
            MenuItem::Daily => "📅 7-dagen verwachting",
            MenuItem::Map => "🗺️ Kaart",
            MenuItem::Radar => "🌧️ Radar",
            MenuItem::All => "📋 Alles",
            MenuItem::Refresh => "🔄 Data vernieuwen",
            MenuItem::Quit => "Stoppen",
        };
        f.write_str(label)
    }
}

const MENU: [MenuItem; 8] = [
    MenuItem::Now,
    MenuItem::Hourly,
    MenuItem::Daily,
    MenuItem::Map,
    MenuItem::Radar,
    MenuItem::All,
    MenuItem::Refresh,
    MenuItem::Quit,
];

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command.unwrap_or(Command::Now) {
            Command::Configure => configure(config),
            Command::Interactive => {
                let mut client = WeatherClient::from_config(&config)?;
                interactive(&mut client, &config).await
            }
            view => {
                let mut client = WeatherClient::from_config(&config)?;
                show(&mut client, &config, view).await;
                Ok(())
            }
        }
    }
}

/// One fetch-and-render cycle. Fetch failures are reported and the cycle
/// renders nothing else.
async fn show(client: &mut WeatherClient<OpenMeteoSource>, config: &Config, view: Command) {
    tracing::debug!(?view, "rendering view");
    if view == Command::Radar {
        println!("{}", render::radar(&config.radar_url));
        return;
    }

    let response = match client.fetch(VENLO).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Fout bij ophalen weerdata: {e}");
            return;
        }
    };

    let dashboard = Dashboard::from_response(&response);
    let text = match view {
        Command::Hourly => render::hourly(&dashboard.hourly),
        Command::Daily => render::daily(&dashboard.daily),
        Command::Map => render::map(&dashboard.current),
        Command::All => render::full(&dashboard),
        _ => render::now(&dashboard.current),
    };

    let updated = client
        .last_fetched()
        .map(|t| t.with_timezone(&chrono::Local))
        .unwrap_or_else(chrono::Local::now);

    println!("{text}");
    println!("{}", render::footer(updated));
}

async fn interactive(
    client: &mut WeatherClient<OpenMeteoSource>,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        let choice = match Select::new("Venlo Weer", MENU.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to read menu selection"),
        };

        match choice {
            MenuItem::Refresh => {
                client.refresh();
                show(client, config, Command::Now).await;
            }
            MenuItem::Quit => return Ok(()),
            item => {
                if let Some(view) = item.view() {
                    show(client, config, view).await;
                }
            }
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let base_url = Text::new("Open-Meteo base URL:")
        .with_default(&config.api_base_url)
        .prompt()
        .context("Failed to read base URL")?;
    config.api_base_url = base_url;

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .prompt()
        .context("Failed to read timeout")?;

    config.cache_ttl_secs = CustomType::<u64>::new("Cache freshness window (seconds):")
        .with_default(config.cache_ttl_secs)
        .prompt()
        .context("Failed to read cache window")?;

    config.validate()?;
    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}
