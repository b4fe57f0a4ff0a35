use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use clima_core::{
    Config, Coordinate, DayView, FixedLocation, ForecastReport, ForecastService, ScreenState,
    provider,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Latitude; falls back to the configured default location.
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude; falls back to the configured default location.
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and an optional default location.
    Configure,

    /// Show the current-conditions panel for a position.
    Panel(PositionArgs),

    /// Show the 5-day forecast, or the next 3-hour entries with --manana.
    Forecast {
        #[command(flatten)]
        position: PositionArgs,

        /// Show the next 3-hour entries instead of the daily view.
        #[arg(long)]
        manana: bool,
    },

    /// Print the map region and marker descriptors for a position.
    Map(PositionArgs),
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Panel(position) => panel(position).await,
            Command::Forecast { position, manana } => forecast(position, manana).await,
            Command::Map(position) => map(position).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let store_location = inquire::Confirm::new("Store a default location?")
        .with_default(false)
        .prompt()
        .context("Failed to read answer")?;

    if store_location {
        let latitude = inquire::CustomType::<f64>::new("Latitude:")
            .prompt()
            .context("Failed to read latitude")?;
        let longitude = inquire::CustomType::<f64>::new("Longitude:")
            .prompt()
            .context("Failed to read longitude")?;
        config.set_default_location(Coordinate {
            latitude,
            longitude,
        });
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

fn position_from(args: &PositionArgs, config: &Config) -> anyhow::Result<Coordinate> {
    if let (Some(latitude), Some(longitude)) = (args.lat, args.lon) {
        return Ok(Coordinate {
            latitude,
            longitude,
        });
    }

    config.default_location.ok_or_else(|| {
        anyhow::anyhow!(
            "No position given.\n\
             Hint: pass --lat and --lon, or store a default with `clima configure`."
        )
    })
}

async fn load(position: PositionArgs) -> anyhow::Result<ForecastReport> {
    let config = Config::load()?;
    let coordinate = position_from(&position, &config)?;
    let forecast_provider = provider::provider_from_config(&config)?;
    let service = ForecastService::new(Box::new(FixedLocation(coordinate)), forecast_provider);

    println!("Cargando datos del clima...");

    match service.load().await {
        ScreenState::Ready(report) => Ok(report),
        ScreenState::Failed(reason) => Err(anyhow::anyhow!(reason)),
        ScreenState::Loading => Err(anyhow::anyhow!("Forecast still loading")),
    }
}

async fn panel(position: PositionArgs) -> anyhow::Result<()> {
    let report = load(position).await?;
    let view = report
        .panel()
        .ok_or_else(|| anyhow::anyhow!("OpenWeather forecast response contained no data"))?;

    println!("Clima en la región");
    println!("Temperatura: {}°C", view.temperature_c);
    println!("Condición: {}", view.condition);
    println!("Temperatura mínima: {}°C", view.temp_min_c);
    println!("Temperatura máxima: {}°C", view.temp_max_c);
    println!("Humedad: {}%", view.humidity);
    println!("Velocidad del viento: {} m/s", view.wind_speed);
    println!("Visibilidad: {} km", view.visibility_km);

    Ok(())
}

async fn forecast(position: PositionArgs, manana: bool) -> anyhow::Result<()> {
    let report = load(position).await?;

    let rows = if manana {
        println!("Clima en la región");
        report.upcoming(6)
    } else {
        println!("Clima en la región (Próximos 5 días)");
        report.daily()
    };

    if rows.is_empty() {
        return Err(anyhow::anyhow!(
            "OpenWeather forecast response contained no data"
        ));
    }

    for row in rows {
        print_row(&row, manana);
    }

    Ok(())
}

fn print_row(row: &DayView, manana: bool) {
    println!();
    if manana {
        println!("Día: {}", row.weekday.unwrap_or("N/A"));
    } else {
        println!("Fecha: {}", row.dt_txt);
    }
    if let Some(icon) = &row.icon_url {
        println!("Icono: {icon}");
    }
    println!(
        "Condición: {}",
        row.condition.as_deref().unwrap_or("N/A")
    );
    println!("Temperatura: {}°C", row.temperature_c);
    println!("Humedad: {}%", row.humidity);
    println!("Velocidad del viento: {} m/s", row.wind_speed);
}

async fn map(position: PositionArgs) -> anyhow::Result<()> {
    let report = load(position).await?;
    let view = report.map();

    println!(
        "Región: centro ({:.4}, {:.4}), delta ({}, {})",
        view.region.center.latitude,
        view.region.center.longitude,
        view.region.latitude_delta,
        view.region.longitude_delta
    );

    for marker in view.markers {
        println!(
            "- {} ({:.4}, {:.4})",
            marker.title, marker.coordinate.latitude, marker.coordinate.longitude
        );
        if let Some(description) = marker.description {
            println!("  Condición: {description}");
        }
        if let Some(icon) = marker.icon_url {
            println!("  Icono: {icon}");
        }
    }

    Ok(())
}
