use clap::{Parser, Subcommand};
use dialoguer::Input;
use natal::{AppError, BirthInput, ChartRecord};

#[derive(Parser)]
#[command(name = "natal")]
#[command(version)]
#[command(about = "Compute natal charts with sign placements and interpretations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a natal chart from birth details
    #[clap(visible_alias = "c")]
    Chart {
        /// Person's name
        #[arg(long)]
        name: Option<String>,
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// Birth time, HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Birth place label
        #[arg(long)]
        place: Option<String>,
        /// Birth latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Birth longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Look up coordinates for the birth place
        #[arg(long)]
        geocode: bool,
        /// Save the chart to the local store
        #[arg(long)]
        save: bool,
        /// Owner label for saved charts
        #[arg(long)]
        owner: Option<String>,
        /// Use template interpretations only, no network calls
        #[arg(long)]
        offline: bool,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved charts, newest first
    History {
        /// Only charts saved for this owner
        #[arg(long)]
        owner: Option<String>,
    },
    /// Today's horoscope for a saved chart
    Horoscope {
        /// Chart identifier from a saved chart
        chart_id: String,
    },
    /// Look up coordinates for a place name
    Geocode {
        /// Free-text place query
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chart { name, date, time, place, lat, lon, geocode, save, owner, offline, json } => {
            chart(name, date, time, place, lat, lon, geocode, save, owner, offline, json)
        }
        Commands::History { owner } => history(owner.as_deref()),
        Commands::Horoscope { chart_id } => horoscope(&chart_id),
        Commands::Geocode { query } => geocode_lookup(&query),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if !e.is_input_error() {
            eprintln!("Something went wrong. Please try again.");
        }
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn chart(
    name: Option<String>,
    date: Option<String>,
    time: Option<String>,
    place: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    geocode: bool,
    save: bool,
    owner: Option<String>,
    offline: bool,
    json: bool,
) -> Result<(), AppError> {
    let name = prompt_if_missing(name, "Name")?;
    let date = prompt_if_missing(date, "Birth date (YYYY-MM-DD)")?;
    let time = prompt_if_missing(time, "Birth time (HH:MM)")?;
    let place = prompt_if_missing(place, "Place of birth")?;

    let (mut lat, mut lon) = (lat, lon);
    if geocode && lat.is_none() && lon.is_none() {
        // Best-effort: a failed lookup falls back to the (0, 0) default.
        match natal::geocode(&place) {
            Ok(candidates) => {
                if let Some(best) = candidates.first() {
                    println!("📍 Resolved '{}' to {}", place, best.label);
                    lat = Some(best.latitude);
                    lon = Some(best.longitude);
                } else {
                    eprintln!("Warning: no geocoding match for '{}'", place);
                }
            }
            Err(e) => eprintln!("Warning: geocoding failed: {}", e),
        }
    }

    let input = BirthInput::parse(&name, &date, &time, &place, lat, lon)?;

    let record = if offline {
        let mut config = natal::AppConfig::load()?;
        config.generator.enabled = false;
        natal::generate_chart_with_config(input, &config)?
    } else {
        natal::generate_chart(input)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_chart(&record);
    }

    if save {
        // Saving is best-effort: the chart is already on screen.
        match natal::save_chart(&record, owner.as_deref()) {
            Ok(id) => println!("✅ Saved chart as {}", id),
            Err(e) => eprintln!("Warning: failed to save chart: {}", e),
        }
    }

    Ok(())
}

fn history(owner: Option<&str>) -> Result<(), AppError> {
    let charts = natal::history(owner)?;
    if charts.is_empty() {
        println!("No saved charts.");
        return Ok(());
    }

    for chart in charts {
        println!(
            "{}  {}  {} — Sun {}, Moon {}, Rising {}",
            chart.id.as_deref().unwrap_or("(unsaved)"),
            chart.created_at.format("%Y-%m-%d %H:%M"),
            chart.input.name,
            chart.sun_sign,
            chart.moon_sign,
            chart.rising_sign,
        );
    }
    Ok(())
}

fn horoscope(chart_id: &str) -> Result<(), AppError> {
    let text = natal::horoscope(chart_id)?;
    println!("{}", text);
    Ok(())
}

fn geocode_lookup(query: &str) -> Result<(), AppError> {
    let candidates = natal::geocode(query)?;
    if candidates.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }
    for candidate in candidates {
        println!("{}  ({:.4}, {:.4})", candidate.label, candidate.latitude, candidate.longitude);
    }
    Ok(())
}

fn prompt_if_missing(value: Option<String>, label: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v),
        None => Input::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| AppError::Configuration(format!("Failed to read input: {}", e))),
    }
}

fn print_chart(chart: &ChartRecord) {
    println!("✨ Natal chart for {}", chart.input.name);
    println!(
        "   Born {} at {} in {}",
        chart.input.date_of_birth, chart.input.time_of_birth, chart.input.place_of_birth
    );
    println!();
    println!("   Sun     {}", chart.sun_sign);
    println!("   Moon    {}", chart.moon_sign);
    println!("   Rising  {}", chart.rising_sign);
    println!();
    println!("   Planets:");
    for p in &chart.planets {
        println!("     {:8} {:12} {:>5.1}\u{b0}  House {}", p.planet.as_str(), p.sign.as_str(), p.degree, p.house);
    }
    println!();
    println!("   Houses:");
    for h in &chart.houses {
        println!("     House {:>2}  {:12} {:>5.1}\u{b0}", h.number, h.sign.as_str(), h.degree);
    }
    println!();
    println!("{}", chart.interpretation);
}
