use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kundali_chart::{
    BirthInput, Chart, ChartConfig, compute_chart, parse_coordinate, parse_latitude,
    parse_longitude,
};
use kundali_config::load_config;
use kundali_time::{CivilDateTime, day_number, delta_t_seconds, julian_date};
use kundali_vedic_base::{
    ayanamsa_deg, deg_to_dms, nakshatra_from_longitude, rashi_from_longitude,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full birth chart
    Chart {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM)
        #[arg(long)]
        time: String,
        /// Timezone offset from UT in hours, east positive
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz: f64,
        /// Latitude: 28N36 or decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// Longitude: 77E12 or decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
        /// Label for the chart
        #[arg(long, default_value = "")]
        name: String,
        /// TOML config file with a [chart] table
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Day number, Julian Date and Delta-T for a local date/time
    Julian {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Timezone offset from UT in hours
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz: f64,
    },
    /// Lahiri ayanamsa for a date
    Ayanamsa {
        /// Date (YYYY-MM-DD), full four-digit year
        #[arg(long)]
        date: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Parse a coordinate string (28N36, 77E12, -12.5)
    Coord {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Read as latitude (N/S)
        #[arg(long, conflicts_with = "lon")]
        lat: bool,
        /// Read as longitude (E/W)
        #[arg(long)]
        lon: bool,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let bad = || format!("invalid date '{s}', expected YYYY-MM-DD");
    // Leading '-' would be a negative year
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut parts = body.splitn(3, '-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    Ok((if neg { -year } else { year }, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid time '{s}', expected HH:MM"))?;
    let hour = h
        .parse()
        .map_err(|_| format!("invalid hour in '{s}'"))?;
    let minute = m
        .parse()
        .map_err(|_| format!("invalid minute in '{s}'"))?;
    Ok((hour, minute))
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn print_chart(chart: &Chart) {
    let tf = &chart.time_frame;
    if !chart.name.is_empty() {
        println!("Chart: {}", chart.name);
    }
    println!("Day number:    {:.6}", tf.day_number);
    println!("Julian Date:   {:.7}", tf.julian_date);
    if tf.delta_t_modeled {
        println!("Delta-T:       {:.2} s", tf.delta_t);
    } else {
        println!("Delta-T:       {:.2} s (year outside model)", tf.delta_t);
    }
    println!("Sidereal time: {:.4} deg", tf.sidereal_time);
    println!("Obliquity:     {:.4} deg", tf.obliquity);
    println!("Ayanamsa:      {:.4} deg ({})", tf.ayanamsa, deg_to_dms(tf.ayanamsa));
    println!();
    println!(
        "{:<4} {:<9} {:>9}  {:<12} {:>11}  {:>3}  {:<18} {:<4} {}",
        "", "", "Long", "Sign", "Deg", "D9", "Nakshatra", "Lord", "Pada"
    );
    for p in &chart.positions {
        println!(
            "{:<4} {:<9} {:>9.4}  {:<12} {:>11}  {:>3}  {:<18} {:<4} {}",
            p.symbol,
            p.point.english_name(),
            p.longitude,
            p.sign_name,
            deg_to_dms(p.degree_in_sign).to_string(),
            p.navamsa_sign,
            p.nakshatra,
            p.nakshatra_lord,
            p.pada
        );
    }
    println!();
    println!("{:<6} {:>4}  {:<4} Bodies", "House", "Sign", "Lord");
    for (i, bodies) in chart.house_bodies.iter().enumerate() {
        println!(
            "{:<6} {:>4}  {:<4} {}",
            i + 1,
            chart.house_signs[i],
            chart.house_lords[i],
            bodies.join(" ")
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            tz,
            lat,
            lon,
            name,
            config,
            json,
        } => {
            let (year, month, day) = parse_date(&date).unwrap_or_else(|e| fail(e));
            let (hour, minute) = parse_time(&time).unwrap_or_else(|e| fail(e));
            let config = match config {
                Some(path) => load_config(&path).unwrap_or_else(|e| fail(e)),
                None => ChartConfig::default(),
            };
            debug!(?config, "chart config");
            let input = BirthInput::new(
                name,
                year,
                month,
                day,
                hour,
                minute,
                tz,
                parse_latitude(&lat),
                parse_longitude(&lon),
            );
            let chart = compute_chart(&input, &config).unwrap_or_else(|e| fail(e));
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(text) => println!("{text}"),
                    Err(e) => fail(e),
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - sign {} - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.sign_number,
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Lord {} - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.lord.name(),
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Julian { date, time, tz } => {
            let (year, month, day) = parse_date(&date).unwrap_or_else(|e| fail(e));
            let (hour, minute) = parse_time(&time).unwrap_or_else(|e| fail(e));
            let dt = CivilDateTime::new(year, month, day, hour, minute, tz);
            if let Err(e) = dt.validate() {
                fail(e);
            }
            println!("Local:       {dt}");
            println!("Day number:  {:.6}", day_number(&dt));
            println!("Julian Date: {:.7}", julian_date(&dt));
            println!("Delta-T:     {:.2} s", delta_t_seconds(dt.decimal_year()));
        }

        Commands::Ayanamsa { date } => {
            let (year, month, day) = parse_date(&date).unwrap_or_else(|e| fail(e));
            let aya = ayanamsa_deg(year, month, day);
            println!("Lahiri ayanamsa: {aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            let sign = if deg < 0.0 { "-" } else { "" };
            println!("{sign}{dms}");
        }

        Commands::Coord { value, lat, lon } => {
            let deg = if lat {
                parse_latitude(&value)
            } else if lon {
                parse_longitude(&value)
            } else {
                parse_coordinate(&value)
            };
            println!("{deg:.6}");
        }
    }
}
