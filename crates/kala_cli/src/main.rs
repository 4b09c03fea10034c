use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use kala_maya::{
    day_count_from_jd, haab_from_day_count, long_count_from_day_count, tzolkin_from_day_count,
};
use kala_time::julian_day;
use kala_vedic::{
    karana_from_elongation, masa_from_new_moon_longitude, nakshatra_from_longitude,
    rashi_from_longitude, samvatsara_from_year, tithi_from_elongation, yoga_from_sum,
};

#[derive(Parser)]
#[command(name = "kala", about = "Calendar arithmetic CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi and paksha from Sun/Moon sidereal longitudes
    Tithi {
        /// Sun sidereal longitude in degrees
        sun: f64,
        /// Moon sidereal longitude in degrees
        moon: f64,
    },
    /// Nakshatra and pada from a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Yoga from Sun/Moon sidereal longitudes
    Yoga {
        sun: f64,
        moon: f64,
    },
    /// Karana from Sun/Moon sidereal longitudes
    Karana {
        sun: f64,
        moon: f64,
    },
    /// Rashi from a sidereal longitude
    Rashi {
        lon: f64,
    },
    /// Masa from the Sun's sidereal longitude at the preceding new moon
    Masa {
        lon: f64,
    },
    /// Samvatsara for a CE year
    Samvatsara {
        year: i32,
    },
    /// Maya cycles for a UTC instant (RFC 3339, e.g. 2026-01-20T12:00:00Z)
    Maya {
        utc: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Tithi { sun, moon } => {
            let t = tithi_from_elongation(moon - sun);
            println!("{} {} (tithi {})", t.paksha.name(), t.name(), t.number);
        }
        Commands::Nakshatra { lon } => {
            let n = nakshatra_from_longitude(lon);
            println!("{} (Pada {})", n.nakshatra.name(), n.pada);
        }
        Commands::Yoga { sun, moon } => {
            let y = yoga_from_sum(sun + moon);
            println!("{} (index {})", y.name(), y.index);
        }
        Commands::Karana { sun, moon } => {
            let k = karana_from_elongation(moon - sun);
            println!("{} (number {})", k.name(), k.number());
        }
        Commands::Rashi { lon } => {
            let r = rashi_from_longitude(lon);
            println!("{} ({:.4} deg in sign)", r.rashi.name(), r.degrees_in_sign);
        }
        Commands::Masa { lon } => {
            println!("{}", masa_from_new_moon_longitude(lon).name());
        }
        Commands::Samvatsara { year } => {
            let s = samvatsara_from_year(year);
            println!("{} (order {})", s.name, s.order);
        }
        Commands::Maya { utc } => match utc.parse::<DateTime<Utc>>() {
            Ok(instant) => {
                let jd = julian_day(instant);
                let dc = day_count_from_jd(jd);
                println!("Julian Day:  {jd}");
                println!("Day count:   {dc}");
                println!("Long Count:  {}", long_count_from_day_count(dc));
                println!("Tzolk'in:    {}", tzolkin_from_day_count(dc));
                println!("Haab':       {}", haab_from_day_count(dc));
            }
            Err(e) => {
                eprintln!("invalid UTC instant {utc:?}: {e}");
                std::process::exit(2);
            }
        },
    }
}
