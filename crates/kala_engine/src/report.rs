//! Free-text panchanga report rendering.

use crate::contract::Language;
use crate::snapshot::PanchangaSnapshot;

fn header_word(language: Language) -> &'static str {
    match language {
        Language::En => "Panchanga for",
        Language::Sa => "Panchangam",
        Language::Kn => "Panchanga",
        Language::Hi => "Panchang",
    }
}

fn time_or_na(t: Option<chrono::NaiveTime>) -> String {
    t.map_or_else(|| "N/A".to_string(), |t| t.format("%H:%M:%S").to_string())
}

/// Render the multi-line report embedded in a lunisolar snapshot.
pub(crate) fn render_report(snap: &PanchangaSnapshot, language: Language) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        header_word(language),
        snap.input_datetime.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Location: {} ({})\n",
        snap.address, snap.timezone
    ));
    out.push_str(&format!(
        "Sunrise: {}  Sunset: {}\n",
        time_or_na(snap.sunrise),
        time_or_na(snap.sunset)
    ));
    out.push_str(&format!(
        "Samvatsara: {} ({})\n",
        snap.samvatsara.name, snap.samvatsara.order
    ));
    out.push_str(&format!("Saka Year: {}\n", snap.saka_year));
    out.push_str(&format!("Masa: {}\n", snap.masa.name()));
    out.push_str(&format!("Paksha: {}\n", snap.paksha.name()));
    out.push_str(&format!(
        "Tithi: {} ({})\n",
        snap.tithi.name(),
        snap.tithi.number
    ));
    out.push_str(&format!(
        "Vara: {} ({})\n",
        snap.vara.name(),
        snap.vara.weekday_name()
    ));
    out.push_str(&format!(
        "Nakshatra: {} (Pada {})\n",
        snap.nakshatra.nakshatra.name(),
        snap.nakshatra.pada
    ));
    out.push_str(&format!("Yoga: {}\n", snap.yoga.name()));
    out.push_str(&format!(
        "Karana: {} ({})\n",
        snap.karana.name(),
        snap.karana.number()
    ));
    out.push_str(&format!("Rashi: {}\n", snap.rashi.rashi.name()));
    out.push_str(&format!("Lagna: {}", snap.lagna.rashi.name()));
    out
}
