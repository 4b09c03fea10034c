//! Samvatsara (60-year cycle) naming.
//!
//! The 60 samvatsaras cycle continuously. The epoch is CE 1987 = Prabhava
//! (order 1).

use serde::Serialize;

const ALL_SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];

/// Reference epoch: CE 1987 = Prabhava (order 1).
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Samvatsara classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamvatsaraPosition {
    /// Sanskrit name of the samvatsara.
    pub name: &'static str,
    /// Order in the 60-year cycle (1..=60).
    pub order: u8,
}

/// Determine the samvatsara for a given CE year.
pub fn samvatsara_from_year(ce_year: i32) -> SamvatsaraPosition {
    let offset = (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8;
    SamvatsaraPosition {
        name: ALL_SAMVATSARA_NAMES[offset as usize],
        order: offset + 1,
    }
}
