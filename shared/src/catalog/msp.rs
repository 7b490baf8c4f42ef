//! Minimum Support Price catalog (2024-25), prices in INR per quintal

use crate::models::MspRecord;

const fn record(
    name: &'static str,
    msp: u32,
    season: &'static str,
    category: &'static str,
) -> MspRecord {
    MspRecord {
        name,
        msp,
        unit: "quintal",
        season,
        category,
    }
}

pub static CROP_MSP_DATA: [MspRecord; 30] = [
    // Kharif
    record("Paddy (Common)", 2300, "Kharif", "Cereals"),
    record("Paddy (Grade A)", 2320, "Kharif", "Cereals"),
    record("Jowar (Hybrid)", 3180, "Kharif", "Cereals"),
    record("Jowar (Maldandi)", 3225, "Kharif", "Cereals"),
    record("Bajra", 2625, "Kharif", "Cereals"),
    record("Ragi", 4290, "Kharif", "Cereals"),
    record("Maize", 2225, "Kharif", "Cereals"),
    record("Tur (Arhar)", 7550, "Kharif", "Pulses"),
    record("Moong", 8682, "Kharif", "Pulses"),
    record("Urad", 7400, "Kharif", "Pulses"),
    record("Groundnut", 6783, "Kharif", "Oilseeds"),
    record("Sunflower Seed", 7280, "Kharif", "Oilseeds"),
    record("Soyabean (Yellow)", 4892, "Kharif", "Oilseeds"),
    record("Sesamum", 9267, "Kharif", "Oilseeds"),
    record("Nigerseed", 8717, "Kharif", "Oilseeds"),
    record("Cotton (Medium Staple)", 7121, "Kharif", "Commercial"),
    record("Cotton (Long Staple)", 7521, "Kharif", "Commercial"),
    // Rabi
    record("Wheat", 2275, "Rabi", "Cereals"),
    record("Barley", 1850, "Rabi", "Cereals"),
    record("Gram (Chana)", 5440, "Rabi", "Pulses"),
    record("Masur (Lentil)", 6425, "Rabi", "Pulses"),
    record("Rapeseed & Mustard", 5650, "Rabi", "Oilseeds"),
    record("Safflower", 5800, "Rabi", "Oilseeds"),
    // Other commercial
    record("Sugarcane", 340, "Annual", "Commercial"),
    record("Jute", 5050, "Kharif", "Commercial"),
    record("Copra (Milling)", 11582, "Annual", "Commercial"),
    record("Copra (Ball)", 12100, "Annual", "Commercial"),
    // Vegetables (indicative)
    record("Potato", 1200, "Rabi", "Vegetables"),
    record("Onion", 1500, "Rabi", "Vegetables"),
    record("Tomato", 2000, "Kharif", "Vegetables"),
];

/// Every record in table order
pub fn all_msp_records() -> &'static [MspRecord] {
    &CROP_MSP_DATA
}

/// Records for one season (case-insensitive)
pub fn msp_by_season(season: &str) -> Vec<&'static MspRecord> {
    CROP_MSP_DATA
        .iter()
        .filter(|r| r.season.eq_ignore_ascii_case(season))
        .collect()
}

/// Look up the MSP for a crop name as typed by the advisor.
///
/// A record matches when its name contains the query, or when the query
/// contains the record's first word (so "Paddy" hits "Paddy (Common)" and
/// "Wheat (Sharbati)" hits "Wheat"). Matching is case-insensitive and the
/// first match in table order wins, even if a later record fits better.
///
/// Surrounding whitespace is ignored, and a blank query returns `None`
/// rather than matching the first record in the table.
pub fn find_msp(crop_name: &str) -> Option<&'static MspRecord> {
    let query = crop_name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    CROP_MSP_DATA.iter().find(|record| {
        record.name.to_lowercase().contains(&query)
            || query.contains(&record.first_token().to_lowercase())
    })
}

/// Render a price as Indian rupees with no decimals, e.g. `₹1,00,000`
pub fn format_msp(msp: u32) -> String {
    let digits = msp.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    // Last three digits form one group, the rest are grouped in pairs
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
