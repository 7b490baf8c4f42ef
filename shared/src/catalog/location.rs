//! Static state → district → tehsil → village catalog
//!
//! Lookups are exact, case-sensitive matches. Unknown keys produce an empty
//! list rather than an error so the cascading selectors can simply render
//! nothing.

use crate::types::Location;

#[derive(Debug)]
pub struct StateEntry {
    pub name: &'static str,
    pub districts: &'static [DistrictEntry],
}

#[derive(Debug)]
pub struct DistrictEntry {
    pub name: &'static str,
    pub tehsils: &'static [TehsilEntry],
}

#[derive(Debug)]
pub struct TehsilEntry {
    pub name: &'static str,
    pub villages: &'static [&'static str],
}

pub static INDIAN_LOCATIONS: &[StateEntry] = &[
    StateEntry {
        name: "Maharashtra",
        districts: &[
            DistrictEntry {
                name: "Pune",
                tehsils: &[
                    TehsilEntry { name: "Haveli", villages: &["Wagholi", "Lohegaon", "Kharadi", "Hadapsar"] },
                    TehsilEntry { name: "Mulshi", villages: &["Pirangut", "Paud", "Lavasa", "Bhugaon"] },
                    TehsilEntry { name: "Maval", villages: &["Talegaon", "Vadgaon", "Kamshet", "Lonavala"] },
                ],
            },
            DistrictEntry {
                name: "Nashik",
                tehsils: &[
                    TehsilEntry { name: "Nashik", villages: &["Gangapur", "Satpur", "Makhmalabad", "Pimpalgaon"] },
                    TehsilEntry { name: "Igatpuri", villages: &["Ghoti", "Kasara", "Talegaon", "Ghoti Budruk"] },
                    TehsilEntry { name: "Trimbakeshwar", villages: &["Trimbak", "Anjaneri", "Harsul", "Velunje"] },
                ],
            },
            DistrictEntry {
                name: "Nagpur",
                tehsils: &[
                    TehsilEntry { name: "Nagpur Rural", villages: &["Hingna", "Kamptee", "Kalmeshwar", "Narkhed"] },
                    TehsilEntry { name: "Saoner", villages: &["Saoner", "Parseoni", "Mauda", "Katol"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Punjab",
        districts: &[
            DistrictEntry {
                name: "Ludhiana",
                tehsils: &[
                    TehsilEntry { name: "Ludhiana East", villages: &["Jagraon", "Raikot", "Sahnewal", "Khanna"] },
                    TehsilEntry { name: "Ludhiana West", villages: &["Doraha", "Payal", "Samrala", "Mullanpur"] },
                ],
            },
            DistrictEntry {
                name: "Amritsar",
                tehsils: &[
                    TehsilEntry { name: "Amritsar-I", villages: &["Majitha", "Rayya", "Verka", "Chheharta"] },
                    TehsilEntry { name: "Amritsar-II", villages: &["Tarn Taran", "Patti", "Khem Karan", "Bhikhiwind"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Uttar Pradesh",
        districts: &[
            DistrictEntry {
                name: "Lucknow",
                tehsils: &[
                    TehsilEntry { name: "Lucknow", villages: &["Kakori", "Malihabad", "Mohanlalganj", "Bakshi Ka Talab"] },
                    TehsilEntry { name: "Sarojini Nagar", villages: &["Chinhat", "Gosainganj", "Itaunja", "Nagram"] },
                ],
            },
            DistrictEntry {
                name: "Varanasi",
                tehsils: &[
                    TehsilEntry { name: "Varanasi", villages: &["Sarnath", "Ramnagar", "Pindra", "Cholapur"] },
                    TehsilEntry { name: "Chandauli", villages: &["Chakia", "Sakaldiha", "Naugarh", "Mughalsarai"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Gujarat",
        districts: &[
            DistrictEntry {
                name: "Ahmedabad",
                tehsils: &[
                    TehsilEntry { name: "City East", villages: &["Naroda", "Odhav", "Nikol", "Vastral"] },
                    TehsilEntry { name: "Daskroi", villages: &["Sanand", "Bavla", "Dholka", "Viramgam"] },
                ],
            },
            DistrictEntry {
                name: "Rajkot",
                tehsils: &[
                    TehsilEntry { name: "Rajkot", villages: &["Kothariya", "Lodhika", "Paddhari", "Jasdan"] },
                    TehsilEntry { name: "Morbi", villages: &["Tankara", "Halvad", "Maliya", "Wankaner"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Madhya Pradesh",
        districts: &[
            DistrictEntry {
                name: "Indore",
                tehsils: &[
                    TehsilEntry { name: "Indore", villages: &["Mhow", "Sanwer", "Depalpur", "Hatod"] },
                    TehsilEntry { name: "Rau", villages: &["Rau", "Betma", "Gautampura", "Sawer"] },
                ],
            },
            DistrictEntry {
                name: "Bhopal",
                tehsils: &[
                    TehsilEntry { name: "Huzur", villages: &["Berasia", "Sehore", "Raisen", "Vidisha"] },
                    TehsilEntry { name: "Govindpura", villages: &["Govindpura", "Misrod", "Karond", "Ayodhya Nagar"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Rajasthan",
        districts: &[
            DistrictEntry {
                name: "Jaipur",
                tehsils: &[
                    TehsilEntry { name: "Jaipur", villages: &["Sanganer", "Amber", "Jamwa Ramgarh", "Chomu"] },
                    TehsilEntry { name: "Bassi", villages: &["Bassi", "Chaksu", "Dudu", "Phagi"] },
                ],
            },
            DistrictEntry {
                name: "Jodhpur",
                tehsils: &[
                    TehsilEntry { name: "Jodhpur", villages: &["Mandore", "Osian", "Phalodi", "Shergarh"] },
                    TehsilEntry { name: "Bilara", villages: &["Bilara", "Bhopalgarh", "Luni", "Pipar City"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Karnataka",
        districts: &[
            DistrictEntry {
                name: "Bangalore Rural",
                tehsils: &[
                    TehsilEntry { name: "Devanahalli", villages: &["Devanahalli", "Doddaballapur", "Hosakote", "Nelamangala"] },
                    TehsilEntry { name: "Anekal", villages: &["Anekal", "Sarjapur", "Attibele", "Chandapura"] },
                ],
            },
            DistrictEntry {
                name: "Mysore",
                tehsils: &[
                    TehsilEntry { name: "Mysore", villages: &["Nanjangud", "T.Narasipura", "Hunsur", "Periyapatna"] },
                    TehsilEntry { name: "H.D. Kote", villages: &["H.D. Kote", "Saragur", "Antharasanthe", "Hampapura"] },
                ],
            },
        ],
    },
    StateEntry {
        name: "Tamil Nadu",
        districts: &[
            DistrictEntry {
                name: "Coimbatore",
                tehsils: &[
                    TehsilEntry { name: "Coimbatore North", villages: &["Annur", "Karamadai", "Mettupalayam", "Sulur"] },
                    TehsilEntry { name: "Coimbatore South", villages: &["Pollachi", "Valparai", "Kinathukadavu", "Madukkarai"] },
                ],
            },
            DistrictEntry {
                name: "Thanjavur",
                tehsils: &[
                    TehsilEntry { name: "Thanjavur", villages: &["Kumbakonam", "Papanasam", "Thiruvaiyaru", "Orathanadu"] },
                    TehsilEntry { name: "Pattukottai", villages: &["Pattukottai", "Peravurani", "Ayyampettai", "Aranthangi"] },
                ],
            },
        ],
    },
];

fn find_state(state: &str) -> Option<&'static StateEntry> {
    INDIAN_LOCATIONS.iter().find(|s| s.name == state)
}

fn find_district(state: &str, district: &str) -> Option<&'static DistrictEntry> {
    find_state(state)?.districts.iter().find(|d| d.name == district)
}

fn find_tehsil(state: &str, district: &str, tehsil: &str) -> Option<&'static TehsilEntry> {
    find_district(state, district)?
        .tehsils
        .iter()
        .find(|t| t.name == tehsil)
}

/// All states in catalog order
pub fn list_states() -> Vec<&'static str> {
    INDIAN_LOCATIONS.iter().map(|s| s.name).collect()
}

pub fn list_districts(state: &str) -> Vec<&'static str> {
    find_state(state)
        .map(|s| s.districts.iter().map(|d| d.name).collect())
        .unwrap_or_default()
}

pub fn list_tehsils(state: &str, district: &str) -> Vec<&'static str> {
    find_district(state, district)
        .map(|d| d.tehsils.iter().map(|t| t.name).collect())
        .unwrap_or_default()
}

pub fn list_villages(state: &str, district: &str, tehsil: &str) -> Vec<&'static str> {
    find_tehsil(state, district, tehsil)
        .map(|t| t.villages.to_vec())
        .unwrap_or_default()
}

/// True when all four levels of the location exist in the catalog
pub fn location_exists(location: &Location) -> bool {
    find_tehsil(&location.state, &location.district, &location.tehsil)
        .map(|t| t.villages.contains(&location.village.as_str()))
        .unwrap_or(false)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Arbitrary keys never panic, and anything outside the table is empty
        #[test]
        fn prop_unknown_keys_yield_empty(state in ".*", district in ".*", tehsil in ".*") {
            let known = list_states().contains(&state.as_str());
            prop_assert_eq!(list_districts(&state).is_empty(), !known);
            if !list_districts(&state).contains(&district.as_str()) {
                prop_assert!(list_tehsils(&state, &district).is_empty());
            }
            if !list_tehsils(&state, &district).contains(&tehsil.as_str()) {
                prop_assert!(list_villages(&state, &district, &tehsil).is_empty());
            }
        }

        /// Every listed village belongs to a location that exists
        #[test]
        fn prop_listed_villages_exist(index in 0usize..1000) {
            let mut all = Vec::new();
            for state in list_states() {
                for district in list_districts(state) {
                    for tehsil in list_tehsils(state, district) {
                        for village in list_villages(state, district, tehsil) {
                            all.push(Location::new(state, district, tehsil, village));
                        }
                    }
                }
            }
            let location = &all[index % all.len()];
            prop_assert!(location_exists(location));
        }
    }
}
