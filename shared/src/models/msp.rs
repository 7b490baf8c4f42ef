//! Minimum Support Price models

use serde::Serialize;

/// Government Minimum Support Price for one crop
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MspRecord {
    pub name: &'static str,
    /// Rupees per `unit`
    pub msp: u32,
    pub unit: &'static str,
    pub season: &'static str,
    pub category: &'static str,
}

impl MspRecord {
    /// First whitespace-delimited word of the crop name
    pub fn first_token(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}
