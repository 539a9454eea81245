use serde::{Deserialize, Serialize};

use crate::entities::countries;

/// Country a guest flies in from. Seeded once, read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub country_code: String,
    pub country_name_en: String,
    pub country_name_lt: String,
}

impl From<countries::Model> for Country {
    fn from(model: countries::Model) -> Self {
        Self {
            id: model.id,
            country_code: model.country_code,
            country_name_en: model.country_name_en,
            country_name_lt: model.country_name_lt,
        }
    }
}

/// Sorts in place by English display name.
pub fn sort_by_english_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| a.country_name_en.cmp(&b.country_name_en));
}
