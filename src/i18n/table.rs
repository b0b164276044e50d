use crate::geo::Country;
use crate::i18n::LocalizationTrait;

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TableLocalization {
    greetings: HashMap<Country, String>,
    default: String,
}

impl TableLocalization {
    pub fn new(greetings: HashMap<Country, String>, default: String) -> Self {
        Self { greetings, default }
    }
}

impl LocalizationTrait for TableLocalization {
    fn locale(&self, country: Country) -> &str {
        self.greetings.get(&country).unwrap_or(&self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_country() {
        let localization = TableLocalization::new(
            HashMap::from([(Country::Germany, "Willkommen".to_owned())]),
            "Hello".to_owned(),
        );
        assert_eq!(localization.locale(Country::Germany), "Willkommen");
    }

    #[test]
    fn unlisted_country_is_default() {
        let localization = TableLocalization::new(
            HashMap::from([(Country::Germany, "Willkommen".to_owned())]),
            "Hello".to_owned(),
        );
        for country in [Country::Russia, Country::Usa, Country::Brazil] {
            assert_eq!(localization.locale(country), "Hello", "{country}");
        }
    }

    #[test]
    fn empty_table() {
        let localization = TableLocalization::new(HashMap::new(), "Welcome".to_owned());
        assert_eq!(localization.locale(Country::Russia), "Welcome");
    }
}
