use crate::geo::Country;
use crate::i18n::LocalizationTrait;

pub const RUSSIAN_GREETING: &str = "Добро пожаловать";
pub const DEFAULT_GREETING: &str = "Welcome";

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocalization;

impl LocalizationTrait for BuiltinLocalization {
    fn locale(&self, country: Country) -> &str {
        match country {
            Country::Russia => RUSSIAN_GREETING,
            _ => DEFAULT_GREETING,
        }
    }
}
