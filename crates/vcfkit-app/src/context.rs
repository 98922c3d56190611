use vcfkit_core::config::Settings;
use vcfkit_rfc::format::{PhoneFormatter, formatter_for};
use vcfkit_rfc::rfc::vcard::SerializeOptions;

/// Everything a command needs besides its arguments.
pub struct AppContext {
    pub settings: Settings,
    pub phone: Box<dyn PhoneFormatter>,
}

impl AppContext {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let phone = formatter_for(&settings.phone);
        Self { settings, phone }
    }

    #[must_use]
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            fold_lines: self.settings.output.fold_lines,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
