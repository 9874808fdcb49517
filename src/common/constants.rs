use std::time::Duration;

/// Query parameter names recognised by the composer, in form order
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

/// How long the "copied" indicator stays lit after a copy
pub const COPIED_INDICATOR_MS: u64 = 900;

pub const COPIED_INDICATOR: Duration = Duration::from_millis(COPIED_INDICATOR_MS);

/// Initial form values
pub const DEFAULT_BASE_URL: &str = "https://example.com/landing";
pub const DEFAULT_UTM_SOURCE: &str = "google";
pub const DEFAULT_UTM_MEDIUM: &str = "cpc";
pub const DEFAULT_UTM_CAMPAIGN: &str = "spring_sale";

/// Settings file name under the user config directory
pub const SETTINGS_DIR_NAME: &str = "utm-builder";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// OSC 52 clipboard sequence framing
pub const OSC52_PREFIX: &str = "\x1b]52;c;";
pub const OSC52_SUFFIX: &str = "\x07";
