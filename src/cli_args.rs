use clap::Parser;
use log::info;

use crate::settings::UtmDefaults;
use crate::utm::{ParameterSet, UtmKey};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(long = "base-url", help = "Destination URL to tag with UTM parameters")]
    pub base_url: Option<String>,

    #[arg(long = "utm-source", help = "Traffic source, e.g. google")]
    pub utm_source: Option<String>,

    #[arg(long = "utm-medium", help = "Marketing medium, e.g. cpc")]
    pub utm_medium: Option<String>,

    #[arg(long = "utm-campaign", help = "Campaign name, e.g. spring_sale")]
    pub utm_campaign: Option<String>,

    #[arg(long = "utm-term", help = "Paid search keyword (optional)")]
    pub utm_term: Option<String>,

    #[arg(long = "utm-content", help = "Ad variant or link identifier (optional)")]
    pub utm_content: Option<String>,

    #[arg(
        long = "src-files",
        value_delimiter = ',',
        help = "Comma-separated list of file paths containing base URLs"
    )]
    pub src_files: Vec<String>,

    #[arg(long, help = "Copy the composed URL to the clipboard")]
    pub copy: bool,

    #[arg(long, help = "Path to a settings.json file")]
    pub settings: Option<String>,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!(
            "Parsed base URL from --base-url: {}",
            args.base_url.as_deref().unwrap_or("<none>")
        );
        info!("Parsed {} file(s) from --src-files", args.src_files.len());

        args
    }

    /// Whether the form should run interactively instead of one-shot.
    pub fn is_interactive(&self) -> bool {
        self.base_url.is_none() && self.src_files.is_empty()
    }

    /// Parameter flags layered over the configured defaults. A flag given as
    /// an empty string clears that parameter.
    pub fn params(&self, defaults: &UtmDefaults) -> ParameterSet {
        let mut params = defaults.to_params();
        let overrides = [
            (UtmKey::Source, &self.utm_source),
            (UtmKey::Medium, &self.utm_medium),
            (UtmKey::Campaign, &self.utm_campaign),
            (UtmKey::Term, &self.utm_term),
            (UtmKey::Content, &self.utm_content),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                params.set(key, value.as_str());
            }
        }
        params
    }
}
