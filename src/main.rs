use anyhow::Result;
use log::{debug, error, info, warn};
use std::io;
use std::time::Instant;

use utm_builder::batch::BatchSource;
use utm_builder::cli_args::CommandLineArgs;
use utm_builder::clipboard::{Clipboard, DisabledClipboard, Osc52Clipboard};
use utm_builder::composer::Composer;
use utm_builder::form;
use utm_builder::settings::{ClipboardBackend, Settings};
use utm_builder::utm::ParameterSet;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!("UTM Builder v{} starting up...", env!("CARGO_PKG_VERSION"));

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    debug!("Loading application settings...");
    let settings = Settings::resolve(cli_args.settings.as_deref())?;
    info!("Settings loaded successfully");

    let params = cli_args.params(&settings.defaults);

    if cli_args.is_interactive() {
        run_interactive(&settings, params)?;
    } else {
        if let Some(base_url) = &cli_args.base_url {
            compose_once(base_url, params.clone(), &settings, cli_args.copy)?;
        }
        if !cli_args.src_files.is_empty() {
            compose_batch(&cli_args.src_files, &params)?;
        }
    }

    debug!(
        "Finished in {:.2}ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn open_clipboard(settings: &Settings) -> Box<dyn Clipboard> {
    match settings.clipboard {
        ClipboardBackend::None => Box::new(DisabledClipboard::new("disabled in settings")),
        ClipboardBackend::Osc52 => match Osc52Clipboard::stdout() {
            Ok(clipboard) => Box::new(clipboard),
            Err(e) => {
                warn!("{}", e);
                Box::new(DisabledClipboard::new(e.to_string()))
            }
        },
    }
}

fn compose_once(
    base_url: &str,
    params: ParameterSet,
    settings: &Settings,
    copy: bool,
) -> Result<()> {
    let mut composer =
        Composer::new(base_url, params).with_copied_indicator(settings.copied_indicator());

    if !composer.can_copy() {
        error!("Invalid base URL '{}'", base_url);
        return Err(anyhow::anyhow!(
            "'{}' is not a valid absolute URL",
            base_url
        ));
    }

    println!("{}", composer.output());

    if copy {
        let mut clipboard = open_clipboard(settings);
        composer.copy(clipboard.as_mut(), Instant::now())?;
        info!("Copied!");
    }

    Ok(())
}

fn compose_batch(src_files: &[String], params: &ParameterSet) -> Result<()> {
    let source = BatchSource::from_files(src_files)?;
    let (lines, stats) = source.compose_all(params);

    for line in lines.iter().filter(|l| l.is_valid()) {
        println!("{}", line.composed);
    }

    if stats.invalid > 0 {
        warn!(
            "Composed {} of {} URL(s); {} invalid ({:.0}% success)",
            stats.composed,
            stats.total,
            stats.invalid,
            stats.success_rate()
        );
    } else {
        info!("All {} URL(s) composed successfully!", stats.total);
    }
    Ok(())
}

fn run_interactive(settings: &Settings, params: ParameterSet) -> Result<()> {
    let composer = Composer::new(&settings.default_base_url, params)
        .with_copied_indicator(settings.copied_indicator());
    let mut clipboard = open_clipboard(settings);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let composer = form::run(composer, stdin.lock(), &mut stdout, clipboard.as_mut())?;

    debug!("Form closed in state {:?}", composer.state());
    Ok(())
}
