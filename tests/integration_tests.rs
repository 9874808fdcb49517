use std::io::Write;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use utm_builder::*;

#[cfg(test)]
mod tests {
    use super::*;
    use utm_builder::clipboard::MemoryClipboard;
    use utm_builder::composer::{Composer, ComposerState};
    use utm_builder::utm::{ParameterSet, UtmKey};

    struct TestUrls;
    impl TestUrls {
        const LANDING: &'static str = "https://example.com/landing";
        const WITH_PARTNER: &'static str = "https://example.com/landing?utm_source=old&ref=partner";
        const WITH_FRAGMENT: &'static str = "https://example.com/docs?page=2#install";
        const INVALID_NOT_URL: &'static str = "not-a-url";
        const INVALID_NO_SCHEME: &'static str = "example.com/landing";
    }

    fn spring_sale() -> ParameterSet {
        ParameterSet::full("google", "cpc", "spring_sale", "", "")
    }

    fn source_only(source: &str) -> ParameterSet {
        ParameterSet::full(source, "", "", "", "")
    }

    #[test]
    fn test_compose_landing_scenario() {
        assert_eq!(
            utm::compose(TestUrls::LANDING, &spring_sale()),
            "https://example.com/landing?utm_source=google&utm_medium=cpc&utm_campaign=spring_sale"
        );
    }

    #[test]
    fn test_compose_preserves_partner_param() {
        let output = utm::compose(TestUrls::WITH_PARTNER, &source_only("google"));
        let url = url::Url::parse(&output).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs,
            vec![
                ("utm_source".to_string(), "google".to_string()),
                ("ref".to_string(), "partner".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_urls_produce_nothing() {
        for base in [TestUrls::INVALID_NOT_URL, TestUrls::INVALID_NO_SCHEME, ""] {
            assert!(!utm::valid_url(base));
            assert_eq!(utm::compose(base, &spring_sale()), "");

            let composer = Composer::new(base, spring_sale());
            assert!(!composer.can_copy());
        }
    }

    #[test]
    fn test_whitespace_values_are_removed() {
        let base = "https://example.com/?utm_medium=cpc&utm_term=shoes";
        let params = ParameterSet::full("google", " \t", "", "  ", "");
        let output = utm::compose(base, &params);

        assert_eq!(output, "https://example.com/?utm_source=google");
        assert!(!output.contains("utm_medium"));
        assert!(!output.contains("utm_term"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let output = utm::compose(TestUrls::LANDING, &source_only("  newsletter \n"));
        assert_eq!(output, "https://example.com/landing?utm_source=newsletter");
    }

    #[test]
    fn test_idempotent_for_same_params() {
        let params = ParameterSet::full("google", "cpc", "spring sale", "shoes", "");
        for base in [TestUrls::LANDING, TestUrls::WITH_PARTNER, TestUrls::WITH_FRAGMENT] {
            let once = utm::compose(base, &params);
            assert_eq!(utm::compose(&once, &params), once);
        }
    }

    #[test]
    fn test_apply_params_keeps_fragment() {
        let url = utm::parse_base_url(TestUrls::WITH_FRAGMENT).unwrap();
        let output = utm::apply_params(url, &ParameterSet::new().with(UtmKey::Medium, "email"));
        assert_eq!(output, "https://example.com/docs?page=2&utm_medium=email#install");
    }

    #[test]
    fn test_composer_session() {
        let mut composer = Composer::new("", spring_sale());
        assert_eq!(composer.state(), ComposerState::NoBaseUrlEntered);

        composer.set_base_url("https://example");
        assert_eq!(composer.state(), ComposerState::ValidUrlWithOutput);

        composer.set_base_url("https//example.com");
        assert_eq!(composer.state(), ComposerState::InvalidUrl);

        composer.set_base_url(TestUrls::LANDING);
        composer.set_param(UtmKey::Term, "shoes");

        let mut clipboard = MemoryClipboard::new();
        let now = Instant::now();
        composer.copy(&mut clipboard, now).unwrap();

        assert_eq!(
            clipboard.contents.as_deref(),
            Some("https://example.com/landing?utm_source=google&utm_medium=cpc&utm_campaign=spring_sale&utm_term=shoes")
        );
        assert!(composer.is_copied_at(now + Duration::from_millis(100)));
        assert!(!composer.is_copied_at(now + Duration::from_secs(1)));
    }

    #[test]
    fn test_settings_drive_form_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"default_base_url": "https://shop.example.com/sale", "defaults": {"utm_source": "newsletter", "utm_medium": "email", "utm_campaign": ""}}"#,
        )
        .unwrap();

        let settings = settings::Settings::resolve(file.path().to_str()).unwrap();
        let composer = Composer::new(&settings.default_base_url, settings.defaults.to_params());

        assert_eq!(
            composer.output(),
            "https://shop.example.com/sale?utm_source=newsletter&utm_medium=email"
        );
    }

    #[test]
    fn test_batch_from_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{},{}", TestUrls::LANDING, TestUrls::INVALID_NOT_URL).unwrap();
        writeln!(file, "{}", TestUrls::WITH_PARTNER).unwrap();

        let source =
            batch::BatchSource::from_files(&[file.path().to_string_lossy().to_string()]).unwrap();
        let (lines, stats) = source.compose_all(&source_only("google"));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.invalid, 1);
        assert_eq!(lines[0].composed, "https://example.com/landing?utm_source=google");
        assert_eq!(
            lines[2].composed,
            "https://example.com/landing?utm_source=google&ref=partner"
        );
    }

    #[test]
    fn test_form_session_from_script() {
        let script = "url https://example.com/start\nsource twitter\nmedium social\ncampaign\nquit\n";
        let mut out = Vec::new();
        let mut clipboard = MemoryClipboard::new();

        let composer = form::run(
            Composer::new(TestUrls::LANDING, spring_sale()),
            script.as_bytes(),
            &mut out,
            &mut clipboard,
        )
        .unwrap();

        assert_eq!(
            composer.output(),
            "https://example.com/start?utm_source=twitter&utm_medium=social"
        );
        assert_eq!(clipboard.writes, 0);
    }
}
