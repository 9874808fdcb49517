use log::debug;
use url::Url;

use super::params::ParameterSet;
use super::validation::parse_base_url;

/// Composes the final URL, or returns an empty string when `base_url` is invalid.
pub fn compose(base_url: &str, params: &ParameterSet) -> String {
    match parse_base_url(base_url) {
        Some(url) => apply_params(url, params),
        None => String::new(),
    }
}

/// Merges `params` into the query of `url` and serializes the result.
///
/// Non-empty trimmed values overwrite any existing parameter of the same name
/// (first occurrence keeps its position, later duplicates are dropped) or are
/// appended. Blank values remove the parameter. Everything else in the URL is
/// left alone, though the whole query is re-encoded as form data.
pub fn apply_params(mut url: Url, params: &ParameterSet) -> String {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for (key, raw) in params.iter() {
        let value = raw.trim();
        if value.is_empty() {
            remove_pair(&mut pairs, key.as_str());
        } else {
            set_pair(&mut pairs, key.as_str(), value);
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    debug!("Composed URL with {} query pair(s)", pairs.len());
    url.into()
}

fn set_pair(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == name) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = index <= first || k != name;
                index += 1;
                keep
            });
        }
        None => pairs.push((name.to_string(), value.to_string())),
    }
}

fn remove_pair(pairs: &mut Vec<(String, String)>, name: &str) {
    pairs.retain(|(k, _)| k != name);
}
