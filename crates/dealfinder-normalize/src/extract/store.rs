use url::Url;

use dealfinder_core::constants::UNKNOWN_STORE;

/// Fixed domain → brand table, matched as substrings of the URL host.
const STORE_BRANDS: &[(&str, &str)] = &[
    ("amazon.com", "Amazon"),
    ("bestbuy.com", "Best Buy"),
    ("target.com", "Target"),
    ("walmart.com", "Walmart"),
    ("ebay.com", "eBay"),
    ("costco.com", "Costco"),
    ("homedepot.com", "Home Depot"),
    ("lowes.com", "Lowe's"),
    ("newegg.com", "Newegg"),
    ("bhphotovideo.com", "B&H Photo"),
    ("macys.com", "Macy's"),
    ("kohls.com", "Kohl's"),
    ("jcpenney.com", "JCPenney"),
    ("sears.com", "Sears"),
    ("overstock.com", "Overstock"),
    ("wayfair.com", "Wayfair"),
];

/// Resolve a store brand from a listing URL.
///
/// Unknown domains fall back to the capitalized first DNS label; an empty
/// or unparseable URL resolves to "Unknown Store".
pub fn extract_store(url: &str) -> String {
    if url.is_empty() {
        return UNKNOWN_STORE.to_string();
    }

    let Some(host) = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_lowercase))
    else {
        return UNKNOWN_STORE.to_string();
    };

    for (domain, brand) in STORE_BRANDS {
        if host.contains(domain) {
            return (*brand).to_string();
        }
    }

    let stripped = host.strip_prefix("www.").unwrap_or(&host);
    match stripped.split('.').next().filter(|label| !label.is_empty()) {
        Some(label) => capitalize(label),
        None => UNKNOWN_STORE.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
