//! Fetching `@font-face` CSS from the Google Fonts API.
//!
//! The API picks the font format from the `User-Agent` header, so each
//! [`FontProfile`] is just a browser identity known to receive one format.

use std::{fmt, str::FromStr};

use log::info;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::{config, error::DownloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontProfile {
    #[default]
    Woff2,
    AppleWoff2,
    LegacyWoff2,
    AppleLegacyWoff2,
    Woff,
    AppleWoff,
    LegacyWoff,
    AppleLegacyWoff,
    Ttf,
    AppleTtf,
    Svg,
    Eot,
}

impl FontProfile {
    pub const ALL: [FontProfile; 12] = [
        FontProfile::Woff2,
        FontProfile::AppleWoff2,
        FontProfile::LegacyWoff2,
        FontProfile::AppleLegacyWoff2,
        FontProfile::Woff,
        FontProfile::AppleWoff,
        FontProfile::LegacyWoff,
        FontProfile::AppleLegacyWoff,
        FontProfile::Ttf,
        FontProfile::AppleTtf,
        FontProfile::Svg,
        FontProfile::Eot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontProfile::Woff2 => "woff2",
            FontProfile::AppleWoff2 => "apple_woff2",
            FontProfile::LegacyWoff2 => "legacy_woff2",
            FontProfile::AppleLegacyWoff2 => "apple_legacy_woff2",
            FontProfile::Woff => "woff",
            FontProfile::AppleWoff => "apple_woff",
            FontProfile::LegacyWoff => "legacy_woff",
            FontProfile::AppleLegacyWoff => "apple_legacy_woff",
            FontProfile::Ttf => "ttf",
            FontProfile::AppleTtf => "apple_ttf",
            FontProfile::Svg => "svg",
            FontProfile::Eot => "eot",
        }
    }

    pub fn user_agent(self) -> &'static str {
        match self {
            FontProfile::Woff2 => config::UA_WOFF2,
            FontProfile::AppleWoff2 => config::UA_APPLE_WOFF2,
            FontProfile::LegacyWoff2 => config::UA_LEGACY_WOFF2,
            FontProfile::AppleLegacyWoff2 => config::UA_APPLE_LEGACY_WOFF2,
            FontProfile::Woff => config::UA_WOFF,
            FontProfile::AppleWoff => config::UA_APPLE_WOFF,
            FontProfile::LegacyWoff => config::UA_LEGACY_WOFF,
            FontProfile::AppleLegacyWoff => config::UA_APPLE_LEGACY_WOFF,
            FontProfile::Ttf => config::UA_TTF,
            FontProfile::AppleTtf => config::UA_APPLE_TTF,
            FontProfile::Svg => config::UA_SVG,
            FontProfile::Eot => config::UA_EOT,
        }
    }
}

impl FromStr for FontProfile {
    type Err = DownloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontProfile::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| DownloadError::UnknownProfile(s.to_string()))
    }
}

impl fmt::Display for FontProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// API request URL for a family and style, e.g.
/// `https://fonts.googleapis.com/css2?family=Open+Sans:ital,wght@1,700`.
///
/// `mirror` replaces the API base. An empty style omits the `:style` part.
pub fn css_url(family: &str, style: &str, mirror: Option<&Url>) -> String {
    let base = mirror.map_or(config::API_BASE_URL, Url::as_str);
    let family = family.replace(' ', "+");
    if style.is_empty() {
        format!("{base}?family={family}")
    } else {
        format!("{base}?family={family}:{style}")
    }
}

/// Download the CSS the API serves to `profile`.
pub fn download_css(
    profile: FontProfile,
    family: &str,
    style: &str,
    mirror: Option<&Url>,
) -> Result<String, DownloadError> {
    let url = css_url(family, style, mirror);
    info!("GET {url} as {profile}");

    let request_error = |source: reqwest::Error| DownloadError::Request { url: url.clone(), source };
    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header(USER_AGENT, profile.user_agent())
        .send()
        .map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status { url: url.clone(), status });
    }

    response.text().map_err(request_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_names_round_trip() {
        for profile in FontProfile::ALL {
            assert_eq!(profile.name().parse::<FontProfile>().unwrap(), profile);
            assert_eq!(profile.to_string(), profile.name());
        }
    }

    #[test]
    fn unknown_profile() {
        let err = "woff3".parse::<FontProfile>().unwrap_err();
        assert!(matches!(err, DownloadError::UnknownProfile(ref p) if p == "woff3"));
        assert_eq!(err.to_string(), "unknown font profile \"woff3\"");
    }

    #[test]
    fn profiles_have_distinct_agents() {
        let mut agents: Vec<_> = FontProfile::ALL.iter().map(|p| p.user_agent()).collect();
        agents.sort();
        agents.dedup();
        assert_eq!(agents.len(), FontProfile::ALL.len());
        assert_eq!(FontProfile::Eot.user_agent(), "MSIE 8.0");
    }

    #[test]
    fn url_replaces_spaces() {
        assert_eq!(
            css_url("Open Sans", "ital,wght@1,700", None),
            "https://fonts.googleapis.com/css2?family=Open+Sans:ital,wght@1,700"
        );
    }

    #[test]
    fn url_without_style() {
        assert_eq!(css_url("Domine", "", None), "https://fonts.googleapis.com/css2?family=Domine");
    }

    #[test]
    fn url_with_mirror() {
        let mirror = Url::parse("https://fonts.example.org/css2").unwrap();
        assert_eq!(
            css_url("Domine", "wght@700", Some(&mirror)),
            "https://fonts.example.org/css2?family=Domine:wght@700"
        );
    }
}
