//! Configuration constants for the Google Fonts API.

/// CSS endpoint of the Google Fonts API.
pub const API_BASE_URL: &str = "https://fonts.googleapis.com/css2";

/// Modern Chrome: WOFF2 with unicode-range subsets.
pub const UA_WOFF2: &str = "Mozilla/5.0 (Windows NT 6.2; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/51.0.2704.106 Safari/537.36";

/// Firefox on macOS: WOFF2 tuned for Apple hinting.
pub const UA_APPLE_WOFF2: &str =
    "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.10; rv:62.0) Gecko/20100101 Firefox/62.0";

/// Firefox 40: WOFF2 without unicode-range subsets.
pub const UA_LEGACY_WOFF2: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.1";

/// Firefox 40 on PPC macOS.
pub const UA_APPLE_LEGACY_WOFF2: &str =
    "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en) Gecko/20100101 Firefox/40.1";

/// Chrome 41: WOFF.
pub const UA_WOFF: &str =
    "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

/// Old Safari: WOFF tuned for Apple hinting.
pub const UA_APPLE_WOFF: &str =
    "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en) AppleWebKit/418 (KHTML, like Gecko) Safari/417.9.2";

/// Chrome 32: WOFF without unicode-range subsets.
pub const UA_LEGACY_WOFF: &str = "Mozilla/4.0 (Windows NT 6.2; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1667.0 Safari/537.36";

/// Chrome 37 on macOS.
pub const UA_APPLE_LEGACY_WOFF: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/37.0.2062.124 Safari/537.36";

/// Bare user agent: TrueType.
pub const UA_TTF: &str = "Mozilla/5.0";

/// Safari 4 preview: TrueType tuned for Apple hinting.
pub const UA_APPLE_TTF: &str = "Mozilla/5.0 (Macintosh; U; PPC Mac OS X 10_4_11; en) AppleWebKit/528.4+ (KHTML, like Gecko) Version/4.0dp1 Safari/526.11.2";

/// Early iPad WebKit: SVG fonts.
pub const UA_SVG: &str = "(iPad) AppleWebKit/534";

/// Internet Explorer 8: EOT.
pub const UA_EOT: &str = "MSIE 8.0";
