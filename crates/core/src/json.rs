//! JSON form of font faces.
//!
//! ```json
//! {"fonts":[{"format":"woff2","weight":400,"family":"Domine","style":"normal",
//!   "url":"https://.../v10/abc.woff2","version":"v10","filename":"abc.woff2",
//!   "unicodeRange":["U+0000-00FF"]}]}
//! ```
//!
//! `version` and `filename` are derived from `url` on output and ignored on
//! input. `unicodeRange` is omitted when empty.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de,
    ser::SerializeStruct,
};

use crate::{
    collection::FontFaceCollection,
    face::{FontFace, SourceUrl},
};

impl Serialize for FontFace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FontFace", 8)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("weight", &self.weight)?;
        state.serialize_field("family", &self.family)?;
        state.serialize_field("style", &self.style)?;
        state.serialize_field("url", self.url_str())?;
        state.serialize_field("version", &self.version())?;
        state.serialize_field("filename", &self.file_name())?;
        if self.unicode_range.is_empty() {
            state.skip_field("unicodeRange")?;
        } else {
            state.serialize_field("unicodeRange", &self.unicode_range)?;
        }
        state.end()
    }
}

/// Wire shape of a face. Missing fields default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FontFaceRecord {
    format: String,
    weight: u32,
    family: String,
    style: String,
    url: String,
    unicode_range: Vec<String>,
}

impl TryFrom<FontFaceRecord> for FontFace {
    type Error = url::ParseError;

    fn try_from(record: FontFaceRecord) -> Result<Self, Self::Error> {
        let url = match record.url.as_str() {
            "" => None,
            raw => Some(SourceUrl::parse(raw)?),
        };
        Ok(FontFace {
            format: record.format,
            weight: record.weight,
            family: record.family,
            style: record.style,
            url,
            unicode_range: record.unicode_range,
        })
    }
}

impl<'de> Deserialize<'de> for FontFace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = FontFaceRecord::deserialize(deserializer)?;
        let url = record.url.clone();
        FontFace::try_from(record).map_err(|e| de::Error::custom(format!("invalid url {url:?}: {e}")))
    }
}

impl FontFaceCollection {
    /// Read a collection previously written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
