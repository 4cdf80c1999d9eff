//! Company logo payloads.
//!
//! The backend returns the logo either as a data URI
//! (`data:image/png;base64,...`) or as bare base64. Uploads go out as raw
//! bytes with an explicit mime type.

use std::fmt::{Display, Formatter};
use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{ModelError, Result};

/// Image formats accepted for a company logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoMime {
    Png,
    Jpeg,
}

impl LogoMime {
    /// Parse a mime string; `image/jpg` is accepted as an alias of
    /// `image/jpeg`. Parameters such as `; charset=` are ignored.
    pub fn parse(mime: &str) -> Result<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Ok(Self::Png),
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            _ => Err(ModelError::UnsupportedMime(mime.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Detect the format from the file header.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            _ => None,
        }
    }
}

impl Display for LogoMime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded logo image.
#[derive(Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub mime: LogoMime,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for LogoImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoImage")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl LogoImage {
    pub fn new(mime: LogoMime, bytes: Vec<u8>) -> Self {
        Self { mime, bytes }
    }

    /// Decode a backend logo payload.
    ///
    /// Bare base64 has its format sniffed from the magic bytes and falls back
    /// to PNG when the bytes are not recognisable.
    pub fn from_payload(payload: &str) -> Result<Self> {
        let payload = payload.trim();
        if let Some(rest) = payload.strip_prefix("data:") {
            let (header, data) = rest.split_once(',').ok_or_else(|| {
                ModelError::MalformedDataUri("missing ',' separator".into())
            })?;
            let mut parts = header.split(';');
            let mime = parts.next().unwrap_or_default();
            if !parts.any(|p| p.eq_ignore_ascii_case("base64")) {
                return Err(ModelError::MalformedDataUri(
                    "only base64 data uris are supported".into(),
                ));
            }
            let mime = LogoMime::parse(mime)?;
            let bytes = decode_base64(data)?;
            return Ok(Self { mime, bytes });
        }

        let bytes = decode_base64(payload)?;
        let mime = LogoMime::sniff(&bytes).unwrap_or(LogoMime::Png);
        Ok(Self { mime, bytes })
    }

    /// Render as a `data:` URI suitable for inline display.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime.as_str(),
            STANDARD.encode(&self.bytes)
        )
    }

    /// Pixel dimensions, when the bytes decode as an image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        image::ImageReader::new(Cursor::new(&self.bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }
}

fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let compact: String =
        data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}
