//! Read-only inspection of generated SVG documents
//!
//! The client treats response bodies as opaque bytes. This module only
//! reports what a returned document contains, so front ends can tell the
//! user how many cut paths came back.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// Summary of a cut path SVG
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSummary {
    /// Root `width` in user units, with any `px` suffix stripped
    pub width: Option<f64>,
    /// Root `height` in user units, with any `px` suffix stripped
    pub height: Option<f64>,
    /// Number of `<path>` elements
    pub path_count: usize,
    /// Whether the document embeds the source raster via `<image>`
    pub has_embedded_image: bool,
}

impl SvgSummary {
    /// Stream `bytes` and summarize the document
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut summary = SvgSummary::default();
        let mut seen_root = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    let name = local_name(e);
                    if !seen_root {
                        if name != "svg" {
                            return Err(Error::InvalidSvg(format!(
                                "root element is <{name}>, expected <svg>"
                            )));
                        }
                        read_root_size(e, &mut summary);
                        seen_root = true;
                    } else {
                        match name.as_str() {
                            "path" => summary.path_count += 1,
                            "image" => summary.has_embedded_image = true,
                            _ => {}
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::InvalidSvg(format!(
                        "XML error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(Error::InvalidSvg("no <svg> root element".to_string()));
        }

        Ok(summary)
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    let name = e.local_name();
    String::from_utf8_lossy(name.as_ref()).into_owned()
}

fn read_root_size(e: &BytesStart<'_>, summary: &mut SvgSummary) {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
        let value = std::str::from_utf8(&attr.value).unwrap_or("");
        match key {
            "width" => summary.width = parse_length(value),
            "height" => summary.height = parse_length(value),
            _ => {}
        }
    }
}

/// Parse "500", "500px" or "12.5px"; other units are not converted
fn parse_length(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}
