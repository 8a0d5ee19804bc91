//! XML utilities: a small element tree for the part decoders

mod element;

pub use element::{local_name, XmlElement, XmlNode};

/// Parse a boolean attribute value from OOXML ("1", "true", "on")
pub fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "on")
}

/// Parse an integer attribute, logging and discarding malformed values
pub fn parse_int(element: &XmlElement, name: &str) -> Option<i64> {
    let raw = element.attr(name)?;
    match raw.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::debug!("ignoring non-numeric {}=\"{}\" on <{}>", name, raw, element.name);
            None
        }
    }
}
