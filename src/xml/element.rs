//! In-memory XML element tree used by the part decoders

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

use crate::error::{Error, Result};

/// XML node inside an [`XmlElement`]
#[derive(Clone, Debug, PartialEq)]
pub enum XmlNode {
    /// Element node
    Element(XmlElement),
    /// Text node (unescaped, whitespace preserved)
    Text(String),
}

/// XML element with attributes and children
#[derive(Clone, Debug, PartialEq)]
pub struct XmlElement {
    /// Full element name (with prefix, e.g., "p:sld")
    pub name: String,
    /// Attributes as (qualified name, value) pairs, in document order
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create a new empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parse a whole XML part and return its root element.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let xml = std::str::from_utf8(data)?;
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let start = e.into_owned();
                    return Self::from_reader(&mut reader, &start);
                }
                Event::Empty(e) => return Ok(Self::from_empty(&e)),
                Event::Eof => {
                    return Err(Error::InvalidDocument("XML part has no root element".into()))
                }
                _ => {}
            }
            buf.clear();
        }
    }

    /// Read a complete element from XML reader (starting after the start tag was read)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut element = Self::from_empty(start);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let start = e.into_owned();
                    let child = Self::from_reader(reader, &start)?;
                    element.children.push(XmlNode::Element(child));
                }
                Event::Empty(e) => {
                    element.children.push(XmlNode::Element(Self::from_empty(&e)));
                }
                Event::Text(t) => {
                    let text = t.unescape()?.into_owned();
                    if !text.is_empty() {
                        element.children.push(XmlNode::Text(text));
                    }
                }
                Event::CData(c) => {
                    let text = String::from_utf8_lossy(&c).into_owned();
                    element.children.push(XmlNode::Text(text));
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(Error::InvalidDocument(format!(
                        "unexpected EOF inside <{}>",
                        element.name
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(element)
    }

    /// Create from empty element tag
    pub fn from_empty(e: &BytesStart) -> Self {
        Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attributes: e
                .attributes()
                .filter_map(|a| a.ok())
                .map(|a| {
                    let key = String::from_utf8_lossy(a.key.as_ref()).into_owned();
                    let value = match a.unescape_value() {
                        Ok(v) => v.into_owned(),
                        Err(_) => String::from_utf8_lossy(&a.value).into_owned(),
                    };
                    (key, value)
                })
                .collect(),
            children: Vec::new(),
        }
    }

    /// Element name without its namespace prefix
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Whether this element has the given name (prefixes are ignored)
    pub fn is(&self, name: &str) -> bool {
        self.local_name() == local_name(name)
    }

    /// Get an attribute by its qualified name (e.g. `r:embed`)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if an attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Iterate over child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.is(name))
    }

    /// First element matching a `/`-separated relative path, e.g. `a:solidFill/a:srgbClr`
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        self.find_all(path).into_iter().next()
    }

    /// All elements matching a `/`-separated relative path, in document order
    pub fn find_all(&self, path: &str) -> Vec<&XmlElement> {
        let mut current = vec![self];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|e| e.elements().filter(move |c| c.is(segment)))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Concatenated text of this element and its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Strip the namespace prefix from a qualified name
pub fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map(|(_, local)| local).unwrap_or(name)
}
