//! Core, custom and view property parts

use crate::document::DocumentProperties;
use crate::error::Result;
use crate::xml::XmlElement;

const MARK_AS_FINAL: &str = "_MarkAsFinal";

/// Decode `docProps/core.xml`
pub fn read_core_properties(xml: &[u8]) -> Result<DocumentProperties> {
    let root = XmlElement::parse(xml)?;
    let field = |name: &str| root.child(name).map(XmlElement::text);

    Ok(DocumentProperties {
        creator: field("creator"),
        last_modified_by: field("lastModifiedBy"),
        title: field("title"),
        description: field("description"),
        subject: field("subject"),
        keywords: field("keywords"),
        category: field("category"),
        created: field("created"),
        modified: field("modified"),
    })
}

/// Whether `docProps/custom.xml` carries `_MarkAsFinal = true`
pub fn read_marked_as_final(xml: &[u8]) -> Result<bool> {
    let root = XmlElement::parse(xml)?;

    let marked = root
        .elements()
        .filter(|p| p.is("property") && p.attr("name") == Some(MARK_AS_FINAL))
        .filter_map(|p| p.child("bool"))
        .any(|b| b.text().trim() == "true");
    Ok(marked)
}

/// Zoom of the normal view from `ppt/viewProps.xml`, `None` when absent or unusable
pub fn read_zoom(xml: &[u8]) -> Result<Option<f64>> {
    let root = XmlElement::parse(xml)?;

    let Some(sx) = root.find("slideViewPr/cSldViewPr/cViewPr/scale/sx") else {
        return Ok(None);
    };
    let ratio = |name: &str| sx.attr(name).and_then(|v| v.trim().parse::<f64>().ok());

    match (ratio("n"), ratio("d")) {
        (Some(n), Some(d)) if d != 0.0 => Ok(Some(n / d)),
        (n, d) => {
            log::debug!("ignoring view scale n={:?} d={:?}", n, d);
            Ok(None)
        }
    }
}
