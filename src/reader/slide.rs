//! Slide part decoding (p:sld)
//!
//! Everything optional is tolerated: unknown shape elements, missing
//! attributes and relationship IDs that do not resolve are skipped and the
//! rest of the slide is still decoded.

use crate::document::{
    Alignment, AutoShapeType, Background, Bullet, Color, Font, Frame, HorizontalAlignment,
    Hyperlink, ImageData, Paragraph, ParagraphElement, Picture, RichText, Run, Shadow, Shape,
    Slide, Underline, VerticalAlignment,
};
use crate::error::{Error, Result};
use crate::layout::{self, LayoutPack};
use crate::opc::{Package, PartUri, RelationshipTable};
use crate::units::{angle_to_degrees, emu_to_pixels};
use crate::xml::{parse_bool, parse_int, XmlElement};

/// Alpha values are in thousandths of a percent
const ALPHA_SCALE: f64 = 100_000.0;

/// Decode one slide part.
///
/// `rels` caches relationship parts for the whole load; the slide's own
/// relationships and those of its layout are loaded into it.
pub fn read_slide(
    package: &Package,
    rels: &mut RelationshipTable,
    layouts: &dyn LayoutPack,
    part: &PartUri,
    xml: &[u8],
) -> Result<Slide> {
    let root = XmlElement::parse(xml)
        .map_err(|err| Error::InvalidDocument(format!("{}: {}", part, err)))?;
    rels.load(package, part);

    let mut slide = Slide::new(part.as_str());
    {
        let ctx = SlideContext {
            package,
            rels: &*rels,
            part,
        };
        slide.background = ctx.read_background(&root);
        slide.shapes = ctx.read_shapes(&root);
    }
    resolve_layout(package, rels, layouts, part, &mut slide);

    log::debug!("{}: {} shapes", part, slide.shapes.len());
    Ok(slide)
}

/// Attach the layout name and master id the slide's first layout relationship points at
fn resolve_layout(
    package: &Package,
    rels: &mut RelationshipTable,
    layouts: &dyn LayoutPack,
    part: &PartUri,
    slide: &mut Slide,
) {
    let Some(rel) = layout::layout_relationship(rels.load(package, part)).cloned() else {
        log::debug!("{} has no slide layout", part);
        return;
    };
    let Some(index) = layout::layout_index(&rel.target) else {
        return;
    };

    slide.master_id = match part.resolve(&rel.target) {
        Ok(layout_part) => layout::master_id(rels.load(package, &layout_part)),
        Err(_) => 1,
    };
    slide.layout_name = layouts.find_layout_name(index, slide.master_id);
    if slide.layout_name.is_none() {
        log::debug!(
            "no name for layout {} of master {}",
            index,
            slide.master_id
        );
    }
}

/// Read-only state shared by the decoders of one slide
struct SlideContext<'a> {
    package: &'a Package,
    rels: &'a RelationshipTable,
    part: &'a PartUri,
}

impl SlideContext<'_> {
    /// Color fill first, then picture fill; the later one wins
    fn read_background(&self, root: &XmlElement) -> Option<Background> {
        let bg_pr = root.find("cSld/bg/bgPr")?;
        let mut background = None;

        if let Some(clr) = bg_pr.find("solidFill/srgbClr") {
            let rgb = clr.attr("val").unwrap_or(Color::BLACK);
            background = Some(Background::Color(Color::new(rgb)));
        }

        if let Some(blip) = bg_pr.find("blipFill/blip") {
            if let Some(image) = blip.attr("r:embed").and_then(|id| self.image(id)) {
                background = Some(Background::Image(image));
            }
        }

        background
    }

    fn read_shapes(&self, root: &XmlElement) -> Vec<Shape> {
        let Some(tree) = root.find("cSld/spTree") else {
            return Vec::new();
        };

        let mut shapes = Vec::new();
        for node in tree.elements() {
            match node.local_name() {
                "pic" => shapes.push(Shape::Picture(self.read_picture(node))),
                "sp" => shapes.push(Shape::RichText(self.read_rich_text(node))),
                "nvGrpSpPr" | "grpSpPr" | "extLst" => {}
                other => log::debug!("{}: skipping unsupported shape <{}>", self.part, other),
            }
        }
        shapes
    }

    fn read_picture(&self, node: &XmlElement) -> Picture {
        let mut picture = Picture::default();

        if let Some(c_nv_pr) = node.find("nvPicPr/cNvPr") {
            picture.name = c_nv_pr.attr("name").unwrap_or_default().to_string();
            picture.description = c_nv_pr.attr("descr").unwrap_or_default().to_string();
        }

        if let Some(blip) = node.find("blipFill/blip") {
            picture.image = blip.attr("r:embed").and_then(|id| self.image(id));
        }

        picture.frame = read_frame(node);
        picture.shadow = read_shadow(node);
        picture
    }

    fn read_rich_text(&self, node: &XmlElement) -> RichText {
        let mut shape = RichText {
            name: node
                .find("nvSpPr/cNvPr")
                .and_then(|e| e.attr("name"))
                .unwrap_or_default()
                .to_string(),
            frame: read_frame(node),
            shadow: read_shadow(node),
            ..Default::default()
        };

        if let Some(prst) = node.find("spPr/prstGeom").and_then(|g| g.attr("prst")) {
            shape.preset_geometry = AutoShapeType::from_preset(prst);
            if shape.preset_geometry.is_none() {
                log::debug!("unknown preset geometry '{}'", prst);
            }
        }

        shape.paragraphs = node
            .find_all("txBody/p")
            .into_iter()
            .map(|p| self.read_paragraph(p))
            .collect();
        shape
    }

    fn read_paragraph(&self, node: &XmlElement) -> Paragraph {
        let mut paragraph = Paragraph::default();

        if let Some(p_pr) = node.child("pPr") {
            paragraph.alignment = read_alignment(p_pr);
            paragraph.bullet = read_bullet(p_pr);
        }

        for child in node.elements() {
            match child.local_name() {
                "r" => {
                    if let Some(run) = self.read_run(child) {
                        paragraph.elements.push(ParagraphElement::Run(run));
                    }
                }
                "br" => paragraph.elements.push(ParagraphElement::Break),
                _ => {}
            }
        }
        paragraph
    }

    /// Runs without `a:rPr` are dropped
    fn read_run(&self, node: &XmlElement) -> Option<Run> {
        let r_pr = node.child("rPr")?;
        let mut font = Font::default();

        if let Some(v) = r_pr.attr("b") {
            font.bold = parse_bool(v);
        }
        if let Some(v) = r_pr.attr("i") {
            font.italic = parse_bool(v);
        }
        if let Some(v) = r_pr.attr("strike") {
            font.strikethrough = v != "noStrike";
        }
        if let Some(sz) = parse_int(r_pr, "sz") {
            font.size = u32::try_from(sz / 100).unwrap_or(Font::DEFAULT_SIZE);
        }
        if let Some(v) = r_pr.attr("u") {
            font.underline = Underline::parse(v);
        }
        if let Some(rgb) = r_pr.find("solidFill/srgbClr").and_then(|c| c.attr("val")) {
            font.color = Color::new(rgb);
        }
        if let Some(typeface) = r_pr.child("latin").and_then(|l| l.attr("typeface")) {
            font.name = typeface.to_string();
        }

        let hyperlink = r_pr.child("hlinkClick").map(|link| Hyperlink {
            url: link
                .attr("r:id")
                .and_then(|id| self.rels.resolve(self.part, id))
                .map(|rel| rel.target.clone())
                .unwrap_or_default(),
            tooltip: link.attr("tooltip").map(str::to_string),
        });

        Some(Run {
            text: node.child("t").map(XmlElement::text).unwrap_or_default(),
            font,
            hyperlink,
        })
    }

    /// Bytes of the image an `r:embed` ID points at
    fn image(&self, id: &str) -> Option<ImageData> {
        let Some(uri) = self.rels.resolve_part(self.part, id) else {
            log::debug!("{}: image relationship '{}' does not resolve", self.part, id);
            return None;
        };
        let Some(part) = self.package.part(&uri) else {
            log::warn!("{}: image part {} is missing", self.part, uri);
            return None;
        };

        Some(ImageData {
            path: uri.to_string(),
            content_type: part.content_type().map(str::to_string),
            bytes: part.data().to_vec(),
        })
    }
}

/// Read `p:spPr/a:xfrm`; absent attributes keep their defaults
fn read_frame(node: &XmlElement) -> Frame {
    let mut frame = Frame::default();
    let Some(xfrm) = node.find("spPr/xfrm") else {
        return frame;
    };

    if let Some(rot) = parse_int(xfrm, "rot") {
        frame.rotation = angle_to_degrees(rot);
    }
    if let Some(off) = xfrm.child("off") {
        if let Some(x) = parse_int(off, "x") {
            frame.x = emu_to_pixels(x);
        }
        if let Some(y) = parse_int(off, "y") {
            frame.y = emu_to_pixels(y);
        }
    }
    if let Some(ext) = xfrm.child("ext") {
        if let Some(cx) = parse_int(ext, "cx") {
            frame.width = emu_to_pixels(cx);
        }
        if let Some(cy) = parse_int(ext, "cy") {
            frame.height = emu_to_pixels(cy);
        }
    }
    frame
}

/// Read `p:spPr/a:effectLst`; its presence alone makes the shadow visible
fn read_shadow(node: &XmlElement) -> Shadow {
    let mut shadow = Shadow::default();
    let Some(effects) = node.find("spPr/effectLst") else {
        return shadow;
    };
    shadow.visible = true;

    let Some(outer) = effects.child("outerShdw") else {
        return shadow;
    };
    if let Some(blur) = parse_int(outer, "blurRad") {
        shadow.blur_radius = emu_to_pixels(blur);
    }
    if let Some(dist) = parse_int(outer, "dist") {
        shadow.distance = emu_to_pixels(dist);
    }
    if let Some(dir) = parse_int(outer, "dir") {
        shadow.direction = angle_to_degrees(dir);
    }
    if let Some(algn) = outer.attr("algn") {
        shadow.alignment = algn.to_string();
    }
    if let Some(clr) = outer.child("srgbClr") {
        if let Some(rgb) = clr.attr("val") {
            shadow.color = Color::new(rgb);
        }
        if let Some(alpha) = clr.child("alpha").and_then(|a| parse_int(a, "val")) {
            shadow.alpha = alpha as f64 / ALPHA_SCALE;
        }
    }
    shadow
}

fn read_alignment(p_pr: &XmlElement) -> Alignment {
    let mut alignment = Alignment::default();

    if let Some(v) = p_pr.attr("algn") {
        match HorizontalAlignment::parse(v) {
            Some(h) => alignment.horizontal = h,
            None => log::debug!("unknown paragraph alignment '{}'", v),
        }
    }
    if let Some(v) = p_pr.attr("fontAlgn") {
        match VerticalAlignment::parse(v) {
            Some(va) => alignment.vertical = va,
            None => log::debug!("unknown font alignment '{}'", v),
        }
    }
    if let Some(v) = parse_int(p_pr, "marL") {
        alignment.margin_left = emu_to_pixels(v);
    }
    if let Some(v) = parse_int(p_pr, "marR") {
        alignment.margin_right = emu_to_pixels(v);
    }
    if let Some(v) = parse_int(p_pr, "indent") {
        alignment.indent = emu_to_pixels(v);
    }
    if let Some(v) = parse_int(p_pr, "lvl") {
        alignment.level = u32::try_from(v).unwrap_or_default();
    }
    alignment
}

/// `a:buChar` makes a bullet; `a:buFont` alone does not
fn read_bullet(p_pr: &XmlElement) -> Bullet {
    let Some(bu_char) = p_pr.child("buChar") else {
        return Bullet::None;
    };

    let font = p_pr
        .child("buFont")
        .and_then(|f| f.attr("typeface"))
        .unwrap_or(Bullet::DEFAULT_FONT);
    let char = bu_char.attr("char").unwrap_or(Bullet::DEFAULT_CHAR);

    Bullet::Bulleted {
        font: font.to_string(),
        char: char.to_string(),
    }
}
