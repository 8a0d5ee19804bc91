//! Shared fixtures: presentations built in memory

#![allow(dead_code)]

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;
use linch_pptx_rs::crypto::key::derive_key;
use sha1::{Digest, Sha1};
use std::io::{Cursor, Read, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

pub const NS: &str = r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#;

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Route `log` output through the test harness; `RUST_LOG=debug` shows it
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write `bytes` to a file under the system temp directory
pub fn temp_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("linch-pptx-{}-{}", std::process::id(), name));
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Relationship type URI for a short name such as `slideLayout`
pub fn rel_type(short: &str) -> String {
    format!("{}/{}", REL_BASE, short)
}

/// A 1x1 PNG
pub const PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Wrap shapes in a slide part
pub fn slide_xml(c_sld_children: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {}><p:cSld>{}</p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        NS, c_sld_children
    )
}

/// A slide part whose shape tree holds `shapes`
pub fn shapes_slide(shapes: &str) -> String {
    slide_xml(&format!(
        "<p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree>",
        shapes
    ))
}

/// The slide the reading scenarios revolve around: one text shape, "Hello" bold and " world" plain
pub fn hello_world_slide() -> String {
    shapes_slide(
        r#"<p:sp>
  <p:nvSpPr><p:cNvPr id="2" name="TextBox 1"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
  <p:spPr><a:xfrm><a:off x="914400" y="457200"/><a:ext cx="4572000" cy="914400"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
  <p:txBody><a:bodyPr/><a:lstStyle/>
    <a:p><a:r><a:rPr lang="en-US" b="1"/><a:t>Hello</a:t></a:r><a:r><a:rPr lang="en-US" b="0"/><a:t> world</a:t></a:r></a:p>
  </p:txBody>
</p:sp>"#,
    )
}

fn rels_xml(rels: &[(String, String, String)]) -> String {
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{}">"#,
        REL_NS
    );
    for (id, rel_type, target) in rels {
        let mode = if target.starts_with("http") {
            r#" TargetMode="External""#
        } else {
            ""
        };
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
            id, rel_type, target, mode
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

struct SlideFixture {
    xml: String,
    rels: Vec<(String, String, String)>,
}

/// Builds a minimal but complete PPTX package
#[derive(Default)]
pub struct PptxBuilder {
    slides: Vec<SlideFixture>,
    extra: Vec<(String, Vec<u8>)>,
    /// Indices into `slides` in the order `p:sldIdLst` lists them
    order: Option<Vec<usize>>,
    skip_layouts: bool,
}

impl PptxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slide using layout 1
    pub fn slide(self, xml: impl Into<String>) -> Self {
        self.slide_with_rels(xml, &[])
    }

    /// Add a slide with extra relationships `(id, short type, target)`; `rId1` is its layout
    pub fn slide_with_rels(mut self, xml: impl Into<String>, rels: &[(&str, &str, &str)]) -> Self {
        let mut all = vec![(
            "rId1".to_string(),
            rel_type("slideLayout"),
            "../slideLayouts/slideLayout1.xml".to_string(),
        )];
        all.extend(
            rels.iter()
                .map(|(id, t, target)| (id.to_string(), rel_type(t), target.to_string())),
        );
        self.slides.push(SlideFixture {
            xml: xml.into(),
            rels: all,
        });
        self
    }

    /// Add a slide whose relationships are exactly `rels`
    pub fn slide_with_exact_rels(
        mut self,
        xml: impl Into<String>,
        rels: &[(&str, &str, &str)],
    ) -> Self {
        self.slides.push(SlideFixture {
            xml: xml.into(),
            rels: rels
                .iter()
                .map(|(id, t, target)| (id.to_string(), rel_type(t), target.to_string()))
                .collect(),
        });
        self
    }

    /// Add any other part (e.g. `docProps/core.xml`, `ppt/media/image1.png`)
    pub fn part(mut self, name: &str, data: impl Into<Vec<u8>>) -> Self {
        self.extra.push((name.to_string(), data.into()));
        self
    }

    /// List slides in `p:sldIdLst` in this order instead of the order they were added
    pub fn slide_order(mut self, order: &[usize]) -> Self {
        self.order = Some(order.to_vec());
        self
    }

    /// Leave out layouts and masters
    pub fn without_layouts(mut self) -> Self {
        self.skip_layouts = true;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut parts: Vec<(String, Vec<u8>)> = Vec::new();

        parts.push((
            "[Content_Types].xml".into(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Default Extension="png" ContentType="image/png"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
</Types>"#
                .into(),
        ));
        parts.push((
            "_rels/.rels".into(),
            rels_xml(&[(
                "rId1".into(),
                rel_type("officeDocument"),
                "ppt/presentation.xml".into(),
            )])
            .into_bytes(),
        ));

        let order: Vec<usize> = self
            .order
            .clone()
            .unwrap_or_else(|| (0..self.slides.len()).collect());
        let mut presentation = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation {}><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rIdMaster"/></p:sldMasterIdLst><p:sldIdLst>"#,
            NS
        );
        for (n, index) in order.iter().enumerate() {
            presentation.push_str(&format!(
                r#"<p:sldId id="{}" r:id="rIdSlide{}"/>"#,
                256 + n,
                index + 1
            ));
        }
        presentation.push_str(r#"</p:sldIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#);
        parts.push(("ppt/presentation.xml".into(), presentation.into_bytes()));

        let mut presentation_rels = vec![(
            "rIdMaster".to_string(),
            rel_type("slideMaster"),
            "slideMasters/slideMaster1.xml".to_string(),
        )];
        for (i, slide) in self.slides.iter().enumerate() {
            presentation_rels.push((
                format!("rIdSlide{}", i + 1),
                rel_type("slide"),
                format!("slides/slide{}.xml", i + 1),
            ));
            parts.push((format!("ppt/slides/slide{}.xml", i + 1), slide.xml.clone().into_bytes()));
            parts.push((
                format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
                rels_xml(&slide.rels).into_bytes(),
            ));
        }
        parts.push((
            "ppt/_rels/presentation.xml.rels".into(),
            rels_xml(&presentation_rels).into_bytes(),
        ));

        if !self.skip_layouts {
            for (n, name) in [(1, "Title Slide"), (2, "Title Only")] {
                parts.push((
                    format!("ppt/slideLayouts/slideLayout{}.xml", n),
                    format!(
                        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldLayout {}><p:cSld name="{}"><p:spTree/></p:cSld></p:sldLayout>"#,
                        NS, name
                    )
                    .into_bytes(),
                ));
                parts.push((
                    format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", n),
                    rels_xml(&[(
                        "rId1".into(),
                        rel_type("slideMaster"),
                        "../slideMasters/slideMaster1.xml".into(),
                    )])
                    .into_bytes(),
                ));
            }
            parts.push((
                "ppt/slideMasters/slideMaster1.xml".into(),
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldMaster {}><p:cSld><p:spTree/></p:cSld></p:sldMaster>"#,
                    NS
                )
                .into_bytes(),
            ));
        }

        parts.extend(self.extra.iter().cloned());
        zip_parts(&parts)
    }
}

/// Write parts into a ZIP archive
pub fn zip_parts(parts: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in parts {
        zip.start_file(name.as_str(), SimpleFileOptions::default())
            .unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Read every entry of a ZIP archive
pub fn unzip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut parts = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        parts.push((file.name().to_string(), data));
    }
    parts
}

fn aes128_ecb_encrypt(key: &[u8], buf: &mut [u8]) {
    assert_eq!(buf.len() % 16, 0);
    let cipher = Aes128::new_from_slice(key).unwrap();
    for block in buf.chunks_mut(16) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
}

/// Standard Encryption `EncryptionInfo` stream for AES-128 / SHA-1
pub fn encryption_info(
    salt: &[u8; 16],
    encrypted_verifier: &[u8; 16],
    encrypted_hash: &[u8; 32],
) -> Vec<u8> {
    let mut header = Vec::new();
    header.extend_from_slice(&0x24u32.to_le_bytes());
    header.extend_from_slice(&0u32.to_le_bytes());
    header.extend_from_slice(&0x660Eu32.to_le_bytes());
    header.extend_from_slice(&0x8004u32.to_le_bytes());
    header.extend_from_slice(&128u32.to_le_bytes());
    header.extend_from_slice(&0x18u32.to_le_bytes());
    header.extend_from_slice(&[0u8; 8]);
    for unit in "Microsoft Enhanced RSA and AES Cryptographic Provider".encode_utf16() {
        header.extend_from_slice(&unit.to_le_bytes());
    }
    header.extend_from_slice(&[0, 0]);

    let mut info = Vec::new();
    info.extend_from_slice(&4u16.to_le_bytes());
    info.extend_from_slice(&2u16.to_le_bytes());
    info.extend_from_slice(&0x24u32.to_le_bytes());
    info.extend_from_slice(&(header.len() as u32).to_le_bytes());
    info.extend_from_slice(&header);
    info.extend_from_slice(&16u32.to_le_bytes());
    info.extend_from_slice(salt);
    info.extend_from_slice(encrypted_verifier);
    info.extend_from_slice(&20u32.to_le_bytes());
    info.extend_from_slice(encrypted_hash);
    info
}

/// Put streams into a compound file
pub fn compound_file(streams: &[(&str, &[u8])]) -> Vec<u8> {
    let mut file = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
    for (name, data) in streams {
        let mut stream = file.create_stream(name).unwrap();
        stream.write_all(data).unwrap();
    }
    file.into_inner().into_inner()
}

/// Wrap a package the way Office saves a password-protected file
pub fn encrypt_package(package: &[u8], password: &str) -> Vec<u8> {
    let salt: [u8; 16] = *b"linch-pptx-salt!";
    let key = derive_key(password, &salt, 16).unwrap();

    let mut verifier: [u8; 16] = *b"verifier-block-0";
    let mut verifier_hash = [0u8; 32];
    verifier_hash[..20].copy_from_slice(&Sha1::digest(verifier));
    aes128_ecb_encrypt(&key, &mut verifier);
    aes128_ecb_encrypt(&key, &mut verifier_hash);

    let mut body = package.to_vec();
    body.resize((package.len() + 15) / 16 * 16, 0);
    aes128_ecb_encrypt(&key, &mut body);
    let mut encrypted_package = (package.len() as u64).to_le_bytes().to_vec();
    encrypted_package.extend_from_slice(&body);

    let info = encryption_info(&salt, &verifier, &verifier_hash);
    compound_file(&[
        ("EncryptionInfo", &info[..]),
        ("EncryptedPackage", &encrypted_package[..]),
    ])
}
