//! # linch-pptx-rs
//!
//! A reliable PPTX reading library for Rust.
//!
//! ## Features
//!
//! - Read PPTX presentations into a plain object model (slides, shapes, paragraphs, runs)
//! - Open password-protected presentations (ECMA-376 Standard Encryption, AES)
//! - Tolerant decoding: missing optional parts and unknown shapes are skipped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linch_pptx_rs::Presentation;
//!
//! // Open a presentation
//! let pres = Presentation::open("example.pptx")?;
//!
//! // Read the text of every slide
//! for slide in &pres.slides {
//!     for text in slide.texts() {
//!         println!("{}", text);
//!     }
//! }
//!
//! // Encrypted files need a password
//! let pres = Presentation::open_with_password("secret.pptx", "motdepasse")?;
//! ```

pub mod crypto;
pub mod document;
pub mod error;
pub mod layout;
pub mod opc;
pub mod reader;
pub mod units;
pub mod xml;

pub use document::{Background, Paragraph, Presentation, Run, Shape, ShapeLocation, Slide};
pub use error::{Error, Result};
pub use layout::{DefaultLayoutPack, LayoutPack, PackageLayoutPack};
pub use opc::{Package, Part, PartUri};
pub use reader::PresentationReader;
