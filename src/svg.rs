use libflate::gzip::Decoder;
use roxmltree::Document;

use crate::parse_node_list;
use crate::prelude::*;
use crate::util::dimension;

const DEFAULT_SIZE: u32 = 512;

/// A parsed document: the top-level shapes in document order, plus the
/// declared canvas size. Immutable once built.
#[derive(Debug)]
pub struct Svg {
    pub items: Vec<Item>,
    pub width: u32,
    pub height: u32,
}

impl Svg {
    pub fn parse(doc: &Document) -> Result<Svg, Error> {
        let root = doc.root_element();
        if !root.has_tag_name("svg") {
            return Err(Error::NotSvg);
        }

        let width = root
            .attribute("width")
            .and_then(dimension)
            .unwrap_or(DEFAULT_SIZE);
        let height = root
            .attribute("height")
            .and_then(dimension)
            .unwrap_or(DEFAULT_SIZE);

        // fill at the document root defaults to opaque black
        let items = parse_node_list(root.children(), Color::black())?;

        Ok(Svg { items, width, height })
    }

    pub fn from_str(text: &str) -> Result<Svg, Error> {
        let doc = Document::parse(text)?;
        Svg::parse(&doc)
    }

    /// Parse raw bytes, inflating gzip-compressed input (`.svgz`) first.
    pub fn from_data(data: &[u8]) -> Result<Svg, Error> {
        if data.starts_with(&[0x1f, 0x8b]) {
            use std::io::Read;
            let mut decoder = Decoder::new(data).map_err(Error::Gzip)?;
            let mut decoded = Vec::new();
            decoder.read_to_end(&mut decoded).map_err(Error::Gzip)?;
            let text = std::str::from_utf8(&decoded)?;
            Svg::from_str(text)
        } else {
            let text = std::str::from_utf8(data)?;
            Svg::from_str(text)
        }
    }

    /// Render onto a fresh white surface of the document's declared size.
    pub fn render(&self) -> Surface {
        let mut surface = Surface::new(self.width, self.height, Color::white());
        self.render_into(&mut surface);
        surface
    }

    /// Render into an existing surface, in document order, last drawn wins.
    pub fn render_into(&self, surface: &mut Surface) {
        for item in &self.items {
            item.draw(surface);
        }
    }
}
