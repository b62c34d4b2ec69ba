use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::{KatalogError, Result};

fn xml_io(e: std::io::Error) -> KatalogError {
    KatalogError::Xml(format!("XML write error: {e}"))
}

/// Text that carries a value: not empty and not only whitespace.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Streaming XML writer with the conditional helpers the catalogue layout uses.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Start a document with an XML declaration.
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| KatalogError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Start(elem)).map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self> {
        self.start_element_with_attrs(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write `<name attrs…>text</name>` unless `text` is absent or blank.
    ///
    /// Attributes whose value is absent or blank are left off. Returns whether
    /// the element was written.
    pub fn optional_element(
        &mut self,
        name: &str,
        text: Option<&str>,
        attrs: &[(&str, Option<&str>)],
    ) -> Result<bool> {
        let Some(text) = text.filter(|t| has_text(t)) else {
            return Ok(false);
        };
        let attrs: Vec<(&str, &str)> = attrs
            .iter()
            .filter_map(|(k, v)| v.filter(|v| has_text(v)).map(|v| (*k, v)))
            .collect();
        self.text_element_with_attrs(name, text, &attrs)?;
        Ok(true)
    }
}
