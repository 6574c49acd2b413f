//! XML documentation file reader.
//!
//! Reads the two-level schema compilers emit next to an assembly:
//!
//! ```xml
//! <?xml version="1.0"?>
//! <doc>
//!   <assembly><name>Acme.Core</name></assembly>
//!   <members>
//!     <member name="T:Acme.Order">
//!       <summary>An order.</summary>
//!     </member>
//!     <member name="M:Acme.Order.Add(System.Int32)">
//!       <summary>Adds items.</summary>
//!       <param name="quantity">How many.</param>
//!     </member>
//!   </members>
//! </doc>
//! ```

use std::path::PathBuf;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smol_str::SmolStr;

use super::DocCommentSource;
use super::error::DocError;
use super::fragment::{DocComments, DocException, DocFragment, DocParam};

// ============================================================================
// SOURCE
// ============================================================================

#[derive(Clone, Debug)]
enum Origin {
    Path(PathBuf),
    Text { label: String, text: String },
}

/// A documentation file, read from disk on [`load`](DocCommentSource::load)
/// or held in memory.
#[derive(Clone, Debug)]
pub struct XmlDocFile {
    origin: Origin,
}

impl XmlDocFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::Path(path.into()),
        }
    }

    pub fn from_text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Text {
                label: label.into(),
                text: text.into(),
            },
        }
    }
}

impl DocCommentSource for XmlDocFile {
    fn label(&self) -> String {
        match &self.origin {
            Origin::Path(path) => path.display().to_string(),
            Origin::Text { label, .. } => label.clone(),
        }
    }

    fn load(&self) -> Result<DocComments, DocError> {
        match &self.origin {
            Origin::Path(path) => {
                let label = self.label();
                let text = std::fs::read_to_string(path).map_err(|source| DocError::Io {
                    file: label.clone(),
                    source,
                })?;
                parse_doc_xml(&label, &text)
            }
            Origin::Text { label, text } => parse_doc_xml(label, text),
        }
    }
}

// ============================================================================
// READER
// ============================================================================

/// Parse the text of one documentation file.
pub fn parse_doc_xml(label: &str, text: &str) -> Result<DocComments, DocError> {
    DocXmlReader::new(label, text).read()
}

struct DocXmlReader<'a> {
    label: &'a str,
    reader: Reader<&'a [u8]>,
    /// Open elements outside `<member>` entries.
    open: Vec<String>,
    /// Set once the `<doc>` element has opened; a file has exactly one.
    has_root: bool,
    docs: DocComments,
}

impl<'a> DocXmlReader<'a> {
    fn new(label: &'a str, text: &'a str) -> Self {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);
        Self {
            label,
            reader,
            open: Vec::new(),
            has_root: false,
            docs: DocComments::new(),
        }
    }

    fn read(mut self) -> Result<DocComments, DocError> {
        loop {
            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = self.tag_name(&e)?;
                    if self.open.is_empty() {
                        self.enter_root(&tag)?;
                        self.open.push(tag);
                    } else if tag == "member" {
                        let fragment = self.read_member(&e, false)?;
                        self.docs.insert(fragment);
                    } else if tag == "name" && self.open.last().is_some_and(|t| t == "assembly") {
                        let name = self.read_section(&e)?;
                        self.docs.assembly_name = Some(SmolStr::new(name));
                    } else {
                        self.open.push(tag);
                    }
                }
                Ok(Event::Empty(e)) => {
                    let tag = self.tag_name(&e)?;
                    if self.open.is_empty() {
                        self.enter_root(&tag)?;
                    } else if tag == "member" {
                        let fragment = self.read_member(&e, true)?;
                        self.docs.insert(fragment);
                    }
                }
                Ok(Event::Text(t)) if self.open.is_empty() => {
                    if !t.iter().all(u8::is_ascii_whitespace) {
                        return Err(self.error("text outside the <doc> element"));
                    }
                }
                Ok(Event::CData(_)) if self.open.is_empty() => {
                    return Err(self.error("text outside the <doc> element"));
                }
                Ok(Event::End(_)) => {
                    self.open.pop();
                }
                Ok(Event::Eof) => {
                    if let Some(tag) = self.open.last() {
                        return Err(self.error(format!("unterminated element <{tag}>")));
                    }
                    if !self.has_root {
                        return Err(self.error("missing <doc> root element"));
                    }
                    break;
                }
                Err(e) => return Err(self.error(e.to_string())),
                _ => {}
            }
        }

        tracing::trace!(
            file = self.label,
            fragments = self.docs.len(),
            "read documentation file"
        );
        Ok(self.docs)
    }

    fn enter_root(&mut self, tag: &str) -> Result<(), DocError> {
        if self.has_root {
            return Err(self.error(format!("second root element <{tag}>")));
        }
        if tag != "doc" {
            return Err(self.error(format!("root element is <{tag}>, expected <doc>")));
        }
        self.has_root = true;
        Ok(())
    }

    fn read_member(&mut self, start: &BytesStart<'_>, empty: bool) -> Result<DocFragment, DocError> {
        let key = self
            .attribute(start, "name")?
            .ok_or_else(|| self.error("<member> without a name attribute"))?;
        let mut fragment = DocFragment::new(key.trim());
        if empty {
            return Ok(fragment);
        }

        loop {
            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = self.tag_name(&e)?;
                    self.read_child(&mut fragment, &tag, &e, false)?;
                }
                Ok(Event::Empty(e)) => {
                    let tag = self.tag_name(&e)?;
                    self.read_child(&mut fragment, &tag, &e, true)?;
                }
                Ok(Event::End(_)) => break,
                Ok(Event::Eof) => {
                    return Err(self.error(format!("unterminated <member name=\"{}\">", fragment.key)));
                }
                Err(e) => return Err(self.error(e.to_string())),
                _ => {}
            }
        }
        Ok(fragment)
    }

    fn read_child(
        &mut self,
        fragment: &mut DocFragment,
        tag: &str,
        e: &BytesStart<'_>,
        empty: bool,
    ) -> Result<(), DocError> {
        let text = if empty {
            String::new()
        } else {
            self.read_section(e)?
        };

        match tag {
            "summary" => fragment.summary = Some(text),
            "remarks" => fragment.remarks = Some(text),
            "returns" => fragment.returns = Some(text),
            "value" => fragment.value = Some(text),
            "example" => fragment.example = Some(text),
            "param" | "typeparam" => {
                let Some(name) = self.attribute(e, "name")? else {
                    return Ok(());
                };
                let entry = DocParam {
                    name: SmolStr::new(name.trim()),
                    text,
                };
                if tag == "param" {
                    fragment.params.push(entry);
                } else {
                    fragment.type_params.push(entry);
                }
            }
            "exception" => {
                let cref = self.attribute(e, "cref")?.unwrap_or_default();
                fragment.exceptions.push(DocException {
                    cref: cref.into(),
                    text,
                });
            }
            "seealso" => {
                if let Some(cref) = self.attribute(e, "cref")? {
                    fragment.see_also.push(cref.into());
                }
            }
            "inheritdoc" => fragment.inherit_doc = true,
            _ => fragment.other.push((SmolStr::new(tag), text)),
        }
        Ok(())
    }

    /// Raw inner XML of the element that `start` opened, whitespace-normalized.
    fn read_section(&mut self, start: &BytesStart<'_>) -> Result<String, DocError> {
        let raw = self
            .reader
            .read_text(start.name())
            .map_err(|e| self.error(e.to_string()))?;
        Ok(normalize_text(&raw))
    }

    fn tag_name(&self, e: &BytesStart<'_>) -> Result<String, DocError> {
        std::str::from_utf8(e.name().as_ref())
            .map(str::to_string)
            .map_err(|err| self.error(format!("invalid tag name: {err}")))
    }

    fn attribute(&self, e: &BytesStart<'_>, name: &str) -> Result<Option<String>, DocError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.error(format!("attribute error: {err}")))?;
            if attr.key.as_ref() == name.as_bytes() {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.error(format!("attribute value error: {err}")))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn error(&self, message: impl Into<String>) -> DocError {
        DocError::xml(self.label, self.reader.buffer_position() as u64, message)
    }
}

/// Trim every line and drop blank ones; doc comments are indented by the
/// source they came from.
fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
