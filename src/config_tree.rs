//! Generic attribute tree read from theme markup.
//!
//! Theme files are XML. Every element becomes a [`ConfigNode`], its
//! attributes become string attributes and nested elements become ordered
//! children. Text content is ignored. The top-level elements of a document
//! are collected under a synthetic unnamed root.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{GuiError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    attributes: BTreeMap<String, String>,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builder used by tests and by code that assembles trees by hand.
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    pub fn push_child(&mut self, child: ConfigNode) {
        self.children.push(child);
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attribute value, or "" when absent.
    pub fn str(&self, key: &str) -> &str {
        self.attr(key).unwrap_or("")
    }

    /// Unsigned attribute. Absent or empty values read as 0.
    pub fn unsigned(&self, key: &str) -> Result<u32> {
        match self.attr(key).map(str::trim) {
            None | Some("") => Ok(0),
            Some(raw) => raw.parse().map_err(|_| self.invalid_value(key, raw)),
        }
    }

    pub fn flag(&self, key: &str, default: bool) -> Result<bool> {
        match self.attr(key).map(str::trim) {
            None | Some("") => Ok(default),
            Some("yes") | Some("true") | Some("1") => Ok(true),
            Some("no") | Some("false") | Some("0") => Ok(false),
            Some(raw) => Err(self.invalid_value(key, raw)),
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_range<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ConfigNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    /// True when the node carries neither attributes nor children.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    fn invalid_value(&self, key: &str, raw: &str) -> GuiError {
        GuiError::InvalidValue {
            section: self.name.clone(),
            key: key.to_string(),
            value: raw.to_string(),
        }
    }

    /// Read and parse a theme file.
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse markup into a tree rooted at a synthetic unnamed node.
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut stack = vec![ConfigNode::default()];
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let node = Self::from_element(e, &reader)?;
                    stack.push(node);
                }
                Ok(Event::Empty(ref e)) => {
                    let node = Self::from_element(e, &reader)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    }
                }
                Ok(Event::End(_)) => {
                    // The reader rejects mismatched end tags, so the root can't be popped here.
                    if stack.len() > 1 {
                        if let Some(node) = stack.pop() {
                            if let Some(parent) = stack.last_mut() {
                                parent.children.push(node);
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(GuiError::Xml {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    })
                }
                _ => {}
            }
            buf.clear();
        }

        if stack.len() != 1 {
            return Err(GuiError::Xml {
                position: reader.buffer_position() as u64,
                message: format!("{} unclosed element(s)", stack.len() - 1),
            });
        }

        let root = stack.pop().unwrap_or_default();
        tracing::debug!("Parsed markup with {} top-level nodes", root.children.len());
        Ok(root)
    }

    fn from_element(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Self> {
        let xml_error = |message: String| GuiError::Xml {
            position: reader.buffer_position() as u64,
            message,
        };

        let mut node = ConfigNode::new(&String::from_utf8_lossy(e.name().as_ref()));
        for attr in e.attributes() {
            let attr = attr.map_err(|err| xml_error(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| xml_error(err.to_string()))?
                .to_string();
            node.attributes.insert(key, value);
        }
        Ok(node)
    }
}
