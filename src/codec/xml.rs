//! XML codec.
//!
//! ```xml
//! <problem xmlns="urn:ietf:rfc:7807">
//!   <status>404</status>
//!   <title>Not Found</title>
//! </problem>
//! ```
//!
//! Encoding writes one child element per field, in key order, with the value's
//! [`Display`](core::fmt::Display) form as text. Decoding is the inverse with a
//! coarser type model: `status` must be an integer, every other field comes
//! back as a string.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::Writer;
use smallvec::SmallVec;

use crate::error::CodecError;
use crate::option;
use crate::types::{Problem, Value};
use crate::XML_NAMESPACE;

/// Name of the envelope element.
pub const ROOT_ELEMENT: &str = "problem";

/// An element that has been opened but not yet closed.
struct OpenElement {
    name: String,
    text: Option<String>,
}

/// Open elements; problems are flat, so the stack rarely grows past two.
type ElementStack = SmallVec<[OpenElement; 4]>;

impl Problem {
    /// Encodes the fields as XML.
    ///
    /// Fails with [`CodecError::InvalidElementName`] when a key cannot be used
    /// as an element name.
    pub fn to_xml(&self) -> Result<Vec<u8>, CodecError> {
        let mut writer = Writer::new(Vec::new());
        let root = BytesStart::new(ROOT_ELEMENT).with_attributes([("xmlns", XML_NAMESPACE)]);
        writer.write_event(Event::Start(root))?;

        for (key, value) in &self.fields {
            if !is_element_name(key) {
                return Err(CodecError::InvalidElementName(key.clone()));
            }
            let text = value.to_string();
            writer.write_event(Event::Start(BytesStart::new(key.as_str())))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new(key.as_str())))?;
        }

        writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        Ok(writer.into_inner())
    }

    /// Returns the XML encoding as a string.
    pub fn xml_string(&self) -> Result<String, CodecError> {
        let bytes = self.to_xml()?;
        String::from_utf8(bytes).map_err(|e| CodecError::Utf8(e.utf8_error()))
    }

    /// Decodes a problem from XML.
    ///
    /// The outermost element is the envelope and its name is not checked.
    /// Every element, the envelope included, must belong to
    /// `urn:ietf:rfc:7807`. Decoding stops once the envelope closes. Input
    /// without any element yields an empty problem.
    pub fn from_xml(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut reader = NsReader::from_reader(bytes);
        let mut problem = Problem::default();
        let mut open = ElementStack::new();

        loop {
            let (ns, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(e) => {
                    expect_namespace(ns)?;
                    let name = core::str::from_utf8(e.local_name().as_ref())?.to_owned();
                    open.push(OpenElement { name, text: None });
                },
                Event::Empty(_) => expect_namespace(ns)?,
                Event::Text(t) => {
                    let text = t.unescape().map_err(quick_xml::Error::from)?;
                    push_text(&mut open, &text);
                },
                Event::CData(c) => {
                    let text = core::str::from_utf8(&c)?;
                    push_text(&mut open, text);
                },
                Event::End(_) => {
                    let Some(element) = open.pop() else { continue };
                    // the envelope closes the document; anything after it is ignored
                    if open.is_empty() {
                        break;
                    }
                    if let Some(text) = element.text {
                        set_field(&mut problem, element.name, text)?;
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(problem)
    }
}

fn push_text(open: &mut ElementStack, text: &str) {
    // text directly inside the envelope belongs to no field
    if open.len() < 2 {
        return;
    }
    if let Some(element) = open.last_mut() {
        element.text.get_or_insert_with(String::new).push_str(text);
    }
}

fn set_field(problem: &mut Problem, name: String, text: String) -> Result<(), CodecError> {
    if name == option::STATUS {
        let status = match text.parse::<i64>() {
            Ok(status) => status,
            Err(source) => return Err(CodecError::InvalidStatus { text, source }),
        };
        problem.set(name, Value::Int(status));
    } else {
        problem.set(name, Value::String(text));
    }
    Ok(())
}

fn expect_namespace(ns: ResolveResult<'_>) -> Result<(), CodecError> {
    let found = match ns {
        ResolveResult::Bound(Namespace(uri)) if uri == XML_NAMESPACE.as_bytes() => return Ok(()),
        ResolveResult::Bound(Namespace(uri)) => String::from_utf8_lossy(uri).into_owned(),
        ResolveResult::Unbound => String::new(),
        ResolveResult::Unknown(prefix) => {
            format!("unknown prefix {}", String::from_utf8_lossy(&prefix))
        },
    };
    Err(CodecError::Namespace { found })
}

/// Conservative XML name check, ASCII only: letters or `_` first, then
/// letters, digits, `-`, `_` or `.`. Prefixed names and names with non-ASCII
/// characters (valid XML such as `größe` included) are rejected.
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
