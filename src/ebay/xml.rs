//! XML framing for the Trading API.
//!
//! Responses are folded into a `serde_json::Value` tree: an element with child
//! elements becomes an object, a leaf becomes a string (or `null` when empty),
//! and a child name that repeats under the same parent becomes an array. A
//! single child therefore stays a scalar, which is why collection fields are
//! decoded through [`OneOrMany`](crate::ebay::models::OneOrMany).

use crate::ebay::error::EbayError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::{json, Map, Value};

pub const EBAY_NAMESPACE: &str = "urn:ebay:apis:eBLBaseComponents";

struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Frame {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        if !self.children.is_empty() {
            Value::Object(self.children)
        } else if self.text.is_empty() {
            Value::Null
        } else {
            Value::String(self.text)
        }
    }
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

/// Parse a response document and return the content of its root element.
pub fn parse_response(xml: &str) -> Result<Value, EbayError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.push(Frame::new(name));
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match stack.last_mut() {
                    Some(parent) => insert_child(&mut parent.children, name, Value::Null),
                    None => root = Some(Value::Null),
                }
            }
            Event::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| {
                    EbayError::UnexpectedResponse("unbalanced closing tag".to_string())
                })?;
                let name = frame.name.clone();
                let value = frame.into_value();
                match stack.last_mut() {
                    Some(parent) => insert_child(&mut parent.children, name, value),
                    None => root = Some(value),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(EbayError::UnexpectedResponse(
            "document ended inside an element".to_string(),
        ));
    }
    root.ok_or_else(|| EbayError::UnexpectedResponse("empty response body".to_string()))
}

/// Build a `<{call}Request>` document. Object keys are written in insertion
/// order and arrays expand into repeated elements.
pub fn build_request(call_name: &str, token: &str, fields: &Value) -> Result<String, EbayError> {
    let root = format!("{}Request", call_name);
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new(root.as_str()).with_attributes([("xmlns", EBAY_NAMESPACE)]),
    ))?;
    write_element(
        &mut writer,
        "RequesterCredentials",
        &json!({ "eBayAuthToken": token }),
    )?;
    if let Value::Object(map) = fields {
        for (name, value) in map {
            write_element(&mut writer, name, value)?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(root.as_str())))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| EbayError::UnexpectedResponse(format!("request is not UTF-8: {}", e)))
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), EbayError> {
    match value {
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
        }
        Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for (child, child_value) in map {
                write_element(writer, child, child_value)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Value::Null => {
            writer.write_event(Event::Empty(BytesStart::new(name)))?;
        }
        Value::String(text) => write_text(writer, name, text)?,
        other => write_text(writer, name, &other.to_string())?,
    }
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), EbayError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
