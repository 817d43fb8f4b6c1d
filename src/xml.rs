//! A small pull scanner for the flat XML that Checkstyle writes. It finds start,
//! empty and end tags and pulls attribute values out of them. Text content is
//! skipped, and so are comments, processing instructions, CDATA sections and
//! DOCTYPE declarations.
use anyhow::{anyhow, bail, Result};
use bstr::ByteSlice;
use memchr::memchr;
use std::borrow::Cow;

/// One tag, borrowed from the document
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Tag<'a> {
    /// `<name ...>`
    Start(Element<'a>),
    /// `<name .../>`
    Empty(Element<'a>),
    /// `</name>`
    End(&'a [u8]),
}

/// The name and raw attribute text of a start or empty tag
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Element<'a> {
    pub(crate) name: &'a [u8],
    attributes: &'a [u8],
}

impl<'a> Element<'a> {
    /// The decoded value of the attribute `name`, or `None` if the tag doesn't
    /// have one.
    pub(crate) fn attribute(&self, name: &[u8]) -> Result<Option<Cow<'a, str>>> {
        for attribute in self.attributes() {
            let (key, value) = attribute?;
            if key == name {
                return unescape(value).map(Some);
            }
        }
        Ok(None)
    }

    /// The raw `(name, value)` pairs, in document order
    pub(crate) fn attributes(&self) -> Attributes<'a> {
        Attributes { rest: self.attributes }
    }
}

/// Iterator over the attributes of an `Element`. Values are still escaped.
pub(crate) struct Attributes<'a> {
    rest: &'a [u8],
}

impl<'a> Attributes<'a> {
    fn next_attribute(&mut self) -> Result<Option<(&'a [u8], &'a [u8])>> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            return Ok(None);
        }
        let Some(eq) = memchr(b'=', rest) else {
            bail!("attribute without a value: {}", rest.as_bstr());
        };
        let name = rest[..eq].trim_end();
        let quoted = rest[eq + 1..].trim_start();
        let Some(&quote @ (b'"' | b'\'')) = quoted.first() else {
            bail!("unquoted value for attribute {}", name.as_bstr());
        };
        let Some(len) = memchr(quote, &quoted[1..]) else {
            bail!("unterminated value for attribute {}", name.as_bstr());
        };
        self.rest = &quoted[len + 2..];
        Ok(Some((name, &quoted[1..=len])))
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = Result<(&'a [u8], &'a [u8])>;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next_attribute();
        if item.is_err() {
            self.rest = b"";
        }
        item.transpose()
    }
}

/// Iterator over the tags of a document. After the first error it returns
/// `None`.
pub(crate) struct Tags<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tags<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Tags { data, pos: 0 }
    }

    fn next_tag(&mut self) -> Result<Option<Tag<'a>>> {
        let data = self.data;
        loop {
            let Some(offset) = memchr(b'<', &data[self.pos..]) else {
                self.pos = data.len();
                return Ok(None);
            };
            let start = self.pos + offset;
            let after = &data[start + 1..];

            let skip_to = if after.starts_with(b"!--") {
                Some(("-->", "comment"))
            } else if after.starts_with(b"![CDATA[") {
                Some(("]]>", "CDATA section"))
            } else if after.starts_with(b"?") {
                Some(("?>", "processing instruction"))
            } else if after.starts_with(b"!") {
                Some((">", "declaration"))
            } else {
                None
            };
            if let Some((terminator, what)) = skip_to {
                let Some(end) = after.find(terminator) else {
                    bail!("unterminated {what} at byte {start}");
                };
                self.pos = start + 1 + end + terminator.len();
                continue;
            }

            let end = tag_end(after).ok_or_else(|| anyhow!("unterminated tag at byte {start}"))?;
            let body = &after[..end];
            self.pos = start + 1 + end + 1;

            if let Some(name) = body.strip_prefix(b"/") {
                return Ok(Some(Tag::End(name.trim())));
            }
            let (body, empty) = match body.strip_suffix(b"/") {
                Some(body) => (body, true),
                None => (body, false),
            };
            let name_len = body.find_byteset(b" \t\r\n").unwrap_or(body.len());
            let (name, attributes) = body.split_at(name_len);
            if name.is_empty() {
                bail!("tag without a name at byte {start}");
            }
            let element = Element { name, attributes };
            return Ok(Some(if empty { Tag::Empty(element) } else { Tag::Start(element) }));
        }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Result<Tag<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.next_tag();
        if tag.is_err() {
            self.pos = self.data.len();
        }
        tag.transpose()
    }
}

/// Index of the `>` that closes the tag starting just before `after`. A `>`
/// inside a quoted attribute value doesn't count.
fn tag_end(after: &[u8]) -> Option<usize> {
    let mut quote = None;
    for (i, &byte) in after.iter().enumerate() {
        match (quote, byte) {
            (None, b'"' | b'\'') => quote = Some(byte),
            (Some(q), _) if q == byte => quote = None,
            (None, b'>') => return Some(i),
            _ => {}
        }
    }
    None
}

/// Decodes the predefined entities and numeric character references in an
/// attribute value. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn unescape(raw: &[u8]) -> Result<Cow<'_, str>> {
    let text = raw.to_str_lossy();
    if memchr(b'&', raw).is_none() {
        return Ok(text);
    }
    let mut decoded = String::with_capacity(text.len());
    let mut rest: &str = &text;
    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let entity_on = &rest[amp + 1..];
        let Some(semi) = entity_on.find(';') else {
            bail!("unterminated entity in {text:?}");
        };
        let entity = &entity_on[..semi];
        decoded.push(decode_entity(entity).ok_or_else(|| anyhow!("unknown entity &{entity};"))?);
        rest = &entity_on[semi + 1..];
    }
    decoded.push_str(rest);
    Ok(Cow::Owned(decoded))
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
