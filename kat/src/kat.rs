//======================================================================
// kat/src/kat.rs
// The `Field = hexvalue` known-answer-test text format.
//
// Records are separated by blank lines. AEAD records carry
// Count, Key, Nonce, PT, AD, CT and optionally Tag and TestPassed;
// without a Tag field the last 16 bytes of CT are the tag (LWC style).
// Hash and XOF records carry Count, Msg, MD and, for CXOF, Z.
//======================================================================

use crate::algorithm::RecordKind;
use crate::error::{KatError, Result};
use ascon_lwc::consts::TAG_LEN;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AeadVector {
    pub count: usize,
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub pt: Vec<u8>,
    pub ad: Vec<u8>,
    pub ct: Vec<u8>,
    pub tag: Vec<u8>,
    /// Whether decryption is expected to verify.
    pub passed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestVector {
    pub count: usize,
    pub msg: Vec<u8>,
    /// CXOF customization string (`Z`).
    pub customization: Option<Vec<u8>>,
    pub md: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KatRecord {
    Aead(AeadVector),
    Digest(DigestVector),
}

impl KatRecord {
    pub fn count(&self) -> usize {
        match self {
            KatRecord::Aead(v) => v.count,
            KatRecord::Digest(v) => v.count,
        }
    }
}

// --- Reading ---

struct Field<'a> {
    name: &'a str,
    value: &'a str,
    line: usize,
}

struct Block<'a> {
    first_line: usize,
    fields: Vec<Field<'a>>,
}

impl<'a> Block<'a> {
    fn get(&self, name: &str) -> Option<&Field<'a>> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    fn require(&self, name: &'static str) -> Result<&Field<'a>> {
        self.get(name).ok_or(KatError::MissingField {
            line: self.first_line,
            field: name,
        })
    }

    fn hex(&self, name: &'static str) -> Result<Vec<u8>> {
        decode_field(self.require(name)?)
    }

    fn hex_opt(&self, name: &str) -> Result<Option<Vec<u8>>> {
        self.get(name).map(decode_field).transpose()
    }

    fn count(&self) -> Result<usize> {
        let field = self.require("Count")?;
        field.value.parse().map_err(|_| invalid(field))
    }
}

fn invalid(field: &Field<'_>) -> KatError {
    KatError::InvalidValue {
        line: field.line,
        field: field.name.to_owned(),
        value: field.value.to_owned(),
    }
}

fn decode_field(field: &Field<'_>) -> Result<Vec<u8>> {
    hex::decode(field.value).map_err(|source| KatError::Hex {
        line: field.line,
        field: field.name.to_owned(),
        source,
    })
}

fn parse_bool(field: &Field<'_>) -> Result<bool> {
    match field.value.to_ascii_lowercase().as_str() {
        "true" | "1" | "pass" => Ok(true),
        "false" | "0" | "fail" => Ok(false),
        _ => Err(invalid(field)),
    }
}

fn split_blocks(text: &str) -> Result<Vec<Block<'_>>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            blocks.extend(current.take());
            continue;
        }
        if trimmed.starts_with('#') {
            continue;
        }
        let (name, value) = trimmed.split_once('=').ok_or_else(|| KatError::MalformedLine {
            line,
            text: raw.to_owned(),
        })?;
        current
            .get_or_insert_with(|| Block {
                first_line: line,
                fields: Vec::new(),
            })
            .fields
            .push(Field {
                name: name.trim(),
                value: value.trim(),
                line,
            });
    }
    blocks.extend(current);
    Ok(blocks)
}

fn aead_vector(block: &Block<'_>) -> Result<AeadVector> {
    let mut ct = block.hex("CT")?;
    let tag = match block.hex_opt("Tag")? {
        Some(tag) => tag,
        None => {
            let field = block.require("CT")?;
            if ct.len() < TAG_LEN {
                return Err(invalid(field));
            }
            ct.split_off(ct.len() - TAG_LEN)
        }
    };
    let passed = match block.get("TestPassed") {
        Some(field) => parse_bool(field)?,
        None => true,
    };
    Ok(AeadVector {
        count: block.count()?,
        key: block.hex("Key")?,
        nonce: block.hex("Nonce")?,
        pt: block.hex_opt("PT")?.unwrap_or_default(),
        ad: block.hex_opt("AD")?.unwrap_or_default(),
        ct,
        tag,
        passed,
    })
}

fn digest_vector(block: &Block<'_>) -> Result<DigestVector> {
    Ok(DigestVector {
        count: block.count()?,
        msg: block.hex_opt("Msg")?.unwrap_or_default(),
        customization: block.hex_opt("Z")?,
        md: block.hex("MD")?,
    })
}

/// Parses KAT text into records of the given layout.
pub fn parse(kind: RecordKind, text: &str) -> Result<Vec<KatRecord>> {
    split_blocks(text)?
        .iter()
        .map(|block| match kind {
            RecordKind::Aead => aead_vector(block).map(KatRecord::Aead),
            RecordKind::Digest => digest_vector(block).map(KatRecord::Digest),
        })
        .collect()
}

// --- Writing ---

impl fmt::Display for AeadVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count = {}", self.count)?;
        writeln!(f, "Key = {}", hex::encode_upper(&self.key))?;
        writeln!(f, "Nonce = {}", hex::encode_upper(&self.nonce))?;
        writeln!(f, "PT = {}", hex::encode_upper(&self.pt))?;
        writeln!(f, "AD = {}", hex::encode_upper(&self.ad))?;
        writeln!(f, "CT = {}", hex::encode_upper(&self.ct))?;
        writeln!(f, "Tag = {}", hex::encode_upper(&self.tag))?;
        writeln!(f, "TestPassed = {}", if self.passed { "True" } else { "False" })
    }
}

impl fmt::Display for DigestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count = {}", self.count)?;
        writeln!(f, "Msg = {}", hex::encode_upper(&self.msg))?;
        if let Some(z) = &self.customization {
            writeln!(f, "Z = {}", hex::encode_upper(z))?;
        }
        writeln!(f, "MD = {}", hex::encode_upper(&self.md))
    }
}

impl fmt::Display for KatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KatRecord::Aead(v) => fmt::Display::fmt(v, f),
            KatRecord::Digest(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Renders records as KAT text, each followed by a blank line.
pub fn render(records: &[KatRecord]) -> String {
    records.iter().map(|r| format!("{r}\n")).collect()
}
