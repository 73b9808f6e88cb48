//======================================================================
// kat/src/acvp.rs
// ACVP JSON vector sets to KAT records.
//======================================================================

use crate::algorithm::{Algorithm, RecordKind};
use crate::error::{KatError, Result};
use crate::kat::{AeadVector, DigestVector, KatRecord};
use serde::{de, Deserialize};
use std::io::Read;
use tracing::{debug, info, instrument};

fn de_hex<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    // Owned: `from_reader` and `from_value` cannot lend borrowed strings.
    let encoded = String::deserialize(deserializer)?;
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    hex::decode(encoded).map_err(de::Error::custom)
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct HexBytes(#[serde(deserialize_with = "de_hex")] pub Vec<u8>);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSet {
    pub test_groups: Vec<TestGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(default)]
    pub tg_id: u64,
    pub test_type: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub supports_nonce_masking: bool,
    pub tests: Vec<TestCase>,
}

/// Union of the AEAD, hash, XOF and CXOF test case fields. Bit lengths
/// use ACVP names (`payloadLen`, `adLen`, `tagLen`, `len`, `csLen`,
/// `outLen`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub tc_id: u64,
    #[serde(default)]
    pub key: Option<HexBytes>,
    #[serde(default)]
    pub nonce: Option<HexBytes>,
    #[serde(default)]
    pub pt: Option<HexBytes>,
    #[serde(default)]
    pub ad: Option<HexBytes>,
    #[serde(default)]
    pub ct: Option<HexBytes>,
    #[serde(default)]
    pub tag: Option<HexBytes>,
    #[serde(default)]
    pub msg: Option<HexBytes>,
    #[serde(default)]
    pub cs: Option<HexBytes>,
    #[serde(default)]
    pub md: Option<HexBytes>,
    #[serde(default)]
    pub payload_len: Option<u64>,
    #[serde(default)]
    pub ad_len: Option<u64>,
    #[serde(default)]
    pub tag_len: Option<u64>,
    #[serde(default)]
    pub len: Option<u64>,
    #[serde(default)]
    pub cs_len: Option<u64>,
    #[serde(default)]
    pub out_len: Option<u64>,
    #[serde(default)]
    pub test_passed: Option<bool>,
}

impl TestCase {
    fn bytes(&self, field: &Option<HexBytes>, name: &'static str) -> Result<Vec<u8>> {
        field.as_ref().map(|h| h.0.clone()).ok_or(KatError::MissingJsonField {
            tc_id: self.tc_id,
            field: name,
        })
    }
}

pub fn read_vector_set<R: Read>(reader: R) -> Result<VectorSet> {
    Ok(serde_json::from_reader(reader)?)
}

/// A length field absent from the test case does not disqualify it.
fn whole_bytes(bits: Option<u64>) -> bool {
    bits.map_or(true, |b| b % 8 == 0)
}

fn aead_record(
    test: &TestCase,
    decrypt: bool,
    count: usize,
) -> Result<Option<KatRecord>> {
    if ![test.payload_len, test.ad_len, test.tag_len].into_iter().all(whole_bytes) {
        return Ok(None);
    }
    let passed = if decrypt { test.test_passed.unwrap_or(true) } else { true };
    // Failing decryption cases carry no plaintext.
    let pt = if passed {
        test.bytes(&test.pt, "pt")?
    } else {
        test.pt.clone().unwrap_or_default().0
    };
    Ok(Some(KatRecord::Aead(AeadVector {
        count,
        key: test.bytes(&test.key, "key")?,
        nonce: test.bytes(&test.nonce, "nonce")?,
        pt,
        ad: test.ad.clone().unwrap_or_default().0,
        ct: test.bytes(&test.ct, "ct")?,
        tag: test.bytes(&test.tag, "tag")?,
        passed,
    })))
}

fn digest_record(
    algorithm: Algorithm,
    test: &TestCase,
    count: usize,
) -> Result<Option<KatRecord>> {
    if !whole_bytes(test.len) || !whole_bytes(test.cs_len) {
        return Ok(None);
    }
    let mut md = test.bytes(&test.md, "md")?;
    if algorithm.is_variable_output() {
        // Round the requested output down to whole bytes.
        let out_bytes = match test.out_len {
            Some(bits) => (bits / 8) as usize,
            None => md.len(),
        };
        if out_bytes == 0 {
            return Ok(None);
        }
        md.truncate(out_bytes);
    }
    let customization = match algorithm {
        Algorithm::Cxof128 => Some(test.cs.clone().unwrap_or_default().0),
        _ => None,
    };
    Ok(Some(KatRecord::Digest(DigestVector {
        count,
        msg: test.msg.clone().unwrap_or_default().0,
        customization,
        md,
    })))
}

/// Converts the AFT groups of `set` into KAT records numbered from 1.
///
/// Skipped: non-AFT groups, AEAD groups with nonce masking, tests with
/// a partial-byte length and variable-output tests that round down to
/// zero bytes.
#[instrument(skip(set), fields(groups = set.test_groups.len()))]
pub fn convert(set: &VectorSet, algorithm: Algorithm) -> Result<Vec<KatRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for group in &set.test_groups {
        if group.test_type != "AFT" {
            debug!(tg_id = group.tg_id, test_type = %group.test_type, "skipping group");
            continue;
        }
        let kind = algorithm.kind();
        if kind == RecordKind::Aead && group.supports_nonce_masking {
            debug!(tg_id = group.tg_id, "skipping nonce-masking group");
            continue;
        }
        let decrypt = group.direction.as_deref() == Some("decrypt");
        for test in &group.tests {
            let count = records.len() + 1;
            let record = match kind {
                RecordKind::Aead => aead_record(test, decrypt, count)?,
                RecordKind::Digest => digest_record(algorithm, test, count)?,
            };
            match record {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    debug!(tg_id = group.tg_id, tc_id = test.tc_id, "skipping test");
                }
            }
        }
    }
    info!(converted = records.len(), skipped, %algorithm, "ACVP conversion done");
    Ok(records)
}
