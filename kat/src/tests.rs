//======================================================================
// ascon-kat test suite
//======================================================================
#![cfg(test)]

use crate::acvp::VectorSet;
use crate::{
    check_record, check_records, convert, parse, render, AeadVector, Algorithm, DigestVector,
    KatError, KatRecord, RecordKind,
};
use ascon_lwc::AeadVariant;
use serde_json::json;

// Count = 1 of the LWC Ascon-128 file: empty PT and AD, so CT is the tag.
const LWC_AEAD_RECORD: &str = "\
Count = 1
Key = 000102030405060708090A0B0C0D0E0F
Nonce = 000102030405060708090A0B0C0D0E0F
PT =
AD =
CT = E355159F292911F794CB1432A0103A8A
";

const HASH_EMPTY_RECORD: &str = "\
# Ascon-Hash, empty message
Count = 1
Msg =
MD = 7346BC14F036E87AE03D0997913088F5F68411434B3CF8B54FA796A80D251F91
";

fn vector_set(value: serde_json::Value) -> VectorSet {
    serde_json::from_value(value).expect("well-formed vector set")
}

fn aead(record: &KatRecord) -> &AeadVector {
    match record {
        KatRecord::Aead(v) => v,
        KatRecord::Digest(_) => panic!("expected an AEAD record"),
    }
}

fn digest(record: &KatRecord) -> &DigestVector {
    match record {
        KatRecord::Digest(v) => v,
        KatRecord::Aead(_) => panic!("expected a digest record"),
    }
}

// --- KAT text ---

#[test]
fn lwc_record_splits_tag_from_ciphertext() {
    let records = parse(RecordKind::Aead, LWC_AEAD_RECORD).unwrap();
    assert_eq!(records.len(), 1);
    let v = aead(&records[0]);
    assert_eq!(v.count, 1);
    assert!(v.ct.is_empty());
    assert_eq!(v.tag, hex::decode("E355159F292911F794CB1432A0103A8A").unwrap());
    assert!(v.passed);

    let algorithm = Algorithm::Aead(AeadVariant::Ascon128);
    assert!(check_record(algorithm, &records[0]).unwrap());
}

#[test]
fn digest_record_checks_and_detects_tampering() {
    let mut records = parse(RecordKind::Digest, HASH_EMPTY_RECORD).unwrap();
    assert!(check_record(Algorithm::Hash, &records[0]).unwrap());
    assert!(!check_record(Algorithm::HashA, &records[0]).unwrap());

    if let KatRecord::Digest(v) = &mut records[0] {
        v.md[31] ^= 1;
    }
    assert!(!check_record(Algorithm::Hash, &records[0]).unwrap());
}

#[test]
fn rendered_records_parse_back() {
    let key = [0x42u8; 20];
    let nonce = [0x24u8; 16];
    let (ct, tag) =
        ascon_lwc::encrypt(AeadVariant::Ascon80pq, &key, &nonce, b"ad", b"payload").unwrap();
    let records = vec![
        KatRecord::Aead(AeadVector {
            count: 1,
            key: key.to_vec(),
            nonce: nonce.to_vec(),
            pt: b"payload".to_vec(),
            ad: b"ad".to_vec(),
            ct,
            tag: tag.to_vec(),
            passed: true,
        }),
        KatRecord::Aead(AeadVector {
            count: 2,
            key: key.to_vec(),
            nonce: nonce.to_vec(),
            pt: Vec::new(),
            ad: Vec::new(),
            ct: vec![0xAA; 3],
            tag: vec![0x55; 16],
            passed: false,
        }),
    ];

    let text = render(&records);
    assert!(text.contains("TestPassed = False"));
    let parsed = parse(RecordKind::Aead, &text).unwrap();
    assert_eq!(parsed, records);

    let report = check_records(Algorithm::Aead(AeadVariant::Ascon80pq), &parsed).unwrap();
    assert_eq!(report.total, 2);
    assert!(report.all_passed(), "failed: {:?}", report.failed);
}

#[test]
fn cxof_records_keep_customization() {
    let md = ascon_lwc::cxof(b"msg", b"domain", 40).unwrap();
    let record = KatRecord::Digest(DigestVector {
        count: 7,
        msg: b"msg".to_vec(),
        customization: Some(b"domain".to_vec()),
        md,
    });
    let text = render(core::slice::from_ref(&record));
    assert!(text.contains("Z = 646F6D61696E"));

    let parsed = parse(RecordKind::Digest, &text).unwrap();
    assert_eq!(parsed[0], record);
    assert!(check_record(Algorithm::Cxof128, &parsed[0]).unwrap());
}

#[test]
fn test_passed_spellings() {
    for (value, expected) in [("True", true), ("1", true), ("fail", false), ("FALSE", false)] {
        let text = format!("{LWC_AEAD_RECORD}Tag = 00\nTestPassed = {value}\n");
        let records = parse(RecordKind::Aead, &text).unwrap();
        assert_eq!(aead(&records[0]).passed, expected, "{value}");
    }
    let text = format!("{LWC_AEAD_RECORD}Tag = 00\nTestPassed = maybe\n");
    assert!(matches!(
        parse(RecordKind::Aead, &text),
        Err(KatError::InvalidValue { line: 8, .. })
    ));
}

#[test]
fn parse_errors_name_the_line() {
    assert!(matches!(
        parse(RecordKind::Digest, "Count = 1\nMsg 00\nMD = 00\n"),
        Err(KatError::MalformedLine { line: 2, .. })
    ));
    assert!(matches!(
        parse(RecordKind::Digest, "Count = 1\nMsg = 0G\nMD = 00\n"),
        Err(KatError::Hex { line: 2, .. })
    ));
    assert!(matches!(
        parse(RecordKind::Digest, "\n\nCount = 1\nMsg = 00\n"),
        Err(KatError::MissingField { line: 3, field: "MD" })
    ));
    assert!(matches!(
        parse(RecordKind::Digest, "Count = one\nMD = 00\n"),
        Err(KatError::InvalidValue { line: 1, .. })
    ));
    // A combined CT shorter than a tag cannot be split.
    assert!(matches!(
        parse(RecordKind::Aead, "Count = 1\nKey = 00\nNonce = 00\nCT = 0011\n"),
        Err(KatError::InvalidValue { line: 4, .. })
    ));
}

/// An AEAD128 record carrying the first `tag_len` bytes of the real tag.
fn truncated_tag_record(tag_len: usize) -> AeadVector {
    let key: Vec<u8> = (0..16).collect();
    let nonce: Vec<u8> = (16..32).collect();
    let pt = b"truncated tags".to_vec();
    let ad = b"ad".to_vec();
    let (ct, tag) =
        ascon_lwc::encrypt(AeadVariant::AsconAead128, &key, &nonce, &ad, &pt).unwrap();
    AeadVector {
        count: 1,
        key,
        nonce,
        pt,
        ad,
        ct,
        tag: tag[..tag_len].to_vec(),
        passed: true,
    }
}

#[test]
fn truncated_tags_compare_as_prefix() {
    let algorithm = Algorithm::Aead(AeadVariant::AsconAead128);
    for tag_len in [4, 8, 15] {
        let v = truncated_tag_record(tag_len);
        assert!(check_record(algorithm, &KatRecord::Aead(v.clone())).unwrap(), "tag {tag_len}");

        let mut wrong = v;
        wrong.tag[0] ^= 1;
        assert!(
            !check_record(algorithm, &KatRecord::Aead(wrong)).unwrap(),
            "wrong tag {tag_len} marked passed"
        );
    }
}

#[test]
fn failing_truncated_tag_record_checks_without_plaintext() {
    let algorithm = Algorithm::Aead(AeadVariant::AsconAead128);
    let mut v = truncated_tag_record(8);
    v.tag[7] ^= 0x80;
    v.pt.clear();
    v.passed = false;
    assert!(check_record(algorithm, &KatRecord::Aead(v.clone())).unwrap());

    // A correct truncated tag contradicts the failing verdict.
    let mut real = truncated_tag_record(8);
    real.pt.clear();
    real.passed = false;
    assert!(!check_record(algorithm, &KatRecord::Aead(real)).unwrap());

    let report = check_records(algorithm, &[KatRecord::Aead(v)]).unwrap();
    assert!(report.all_passed());
}

#[test]
fn aead_algorithms_have_no_digest() {
    let algorithm = Algorithm::Aead(AeadVariant::Ascon128);
    assert!(matches!(
        algorithm.digest(b"", None, 16),
        Err(KatError::NotADigest(Algorithm::Aead(AeadVariant::Ascon128)))
    ));
    assert_eq!(
        algorithm.digest(b"", None, 16).unwrap_err().to_string(),
        format!("{algorithm} is not a hash or XOF")
    );
}

#[test]
fn wrong_record_layout_is_an_error() {
    let records = parse(RecordKind::Digest, HASH_EMPTY_RECORD).unwrap();
    let algorithm = Algorithm::Aead(AeadVariant::AsconAead128);
    assert!(matches!(
        check_record(algorithm, &records[0]),
        Err(KatError::RecordMismatch { count: 1, .. })
    ));
}

#[test]
fn algorithm_names_parse_loosely() {
    let cases = [
        ("Ascon-Hash", Algorithm::Hash),
        ("hasha", Algorithm::HashA),
        ("ascon_hash256", Algorithm::Hash256),
        ("XOF", Algorithm::Xof),
        ("Ascon-XOFa", Algorithm::XofA),
        ("xof128", Algorithm::Xof128),
        ("Ascon-CXOF128", Algorithm::Cxof128),
        ("AEAD-128a", Algorithm::Aead(AeadVariant::Ascon128a)),
        ("ascon_80pq", Algorithm::Aead(AeadVariant::Ascon80pq)),
        ("Ascon-AEAD128", Algorithm::Aead(AeadVariant::AsconAead128)),
    ];
    for (name, expected) in cases {
        assert_eq!(name.parse::<Algorithm>().unwrap(), expected, "{name}");
    }
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
    }
    assert!(matches!("sha3-256".parse::<Algorithm>(), Err(KatError::UnknownAlgorithm(_))));
}

// --- ACVP conversion ---

#[test]
fn acvp_aead_groups_are_filtered_and_numbered() {
    let variant = AeadVariant::AsconAead128;
    let key = [0x0fu8; 16];
    let nonce = [0xf0u8; 16];
    let (ct, tag) = ascon_lwc::encrypt(variant, &key, &nonce, b"AD", b"plaintext").unwrap();
    let mut bad_tag = tag;
    bad_tag[0] ^= 0x80;

    let set = vector_set(json!({
        "vsId": 0,
        "algorithm": "Ascon-AEAD128",
        "testGroups": [
            {
                "tgId": 1, "testType": "AFT", "direction": "encrypt",
                "supportsNonceMasking": false,
                "tests": [
                    {
                        "tcId": 1, "key": hex::encode_upper(key), "nonce": hex::encode_upper(nonce),
                        "pt": hex::encode_upper(b"plaintext"), "ad": hex::encode_upper(b"AD"),
                        "ct": hex::encode_upper(&ct), "tag": hex::encode_upper(tag),
                        "payloadLen": 72, "adLen": 16, "tagLen": 128
                    },
                    {
                        "tcId": 2, "key": "00", "nonce": "00", "pt": "00", "ad": "",
                        "ct": "00", "tag": "00", "payloadLen": 7, "adLen": 0, "tagLen": 128
                    }
                ]
            },
            {
                "tgId": 2, "testType": "AFT", "direction": "encrypt",
                "supportsNonceMasking": true,
                "tests": [{ "tcId": 3, "key": "00" }]
            },
            {
                "tgId": 3, "testType": "VAL", "direction": "decrypt",
                "tests": [{ "tcId": 4 }]
            },
            {
                "tgId": 4, "testType": "AFT", "direction": "decrypt",
                "supportsNonceMasking": false,
                "tests": [
                    {
                        "tcId": 5, "key": hex::encode_upper(key), "nonce": hex::encode_upper(nonce),
                        "ad": hex::encode_upper(b"AD"), "ct": hex::encode_upper(&ct),
                        "tag": hex::encode_upper(bad_tag), "testPassed": false,
                        "payloadLen": 72, "adLen": 16, "tagLen": 128
                    },
                    {
                        "tcId": 6, "key": hex::encode_upper(key), "nonce": hex::encode_upper(nonce),
                        "pt": hex::encode_upper(b"plaintext"), "ad": hex::encode_upper(b"AD"),
                        "ct": hex::encode_upper(&ct), "tag": hex::encode_upper(tag),
                        "testPassed": true, "payloadLen": 72, "adLen": 16, "tagLen": 128
                    }
                ]
            }
        ]
    }));

    let algorithm = Algorithm::Aead(variant);
    let records = convert(&set, algorithm).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records.iter().map(KatRecord::count).collect::<Vec<_>>(), [1, 2, 3]);
    assert!(aead(&records[0]).passed);
    assert!(!aead(&records[1]).passed);
    assert!(aead(&records[1]).pt.is_empty());
    assert!(aead(&records[2]).passed);

    let report = check_records(algorithm, &records).unwrap();
    assert!(report.all_passed(), "failed: {:?}", report.failed);
}

#[test]
fn acvp_variable_output_rounds_down_to_bytes() {
    let md = ascon_lwc::xof128(b"abc", 32);
    let set = vector_set(json!({
        "testGroups": [{
            "tgId": 1, "testType": "AFT",
            "tests": [
                { "tcId": 1, "msg": "616263", "len": 24, "md": hex::encode_upper(&md), "outLen": 256 },
                { "tcId": 2, "msg": "616263", "len": 24, "md": hex::encode_upper(&md), "outLen": 21 },
                { "tcId": 3, "msg": "616263", "len": 24, "md": "00", "outLen": 7 },
                { "tcId": 4, "msg": "61", "len": 5, "md": "00", "outLen": 16 }
            ]
        }]
    }));

    let records = convert(&set, Algorithm::Xof128).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(digest(&records[0]).md, md);
    assert_eq!(digest(&records[1]).md, md[..2]);
    assert_eq!(records[1].count(), 2);

    let report = check_records(Algorithm::Xof128, &records).unwrap();
    assert!(report.all_passed());
}

#[test]
fn acvp_cxof_carries_customization() {
    let md = ascon_lwc::cxof(b"", b"\x01\x02", 16).unwrap();
    let set = vector_set(json!({
        "testGroups": [{
            "tgId": 1, "testType": "AFT",
            "tests": [
                { "tcId": 1, "msg": "", "len": 0, "cs": "0102", "csLen": 16,
                  "md": hex::encode(&md), "outLen": 128 },
                { "tcId": 2, "msg": "", "len": 0, "cs": "01", "csLen": 3,
                  "md": hex::encode(&md), "outLen": 128 }
            ]
        }]
    }));

    let records = convert(&set, Algorithm::Cxof128).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(digest(&records[0]).customization.as_deref(), Some(&[1u8, 2][..]));
    assert!(check_record(Algorithm::Cxof128, &records[0]).unwrap());
}

#[test]
fn acvp_missing_field_reports_test_case() {
    let set = vector_set(json!({
        "testGroups": [{
            "tgId": 1, "testType": "AFT",
            "tests": [{ "tcId": 9, "msg": "00", "len": 8 }]
        }]
    }));
    assert!(matches!(
        convert(&set, Algorithm::Hash),
        Err(KatError::MissingJsonField { tc_id: 9, field: "md" })
    ));
}
