use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dnssec_rdata::dnssec::constants::{DNSKEY_PROTOCOL, ROOT_KSK_KEY_TAG};
use dnssec_rdata::{decode_dnskey, keytag};

fn dnskey_rdata(flags: u16, protocol: u8, algorithm: u8, public_key_b64: &str) -> Vec<u8> {
    let mut rdata = flags.to_be_bytes().to_vec();
    rdata.push(protocol);
    rdata.push(algorithm);
    rdata.extend(STANDARD.decode(public_key_b64).unwrap());
    rdata
}

#[test]
fn test_rfc4034_example_zsk() {
    // example.com DNSKEY from RFC 4034 5.4
    let rdata = dnskey_rdata(
        256,
        3,
        5,
        "AQOeiiR0GOMYkDshWoSKz9XzfwJr1AYtsmx3TGkJaNXVbfi/2pHm822aJ5iI9BMz\
         NXxeYCmZDRD99WYwYqUSdjMmmAphXdvxegXd/M5+X7OrzKBaMbCVdFLUUh6DhweJ\
         BjEVv5f2wwjM9XzcnOf+EPbtG9DMBmADjFDc2w/rljwvFw==",
    );
    assert_eq!(keytag(&rdata), 60485);
}

#[test]
fn test_root_ksk_2024() {
    let rdata = dnskey_rdata(
        257,
        3,
        8,
        "AwEAAaz/tAm8yTn4Mfeh5eyI96WSVexTBAvkMgJzkKTOiW1vkIbzxeF3\
         +/4RgWOq7HrxRixHlFlExOLAJr5emLvN7SWXgnLh4+B5xQlNVz8Og8kv\
         ArMtNROxVQuCaSnIDdD5LKyWbRd2n9WGe2R8PzgCmr3EgVLrjyBxWezF\
         0jLHwVN8efS3rCj/EWgvIWgb9tarpVUDK/b58Da+sqqls3eNbuv7pr+e\
         oZG+SrDK6nWeL3c6H5Apxz7LjVc1uTIdsIXxuOLYA4/ilBmSVIzuDWfd\
         RUfhHdY6+cn8HFRm+2hM8AnXGXws9555KrUB5qihylGa8subX2Nn6UwN\
         R1AkUTV74bU=",
    );
    assert_eq!(keytag(&rdata), ROOT_KSK_KEY_TAG);

    let record = decode_dnskey(&rdata).unwrap();
    assert!(record.is_secure_entry_point());
    assert_eq!(record.protocol, DNSKEY_PROTOCOL);
    assert_eq!(record.key_tag().unwrap(), ROOT_KSK_KEY_TAG);
    assert_eq!(record.public_key_bytes().unwrap(), rdata[4..]);
}

#[test]
fn test_ecdsa_zsk() {
    let rdata = dnskey_rdata(
        256,
        3,
        13,
        "8h6c/N45dN+EvxObJQxAiOsHg4h7HJnSZTDmLACwuvbUC+BlZSCxI6AAgu3cfaeii4wXvUk7btuQKURQ3Cx7Qg==",
    );
    assert_eq!(keytag(&rdata), 26562);
}

#[test]
fn test_deterministic() {
    let rdata: Vec<u8> = (0..=255).collect();
    assert_eq!(keytag(&rdata), keytag(&rdata));
}

#[test]
fn test_empty_and_odd_length() {
    assert_eq!(keytag(&[]), 0);
    // final byte is a high half with implicit zero low half
    assert_eq!(keytag(&[0x01, 0x02, 0x03]), 0x0102 + 0x0300);
    assert_eq!(keytag(&[0x01, 0x02, 0x03, 0x00]), keytag(&[0x01, 0x02, 0x03]));
}

#[test]
fn test_maximum_rdata_does_not_wrap() {
    // 65535 bytes of 0xFF: 32768 * 0xFF00 + 32767 * 0xFF = 0x7FFF7F01
    let rdata = vec![0xFF; 65535];
    assert_eq!(keytag(&rdata), 0xFF00);
}
