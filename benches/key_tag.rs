use criterion::{Criterion, criterion_group, criterion_main};
use dnssec_rdata::{decode_dnskey, keytag};
use std::hint::black_box;

fn rsa_2048_rdata() -> Vec<u8> {
    let mut rdata = vec![0x01, 0x01, 0x03, 0x08, 0x03, 0x01, 0x00, 0x01];
    rdata.extend((0..256u32).map(|i| (i * 151 + 13) as u8));
    rdata
}

fn bench_key_tag(c: &mut Criterion) {
    let rdata = rsa_2048_rdata();
    c.bench_function("keytag rsa-2048 dnskey", |b| {
        b.iter(|| keytag(black_box(&rdata)));
    });
}

fn bench_decode_dnskey(c: &mut Criterion) {
    let rdata = rsa_2048_rdata();
    c.bench_function("decode rsa-2048 dnskey", |b| {
        b.iter(|| decode_dnskey(black_box(&rdata)));
    });
}

criterion_group!(benches, bench_key_tag, bench_decode_dnskey);
criterion_main!(benches);
