use criterion::{black_box, criterion_group, Criterion};
use geogreet::geo::{BuiltinGeo, Country, Location, PrefixRule, TableGeo};
use geogreet::i18n::BuiltinLocalization;
use geogreet::sender::{MessageSender, IP_ADDRESS_HEADER};
use hyper::HeaderMap;

criterion_group!(benches_sender, bench_senders);

pub fn bench_senders(c: &mut Criterion) {
    let requests: Vec<HeaderMap> = ["172.0.32.11", "96.44.183.149", "10.0.0.1", "garbage"]
        .into_iter()
        .map(|ip| {
            let mut headers = HeaderMap::new();
            headers.insert(IP_ADDRESS_HEADER, ip.parse().unwrap());
            headers
        })
        .collect();

    {
        let sender = MessageSender::new(BuiltinGeo, BuiltinLocalization);
        c.bench_function("MessageSender<BuiltinGeo>::send", |b| {
            b.iter(|| {
                for headers in requests.iter() {
                    sender.send(black_box(headers));
                }
            })
        });
    }

    {
        let rules = (0..64)
            .map(|i| PrefixRule {
                prefix: format!("{i}."),
                location: Location::new(format!("City {i}"), Country::Germany, None, i),
            })
            .collect();
        let sender = MessageSender::new(
            TableGeo::new(rules, Location::default()),
            BuiltinLocalization,
        );
        c.bench_function("MessageSender<TableGeo>::send", |b| {
            b.iter(|| {
                for headers in requests.iter() {
                    sender.send(black_box(headers));
                }
            })
        });
    }
}
