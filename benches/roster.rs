use criterion::{Criterion, black_box, criterion_group, criterion_main};

use troopers_roster::{
    render::CardRenderer,
    roster::RowClassifier,
    specs::{Identity, IdentityLookup},
};

struct Echo;
impl IdentityLookup for Echo {
    fn lookup(&mut self, handle: &str) -> Option<Identity> {
        Some(Identity { id: handle.len() as u64, handle: handle.to_string(), display_name: handle.to_string() })
    }
}

/// A sheet shaped like the real one: dividers, then troopers per tier.
fn synthetic_rows() -> Vec<Vec<String>> {
    let sections = [("HIGH COMMAND", 1..=6), ("SENIOR HIGH RANK", 10..=19), ("HIGH RANK", 20..=35),
                    ("SERGEANTS PROGRAMME", 36..=60), ("LOW RANKS", 61..=250)];
    let mut rows = Vec::new();
    for (label, callsigns) in sections {
        let mut divider = vec![String::new(); 17];
        divider[0] = label.to_string();
        rows.push(divider);
        for n in callsigns {
            let mut r = vec![String::new(); 17];
            r[2] = format!("G-{n}");
            r[3] = format!("trooper_{n}");
            r[12] = "Lance".into();
            r[14] = "Corporal".into();
            r[15] = if n % 3 == 0 { "TRUE".into() } else { "FALSE".into() };
            r[16] = if n % 5 == 0 { "TRUE".into() } else { "FALSE".into() };
            rows.push(r);
        }
    }
    rows
}

fn bench_roster(c: &mut Criterion) {
    let rows = synthetic_rows();
    let classifier = RowClassifier::default();
    let renderer = CardRenderer::default();
    let records = classifier.classify(&rows, &mut Echo);

    c.bench_function("classify", |b| {
        b.iter(|| {
            let recs = classifier.classify(black_box(&rows), &mut Echo);
            black_box(recs.len())
        })
    });

    c.bench_function("render_document", |b| {
        b.iter(|| {
            let doc = renderer.render_document(black_box(&records));
            black_box(doc.len())
        })
    });
}

criterion_group!(benches, bench_roster);
criterion_main!(benches);
