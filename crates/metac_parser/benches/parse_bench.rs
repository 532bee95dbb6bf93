use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metac_core::SourceText;
use metac_parser::Parser;

// A medium-size source exercising most statement and expression forms.
const METAC_SOURCE: &str = r#"
// Inventory helpers
Dictionary<String, int> stock = new Dictionary<String, int>()
List<String> names = new List<String>()
int[] totals = int[16]
int count = 0

public int add(int x, int y) {
    return x + y
}

private static float average(int[] values, int size) {
    float sum = 0
    for (int i = 0; i < size; i++) {
        sum += values[i]
    }
    return sum / size
}

function restock(String item, int amount) {
    if (stock.ContainsKey(item)) {
        stock.put(item, stock.get(item) + amount)
    } else {
        stock.put(item, amount)
        names.add(item)
    }
}

int largest(int[] values, int size) {
    int best = values[0]
    int i = 1
    while i < size {
        best = Math.Max(best, values[i])
        i++
    }
    return best
}

Point origin() {
    return new Point(0, 0)
}

do {
    count++
    if count > 10 {
        break
    }
} while (count < 100)

for (int j = 0 j < totals.Length j++) {
    totals[j] = add(j, j * 2) - -1
}

String label = "total: "
bool done = !(count == 0 || count >= 100) && true
"#;

fn bench_parse_medium(c: &mut Criterion) {
    let source = SourceText::new("bench.mc", METAC_SOURCE);
    c.bench_function("parse_metac_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let tree = Parser::new(&arena, black_box(&source)).parse();
            black_box(tree.root.members.len());
        });
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let source = SourceText::new("bench_large.mc", METAC_SOURCE.repeat(50));
    c.bench_function("parse_metac_large", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let tree = Parser::new(&arena, black_box(&source)).parse();
            black_box(tree.diagnostics.len());
        });
    });
}

criterion_group!(benches, bench_parse_medium, bench_parse_large);
criterion_main!(benches);
