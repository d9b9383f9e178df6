use divan::Bencher;

use h5surf::prelude::*;

#[divan::bench(args = [64, 512])]
fn grid(b: Bencher, n: usize) {
    let m = Mesh::new(n, n);
    b.bench_local(|| m.grid())
}

#[divan::bench(args = [64, 512])]
fn cells(b: Bencher, n: usize) {
    let m = Mesh::new(n, n);
    b.bench_local(|| m.cells().count())
}

#[divan::bench]
fn coolwarm(b: Bencher) {
    let norm = Normalize::new(-2.5, 3.1);
    b.bench_local(|| {
        (0..1000)
            .map(|i| CoolWarm.color(norm.apply(-2.5 + i as f64 * 0.0056)))
            .count()
    })
}

fn main() {
    divan::main();
}
