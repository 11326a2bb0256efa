// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Affine;
use understory_transform_decompose::{
    decompose, normalize_angle, parse_css_matrix, write_css_matrix,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn random_transforms(n: usize, seed: u64) -> Vec<Affine> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let angle = (rng.next_f64() - 0.5) * std::f64::consts::TAU;
            let sx = 0.25 + rng.next_f64() * 4.0;
            let sy = 0.25 + rng.next_f64() * 4.0;
            Affine::rotate(angle)
                * Affine::scale_non_uniform(sx, sy)
                * Affine::translate((rng.next_f64() * 500.0, rng.next_f64() * 500.0))
        })
        .collect()
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_decompose");

    for len in [64_usize, 1_024] {
        let transforms = random_transforms(len, 0xDEC0_0000_0000_0001);
        let css: Vec<String> = transforms.iter().copied().map(write_css_matrix).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("decompose", len), &transforms, |b, ts| {
            b.iter(|| {
                let sum: f64 = ts.iter().map(|t| decompose(*t).rotation).sum();
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("parse_css_matrix", len), &css, |b, css| {
            b.iter(|| {
                let sum: f64 = css.iter().map(|s| parse_css_matrix(s).as_coeffs()[0]).sum();
                black_box(sum);
            });
        });
    }

    group.bench_function("normalize_angle/text", |b| {
        b.iter(|| {
            for text in ["-90deg", "200grad", "0.75turn", "12.5rad", "3"] {
                let _ = black_box(normalize_angle(black_box(text)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
