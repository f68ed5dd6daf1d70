// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proteus::render::render_scene;
use proteus::scene::RendererRegistry;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.grid`, `render.builtin`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (`small`, `medium_dense`, visual-type tags).
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.grid");
    for case in [
        fixtures::grid::Case::Small,
        fixtures::grid::Case::MediumDense,
        fixtures::grid::Case::LargeLongLabels,
    ] {
        let scene = fixtures::grid::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let annotated = render_scene(black_box(&scene)).expect("render_scene");
                black_box(annotated.spans.len())
            })
        });
    }
    group.finish();

    // One case per renderer: build and paint every step of its animation.
    let registry = RendererRegistry::builtin();
    let mut group = c.benchmark_group("render.builtin");
    for tag in registry.tags() {
        let registry = &registry;
        group.bench_function(tag, move |b| {
            b.iter(|| {
                let mut cells = 0usize;
                for position in 0..=5 {
                    let scene = registry.render(black_box(tag), position);
                    let annotated = render_scene(&scene).expect("render_scene");
                    cells += annotated.text.len();
                }
                black_box(cells)
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
