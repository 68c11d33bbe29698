use std::io;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use termesh::prelude::*;

const SCREEN_WIDTH: u32 = 80;
const SCREEN_HEIGHT: u32 = 24;

fn renderer_with_step(scan_step: f32) -> Renderer {
    let config = RenderConfig {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        frame_delay: Duration::ZERO,
        scan_step,
        ..RenderConfig::default()
    };
    Renderer::new(config).unwrap()
}

/// Flat grid of triangles on the z = 0 plane facing the camera, spanning
/// [-1, 1] in both axes.
fn sheet_mesh(cols: usize, rows: usize) -> Mesh {
    let mut vertices = Vec::with_capacity((cols + 1) * (rows + 1));
    for r in 0..=rows {
        for c in 0..=cols {
            let x = -1.0 + 2.0 * c as f32 / cols as f32;
            let y = -1.0 + 2.0 * r as f32 / rows as f32;
            vertices.push(Vec3::new(x, y, 0.0));
        }
    }

    let at = |c: usize, r: usize| r * (cols + 1) + c;
    let mut indices = Vec::with_capacity(cols * rows * 6);
    for r in 0..rows {
        for c in 0..cols {
            // Wound so the derived normals face the camera
            indices.extend([at(c, r), at(c, r + 1), at(c + 1, r + 1)]);
            indices.extend([at(c, r), at(c + 1, r + 1), at(c + 1, r)]);
        }
    }

    Mesh {
        vertices,
        indices,
        normals: None,
    }
}

fn benchmark_cube_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube_frame");

    for scan_step in [0.05_f32, 0.02, 0.01] {
        group.bench_with_input(
            BenchmarkId::new("scan_step", scan_step.to_string()),
            &scan_step,
            |b, &scan_step| {
                let mut renderer = renderer_with_step(scan_step);
                renderer.set_mesh(Mesh::cube(1.2)).unwrap();
                let mut sink = io::sink();
                b.iter(|| {
                    renderer.render(black_box(&mut sink)).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_triangle_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle_sheet");

    for cells in [4_usize, 8, 16] {
        let triangles = cells * cells * 2;
        group.bench_with_input(
            BenchmarkId::new("triangles", triangles),
            &cells,
            |b, &cells| {
                let mut renderer = renderer_with_step(0.02);
                renderer.set_mesh(sheet_mesh(cells, cells)).unwrap();
                let mut sink = io::sink();
                b.iter(|| {
                    renderer.render(black_box(&mut sink)).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_cube_frame, benchmark_triangle_sheet);
criterion_main!(benches);
