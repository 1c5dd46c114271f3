//! Brief Assembly Benchmark
//!
//! Measures the deterministic layers (taxonomy rendering and brief assembly)
//! that run before the single synthesis call, and reports how large the brief
//! sent to the model is compared with the full vocabulary.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rhythmic_ribbon_mcp::{build_brief, render, EnhanceRequest, Style, TechnicalFocus};

fn request(style: Style) -> EnhanceRequest {
    EnhanceRequest {
        routine_description: "Ninety-second ribbon solo opening on the floor, building to a \
                              high throw at the musical climax"
            .to_string(),
        style,
        focus: TechnicalFocus::Balanced,
    }
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    group.bench_function("movement_vocabulary", |b| {
        b.iter(render::movement_vocabulary)
    });
    group.bench_function("composition_guide", |b| b.iter(render::composition_guide));
    group.bench_function("full_taxonomy", |b| b.iter(render::full_taxonomy));

    group.finish();
}

fn benchmark_briefs(c: &mut Criterion) {
    let mut group = c.benchmark_group("brief_assembly");

    for style in Style::ALL {
        let req = request(style);
        group.bench_function(format!("brief_{}", style.key()), |b| {
            b.iter(|| build_brief(black_box(&req)))
        });
    }

    group.finish();
}

fn print_size_report() {
    println!("\n=== Brief Size Report ===\n");
    println!("{:<22} {:>10} {:>12}", "Style", "Chars", "~Tokens");
    println!("{}", "-".repeat(46));

    for style in Style::ALL {
        let brief = build_brief(&request(style));
        // Roughly 4 chars per token
        println!("{:<22} {:>10} {:>12}", style.key(), brief.len(), brief.len() / 4);
    }

    let full = render::full_taxonomy();
    println!(
        "\nFull taxonomy: {} chars (~{} tokens)",
        full.len(),
        full.len() / 4
    );
}

fn benchmark_with_report(c: &mut Criterion) {
    // Only print report when explicitly requested
    if std::env::var("PRINT_REPORT").is_ok() {
        print_size_report();
    }
    benchmark_rendering(c);
    benchmark_briefs(c);
}

criterion_group!(benches, benchmark_with_report);
criterion_main!(benches);
