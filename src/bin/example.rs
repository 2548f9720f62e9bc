//! Beam Solver Example - loaded I-beam under both theories

use anyhow::Context;
use beam_solver::loads::{default_point_load_rows, default_segment_rows};
use beam_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Beam Solver Example: 8 m I-Beam ===\n");

    // 400 mm deep I-beam, 200 mm flanges (18 mm), 12 mm web
    let section =
        Section::wide_flange(400.0, 200.0, 18.0, 12.0).context("building I-beam section")?;
    println!(
        "Section: A = {:.1} cm², I = {:.1} cm⁴, h = {:.0} mm",
        section.a * 1e4,
        section.inertia * 1e8,
        section.height * 1e3
    );

    let mut model = BeamModel::new(8.0, 600, Material::steel(), section);
    model.uniform = UniformLoad::full_span(40e3); // 40 kN/m over the whole span
    model.segments = default_segment_rows(); // + 20 kN/m segment
    model.point_loads = default_point_load_rows(); // + 120 kN at 0.65 L

    for options in [
        AnalysisOptions::euler_bernoulli(),
        AnalysisOptions::timoshenko(),
    ] {
        let label = match options.theory {
            BeamTheory::EulerBernoulli => "Euler-Bernoulli",
            BeamTheory::Timoshenko => "Timoshenko",
        };
        println!("\n=== Results ({label}) ===\n");

        let results = model
            .clone()
            .with_options(options)
            .solve()
            .context("solving beam response")?;

        let summary = &results.summary;
        println!("  Max shear:      {:.2} kN", summary.max_shear / 1e3);
        println!("  Max moment:     {:.2} kN·m", summary.max_moment / 1e3);
        println!("  Max deflection: {:.2} mm", summary.max_deflection * 1e3);
        println!("  Max stress:     {:.2} MPa", summary.max_stress);
        if let Some(utilization) = summary.utilization {
            println!("  σ/fy:           {:.3}", utilization);
        }

        println!("\n  Probes along the span:");
        for ratio in [0.25, 0.5, 0.65, 1.0] {
            let probe = results.probe(ratio);
            println!(
                "    x/L = {:.2}: w = {:.2} mm, σ_top = {:.2} MPa, σ_bottom = {:.2} MPa",
                ratio, probe.deflection_mm, probe.sigma_top, probe.sigma_bottom
            );
        }
    }

    // Machine-readable summary of the Euler-Bernoulli solve
    let results = model.solve()?;
    println!(
        "\n=== Summary (JSON) ===\n{}",
        serde_json::to_string_pretty(&results.summary)?
    );

    Ok(())
}
