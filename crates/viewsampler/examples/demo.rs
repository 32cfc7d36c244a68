//! Renders a procedural torus with every strategy into the system temp dir.
//!
//! No model file is needed: the scene is built in memory and handed to
//! `run_prepared` directly.

use viewsampler::*;

fn torus(major: f32, minor: f32, rings: u32, sides: u32) -> MeshObject {
    let mut vertices = Vec::new();
    for i in 0..rings {
        let u = std::f32::consts::TAU * i as f32 / rings as f32;
        for j in 0..sides {
            let v = std::f32::consts::TAU * j as f32 / sides as f32;
            let r = major + minor * v.cos();
            vertices.push(Vec3::new(r * u.cos(), r * u.sin(), minor * v.sin()));
        }
    }

    let mut faces = Vec::new();
    for i in 0..rings {
        for j in 0..sides {
            let a = i * sides + j;
            let b = ((i + 1) % rings) * sides + j;
            let c = ((i + 1) % rings) * sides + (j + 1) % sides;
            let d = i * sides + (j + 1) % sides;
            faces.push([a, b, c]);
            faces.push([a, c, d]);
        }
    }
    MeshObject::new("torus", vertices, faces)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scene = Scene::new();
    scene.push_mesh(torus(0.06, 0.02, 48, 24));
    let bounds = scene.world_bounds()?;
    let prepared = PreparedScene { scene, bounds };

    let root = std::env::temp_dir().join("viewsampler-demo");
    for strategy in [
        StrategyConfig::ring(),
        StrategyConfig::ring_pitch_grid(),
        StrategyConfig::full_grid(),
    ] {
        let config = RunConfig {
            model_path: "torus".into(),
            output_dir: root.clone(),
            strategy,
            render: RenderSettings::default().with_size(256, 256),
            ..Default::default()
        };
        let sequence = plan(&config)?;
        let out = root.join(sequence.name());
        let config = RunConfig {
            output_dir: out,
            ..config
        };
        let summary = run_prepared(&config, &sequence, &prepared, &mut PreviewRenderer::new())?;
        println!(
            "{}: {} views in {}",
            summary.strategy,
            summary.rendered,
            summary.output_dir.display()
        );
    }
    Ok(())
}
