use rand::prelude::{SeedableRng, SmallRng};
use soft_geometry::prelude::*;
use std::path::Path;

/// One poster per stock palette, using the same defaults a slider UI would
/// start on.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = PosterConfig::default();
    let composer = Composer::new(&config);
    // We're using a static random generator here so that our SVG files
    // don't get regenerated every time we run the examples.
    let mut rng = SmallRng::seed_from_u64(20240611);

    let fname = Path::new(file!()).file_stem().unwrap().to_str().unwrap();
    std::fs::create_dir_all("images")?;
    for name in config.palettes.names() {
        let params = PosterParams {
            palette: name.to_string(),
            ..PosterParams::default()
        };
        let scene = composer.compose(&params, &mut rng)?;
        let slug = name.to_lowercase().replace(' ', "_");
        let out = format!("images/{}_{}.svg", fname, slug);
        scene.save_svg(Path::new(&out))?;
        tracing::info!(palette = name, path = %out, "wrote poster");
    }
    Ok(())
}
