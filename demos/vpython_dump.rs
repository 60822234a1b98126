// Writes a VPython script showing cosine weighted samples on the hemisphere together with the
// pole. Run it with `python hemisphere.py` to inspect the distribution in 3d.
use sample_warp::{
    hemisphere::{sample_hemisphere_cosine, sample_hemisphere_cosine_power},
    vpython::VPythonFile,
    Vec2d, Vec3d,
};

fn main() -> sample_warp::error::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let mut rd = fastrand::Rng::with_seed(0);
    let cosine: Vec<Vec3d> = (0..2000)
        .map(|_| sample_hemisphere_cosine(Vec2d::new(rd.f64(), rd.f64())))
        .collect();
    let lobe: Vec<Vec3d> = (0..2000)
        .map(|_| sample_hemisphere_cosine_power(Vec2d::new(rd.f64(), rd.f64()), 50.0))
        .collect();

    let mut file = VPythonFile::create("hemisphere.py")?;
    file.draw_unit_square(0.001)?;
    file.draw_arrow(Vec3d::ZERO, Vec3d::Y * 1.2, 0.01)?;
    file.draw_points(&cosine, "white", 3)?;
    file.draw_points(&lobe, "orange", 3)?;
    file.finish()?;
    Ok(())
}
