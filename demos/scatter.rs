// Renders the planar warps of this crate into one png per warp.
// A stratified grid of samples is warped and every point is colored by its position in the unit
// square (red = s.x, green = s.y). Smooth color gradients on the target domain mean that the warp
// keeps neighboring samples together, compare disk_concentric.png and disk_polar.png.
use rayon::prelude::*;
use sample_warp::{
    disk::{sample_disk_uniform, sample_disk_uniform_alt},
    hemisphere::sample_hemisphere_cosine,
    polygon::RegularPolygon,
    triangle::sample_triangle_uniform,
    Vec2d, Vec3d,
};

const IMAGE_SIZE: usize = 512;
const STRATA: usize = 128;

type Warp = Box<dyn Fn(Vec2d, f64) -> Vec2d + Sync>;

fn boxed<F: Fn(Vec2d, f64) -> Vec2d + Sync + 'static>(f: F) -> Warp {
    Box::new(f)
}

fn save_image(path: &std::path::Path, buffer: &[u8], width: u32, height: u32) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = std::io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(&mut writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(buffer).unwrap();
}

fn render(warp: &Warp, seed: u64) -> Vec<u8> {
    let mut image = vec![0; 3 * IMAGE_SIZE * IMAGE_SIZE];
    let mut rd = fastrand::Rng::with_seed(seed);

    for i in 0..STRATA {
        for j in 0..STRATA {
            // jittered sample inside the stratum (i, j)
            let s = Vec2d::new(
                (i as f64 + rd.f64()) / STRATA as f64,
                (j as f64 + rd.f64()) / STRATA as f64,
            );
            let p = warp(s, rd.f64());

            // [-1, 1]^2 fills the image
            let x = ((p.x + 1.0) / 2.0 * IMAGE_SIZE as f64).floor() as usize;
            let y = ((1.0 - p.y) / 2.0 * IMAGE_SIZE as f64).floor() as usize;
            if x >= IMAGE_SIZE || y >= IMAGE_SIZE {
                continue;
            }
            let pixel = 3 * (y * IMAGE_SIZE + x);
            image[pixel] = (s.x * 255.0) as u8;
            image[pixel + 1] = (s.y * 255.0) as u8;
            image[pixel + 2] = 128;
        }
    }
    image
}

fn main() {
    let hexagon = RegularPolygon::new(6, 0.0);
    // right triangle with the corners (-1, -1), (1, -1) and (-1, 1)
    let (v0, v1, v2) = (
        Vec2d::new(-1.0, -1.0),
        Vec2d::new(1.0, -1.0),
        Vec2d::new(-1.0, 1.0),
    );

    let warps: Vec<(&str, Warp)> = vec![
        ("disk_concentric.png", boxed(|s, _| sample_disk_uniform(s))),
        ("disk_polar.png", boxed(|s, _| sample_disk_uniform_alt(s))),
        (
            "triangle.png",
            boxed(move |s, _| {
                let b: Vec3d = sample_triangle_uniform(s);
                v0 * b.x + v1 * b.y + v2 * b.z
            }),
        ),
        (
            "hexagon.png",
            // the third sample dimension selects the triangle of the fan
            boxed(move |s, r| hexagon.sample(Vec3d::new(r, s.x, s.y))),
        ),
        (
            "hemisphere_cosine.png",
            // seen from above, the pole is in the center of the image
            boxed(|s, _| {
                let d = sample_hemisphere_cosine(s);
                Vec2d::new(d.x, d.z)
            }),
        ),
    ];

    warps
        .par_iter()
        .enumerate()
        .for_each(|(seed, (name, warp))| {
            let image = render(warp, seed as u64);
            save_image(
                std::path::Path::new(name),
                &image,
                IMAGE_SIZE as u32,
                IMAGE_SIZE as u32,
            );
            println!("{name} written.");
        });
}
