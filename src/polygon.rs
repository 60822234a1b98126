//! Uniform sampling of regular polygons
//!
//! A regular polygon with `N` vertices is a fan of `N` congruent triangles around its center.
//! Since all triangles have the same area, a sample is generated by choosing one of them
//! uniformly and sampling that triangle uniformly.
//!
//! The vertex positions only depend on `N` and the tilt angle. They are computed once by
//! [`RegularPolygon::new`] and can then be shared by any number of threads.
//!
//! ```
//! use sample_warp::{polygon::RegularPolygon, Vec3d};
//!
//! let hexagon = RegularPolygon::new(6, 0.0_f64);
//! let p = hexagon.sample(Vec3d::new(0.3, 0.5, 0.5));
//! assert!(p.length() <= 1.0);
//! ```

use crate::{utils::debug_assert_canonical, Float, Vector2, Vector3};

/// A regular polygon centered at the origin with unit circumradius
#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygon<T: Float> {
    vertices: Vec<T::Vec2>,
}

impl<T: Float> RegularPolygon<T> {
    /// Builds a regular polygon with `vertex_count` vertices. Vertex `i` is placed at the angle
    /// `2 pi i / vertex_count + tilt_angle`.
    ///
    /// `vertex_count` must be at least 3.
    #[must_use]
    pub fn new(vertex_count: usize, tilt_angle: T) -> Self {
        debug_assert!(
            vertex_count >= 3,
            "a polygon needs at least 3 vertices, got {vertex_count}"
        );

        let vertices = (0..vertex_count)
            .map(|i| {
                let a = T::TWO_PI * T::from_usize(i) / T::from_usize(vertex_count) + tilt_angle;
                let (sin_a, cos_a) = a.sin_cos();
                T::Vec2::new(cos_a, sin_a)
            })
            .collect();
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[T::Vec2] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Area of the polygon, `N / 2 * sin(2 pi / N)`
    #[must_use]
    pub fn area(&self) -> T {
        let n = T::from_usize(self.vertex_count());
        let (sin, _) = (T::TWO_PI / n).sin_cos();
        n / T::TWO * sin
    }

    /// The density of [`RegularPolygon::sample`] with respect to area
    #[must_use]
    pub fn pdf(&self) -> T {
        T::ONE / self.area()
    }

    /// Maps a canonical sample in `[0, 1)^3` to a point on the polygon with the uniform density
    /// [`RegularPolygon::pdf`]. See [`sample_regular_polygon_uniform`].
    #[must_use]
    pub fn sample<V: Vector3<Scalar = T>>(&self, s: V) -> T::Vec2 {
        sample_regular_polygon_uniform(s, &self.vertices)
    }
}

/// Builds a regular polygon to use with [`sample_regular_polygon_uniform`]. Equivalent to
/// [`RegularPolygon::new`].
#[must_use]
pub fn build_regular_polygon<T: Float>(vertex_count: usize, tilt_angle: T) -> RegularPolygon<T> {
    RegularPolygon::new(vertex_count, tilt_angle)
}

/// Maps a canonical sample in `[0, 1)^3` to a point on the surface of a regular polygon with a
/// uniform density `1 / area`.
///
/// # Arguments
/// * `s` - canonical sample. `s.x` selects the triangle of the fan, `s.y` and `s.z` the point
///     inside that triangle.
/// * `vertices` - the vertex ring of the polygon, see [`RegularPolygon::vertices`]. At least 3
///     vertices are required.
#[must_use]
pub fn sample_regular_polygon_uniform<T: Float, V: Vector3<Scalar = T>>(
    s: V,
    vertices: &[T::Vec2],
) -> T::Vec2 {
    let (s0, s1, s2) = (s.x(), s.y(), s.z());
    debug_assert_canonical!(s0, s1, s2);
    let vertex_count = vertices.len();
    debug_assert!(
        vertex_count >= 3,
        "a polygon needs at least 3 vertices, got {vertex_count}"
    );

    // s0 * N can round up to N for s0 just below 1
    let v0_index = (s0 * T::from_usize(vertex_count))
        .to_usize()
        .min(vertex_count - 1);
    let v1_index = if v0_index + 1 == vertex_count {
        0
    } else {
        v0_index + 1
    };

    let v0 = vertices[v0_index];
    let v1 = vertices[v1_index];

    // the weight of the third vertex, the center, does not contribute
    let sqrt_s1 = s1.sqrt();
    let b0 = T::ONE - sqrt_s1;
    let b1 = s2 * sqrt_s1;

    v0 * b0 + v1 * b1
}
