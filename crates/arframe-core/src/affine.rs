use nalgebra::{Matrix2, Matrix3, Matrix4, Point2, Vector2, Vector4};
use std::sync::LazyLock;

/// A 2D affine map on normalized coordinates, stored as a 4x4 homogeneous
/// matrix.
///
/// Layout (column-vector convention, `p' = m * p`):
///
/// ```text
/// | a  b  tx 0 |
/// | c  d  ty 0 |
/// | 0  0  1  0 |
/// | 0  0  0  1 |
/// ```
///
/// A point `(x, y)` is lifted to `(x, y, 1, 1)`. Only rotation, non-zero
/// scale and translation are ever composed here, so the matrix stays
/// invertible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform2D {
    pub m: Matrix4<f64>,
}

impl AffineTransform2D {
    pub fn new(m: Matrix4<f64>) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        Self::new(Matrix4::identity())
    }

    /// Embed a 3x3 affine matrix (last row `0 0 1`) into the 4x4 layout.
    pub fn from_affine3(a: Matrix3<f64>) -> Self {
        Self::new(Matrix4::new(
            a[(0, 0)], a[(0, 1)], a[(0, 2)], 0.0, //
            a[(1, 0)], a[(1, 1)], a[(1, 2)], 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// The equivalent 3x3 affine matrix.
    pub fn to_affine3(&self) -> Matrix3<f64> {
        self.m.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Row-major copy of the full 4x4 matrix.
    pub fn to_array(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.m[(r, c)];
            }
        }
        rows
    }

    /// Top-left 2x2 block: rotation and scale.
    pub fn linear_part(&self) -> Matrix2<f64> {
        self.m.fixed_view::<2, 2>(0, 0).into_owned()
    }

    /// Translation column.
    pub fn translation_part(&self) -> Vector2<f64> {
        Vector2::new(self.m[(0, 2)], self.m[(1, 2)])
    }

    #[inline]
    pub fn apply(&self, p: Point2<f32>) -> Point2<f32> {
        let v = self.m * Vector4::new(p.x as f64, p.y as f64, 1.0, 1.0);
        Point2::new(v[0] as f32, v[1] as f32)
    }

    /// Transform that applies `self` first and `next` afterwards.
    #[inline]
    pub fn then(&self, next: &AffineTransform2D) -> AffineTransform2D {
        Self::new(next.m * self.m)
    }

    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(Self::new)
    }
}

impl std::ops::Mul for AffineTransform2D {
    type Output = AffineTransform2D;

    fn mul(self, rhs: AffineTransform2D) -> AffineTransform2D {
        AffineTransform2D::new(self.m * rhs.m)
    }
}

/// Rotation about the origin by `angle` radians, laid out as
/// `cos -sin; sin cos`.
///
/// With the UV origin at the top-left (y pointing down) a positive angle
/// turns content clockwise on screen.
pub fn rotation(angle: f64) -> AffineTransform2D {
    let (s, c) = angle.sin_cos();
    AffineTransform2D::from_affine3(Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    ))
}

pub fn translation(offset: Vector2<f64>) -> AffineTransform2D {
    AffineTransform2D::from_affine3(Matrix3::new(
        1.0, 0.0, offset.x, //
        0.0, 1.0, offset.y, //
        0.0, 0.0, 1.0,
    ))
}

pub fn scaling(factor: Vector2<f64>) -> AffineTransform2D {
    AffineTransform2D::from_affine3(Matrix3::new(
        factor.x, 0.0, 0.0, //
        0.0, factor.y, 0.0, //
        0.0, 0.0, 1.0,
    ))
}

/// Flips the vertical UV axis about the frame center: `(x, y) -> (x, 1 - y)`.
pub static VERTICAL_INVERSION: LazyLock<AffineTransform2D> = LazyLock::new(|| {
    AffineTransform2D::from_affine3(Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, -1.0, 1.0, //
        0.0, 0.0, 1.0,
    ))
});

/// Flips the horizontal UV axis about the frame center: `(x, y) -> (1 - x, y)`.
pub static HORIZONTAL_INVERSION: LazyLock<AffineTransform2D> = LazyLock::new(|| {
    AffineTransform2D::from_affine3(Matrix3::new(
        -1.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ))
});
