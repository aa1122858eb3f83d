/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use kornia_imgproc::warp::get_rotation_matrix2d;
///
/// let m = get_rotation_matrix2d((0.0, 0.0), 90.0, 1.0);
/// assert!((m[1] - 1.0).abs() < 1e-12);
/// ```
pub fn get_rotation_matrix2d(center: (f64, f64), angle: f64, scale: f64) -> [f64; 6] {
    let angle = angle.to_radians();
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    #[test]
    fn rotation_identity() {
        let m = super::get_rotation_matrix2d((10.0, 20.0), 0.0, 1.0);
        assert_eq!(m, [1.0, 0.0, 0.0, -0.0, 1.0, 0.0]);
    }

    #[test]
    fn rotation_keeps_center() {
        let (cx, cy) = (256.0, 256.0);
        let m = super::get_rotation_matrix2d((cx, cy), 30.0, 2.2);
        let x = m[0] * cx + m[1] * cy + m[2];
        let y = m[3] * cx + m[4] * cy + m[5];
        assert_relative_eq!(x, cx, epsilon = 1e-9);
        assert_relative_eq!(y, cy, epsilon = 1e-9);
        assert_relative_eq!(m[0], 2.2 * 30f64.to_radians().cos());
        assert_relative_eq!(m[1], 1.1, epsilon = 1e-12);
    }
}
