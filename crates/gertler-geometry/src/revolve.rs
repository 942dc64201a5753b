//! Revolve the side profile into a closed hull mesh for display.

use gertler_core::{GertlerError, Result};
use gertler_math::{Point3, Vector3};

use crate::pattern::PatternPoint;

/// Finest ring spacing accepted, degrees (3600 vertices per ring).
pub const MIN_ANGLE_STEP_DEG: f64 = 0.1;

/// Indexed triangle mesh of the envelope surface.
#[derive(Debug, Clone, Default)]
pub struct HullMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    /// Vertices per ring.
    pub ring_size: usize,
}

impl HullMesh {
    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Sweep the `(x, r)` stations around the body axis.
///
/// Rings are spaced `angle_step_deg` apart and wrap around, giving two
/// triangles per quad between consecutive stations. Every `x` is shifted by
/// `-x_offset`, so passing the center of buoyancy centers the model on it.
/// Triangles wind counter-clockwise seen from outside the hull.
pub fn hull_mesh(points: &[PatternPoint], x_offset: f64, angle_step_deg: f64) -> Result<HullMesh> {
    if !(angle_step_deg >= MIN_ANGLE_STEP_DEG && angle_step_deg <= 180.0) {
        return Err(GertlerError::Config(format!(
            "hull angle step must lie in [{}, 180] degrees, got {}",
            MIN_ANGLE_STEP_DEG, angle_step_deg
        )));
    }
    if points.len() < 2 {
        return Ok(HullMesh::default());
    }

    let ring = (360.0 / angle_step_deg).floor() as usize;
    let step = angle_step_deg.to_radians();

    let vertex_count = points
        .len()
        .checked_mul(ring)
        .filter(|&count| count <= u32::MAX as usize)
        .ok_or_else(|| {
            GertlerError::Config(format!(
                "hull mesh of {} stations at {} degrees exceeds the index range",
                points.len(),
                angle_step_deg
            ))
        })?;

    let mut positions = Vec::with_capacity(vertex_count);
    for p in points {
        for j in 0..ring {
            let (sin, cos) = (j as f64 * step).sin_cos();
            positions.push(Point3::new(p.x - x_offset, p.r * cos, p.r * sin));
        }
    }

    let mut indices = Vec::with_capacity((points.len() - 1) * ring * 6);
    for i in 0..points.len() - 1 {
        for j in 0..ring {
            let idx = |ii: usize, jj: usize| -> u32 { (ii * ring + jj % ring) as u32 };

            indices.extend_from_slice(&[idx(i, j), idx(i, j + 1), idx(i + 1, j)]);
            indices.extend_from_slice(&[idx(i, j + 1), idx(i + 1, j + 1), idx(i + 1, j)]);
        }
    }

    let normals = vertex_normals(&positions, &indices);

    Ok(HullMesh {
        positions,
        normals,
        indices,
        ring_size: ring,
    })
}

/// Area-weighted vertex normals. Vertices touched only by zero-area
/// triangles get a zero normal.
fn vertex_normals(positions: &[Point3], indices: &[u32]) -> Vec<Vector3> {
    let mut normals = vec![Vector3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals.iter().map(|n| n.normalize_or_zero()).collect()
}
