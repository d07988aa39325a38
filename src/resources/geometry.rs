use glam::Vec3;
use uuid::Uuid;

/// Bounding sphere used for frustum culling.
#[derive(Debug, Clone, Copy)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// CPU-side geometry with the fixed vertex channels this crate renders:
/// position, normal, uv, plus a `u16` index buffer.
///
/// Geometry is immutable after construction; the renderer uploads it once
/// and caches the GPU buffers by `uuid`.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub uuid: Uuid,

    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u16>,

    bounding_sphere: BoundingSphere,
}

impl Geometry {
    /// Builds a geometry from parallel vertex channels.
    ///
    /// All channels must have the same length; indices reference into them.
    #[must_use]
    pub fn new(
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u16>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len(), uvs.len());

        let bounding_sphere = Self::compute_bounding_sphere(&positions);

        Self {
            uuid: Uuid::new_v4(),
            positions,
            normals,
            uvs,
            indices,
            bounding_sphere,
        }
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    #[inline]
    #[must_use]
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    fn compute_bounding_sphere(positions: &[[f32; 3]]) -> BoundingSphere {
        if positions.is_empty() {
            return BoundingSphere {
                center: Vec3::ZERO,
                radius: 0.0,
            };
        }

        // Center of the axis-aligned bounds, then the max distance to it.
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in positions {
            let v = Vec3::from_array(*p);
            min = min.min(v);
            max = max.max(v);
        }
        let center = (min + max) * 0.5;

        let mut radius_sq: f32 = 0.0;
        for p in positions {
            let v = Vec3::from_array(*p);
            radius_sq = radius_sq.max(center.distance_squared(v));
        }

        BoundingSphere {
            center,
            radius: radius_sq.sqrt(),
        }
    }
}
