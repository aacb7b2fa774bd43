use super::VertexSet;

/// Rotates every vertex about the z-axis by `-angle_step` radians, in place.
///
/// `x' = x·cos + y·sin`, `y' = -x·sin + y·cos`, both from the pre-update
/// pair. Positive steps turn clockwise. z is never touched.
pub fn advance(vertices: &mut VertexSet, angle_step: f32) {
    let (sin, cos) = angle_step.sin_cos();
    rotate_with(vertices, sin, cos);
}

fn rotate_with(vertices: &mut VertexSet, sin: f32, cos: f32) {
    for v in vertices.iter_mut() {
        let (x, y) = (v.x, v.y);
        v.x = x * cos + y * sin;
        v.y = -(x * sin) + y * cos;
    }
}

/// Fixed-step rotation applied once per frame.
///
/// Caches `sin`/`cos` of the step; the step never changes during a run.
#[derive(Debug, Copy, Clone)]
pub struct FrameUpdater {
    sin: f32,
    cos: f32,
    frames: u64,
}

impl FrameUpdater {
    pub fn new(angle_step: f32) -> Self {
        let (sin, cos) = angle_step.sin_cos();
        Self {
            sin,
            cos,
            frames: 0,
        }
    }

    /// Number of frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn advance(&mut self, vertices: &mut VertexSet) {
        rotate_with(vertices, self.sin, self.cos);
        self.frames = self.frames.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Vertex, INITIAL_TRIANGLE};

    const STEP: f32 = 0.0005;

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn one_step_matches_formula_on_first_vertex() {
        let mut tri = INITIAL_TRIANGLE;
        advance(&mut tri, STEP);

        // (-0.5, -0.5) turned clockwise: x = -0.5cos - 0.5sin, y = 0.5sin - 0.5cos.
        assert!(close(tri[0].x, -0.500_249_94, 1e-6), "x = {}", tri[0].x);
        assert!(close(tri[0].y, -0.499_749_94, 1e-6), "y = {}", tri[0].y);
        assert_eq!(tri[0].z, 0.0);
    }

    #[test]
    fn positive_step_turns_clockwise() {
        let mut v = [Vertex::new(1.0, 0.0, 0.0); 3];
        advance(&mut v, std::f32::consts::FRAC_PI_2);

        // +x goes to -y under this convention.
        assert!(close(v[0].x, 0.0, 1e-6));
        assert!(close(v[0].y, -1.0, 1e-6));
    }

    #[test]
    fn uses_pre_update_coordinates() {
        let mut v = [Vertex::new(0.3, 0.7, 0.0); 3];
        let (x, y) = (0.3f32, 0.7f32);
        let (s, c) = 0.25f32.sin_cos();
        advance(&mut v, 0.25);

        assert!(close(v[0].x, x * c + y * s, 1e-6));
        assert!(close(v[0].y, -x * s + y * c, 1e-6));
    }

    #[test]
    fn z_is_never_mutated() {
        let mut v = [
            Vertex::new(0.1, 0.2, 0.3),
            Vertex::new(-0.4, 0.5, -0.6),
            Vertex::new(0.7, -0.8, 0.9),
        ];
        for _ in 0..1000 {
            advance(&mut v, 0.01);
        }
        assert_eq!([v[0].z, v[1].z, v[2].z], [0.3, -0.6, 0.9]);
    }

    #[test]
    fn distances_invariant_over_many_frames() {
        let mut tri = INITIAL_TRIANGLE;
        let before: Vec<f32> = tri.iter().map(Vertex::length).collect();

        let mut updater = FrameUpdater::new(STEP);
        for _ in 0..10_000 {
            updater.advance(&mut tri);
        }

        for (v, d) in tri.iter().zip(before) {
            assert!(close(v.length(), d, 1e-4), "{} vs {d}", v.length());
        }
        assert_eq!(updater.frames(), 10_000);
    }

    #[test]
    fn repeated_steps_match_single_rotation() {
        let n = 10_000u32;
        let mut stepped = INITIAL_TRIANGLE;
        let mut updater = FrameUpdater::new(STEP);
        for _ in 0..n {
            updater.advance(&mut stepped);
        }

        let mut once = INITIAL_TRIANGLE;
        advance(&mut once, STEP * n as f32);

        for (a, b) in stepped.iter().zip(once.iter()) {
            assert!(close(a.x, b.x, 1e-3), "x {} vs {}", a.x, b.x);
            assert!(close(a.y, b.y, 1e-3), "y {} vs {}", a.y, b.y);
        }
    }

    #[test]
    fn shape_is_preserved() {
        let side = |t: &VertexSet, i: usize, j: usize| {
            let (dx, dy) = (t[i].x - t[j].x, t[i].y - t[j].y);
            (dx * dx + dy * dy).sqrt()
        };

        let mut tri = INITIAL_TRIANGLE;
        let before = [side(&tri, 0, 1), side(&tri, 1, 2), side(&tri, 2, 0)];
        for _ in 0..500 {
            advance(&mut tri, STEP);
        }
        let after = [side(&tri, 0, 1), side(&tri, 1, 2), side(&tri, 2, 0)];

        for (a, b) in before.iter().zip(after) {
            assert!(close(*a, b, 1e-4));
        }
    }

    #[test]
    fn zero_step_is_identity() {
        let mut tri = INITIAL_TRIANGLE;
        advance(&mut tri, 0.0);
        assert_eq!(tri, INITIAL_TRIANGLE);
    }
}
