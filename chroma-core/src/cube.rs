//! Spinning-cube content source
//!
//! A fixed polyhedron rotated, projected, shaded and rasterized into
//! the frame buffer once per animation tick. Visibility is painter's
//! algorithm: faces are filled farthest first, so nearer faces
//! overwrite them and no depth buffer is needed.

use crate::frame::{FrameBuffer, Rgb, LEVEL_MAX, SCREEN_H, SCREEN_W};
use crate::math::{Rotation, Vec3};

/// Camera distance from the cube center
const CAMERA_DIST: f32 = 3.5;

/// Projection scale (focal constant)
const FOCAL: f32 = 33.0;

/// Base brightness applied to every face
const AMBIENT: f32 = 0.60;

/// Weight of the diffuse term
const DIFFUSE: f32 = 0.35;

/// Shade coefficient clamp; keeps faces out of the murky and
/// blown-out extremes so the spin reads as a gentle shimmer
const SHADE_MIN: f32 = 0.55;
const SHADE_MAX: f32 = 1.00;

/// Light direction (unnormalized): above and slightly to the right
const LIGHT_DIR: Vec3 = Vec3::new(0.4, 0.8, -0.4);

/// Unit cube vertices, model space
const VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// A quad face: vertex indices, outward normal (model space), pastel
/// base color in [0,1] per channel
struct Face {
    vertices: [usize; 4],
    normal: Vec3,
    base: [f32; 3],
}

/// Front, back, left, right, top, bottom. Base colors sit on sevenths
/// so the shade range maps cleanly onto the 3-bit levels.
const FACES: [Face; 6] = [
    Face {
        vertices: [0, 1, 2, 3],
        normal: Vec3::new(0.0, 0.0, -1.0),
        base: [6.0 / 7.0, 3.0 / 7.0, 3.0 / 7.0],
    },
    Face {
        vertices: [4, 5, 6, 7],
        normal: Vec3::new(0.0, 0.0, 1.0),
        base: [3.0 / 7.0, 5.0 / 7.0, 3.0 / 7.0],
    },
    Face {
        vertices: [0, 3, 7, 4],
        normal: Vec3::new(-1.0, 0.0, 0.0),
        base: [3.0 / 7.0, 4.0 / 7.0, 6.0 / 7.0],
    },
    Face {
        vertices: [1, 2, 6, 5],
        normal: Vec3::new(1.0, 0.0, 0.0),
        base: [6.0 / 7.0, 5.0 / 7.0, 3.0 / 7.0],
    },
    Face {
        vertices: [3, 2, 6, 7],
        normal: Vec3::new(0.0, 1.0, 0.0),
        base: [4.0 / 7.0, 5.0 / 7.0, 6.0 / 7.0],
    },
    Face {
        vertices: [0, 1, 5, 4],
        normal: Vec3::new(0.0, -1.0, 0.0),
        base: [5.0 / 7.0, 4.0 / 7.0, 6.0 / 7.0],
    },
];

/// Screen-space vertex with its camera-space depth, valid for one frame
#[derive(Debug, Clone, Copy)]
struct Projected {
    x: i32,
    y: i32,
    depth: f32,
}

/// Rotate, project, sort, shade and rasterize the cube into `fb`.
///
/// Clears the buffer first; a geometry frame always starts dark. Pure
/// over its inputs: the same angle pair produces the same pixels.
pub fn render(angle_x: f32, angle_y: f32, fb: &mut FrameBuffer) {
    fb.clear();

    let rot = Rotation::new(angle_x, angle_y);

    // Rotate and perspective-project the eight vertices. Screen y
    // grows downward, hence the flipped vertical term.
    let mut projected = [Projected {
        x: 0,
        y: 0,
        depth: 0.0,
    }; 8];
    for (proj, &v) in projected.iter_mut().zip(VERTICES.iter()) {
        let r = rot.apply(v);
        let depth = r.z + CAMERA_DIST;
        let inv = 1.0 / depth;
        proj.x = (SCREEN_W as f32 / 2.0 + r.x * inv * FOCAL) as i32;
        proj.y = (SCREEN_H as f32 / 2.0 - r.y * inv * FOCAL) as i32;
        proj.depth = depth;
    }

    // Painter order: mean depth of each face's corners, farthest first.
    let mut order: [(usize, f32); 6] = [(0, 0.0); 6];
    for (i, face) in FACES.iter().enumerate() {
        let sum: f32 = face.vertices.iter().map(|&v| projected[v].depth).sum();
        order[i] = (i, sum * 0.25);
    }
    sort_by_depth(&mut order);

    // One Lambert shade per face from its rotated normal.
    let light = LIGHT_DIR.normalized();
    let mut shaded = [Rgb::OFF; 6];
    for (i, face) in FACES.iter().enumerate() {
        let n = rot.apply(face.normal).normalized();
        let lambert = n.dot(light).max(0.0);
        let k = (AMBIENT + DIFFUSE * lambert).clamp(SHADE_MIN, SHADE_MAX);
        shaded[i] = Rgb::new(
            quantize(face.base[0] * k),
            quantize(face.base[1] * k),
            quantize(face.base[2] * k),
        );
    }

    for &(face, _) in &order {
        fill_face(fb, &FACES[face], &projected, shaded[face]);
    }
}

/// Stable insertion sort, farthest (largest depth) first.
///
/// Six elements, so quadratic cost is irrelevant; stability keeps
/// equal-depth faces in declaration order, which makes the paint order
/// fully deterministic.
fn sort_by_depth(order: &mut [(usize, f32); 6]) {
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && order[j - 1].1 < order[j].1 {
            order.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Quantize a [0,1] channel to a 3-bit level.
///
/// Floors at level 1: a face whose shade survived the clamp is lit, and
/// a fully dark channel would read as a hole in the cube.
fn quantize(c: f32) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let level = (c * 7.0 + 0.5) as i32;
    level.clamp(1, LEVEL_MAX as i32) as u8
}

/// Split the quad into two triangles sharing the 0-2 diagonal
fn fill_face(fb: &mut FrameBuffer, face: &Face, projected: &[Projected; 8], color: Rgb) {
    let [a, b, c, d] = face.vertices;
    let pa = (projected[a].x, projected[a].y);
    let pb = (projected[b].x, projected[b].y);
    let pc = (projected[c].x, projected[c].y);
    let pd = (projected[d].x, projected[d].y);

    fill_triangle(fb, pa, pb, pc, color);
    fill_triangle(fb, pa, pc, pd, color);
}

/// Signed doubled area of triangle abc; the sign encodes winding
fn edge(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> i32 {
    (c.0 - a.0) * (b.1 - a.1) - (c.1 - a.1) * (b.0 - a.0)
}

/// Half-space rasterization over the clamped bounding box.
///
/// A pixel is inside when all three edge values share a sign, which
/// accepts both windings. Zero-area triangles paint nothing.
fn fill_triangle(
    fb: &mut FrameBuffer,
    v0: (i32, i32),
    v1: (i32, i32),
    v2: (i32, i32),
    color: Rgb,
) {
    if edge(v0, v1, v2) == 0 {
        return;
    }

    let min_x = v0.0.min(v1.0).min(v2.0).max(0);
    let max_x = v0.0.max(v1.0).max(v2.0).min(SCREEN_W as i32 - 1);
    let min_y = v0.1.min(v1.1).min(v2.1).max(0);
    let max_y = v0.1.max(v1.1).max(v2.1).min(SCREEN_H as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x, y);
            let w0 = edge(v1, v2, p);
            let w1 = edge(v2, v0, p);
            let w2 = edge(v0, v1, p);

            if (w0 >= 0 && w1 >= 0 && w2 >= 0) || (w0 <= 0 && w1 <= 0 && w2 <= 0) {
                fb.put(x, y, color);
            }
        }
    }
}

/// Per-tick rotation increments
const STEP_X: f32 = 0.015;
const STEP_Y: f32 = 0.021;

/// Rotation state for the cube, advanced one tick at a time
#[derive(Debug, Clone, Copy)]
pub struct CubeAnimation {
    angle_x: f32,
    angle_y: f32,
}

impl Default for CubeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeAnimation {
    pub const fn new() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }

    /// Current angle pair
    pub fn angles(&self) -> (f32, f32) {
        (self.angle_x, self.angle_y)
    }

    /// Advance the spin by one tick
    pub fn step(&mut self) {
        self.angle_x += STEP_X;
        self.angle_y += STEP_Y;
    }
}
