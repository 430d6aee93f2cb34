//! Fixed spawn tables for `add_random`
//!
//! Pseudo-random in appearance only: four immutable tables with
//! independently wrapping cursors. The spawn sequence is fully
//! deterministic and repeats with the least common multiple of the
//! table lengths, which is long enough that nobody watching the panel
//! notices.

use super::{Layer, Sprite, SPRITE_ROWS};

/// Velocity table, paired (dx, dy)
const VELOCITIES: [(i16, i16); 16] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (2, 0),
    (-2, 0),
    (0, -2),
    (0, 2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// Shape masks, bit 7 leftmost: star, heart, square, triangle up,
/// triangle down, plus, diamond, heart, cross
const SHAPES: [[u8; SPRITE_ROWS]; 9] = [
    [
        0b0001_1000,
        0b0011_1100,
        0b1111_1111,
        0b0111_1110,
        0b0011_1100,
        0b0110_0110,
        0b1100_0011,
    ],
    [
        0b0110_0110,
        0b1111_1111,
        0b1111_1111,
        0b1111_1111,
        0b0111_1110,
        0b0011_1100,
        0b0001_1000,
    ],
    [0b1111_1111; SPRITE_ROWS],
    [
        0b0001_1000,
        0b0001_1000,
        0b0011_1100,
        0b0011_1100,
        0b0111_1110,
        0b0111_1110,
        0b1111_1111,
    ],
    [
        0b1111_1111,
        0b0111_1110,
        0b0111_1110,
        0b0011_1100,
        0b0011_1100,
        0b0001_1000,
        0b0001_1000,
    ],
    [
        0b0001_1000,
        0b0001_1000,
        0b0001_1000,
        0b1111_1111,
        0b0001_1000,
        0b0001_1000,
        0b0001_1000,
    ],
    [
        0b0001_1000,
        0b0011_1100,
        0b0111_1110,
        0b1111_1111,
        0b0111_1110,
        0b0011_1100,
        0b0001_1000,
    ],
    [
        0b0110_0110,
        0b1111_1111,
        0b1111_1111,
        0b1111_1111,
        0b0111_1110,
        0b0011_1100,
        0b0001_1000,
    ],
    [
        0b1100_0011,
        0b1110_0111,
        0b0111_1110,
        0b0011_1100,
        0b0011_1100,
        0b1110_0111,
        0b1100_0011,
    ],
];

/// Channel on/off triples: red, green, blue, yellow, magenta, cyan,
/// white
const COLORS: [(bool, bool, bool); 7] = [
    (true, false, false),
    (false, true, false),
    (false, false, true),
    (true, true, false),
    (true, false, true),
    (false, true, true),
    (true, true, true),
];

/// Spawn positions
const POSITIONS: [(i16, i16); 4] = [(10, 20), (20, 50), (30, 30), (40, 45)];

/// Cycling cursors into the spawn tables, one per table
pub(super) struct SpawnGenerator {
    velocity: usize,
    shape: usize,
    color: usize,
    position: usize,
}

impl SpawnGenerator {
    pub(super) const fn new() -> Self {
        Self {
            velocity: 0,
            shape: 0,
            color: 0,
            position: 0,
        }
    }

    /// Produce the next layer and advance every cursor by one, each
    /// wrapping independently
    pub(super) fn next_layer(&mut self) -> Layer {
        let (dx, dy) = VELOCITIES[self.velocity];
        let (x, y) = POSITIONS[self.position];
        let (r, g, b) = COLORS[self.color];
        let sprite = Sprite::masked(&SHAPES[self.shape], r, g, b);

        self.velocity = (self.velocity + 1) % VELOCITIES.len();
        self.shape = (self.shape + 1) % SHAPES.len();
        self.color = (self.color + 1) % COLORS.len();
        self.position = (self.position + 1) % POSITIONS.len();

        Layer { x, y, dx, dy, sprite }
    }
}
