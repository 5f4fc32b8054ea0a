//! Named two-state rule tables.
//!
//! Each preset is a complete 18-entry transition table: nine entries per
//! state, indexed by the live-neighbor count. They are accepted verbatim by
//! [`RuleSpace::set_table`](crate::RuleSpace::set_table).

/// Conway's Game of Life (B3/S23).
pub const GAME_OF_LIFE: [u8; 18] = [
    0, 0, 0, 1, 0, 0, 0, 0, 0, //
    0, 0, 1, 1, 0, 0, 0, 0, 0,
];

/// Writhing worm-like filaments.
pub const WORMS: [u8; 18] = [
    0, 1, 0, 0, 0, 1, 0, 1, 1, //
    0, 0, 0, 0, 1, 1, 1, 1, 1,
];

/// Dense maze corridors.
pub const MAZE: [u8; 18] = [
    1, 1, 0, 1, 0, 0, 0, 0, 1, //
    1, 0, 1, 1, 1, 0, 1, 1, 0,
];

/// Rectangular box outlines.
pub const BOXES: [u8; 18] = [
    1, 1, 0, 1, 0, 0, 0, 1, 1, //
    0, 1, 1, 1, 0, 1, 0, 0, 1,
];

/// Space-filling curve growth.
pub const HILBERT: [u8; 18] = [
    0, 1, 0, 0, 0, 0, 0, 0, 0, //
    0, 1, 1, 1, 1, 1, 1, 1, 1,
];

/// Snaking diagonal runs.
pub const SNAKES: [u8; 18] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, //
    1, 1, 0, 0, 1, 1, 1, 0, 0,
];

/// Twinkling starfield.
pub const STARS: [u8; 18] = [
    0, 0, 1, 1, 0, 0, 1, 1, 0, //
    0, 0, 1, 1, 0, 1, 1, 1, 1,
];

/// Tidy tiled regions.
pub const NICE_TILES: [u8; 18] = [
    1, 1, 1, 0, 0, 0, 0, 0, 1, //
    0, 1, 1, 1, 0, 1, 0, 0, 1,
];

/// Circuit-board traces with threefold texture.
pub const TRI_CIRCUIT: [u8; 18] = [
    1, 1, 1, 0, 0, 0, 0, 0, 1, //
    0, 1, 1, 1, 1, 1, 0, 0, 1,
];

/// Sierpinski-triangle growth, first variant.
pub const SIERPINSKI_1: [u8; 18] = [
    0, 1, 0, 0, 0, 0, 0, 0, 0, //
    0, 1, 1, 0, 1, 1, 1, 1, 1,
];

/// Mechanical-looking pulsing blocks.
pub const MACHINE: [u8; 18] = [
    0, 1, 0, 0, 0, 0, 0, 0, 1, //
    1, 1, 1, 1, 0, 0, 0, 1, 0,
];

/// Membranes that tear and heal.
pub const TEARING: [u8; 18] = [
    0, 0, 0, 0, 1, 1, 1, 1, 1, //
    0, 0, 0, 1, 0, 1, 1, 0, 1,
];

/// Maze corridors with intersections.
pub const COMPLEX_MAZE: [u8; 18] = [
    0, 0, 0, 1, 0, 0, 0, 0, 0, //
    0, 0, 1, 1, 1, 1, 0, 1, 0,
];

/// Thick zebra striping.
pub const GOOEY_ZEBRA: [u8; 18] = [
    1, 1, 1, 0, 1, 1, 0, 1, 1, //
    1, 1, 1, 1, 0, 0, 0, 0, 0,
];

/// Eightfold fractal blooms.
pub const OCTOFRACTAL: [u8; 18] = [
    1, 0, 0, 0, 0, 1, 0, 1, 1, //
    1, 1, 1, 1, 0, 0, 0, 1, 0,
];

/// Sierpinski-triangle growth, second variant.
pub const SIERPINSKI_2: [u8; 18] = [
    1, 1, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 1, 1, 1, 0, 1, 1, 0,
];

/// All presets with their menu names.
pub const ALL: &[(&str, &[u8; 18])] = &[
    ("game of life", &GAME_OF_LIFE),
    ("worms", &WORMS),
    ("maze", &MAZE),
    ("boxes", &BOXES),
    ("hilbert", &HILBERT),
    ("snakes", &SNAKES),
    ("stars", &STARS),
    ("nice tiles", &NICE_TILES),
    ("tri-circuit", &TRI_CIRCUIT),
    ("sierpinski 1", &SIERPINSKI_1),
    ("machine", &MACHINE),
    ("tearing", &TEARING),
    ("complex maze", &COMPLEX_MAZE),
    ("gooey zebra", &GOOEY_ZEBRA),
    ("octofractal", &OCTOFRACTAL),
    ("sierpinski 2", &SIERPINSKI_2),
];

/// Looks up a preset table by name.
#[must_use]
pub fn preset(name: &str) -> Option<&'static [u8; 18]> {
    ALL.iter()
        .find(|&&(preset_name, _)| preset_name == name)
        .map(|&(_, table)| table)
}
