use super::constants::{FILLER_CHAR_WIDTH_PX, FILLER_LINE_HEIGHT_PX};
use rand::prelude::*;

// Source-code-looking fragments for the decoded layer. Only the texture
// matters; none of this is ever parsed.
const SNIPPETS: &[&str] = &[
    "// scan pass: decode frame into glyph buffer",
    "/* every card carries a second face */",
    "const BAND_WIDTH = 8;",
    "const FRICTION = 0.95;",
    "const FLOOR = 30;",
    "let drift = velocity * direction * dt;",
    "fn decode(frame) { return frame.glyphs().collect(); }",
    "fn wrap(x, lo, hi) { return x < lo ? hi : x > hi ? lo : x; }",
    "const emit = (n) => pool.spawn(n);",
    "fn blend(cur, target) { cur + (target - cur) * 0.05 }",
    "struct Particle { pos, vel, life, decay }",
    "impl Particle { fn tick(&mut self) { self.pos += self.vel; } }",
    "  self.life -= self.decay;",
    "  if self.life <= 0.0 { self.respawn(bar_x); }",
    "match regime { Idle => 0.8, Active => 1.8 }",
    "let clip = (band.left - card.left).max(0.0) / card.width;",
    "for card in strip.cards() { card.clip(band); }",
    "signal.set(any_scanning);",
    "const glyphs = '0123456789abcdef';",
    "while (queue.length) { render(queue.shift()); }",
    "let ratio = intensity / baseline;",
    "if ratio > 1.5 { burst(ratio - 1.5); }",
    "pool.truncate(pool.len() - excess.min(15));",
    "const field = new Starfield(400);",
    "fn bob(t, i) { (t + i as f32 * 0.1).sin() * 0.5 }",
    "export const scanner = { active: false, glow: 1.0 };",
];

/// Character grid that fits a card of the given pixel size.
pub fn grid_for(width: f32, height: f32) -> (usize, usize) {
    let cols = (width / FILLER_CHAR_WIDTH_PX).floor().max(0.0) as usize;
    let rows = (height / FILLER_LINE_HEIGHT_PX).floor().max(0.0) as usize;
    (cols, rows)
}

/// Deterministic filler block, `rows` lines of exactly `cols` characters.
pub fn filler_text(cols: usize, rows: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(cols, rows, &mut rng)
}

pub fn generate<R: Rng + ?Sized>(cols: usize, rows: usize, rng: &mut R) -> String {
    if cols == 0 || rows == 0 {
        return String::new();
    }
    let needed = cols * rows;

    let mut flow = String::with_capacity(needed + cols);
    while flow.len() < needed {
        let piece = if rng.gen_bool(0.25) {
            let a: u32 = rng.gen_range(1..=9);
            let b: u32 = rng.gen_range(10..=99);
            let slot: u32 = rng.gen_range(0..64);
            format!("let cell{slot} = decode({a} * {b});")
        } else {
            SNIPPETS[rng.gen_range(0..SNIPPETS.len())].to_string()
        };
        if !flow.is_empty() {
            flow.push(' ');
        }
        for word in piece.split_whitespace() {
            if !flow.is_empty() && !flow.ends_with(' ') {
                flow.push(' ');
            }
            flow.push_str(word);
        }
    }

    // Snippets are ASCII, so byte slicing lands on char boundaries.
    let mut out = String::with_capacity(needed + rows);
    for row in 0..rows {
        let start = row * cols;
        out.push_str(&flow[start..start + cols]);
        if row + 1 < rows {
            out.push('\n');
        }
    }
    out
}
