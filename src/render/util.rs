use crossterm::style::Color;

/// Color linear interpolation, returns a Crossterm struct.
pub fn color_lerp(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> Color {
    let a = (a.0 as f32, a.1 as f32, a.2 as f32);
    let b = (b.0 as f32, b.1 as f32, b.2 as f32);
    let t = t.clamp(0., 1.);
    Color::Rgb {
        r: (a.0 + (b.0 - a.0) * t) as u8,
        g: (a.1 + (b.1 - a.1) * t) as u8,
        b: (a.2 + (b.2 - a.2) * t) as u8,
    }
}

/// Color of a missed candidate, shifting from grey to red as the scan goes deeper into the
/// alphabet.
pub fn miss_color(attempt: usize, alphabet_len: usize) -> Color {
    let t = attempt as f32 / alphabet_len.max(1) as f32;
    color_lerp((120, 120, 120), (255, 0, 0), t)
}
