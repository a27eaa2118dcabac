/// Converts material RGB components in `[0, 1]` to a lower-case `#rrggbb`
/// string for the display layer. Out-of-range components are clamped.
pub fn rgb_to_hex(r: f32, g: f32, b: f32) -> String {
    format!("#{:02x}{:02x}{:02x}", channel_to_byte(r), channel_to_byte(g), channel_to_byte(b))
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
