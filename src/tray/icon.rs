use tray_icon::Icon;

const ICON_SIZE: u32 = 64;

/// Renders the padlock status icon. Drawn procedurally so the binary carries
/// no asset files.
pub fn create_icon() -> Icon {
    let data = render_padlock(ICON_SIZE);
    Icon::from_rgba(data, ICON_SIZE, ICON_SIZE).expect("static icon dimensions")
}

fn render_padlock(size: u32) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let s = size as i32;

    let body_left = s / 5;
    let body_right = s - s / 5;
    let body_top = s / 2 - 2;
    let body_bottom = s - s / 8;

    let shackle_cx = s / 2;
    let shackle_cy = body_top;
    let outer = s / 4;
    let inner = outer - s / 12;

    for y in 0..s {
        for x in 0..s {
            let in_body = x >= body_left && x < body_right && y >= body_top && y < body_bottom;

            let dx = x - shackle_cx;
            let dy = y - shackle_cy;
            let dist_sq = dx * dx + dy * dy;
            let in_shackle =
                y < shackle_cy && dist_sq <= outer * outer && dist_sq >= inner * inner;

            // Keyhole cutout in the body center.
            let kx = x - s / 2;
            let ky = y - (body_top + body_bottom) / 2;
            let in_keyhole = kx * kx + ky * ky <= (s / 12) * (s / 12);

            if (in_body && !in_keyhole) || in_shackle {
                let idx = ((y as u32 * size + x as u32) * 4) as usize;
                data[idx] = 235;
                data[idx + 1] = 235;
                data[idx + 2] = 235;
                data[idx + 3] = 255;
            }
        }
    }

    data
}
