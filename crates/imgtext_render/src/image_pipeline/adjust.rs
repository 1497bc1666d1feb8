// BT.709 luma weights in ten-thousandths; they sum to exactly 10_000.
const RED_WEIGHT: u32 = 2126;
const GREEN_WEIGHT: u32 = 7152;
const BLUE_WEIGHT: u32 = 722;

/// Perceptual luminance of an sRGB sample in `[0.0, 255.0]`.
pub fn luminance([r, g, b]: [u8; 3]) -> f32 {
    let weighted =
        RED_WEIGHT * u32::from(r) + GREEN_WEIGHT * u32::from(g) + BLUE_WEIGHT * u32::from(b);
    weighted as f32 / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_hit_the_bounds() {
        assert_eq!(luminance([255, 255, 255]), 255.0);
        assert_eq!(luminance([0, 0, 0]), 0.0);
    }

    #[test]
    fn green_dominates_red_dominates_blue() {
        let red = luminance([255, 0, 0]);
        let green = luminance([0, 255, 0]);
        let blue = luminance([0, 0, 255]);
        assert!(green > red && red > blue);
        assert!((red - 54.213).abs() < 1e-3);
    }

    #[test]
    fn gray_is_its_own_luminance() {
        for value in 0..=255u8 {
            assert_eq!(luminance([value; 3]), f32::from(value));
        }
    }
}
