// Colours for each root, darkened by how long the root took to reach.
//
// Each level takes another 0.8 / max_level of the base colour away so
// the last level sits at a fifth of the base brightness.

use image::Rgb;

pub const BASE_COLOURS : [Rgb<u8>; 5] = [
    Rgb([255, 0, 0]),
    Rgb([0, 255, 0]),
    Rgb([0, 0, 255]),
    Rgb([0, 255, 255]),
    Rgb([255, 0, 255])
];

pub fn base_colour(slot : usize) -> Rgb<u8> {
    BASE_COLOURS[slot % BASE_COLOURS.len()]
}

pub fn shade(base : &Rgb<u8>, level : usize, max_level : usize) -> Rgb<u8> {
    if max_level == 0 {
        return *base;
    }
    let level = level.min(max_level - 1);
    let factor = 1.0 - 0.8 * (level as f64) / (max_level as f64);
    let scale = |c : u8| (c as f64 * factor).round() as u8;
    Rgb([scale(base.0[0]), scale(base.0[1]), scale(base.0[2])])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(colour : &Rgb<u8>) -> u16 {
        colour.0.iter().map(|c| *c as u16).sum()
    }

    #[test]
    fn test_level_zero_is_base() {
        for base in BASE_COLOURS.iter() {
            assert_eq!(shade(base, 0, 20), *base);
        }
    }

    #[test]
    fn test_shades_get_darker() {
        for base in BASE_COLOURS.iter() {
            let mut last = brightness(base);
            for level in 1..20 {
                let current = brightness(&shade(base, level, 20));
                assert!(current <= last, "level {} brighter than previous", level);
                last = current;
            }
            // Anything past the last level stays there
            assert_eq!(shade(base, 25, 20), shade(base, 19, 20));
        }
    }

    #[test]
    fn test_darkest_level() {
        // 255 * (1 - 0.8 * 19 / 20) = 61.2
        assert_eq!(shade(&BASE_COLOURS[0], 19, 20), Rgb([61, 0, 0]));
        assert_eq!(shade(&BASE_COLOURS[3], 1, 20), Rgb([0, 245, 245]));
    }

    #[test]
    fn test_slots_wrap() {
        assert_eq!(base_colour(5), BASE_COLOURS[0]);
        assert_eq!(base_colour(2), Rgb([0, 0, 255]));
    }
}
