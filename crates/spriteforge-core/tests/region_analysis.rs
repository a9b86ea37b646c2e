//! End-to-end checks of the public analysis API.
//!
//! Run with: `cargo test -p spriteforge-core`

use proptest::prelude::*;

use spriteforge_core::{
    AnalysisConfig, CancellationToken, ColorKey, CoreError, Hooks, RasterImage, Region, Rgba,
    extract_region, transparent_sprite, unique_colors, unique_colors_strip, unique_sprite,
};

const BLACK: Rgba = [0, 0, 0, 255];
const RED: Rgba = [255, 0, 0, 255];

/// 4x4 all-black image with one red pixel at (1, 1).
fn black_with_red_dot() -> RasterImage {
    let mut pixels = vec![BLACK; 16];
    pixels[4 + 1] = RED;
    RasterImage::from_pixels(4, 4, pixels).expect("valid buffer")
}

/// Image whose pixel values come straight from the proptest strategy.
fn image_from(width: u32, height: u32, palette: &[Rgba], picks: &[usize]) -> RasterImage {
    let pixels = picks.iter().map(|&i| palette[i % palette.len()]).collect();
    RasterImage::from_pixels(width, height, pixels).expect("valid buffer")
}

/// Large striped image: every row gets a different color.
fn striped(width: u32, height: u32) -> RasterImage {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        let c = (y % 251) as u8;
        pixels.extend(std::iter::repeat_n([c, c.wrapping_mul(3), 7, 255], width as usize));
    }
    RasterImage::from_pixels(width, height, pixels).expect("valid buffer")
}

#[test]
fn test_red_dot_unique_colors() {
    let image = black_with_red_dot();
    let region = Region::new(1, 1, 2, 2);
    let config = AnalysisConfig::default();

    let unique = unique_colors(&image, region, &config, &mut Hooks::none()).expect("region fits");
    assert_eq!(unique.len(), 1);
    assert_eq!(unique.as_slice()[0].rgb(), [255, 0, 0]);

    let strip = unique_colors_strip(&unique);
    assert_eq!(strip.dimensions(), (1, 1));
    assert_eq!(strip.pixels(), &[RED]);

    let sprite = unique_sprite(&image, region, &config, &mut Hooks::none()).expect("region fits");
    assert_eq!(sprite.dimensions(), (2, 2));
    let opaque: Vec<Rgba> = sprite
        .pixels()
        .iter()
        .copied()
        .filter(|px| px[3] == 255)
        .collect();
    assert_eq!(opaque, vec![RED]);
    assert_eq!(sprite.pixels().iter().filter(|px| px[3] == 0).count(), 3);
    assert_eq!(sprite.pixel(0, 0), Some(RED));
}

#[test]
fn test_single_differing_pixel_is_transparent() {
    let base = RasterImage::filled(6, 5, [40, 80, 120, 255]);
    let mut changed = base.pixels().to_vec();
    changed[3 * 6 + 2] = [41, 80, 120, 255];
    let changed = RasterImage::from_pixels(6, 5, changed).expect("valid buffer");

    let region = Region::new(1, 2, 4, 3);
    let diff = transparent_sprite(
        &[base.clone(), base.clone(), changed, base],
        region,
        &AnalysisConfig::default(),
        &mut Hooks::none(),
    )
    .expect("enough frames");

    for y in 0..region.height {
        for x in 0..region.width {
            let alpha = diff.image.pixel(x, y).expect("inside output")[3];
            let expected = if (x, y) == (1, 1) { 0 } else { 255 };
            assert_eq!(alpha, expected, "alpha at ({x}, {y})");
        }
    }
}

#[test]
fn test_cancel_mid_scan_returns_canceled() {
    let image = striped(64, 2_000);
    let token = CancellationToken::new();
    let trigger = token.clone();
    let mut rows_reported = 0u32;
    let mut sink = |_: f32| {
        rows_reported += 1;
        if rows_reported == 10 {
            trigger.cancel();
        }
    };
    let mut hooks = Hooks::none().with_progress(&mut sink).with_cancel(&token);

    let result = unique_colors(
        &image,
        Region::new(0, 0, 32, 32),
        &AnalysisConfig::default(),
        &mut hooks,
    );
    drop(hooks);

    assert_eq!(result, Err(CoreError::Canceled));
    assert_eq!(rows_reported, 10);
}

#[test]
fn test_pre_canceled_sequence_diff_does_no_work() {
    let frame = RasterImage::filled(8, 8, BLACK);
    let token = CancellationToken::new();
    token.cancel();
    let mut hooks = Hooks::none().with_cancel(&token);
    let result = transparent_sprite(
        &[frame.clone(), frame],
        Region::new(0, 0, 8, 8),
        &AnalysisConfig::default(),
        &mut hooks,
    );
    assert!(matches!(result, Err(CoreError::Canceled)));
}

#[test]
fn test_cancel_mid_sequence_diff_returns_canceled() {
    let frame = RasterImage::filled(16, 500, BLACK);
    let frames = [frame.clone(), frame];
    let token = CancellationToken::new();
    let trigger = token.clone();
    let mut rows_reported = 0u32;
    let mut sink = |_: f32| {
        rows_reported += 1;
        if rows_reported == 5 {
            trigger.cancel();
        }
    };
    let mut hooks = Hooks::none().with_progress(&mut sink).with_cancel(&token);

    let result = transparent_sprite(
        &frames,
        Region::new(0, 0, 16, 500),
        &AnalysisConfig::default(),
        &mut hooks,
    );
    drop(hooks);

    assert!(matches!(result, Err(CoreError::Canceled)));
    assert_eq!(rows_reported, 5);
}

#[test]
fn test_sequence_diff_progress_is_monotonic() {
    let frame = RasterImage::filled(16, 500, BLACK);
    let frames = [frame.clone(), frame];
    let mut seen = Vec::new();
    let mut sink = |f: f32| seen.push(f);
    let mut hooks = Hooks::none().with_progress(&mut sink);

    transparent_sprite(
        &frames,
        Region::new(0, 0, 16, 500),
        &AnalysisConfig::default(),
        &mut hooks,
    )
    .expect("two identical frames");
    drop(hooks);

    assert_eq!(seen.len(), 500);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.last().copied(), Some(1.0));
}

#[test]
fn test_unique_colors_is_deterministic() {
    let palette = [RED, BLACK, [1, 2, 3, 255], [9, 9, 9, 255], [0, 200, 0, 255]];
    let picks: Vec<usize> = (0..100).map(|i| (i * 7 + i / 3) % 5).collect();
    let image = image_from(10, 10, &palette, &picks);
    let region = Region::new(2, 3, 5, 4);
    let config = AnalysisConfig::default();

    let first = unique_colors(&image, region, &config, &mut Hooks::none()).expect("region fits");
    for _ in 0..5 {
        let again =
            unique_colors(&image, region, &config, &mut Hooks::none()).expect("region fits");
        assert_eq!(again, first);
    }
}

fn image_and_region() -> impl Strategy<Value = (RasterImage, Region)> {
    (1u32..12, 1u32..12)
        .prop_flat_map(|(w, h)| {
            let picks = prop::collection::vec(0usize..6, (w * h) as usize);
            (Just(w), Just(h), picks, 0..w, 0..h)
        })
        .prop_flat_map(|(w, h, picks, x, y)| {
            (Just(w), Just(h), Just(picks), Just(x), Just(y), 1..=w - x, 1..=h - y)
        })
        .prop_map(|(w, h, picks, x, y, rw, rh)| {
            let palette = [
                BLACK,
                RED,
                [0, 255, 0, 255],
                [0, 0, 255, 255],
                [255, 255, 255, 255],
                [255, 0, 0, 128],
            ];
            (image_from(w, h, &palette, &picks), Region::new(x, y, rw, rh))
        })
}

proptest! {
    #[test]
    fn prop_extract_region_matches_source((image, region) in image_and_region()) {
        let crop = extract_region(&image, region).expect("region fits");
        prop_assert_eq!(crop.dimensions(), (region.width, region.height));
        for y in 0..region.height {
            for x in 0..region.width {
                prop_assert_eq!(crop.pixel(x, y), image.pixel(region.x + x, region.y + y));
            }
        }
    }

    #[test]
    fn prop_unique_colors_never_appear_outside((image, region) in image_and_region()) {
        let config = AnalysisConfig::default();
        let unique = unique_colors(&image, region, &config, &mut Hooks::none())
            .expect("region fits");
        for y in 0..image.height() {
            for x in 0..image.width() {
                if region.contains(x, y) {
                    continue;
                }
                let px = image.pixel(x, y).expect("in bounds");
                let key = ColorKey::from_pixel(px, config.alpha);
                prop_assert!(!unique.as_slice().contains(&key));
            }
        }
    }

    #[test]
    fn prop_sprite_opaque_exactly_at_unique((image, region) in image_and_region()) {
        let config = AnalysisConfig::default();
        let unique = unique_colors(&image, region, &config, &mut Hooks::none())
            .expect("region fits");
        let lookup = unique.to_lookup();
        let sprite = unique_sprite(&image, region, &config, &mut Hooks::none())
            .expect("region fits");

        let mut opaque = 0u64;
        for y in 0..region.height {
            for x in 0..region.width {
                let source = image.pixel(region.x + x, region.y + y).expect("in bounds");
                let out = sprite.pixel(x, y).expect("in bounds");
                let is_unique = lookup.contains(&ColorKey::from_pixel(source, config.alpha));
                prop_assert_eq!(out[3] == 255, is_unique);
                prop_assert_eq!(&out[..3], &source[..3]);
                if out[3] == 255 {
                    opaque += 1;
                }
            }
        }
        prop_assert!(opaque <= region.area());
    }
}
