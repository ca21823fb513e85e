//! End-to-end tests of the extract -> rescale -> colorize -> composite
//! pipeline on small synthetic tiles.

use wsv_core::rgb::{blue, green, invert_rgb, pack_rgb, red};
use wsv_core::{PixelBuffer, SampleFormat};
use wsv_display::prelude::*;

/// 4x4 two-band tile with a deterministic pattern.
fn fluorescence_tile() -> PixelBuffer {
    let mut data = Vec::with_capacity(4 * 4 * 2);
    for y in 0..4u32 {
        for x in 0..4u32 {
            data.push((x * 60 + y) as u8); // band 0
            data.push((y * 50 + x) as u8); // band 1
        }
    }
    PixelBuffer::from_u8(4, 4, 2, data).unwrap()
}

fn fluorescence_channels() -> Vec<Box<dyn ChannelDisplay>> {
    vec![
        Box::new(DirectChannel::new(
            "CD3",
            0,
            pack_rgb(255, 0, 0),
            SampleFormat::U8,
        )),
        Box::new(DirectChannel::new(
            "DAPI",
            1,
            pack_rgb(0, 0, 255),
            SampleFormat::U8,
        )),
    ]
}

#[test]
fn whole_image_render_matches_per_pixel_path() {
    let tile = fluorescence_tile();
    let channels = fluorescence_channels();
    let rgb = render(&tile, &channels, DisplayMode::Color).unwrap();

    for y in 0..4 {
        for x in 0..4 {
            let mut expected = pack_rgb(0, 0, 0);
            for ch in &channels {
                expected = ch
                    .update_rgb_additive(&tile, x, y, expected, DisplayMode::Color)
                    .unwrap();
            }
            assert_eq!(rgb[(y * 4 + x) as usize], expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn contrast_window_darkens_and_saturates() {
    let tile = fluorescence_tile();
    let mut ch = DirectChannel::new("CD3", 0, pack_rgb(255, 255, 255), SampleFormat::U8);
    ch.set_min_display(60.0);
    ch.set_max_display(120.0);
    let channels: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(ch)];

    let rgb = render(&tile, &channels, DisplayMode::Color).unwrap();
    // x=0 row 0: value 0, below the window
    assert_eq!(rgb[0], pack_rgb(0, 0, 0));
    // x=3 row 0: value 180, above the window
    assert_eq!(rgb[3], pack_rgb(255, 255, 255));
    // x=1 row 0: value 60, exactly at the minimum
    assert_eq!(rgb[1], pack_rgb(0, 0, 0));
}

#[test]
fn grayscale_mode_drops_channel_colors() {
    let tile = fluorescence_tile();
    let channels: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(DirectChannel::new(
        "CD3",
        0,
        pack_rgb(255, 0, 0),
        SampleFormat::U8,
    ))];

    let rgb = render(&tile, &channels, DisplayMode::Grayscale).unwrap();
    for px in &rgb {
        assert_eq!(red(*px), green(*px));
        assert_eq!(green(*px), blue(*px));
    }
    // value 120 at (2, 0) becomes mid-gray
    assert_eq!(rgb[2], pack_rgb(120, 120, 120));
}

#[test]
fn inverted_grayscale_shows_dark_signal_on_white() {
    let tile = fluorescence_tile();
    let channels: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(DirectChannel::new(
        "CD3",
        0,
        pack_rgb(255, 0, 0),
        SampleFormat::U8,
    ))];

    let rgb = render(&tile, &channels, DisplayMode::InvertedGrayscale).unwrap();
    // zero signal at (0, 0) renders as white background
    assert_eq!(rgb[0], pack_rgb(255, 255, 255));
    // value 120 at (2, 0) renders as its complement gray
    assert_eq!(rgb[2], pack_rgb(135, 135, 135));
}

#[test]
fn inverted_color_equals_complement_of_complemented_luts() {
    let tile = fluorescence_tile();
    let channels = fluorescence_channels();
    let inverted = render(&tile, &channels, DisplayMode::InvertedColor).unwrap();

    for y in 0..4u32 {
        for x in 0..4u32 {
            let mut merged = pack_rgb(0, 0, 0);
            for ch in &channels {
                let contribution = ch
                    .pixel_rgb(&tile, x, y, DisplayMode::InvertedColor)
                    .unwrap();
                merged = merge_additive(merged, contribution);
            }
            assert_eq!(inverted[(y * 4 + x) as usize], invert_rgb(merged));
        }
    }
}

#[test]
fn sixteen_bit_channel_uses_wide_window() {
    let tile = PixelBuffer::from_u16(2, 1, 1, vec![0, 32768]).unwrap();
    let channels: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(DirectChannel::new(
        "CD8",
        0,
        pack_rgb(0, 255, 0),
        SampleFormat::U16,
    ))];

    let rgb = render(&tile, &channels, DisplayMode::Color).unwrap();
    assert_eq!(rgb[0], pack_rgb(0, 0, 0));
    // 32768 / 65535 of full green
    assert_eq!(rgb[1], pack_rgb(0, 128, 0));
}

#[test]
fn deconvolved_channels_composite_like_raw_stains() {
    // H&E brightfield tile: one white pixel, one pixel of roughly unit
    // hematoxylin (transmission 255 * 10^-od per component)
    let tile = PixelBuffer::from_u8(2, 1, 3, vec![255, 255, 255, 57, 51, 131]).unwrap();
    let stains = StainVectors::h_e().unwrap();

    let hematoxylin = TransformChannel::new(
        "Hematoxylin",
        ColorTransform::StainDeconvolution { stains, stain: 0 },
        Some(pack_rgb(70, 70, 255)),
        SampleFormat::U8,
    );
    let eosin = TransformChannel::new(
        "Eosin",
        ColorTransform::StainDeconvolution { stains, stain: 1 },
        Some(pack_rgb(255, 80, 150)),
        SampleFormat::U8,
    );
    let channels: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(hematoxylin), Box::new(eosin)];

    let rgb = render(&tile, &channels, DisplayMode::Color).unwrap();
    // white carries no stain: both concentrations are 0
    assert_eq!(rgb[0], pack_rgb(0, 0, 0));
    // the stained pixel must light up
    assert_ne!(rgb[1], pack_rgb(0, 0, 0));
}

#[test]
fn settings_round_trip_through_json() {
    let mut ch = DirectChannel::new("CD3", 0, pack_rgb(255, 0, 0), SampleFormat::U16);
    ch.set_min_display(1000.0);
    ch.set_max_display(20000.0);

    let settings = DisplaySettings::capture([&ch as &dyn ChannelDisplay]);
    let json = serde_json::to_string_pretty(&settings).unwrap();
    let restored: DisplaySettings = serde_json::from_str(&json).unwrap();

    let mut fresh = DirectChannel::new("CD3", 0, pack_rgb(255, 0, 0), SampleFormat::U16);
    assert_eq!(
        restored.apply_matching([&mut fresh as &mut dyn ModifiableChannelDisplay]),
        1
    );
    assert_eq!(fresh.min_display(), 1000.0);
    assert_eq!(fresh.max_display(), 20000.0);

    let rendered_before = {
        let tile = PixelBuffer::from_u16(1, 1, 1, vec![10500]).unwrap();
        let chs: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(ch)];
        render(&tile, &chs, DisplayMode::Color).unwrap()
    };
    let rendered_after = {
        let tile = PixelBuffer::from_u16(1, 1, 1, vec![10500]).unwrap();
        let chs: Vec<Box<dyn ChannelDisplay>> = vec![Box::new(fresh)];
        render(&tile, &chs, DisplayMode::Color).unwrap()
    };
    assert_eq!(rendered_before, rendered_after);
}

#[test]
fn value_strings_for_inspection() {
    let tile = PixelBuffer::from_u8(1, 1, 3, vec![200, 100, 50]).unwrap();
    let truecolor = TrueColorChannel::new("Original", SampleFormat::U8);
    assert_eq!(truecolor.value_string(&tile, 0, 0).unwrap(), "200, 100, 50");

    let od = TransformChannel::new(
        "OD sum",
        ColorTransform::OpticalDensitySum,
        None,
        SampleFormat::U8,
    );
    let text = od.value_string(&tile, 0, 0).unwrap();
    assert!(text.parse::<f32>().is_ok(), "scalar string: {text}");
}
