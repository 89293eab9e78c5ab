use lsb_grid::compare::{BoundingBox, bounding_box, diff, equals, highlight};
use lsb_grid::steganography::{clear_low_bits, extract_low_bits, set_low_bits};
use lsb_grid::text::{decode, encode, hide_text, reveal_text};
use lsb_grid::transform::{can_embed, clear_all, embed_low_bits, hide_image, reveal};
use lsb_grid::{Color, PixelGrid, Position, StegoError};
use rand::Rng;

fn random_color(rng: &mut impl Rng) -> Color {
    Color::new(rng.random(), rng.random(), rng.random())
}

fn random_grid(width: usize, height: usize) -> PixelGrid {
    let mut rng = rand::rng();
    PixelGrid::from_fn(width, height, |_| random_color(&mut rng))
}

#[test]
fn clearing_removes_embedded_bits() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let color = random_color(&mut rng);
        let key = random_color(&mut rng);
        assert_eq!(clear_low_bits(set_low_bits(color, key)), clear_low_bits(color));
    }
}

#[test]
fn extraction_recovers_top_bits_of_key() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let color = random_color(&mut rng);
        let key = random_color(&mut rng);
        let expected = key.map(|channel| channel / 64 * 64);
        assert_eq!(extract_low_bits(set_low_bits(color, key)), expected);
    }
}

#[test]
fn clear_all_changes_grid_only_when_low_bits_are_set() {
    let clean = PixelGrid::filled(5, 4, Color::new(252, 8, 100));
    assert!(equals(&clean, &clear_all(&clean)));

    let mut dirty = clean.clone();
    dirty.set(3, 4, Color::new(252, 9, 100));
    assert!(!equals(&dirty, &clear_all(&dirty)));
    assert_eq!(diff(&dirty, &clear_all(&dirty)), vec![Position::new(3, 4)]);
}

#[test]
fn transforms_leave_input_untouched() {
    let grid = random_grid(6, 6);
    let before = grid.clone();

    let _ = clear_all(&grid);
    let _ = embed_low_bits(&grid, Color::new(255, 175, 175));
    let _ = reveal(&grid);
    let _ = hide_image(&grid, &random_grid(3, 3), 1, 1);

    assert_eq!(grid, before);
}

#[test]
fn embedded_constant_color_is_revealed() {
    let tinted = embed_low_bits(&random_grid(7, 3), Color::new(255, 175, 175));
    let revealed = reveal(&tinted);

    assert!(revealed.pixels().iter().all(|&c| c == Color::new(192, 128, 128)));
}

#[test]
fn can_embed_rejects_wider_secret() {
    let base = PixelGrid::new(10, 10);

    assert!(can_embed(&base, &PixelGrid::new(10, 10)));
    assert!(can_embed(&base, &PixelGrid::new(3, 9)));
    assert!(!can_embed(&base, &PixelGrid::new(11, 5)));
    assert!(!can_embed(&base, &PixelGrid::new(5, 11)));
}

#[test]
fn hidden_image_differs_from_base_and_reveals_secret() {
    let base = PixelGrid::filled(12, 12, Color::new(40, 80, 120));
    let secret = random_grid(5, 4);
    let secret = secret.map(|c| c.map(|channel| channel | 0x40));

    let merged = hide_image(&base, &secret, 3, 6);
    let diffs = diff(&merged, &base);

    assert_eq!(diffs.len(), secret.len());
    assert_eq!(
        bounding_box(&diffs),
        Some(BoundingBox {
            top: 3,
            left: 6,
            bottom: 6,
            right: 10
        })
    );

    let revealed = reveal(&merged);
    for (pos, color) in secret.enumerate() {
        assert_eq!(
            revealed.get(pos.row + 3, pos.col + 6),
            Some(color.map(|channel| channel / 64 * 64))
        );
    }
}

#[test]
fn hiding_outside_base_changes_nothing() {
    let base = random_grid(4, 4);
    let merged = hide_image(&base, &random_grid(3, 3), 4, 0);
    assert!(equals(&base, &merged));
}

#[test]
fn text_codec_round_trip() {
    let codes = encode("HELLO WORLD").unwrap();
    assert_eq!(codes.last(), Some(&0));
    assert_eq!(decode(&codes[..codes.len() - 1]).unwrap(), "HELLO WORLD");
}

#[test]
fn secret_message_scenario() {
    let mut grid = random_grid(5, 3);
    hide_text(&mut grid, "SECRET MESSAGE").unwrap();
    assert_eq!(reveal_text(&grid).unwrap(), "SECRET MESSAGE");
}

#[test]
fn hide_text_only_touches_payload_pixels() {
    let original = random_grid(8, 8);
    let mut grid = original.clone();
    hide_text(&mut grid, "hi").unwrap();

    assert!(diff(&grid, &original).iter().all(|pos| pos.row == 0 && pos.col < 3));
    assert!(equals(&clear_all(&grid), &clear_all(&original)));
    assert_eq!(reveal_text(&grid).unwrap(), "HI");
}

#[test]
fn capacity_error_leaves_grid_untouched() {
    let original = random_grid(3, 2);
    let mut grid = original.clone();

    let err = hide_text(&mut grid, "TOOLONG").unwrap_err();

    assert_eq!(
        err,
        StegoError::CapacityExceeded {
            required: 8,
            available: 6
        }
    );
    assert_eq!(grid, original);
}

#[test]
fn invalid_character_leaves_grid_untouched() {
    let original = random_grid(10, 10);
    let mut grid = original.clone();

    assert!(matches!(
        hide_text(&mut grid, "HI!"),
        Err(StegoError::InvalidCharacter {
            character: '!',
            index: 2
        })
    ));
    assert_eq!(grid, original);
}

#[test]
fn reveal_text_without_terminator_decodes_everything() {
    // 每个像素都编码为 'A' (1)，没有结束标记
    let grid = PixelGrid::filled(3, 2, Color::new(1, 0, 0));
    assert_eq!(reveal_text(&grid).unwrap(), "AAAAAA");
}

#[test]
fn reveal_text_on_cleared_grid_is_empty() {
    let grid = clear_all(&random_grid(4, 4));
    assert_eq!(reveal_text(&grid).unwrap(), "");
}

#[test]
fn reveal_text_reports_undecodable_values() {
    let grid = PixelGrid::filled(2, 2, Color::new(3, 3, 3));
    assert_eq!(
        reveal_text(&grid).unwrap_err(),
        StegoError::InvalidCode { value: 63, index: 0 }
    );
}

#[test]
fn diff_of_different_sizes_is_empty() {
    let first = random_grid(4, 5);
    let second = random_grid(5, 4);

    assert!(diff(&first, &second).is_empty());
    assert!(!equals(&first, &second));
}

#[test]
fn bounding_box_spans_all_differences() {
    let diffs = [Position::new(2, 3), Position::new(5, 1), Position::new(4, 8)];

    let bbox = bounding_box(&diffs).unwrap();

    assert_eq!(
        bbox,
        BoundingBox {
            top: 2,
            left: 1,
            bottom: 5,
            right: 8
        }
    );
    assert_eq!((bbox.height(), bbox.width()), (4, 8));
    assert_eq!(bounding_box(&[]), None);
}

#[test]
fn highlight_draws_outline_only() {
    let grid = PixelGrid::new(10, 10);
    let blue = Color::new(0, 0, 255);
    let diffs = [Position::new(2, 3), Position::new(5, 1), Position::new(4, 8)];

    let outlined = highlight(&grid, &diffs, blue);

    let expected = PixelGrid::from_fn(10, 10, |pos| {
        let on_rows = (2..=5).contains(&pos.row) && (pos.col == 1 || pos.col == 8);
        let on_cols = (1..=8).contains(&pos.col) && (pos.row == 2 || pos.row == 5);
        if on_rows || on_cols { blue } else { Color::default() }
    });
    assert_eq!(outlined, expected);
    assert_eq!(highlight(&grid, &[], blue), grid);
}
