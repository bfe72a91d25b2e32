//! Fumen decoder tests against small hand-built codes.

use fumen_render::core::{ActivePiece, Field};
use fumen_render::fumen::{decode, extract_code, DecodeError};
use fumen_render::types::{PieceKind, Rotation};

#[test]
fn test_single_empty_page() {
    let pages = decode("v115@vhAAgH").unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].field.highest_occupied_row(), None);
    assert!(pages[0].active.is_none());
    assert!(pages[0].comment.is_none());
}

#[test]
fn test_single_block() {
    let pages = decode("v115@bhwhSeAgH").unwrap();
    assert_eq!(pages.len(), 1);
    let field = &pages[0].field;
    assert_eq!(field.at(0, 0), Some(PieceKind::I));
    assert_eq!(field.highest_occupied_row(), Some(0));
    for x in 1..10 {
        assert_eq!(field.at(x, 0), None);
    }
}

#[test]
fn test_active_piece_overlay() {
    let pages = decode("v115@vhAVQJ").unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(
        pages[0].active,
        Some(ActivePiece::new(PieceKind::T, Rotation::Spawn, 4, 0))
    );
    // the overlay is not part of the page's own field
    assert_eq!(pages[0].field.highest_occupied_row(), None);
    assert_eq!(pages[0].highest_occupied_row(), Some(1));
}

#[test]
fn test_locked_piece_appears_on_next_page() {
    let pages = decode("v115@vhAVQJvhAAgH").unwrap();
    assert_eq!(pages.len(), 2);
    let field = &pages[1].field;
    for (x, y) in [(3, 0), (4, 0), (5, 0), (4, 1)] {
        assert_eq!(field.at(x, y), Some(PieceKind::T), "cell ({}, {})", x, y);
    }
    assert!(pages[1].active.is_none());
}

#[test]
fn test_lock_clears_full_rows() {
    let pages = decode("v115@bhI8Ke5IJvhAAgH").unwrap();
    assert_eq!(pages.len(), 2);

    let first = &pages[0];
    for x in 0..9 {
        assert_eq!(first.field.at(x, 0), Some(PieceKind::X));
    }
    assert_eq!(first.field.at(9, 0), None);
    assert_eq!(
        first.active,
        Some(ActivePiece::new(PieceKind::I, Rotation::Left, 9, 1))
    );

    let second = &pages[1].field;
    for x in 0..9 {
        assert_eq!(second.at(x, 0), None);
    }
    for y in 0..3 {
        assert_eq!(second.at(9, y), Some(PieceKind::I), "row {}", y);
    }
    assert_eq!(second.at(9, 3), None);
    assert_eq!(second.highest_occupied_row(), Some(2));
}

#[test]
fn test_mirror_flag_flips_field_after_lock() {
    let pages = decode("v115@bhwhSeAQLvhAAgH").unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].field.at(0, 0), Some(PieceKind::I));
    assert_eq!(pages[1].field.at(9, 0), Some(PieceKind::I));
    assert_eq!(pages[1].field.at(0, 0), None);
}

#[test]
fn test_rise_flag_lifts_field_after_lock() {
    let pages = decode("v115@bhwhSeAYJvhAAgH").unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].field.at(0, 1), Some(PieceKind::I));
    for x in 0..10 {
        assert_eq!(pages[1].field.at(x, 0), None, "row 0, column {}", x);
    }
}

#[test]
fn test_piece_without_lock_is_not_placed() {
    let pages = decode("v115@vhAVQnvhAAgH").unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(
        pages[0].active,
        Some(ActivePiece::new(PieceKind::T, Rotation::Spawn, 4, 0))
    );
    assert_eq!(pages[1].field, Field::new());
}

#[test]
fn test_v110_empty_page() {
    let pages = decode("v110@7eAA4G").unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].field, Field::new());
    assert!(pages[0].active.is_none());
}

#[test]
fn test_v110_field_and_overlay() {
    // 21-row field: the block at (0, 0) is encoded index 200
    let pages = decode("v110@ne8eybA4G").unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].field.at(0, 0), Some(PieceKind::I));
    assert_eq!(pages[0].field.highest_occupied_row(), Some(0));

    let pages = decode("http://harddrop.com/fumen/?v110@7eAVeI7eAA4G").unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(
        pages[0].active,
        Some(ActivePiece::new(PieceKind::T, Rotation::Spawn, 4, 0))
    );
    for (x, y) in [(3, 0), (4, 0), (5, 0), (4, 1)] {
        assert_eq!(pages[1].field.at(x, y), Some(PieceKind::T), "cell ({}, {})", x, y);
    }
}

#[test]
fn test_repeated_unchanged_pages() {
    let pages = decode("v115@vhBAgHAgH").unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], pages[1]);
}

#[test]
fn test_comment() {
    let pages = decode("v115@vhAAgWCAouBAA").unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].comment.as_deref(), Some("hi"));
}

#[test]
fn test_comment_carries_to_following_pages() {
    let pages = decode("v115@vhBAgWCAouBAAAgH").unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].comment.as_deref(), Some("hi"));
}

#[test]
fn test_accepts_links() {
    let bare = decode("v115@vhAVQJ").unwrap();
    let link = decode("https://harddrop.com/fumen/?v115@vhAVQJ").unwrap();
    let with_params = decode("http://fumen.zui.jp/?v115@vh?AVQJ&dummy=1").unwrap();
    assert_eq!(bare, link);
    assert_eq!(bare, with_params);
}

#[test]
fn test_rejects_non_fumen() {
    assert_eq!(decode("hello").unwrap_err(), DecodeError::MissingVersion);
    assert_eq!(decode("v120@vhAAgH").unwrap_err(), DecodeError::MissingVersion);
    assert_eq!(
        decode("v115@vh!A").unwrap_err(),
        DecodeError::InvalidCharacter('!')
    );
    assert_eq!(decode("v115@vh").unwrap_err(), DecodeError::UnexpectedEnd);
}

#[test]
fn test_extract_code_from_text() {
    assert_eq!(
        extract_code("see https://fumen.zui.jp/?v115@vhAAgH for it").as_deref(),
        Some("v115@vhAAgH")
    );
    assert_eq!(extract_code("https://tinyurl.com/abcdef"), None);
}
