//! Fumen decoder for v115 and v110 codes.
//!
//! A fumen is a chain of pages. Each page stores its field as a run-length
//! delta against the previous page, then one action word describing the
//! active piece and page flags, then an optional comment.
//!
//! v115 encodes all 23 visible rows; the older v110 encodes only the bottom 21.
//! Both are decoded into the same 23-row [`Field`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::comment::read_comment;
use crate::core::{center_from_anchor, ActivePiece, Field, Page};
use crate::error::DecodeError;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, GARBAGE_ROWS};
use crate::values::Values;

/// Encoding revision, which fixes how many rows a page's field data covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V115,
    V110,
}

impl Version {
    fn parse(digits: &str) -> Result<Self, DecodeError> {
        match digits {
            "115" => Ok(Version::V115),
            "110" => Ok(Version::V110),
            other => Err(DecodeError::UnsupportedVersion(other.to_string())),
        }
    }

    /// Visible rows present in the encoded field
    fn field_top(self) -> u32 {
        match self {
            Version::V115 => BOARD_HEIGHT as u32,
            Version::V110 => 21,
        }
    }

    /// Cells in one encoded field, garbage row included
    fn field_blocks(self) -> u32 {
        (self.field_top() + GARBAGE_ROWS as u32) * BOARD_WIDTH as u32
    }

    /// Block-delta value meaning "no change" (diff 0 for every cell)
    fn unchanged_field(self) -> u32 {
        8 * self.field_blocks() + (self.field_blocks() - 1)
    }

    /// Board cell of the `index`-th encoded block, counted from the top-left
    fn cell(self, index: u32) -> (i8, i8) {
        let x = (index % BOARD_WIDTH as u32) as i8;
        let y = self.field_top() as i8 - (index / BOARD_WIDTH as u32) as i8 - 1;
        (x, y)
    }
}

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[vmd](115|110)@").expect("static regex"));

/// Flags and piece carried by each page's action word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Action {
    piece: Option<ActivePiece>,
    rise: bool,
    mirror: bool,
    comment: bool,
    lock: bool,
}

impl Action {
    fn decode(value: u32, version: Version) -> Self {
        let mut v = value;
        let kind = PieceKind::from_block_number((v % 8) as u8);
        v /= 8;
        let rotation = match v % 4 {
            0 => Rotation::Reverse,
            1 => Rotation::Right,
            2 => Rotation::Spawn,
            _ => Rotation::Left,
        };
        v /= 4;
        let (anchor_x, anchor_y) = version.cell(v % version.field_blocks());
        v /= version.field_blocks();

        let piece = kind.map(|kind| {
            let (x, y) = center_from_anchor(kind, rotation, anchor_x, anchor_y);
            ActivePiece::new(kind, rotation, x, y)
        });

        let mut flag = || {
            let set = v % 2 == 1;
            v /= 2;
            set
        };
        let rise = flag();
        let mirror = flag();
        // colorize only affects editors
        flag();
        let comment = flag();
        let lock = !flag();

        Self {
            piece,
            rise,
            mirror,
            comment,
            lock,
        }
    }
}

/// Locate the payload inside `input` and report its version.
///
/// Accepts bare codes as well as URLs; anything after `&` is a URL parameter and
/// is dropped, as are `?` and whitespace inside the data.
pub fn extract_data(input: &str) -> Result<(Version, String), DecodeError> {
    let input = input.split('&').next().unwrap_or_default();
    let found = VERSION_RE
        .captures(input)
        .ok_or(DecodeError::MissingVersion)?;
    let version = Version::parse(&found[1])?;
    let start = found.get(0).map_or(0, |m| m.end());
    let data = input[start..]
        .chars()
        .filter(|ch| *ch != '?' && !ch.is_whitespace())
        .collect();
    Ok((version, data))
}

/// Apply one run-length delta block to `field`.
///
/// Returns false when the data said "unchanged".
fn update_field(
    values: &mut Values,
    field: &mut Field,
    version: Version,
) -> Result<bool, DecodeError> {
    let blocks = version.field_blocks();
    let mut changed = true;
    let mut index = 0u32;
    while index < blocks {
        let run = values.poll(2)?;
        if run == version.unchanged_field() {
            changed = false;
        }
        let diff = (run / blocks) as i32 - 8;
        let count = run % blocks + 1;
        for _ in 0..count {
            if index >= blocks {
                break;
            }
            let (x, y) = version.cell(index);
            if diff != 0 {
                let current = field.at(x, y).map_or(0, |kind| kind.block_number() as i32);
                let next = current + diff;
                let cell = match next {
                    0 => None,
                    1..=8 => PieceKind::from_block_number(next as u8),
                    _ => return Err(DecodeError::InvalidBlock { x, y, value: next }),
                };
                field.set(x, y, cell);
            }
            index += 1;
        }
    }
    Ok(changed)
}

/// Decode every page of a v115 or v110 fumen.
///
/// The returned pages hold the field as shown (before the page's piece locks)
/// plus the active-piece overlay. A page without its own comment repeats the
/// previous one.
///
/// # Examples
///
/// ```
/// let pages = fumen_render_fumen::decode("v115@vhAAgH").unwrap();
/// assert_eq!(pages.len(), 1);
/// assert!(pages[0].active.is_none());
/// ```
pub fn decode(input: &str) -> Result<Vec<Page>, DecodeError> {
    let (version, data) = extract_data(input)?;
    let mut values = Values::parse(&data)?;

    let mut pages = Vec::new();
    let mut field = Field::new();
    let mut repeat = 0u32;
    let mut comment: Option<String> = None;

    while !values.is_empty() {
        if repeat > 0 {
            repeat -= 1;
        } else if !update_field(&mut values, &mut field, version)? {
            repeat = values.poll(1)?;
        }

        let action = Action::decode(values.poll(3)?, version);
        if action.comment {
            comment = Some(read_comment(&mut values)?);
        }

        pages.push(Page {
            field: field.clone(),
            active: action.piece,
            comment: comment.clone(),
        });

        if action.lock {
            if let Some(piece) = action.piece.filter(|p| p.kind.is_mino()) {
                field.place(&piece.cells(), piece.kind);
            }
            field.clear_full_rows();
            if action.rise {
                field.rise_garbage();
            }
            if action.mirror {
                field.mirror();
            }
        }
    }

    debug!(pages = pages.len(), ?version, "decoded fumen");
    Ok(pages)
}
