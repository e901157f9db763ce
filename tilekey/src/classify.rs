use crate::error::ClassifyError;
use crate::key::{sample_offsets, SolidityKey, KEY_BITS};
use crate::sheet::{TileSheet, SOLID, TILE_SIZE};
use crate::table::TileIndexTable;

/// A tile dropped because an earlier tile already claimed its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duplicate {
    pub key: SolidityKey,
    /// Index of the dropped tile.
    pub tile: usize,
    /// Index already stored for `key`.
    pub existing: usize,
}

/// Result of classifying a whole sheet.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub table: TileIndexTable,
    /// Collisions in the order they were met.
    pub duplicates: Vec<Duplicate>,
}

/// Compute the solidity key of the tile in `column`.
///
/// Each of the eight sample points is solid only when its pixel equals
/// [`SOLID`] exactly. The sheet must be at least [`TILE_SIZE`] pixels tall
/// and `column` must be below [`TileSheet::columns`].
pub fn sample_tile(sheet: &TileSheet, column: u32) -> SolidityKey {
    let x0 = column * TILE_SIZE;
    let y0 = 0;
    let mut bits = [false; KEY_BITS];
    for (bit, (dx, dy)) in bits.iter_mut().zip(sample_offsets()) {
        *bit = sheet.get(x0 + dx, y0 + dy) == SOLID;
    }
    SolidityKey::from_bits(bits)
}

/// Classify every whole tile in the sheet, left to right.
///
/// The first tile to produce a key owns it; later tiles with the same key are
/// reported in [`Classification::duplicates`] and left out of the table.
pub fn classify(sheet: &TileSheet) -> Result<Classification, ClassifyError> {
    if sheet.height < TILE_SIZE {
        return Err(ClassifyError::UndersizedSheet {
            height: sheet.height,
            tile: TILE_SIZE,
        });
    }

    if sheet.remainder() != 0 {
        log::debug!(
            "sheet width {} is not a multiple of {TILE_SIZE}; ignoring last {} pixel columns",
            sheet.width,
            sheet.remainder()
        );
    }

    let mut out = Classification::default();
    for column in 0..sheet.columns() {
        let key = sample_tile(sheet, column);
        let tile = column as usize;
        log::debug!("tile {tile}: {key}");
        if let Some(existing) = out.table.insert_first(key, tile) {
            out.duplicates.push(Duplicate {
                key,
                tile,
                existing,
            });
        }
    }

    Ok(out)
}
