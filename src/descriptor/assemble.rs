//! Final flattening of normalized blocks into the feature vector.
use super::normalize::BlockGrid;

/// Flatten the block grid into the descriptor.
///
/// Blocks are already stored in block-grid row-major order with histogram
/// bins innermost, so the descriptor is the grid's backing storage; zero
/// blocks yield an empty vector.
pub fn flatten(blocks: BlockGrid) -> Vec<f32> {
    debug_assert_eq!(
        blocks.data.len(),
        blocks.blocks_y * blocks.blocks_x * blocks.block_len
    );
    blocks.data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_order_is_rows_outer_blocks_inner() {
        let blocks = BlockGrid {
            blocks_x: 2,
            blocks_y: 2,
            block_len: 2,
            data: vec![0.0, 0.1, 1.0, 1.1, 2.0, 2.1, 3.0, 3.1],
        };
        // block (1, 0) is the second pair, block (0, 1) the third.
        assert_eq!(blocks.block(1, 0), &[1.0, 1.1]);
        assert_eq!(blocks.block(0, 1), &[2.0, 2.1]);
        let flat = flatten(blocks);
        assert_eq!(flat, vec![0.0, 0.1, 1.0, 1.1, 2.0, 2.1, 3.0, 3.1]);
    }

    #[test]
    fn empty_grid_flattens_to_empty_descriptor() {
        let blocks = BlockGrid {
            blocks_x: 0,
            blocks_y: 3,
            block_len: 4,
            data: Vec::new(),
        };
        assert!(flatten(blocks).is_empty());
    }
}
