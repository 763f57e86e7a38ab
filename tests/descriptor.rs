mod common;

use common::synthetic_image::checkerboard_u8;
use hog_descriptor::image::ImageU8;
use hog_descriptor::synth::sine_image;
use hog_descriptor::{BlockNorm, HogExtractor, HogParams, InvalidParams};

fn params(
    orientations: usize,
    cell: (usize, usize),
    block: (usize, usize),
    norm: BlockNorm,
) -> HogParams {
    HogParams {
        orientations,
        pixels_per_cell: cell,
        cells_per_block: block,
        block_norm: norm,
        ..Default::default()
    }
}

#[test]
fn single_block_l1_descriptor_has_36_values() {
    let image = sine_image(8, 8).unwrap();
    let extractor = HogExtractor::new(params(9, (4, 4), (2, 2), BlockNorm::L1)).unwrap();
    let features = extractor.extract(&image).unwrap();

    assert_eq!(features.descriptor.len(), 36);
    assert_eq!(extractor.descriptor_len(8, 8), 36);

    // L1 normalization over one block: values sum to just under 1.
    let sum: f32 = features.descriptor.iter().sum();
    assert!(
        (sum - 1.0).abs() < 1e-2,
        "L1 block should sum to ~1, got {sum}"
    );
    assert!(features.descriptor.iter().all(|v| *v >= 0.0 && v.is_finite()));
}

#[test]
fn extraction_is_bit_identical_across_runs() {
    let image = sine_image(32, 24).unwrap();
    let extractor = HogExtractor::new(params(9, (8, 8), (2, 2), BlockNorm::L2)).unwrap();

    let first = extractor.extract(&image).unwrap().descriptor;
    let second = extractor.extract(&image).unwrap().descriptor;
    assert_eq!(first, second);
}

#[test]
fn non_divisible_image_truncates_without_error() {
    // 10x7 with 4x4 cells: 2x1 cell grid, remainder pixels ignored.
    let image = sine_image(10, 7).unwrap();
    let extractor = HogExtractor::new(params(9, (4, 4), (2, 1), BlockNorm::L1)).unwrap();
    let geom = extractor.geometry(10, 7);
    assert_eq!((geom.cells_x, geom.cells_y), (2, 1));
    assert_eq!((geom.blocks_x, geom.blocks_y), (1, 1));

    let features = extractor.extract(&image).unwrap();
    assert_eq!(features.descriptor.len(), 1 * 1 * 2 * 1 * 9);
}

#[test]
fn oversized_block_yields_empty_descriptor() {
    // 2x2 cells cannot host a 3x3 block; that is a valid empty result.
    let image = sine_image(8, 8).unwrap();
    let extractor = HogExtractor::new(params(9, (4, 4), (3, 3), BlockNorm::L1)).unwrap();
    let features = extractor.extract(&image).unwrap();
    assert!(features.descriptor.is_empty());
}

#[test]
fn l2_blocks_have_unit_norm() {
    let image = sine_image(16, 16).unwrap();
    for norm in [BlockNorm::L2, BlockNorm::L2Hys] {
        let extractor = HogExtractor::new(params(9, (4, 4), (2, 2), norm)).unwrap();
        let geom = extractor.geometry(16, 16);
        let features = extractor.extract(&image).unwrap();
        assert_eq!(features.descriptor.len(), geom.descriptor_len());

        for (i, block) in features.descriptor.chunks(geom.block_len()).enumerate() {
            let l2: f32 = block.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!(
                (l2 - 1.0).abs() < 1e-3,
                "{:?} block {i} has norm {l2}",
                norm
            );
        }
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(matches!(
        HogExtractor::new(params(0, (4, 4), (2, 2), BlockNorm::L1)),
        Err(InvalidParams::NonPositiveOrientations)
    ));
    assert!(matches!(
        HogExtractor::new(params(9, (0, 4), (2, 2), BlockNorm::L1)),
        Err(InvalidParams::NonPositiveCellSize { x: 0, y: 4 })
    ));
    assert!(matches!(
        "bogus".parse::<BlockNorm>(),
        Err(InvalidParams::UnknownBlockNorm { .. })
    ));
}

#[test]
fn checkerboard_u8_extraction() {
    let width = 64usize;
    let height = 48usize;
    let buffer = checkerboard_u8(width, height, 8);
    let view = ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: &buffer,
    };

    let extractor = HogExtractor::new(params(9, (8, 8), (2, 2), BlockNorm::L2)).unwrap();
    let features = extractor.extract_u8(view).unwrap();

    assert_eq!(features.descriptor.len(), extractor.descriptor_len(width, height));
    assert!(features.descriptor.iter().all(|v| v.is_finite()));
    // Checkerboard edges produce strong gradients somewhere.
    assert!(features.descriptor.iter().any(|v| *v > 0.0));
}

#[test]
fn uniform_image_yields_zero_descriptor() {
    // No gradients anywhere: every block is all-zero and must normalize to
    // zeros, not NaN.
    let image = hog_descriptor::image::ImageF32::from_vec(16, 16, vec![0.5; 256]);
    for norm in [
        BlockNorm::L1,
        BlockNorm::L1Sqrt,
        BlockNorm::L2,
        BlockNorm::L2Hys,
    ] {
        let extractor = HogExtractor::new(params(9, (4, 4), (2, 2), norm)).unwrap();
        let features = extractor.extract(&image).unwrap();
        assert!(
            features.descriptor.iter().all(|v| *v == 0.0),
            "{norm:?} produced non-zero values"
        );
    }
}

#[test]
fn visualization_matches_image_shape() {
    let image = sine_image(24, 16).unwrap();
    let extractor = HogExtractor::new(params(9, (8, 8), (2, 2), BlockNorm::L1)).unwrap();

    let plain = extractor.extract(&image).unwrap();
    assert!(plain.visualization.is_none());

    let features = extractor.extract_with_visualization(&image).unwrap();
    let vis = features.visualization.expect("visualization requested");
    assert_eq!(vis.w, 24);
    assert_eq!(vis.h, 16);
    assert!(vis.data.iter().all(|v| (0.0..=1.0).contains(v)));
    assert!(vis.data.iter().any(|v| *v > 0.0));
}

#[test]
fn signed_mode_keeps_length_and_changes_values() {
    let image = sine_image(16, 16).unwrap();
    let unsigned = HogExtractor::new(params(9, (4, 4), (2, 2), BlockNorm::L2)).unwrap();
    let signed = HogExtractor::new(HogParams {
        signed: true,
        ..params(9, (4, 4), (2, 2), BlockNorm::L2)
    })
    .unwrap();

    let a = unsigned.extract(&image).unwrap().descriptor;
    let b = signed.extract(&image).unwrap().descriptor;
    assert_eq!(a.len(), b.len());
    assert!(a.iter().zip(&b).any(|(x, y)| (x - y).abs() > 1e-6));
}
