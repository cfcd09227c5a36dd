//! End-to-end tests for the block-sorting transforms.

use oxibwt::{
    BlockCodec, BlockSize, Bwt, CircularSuffixArray, MoveToFront, OxiBwtError, Pipeline,
    SortConfig, bwt, mtf,
};

fn generate_random(size: usize, seed: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut x = seed;
    for _ in 0..size {
        x = x.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((x >> 16) as u8);
    }
    data
}

fn generate_dna(size: usize, seed: u32) -> Vec<u8> {
    generate_random(size, seed)
        .into_iter()
        .map(|b| b"ACGT"[(b & 3) as usize])
        .collect()
}

fn rotation_cmp(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    let n = text.len();
    (0..n)
        .map(|d| text[(a + d) % n].cmp(&text[(b + d) % n]))
        .find(|o| o.is_ne())
        .unwrap_or(std::cmp::Ordering::Equal)
}

#[test]
fn test_abracadabra_scenario() {
    let text = b"ABRACADABRA!";
    let block = bwt::transform(text);
    assert_eq!(block.len(), 12);
    assert_eq!(block.first, 3);
    assert_eq!(
        bwt::inverse_transform(&block.column, block.first).expect("inverse failed"),
        text
    );
}

#[test]
fn test_mtf_scenario() {
    let symbols = b"CAAABCCCACCF";
    let ranks = mtf::encode(symbols);
    assert_eq!(ranks.len(), symbols.len());
    assert_eq!(mtf::decode(&ranks), symbols);
}

#[test]
fn test_suffix_order_and_permutation() {
    for (len, seed) in [(1, 1), (2, 2), (17, 3), (100, 4), (513, 5)] {
        for text in [generate_random(len, seed), generate_dna(len, seed)] {
            for config in [SortConfig::default(), SortConfig::QUICK, SortConfig::LSD] {
                let csa = CircularSuffixArray::with_config(&text, &config);
                assert_eq!(csa.len(), text.len());

                let mut offsets: Vec<usize> = (0..csa.len())
                    .map(|i| csa.index(i).expect("index in range"))
                    .collect();
                for pair in offsets.windows(2) {
                    assert!(rotation_cmp(&text, pair[0], pair[1]).is_le());
                }

                offsets.sort_unstable();
                assert_eq!(offsets, (0..text.len()).collect::<Vec<_>>());
                assert!(csa.index(text.len()).is_err());
            }
        }
    }
}

#[test]
fn test_bwt_roundtrip_random() {
    for len in [0, 1, 2, 3, 10, 255, 1000, 4096] {
        let data = generate_random(len, len as u32 + 7);
        let block = bwt::transform(&data);
        assert_eq!(block.column.len(), data.len());
        assert_eq!(block.inverse().expect("inverse failed"), data, "len={}", len);
    }
}

#[test]
fn test_bwt_roundtrip_repetitive() {
    let cases: Vec<Vec<u8>> = vec![
        vec![b'a'; 500],
        b"ab".repeat(300),
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".repeat(20),
        vec![0u8; 1],
        vec![0u8, 255, 0, 255],
    ];

    for data in cases {
        for config in [SortConfig::default(), SortConfig::QUICK, SortConfig::LSD] {
            let codec = Bwt::with_config(config);
            assert_eq!(codec.roundtrip(&data).expect("roundtrip failed"), data);
        }
    }
}

#[test]
fn test_bwt_then_mtf_clusters_zeros() {
    let data = b"the quick brown fox jumps over the lazy dog. ".repeat(40);
    let ranks = mtf::encode(&bwt::transform(&data).column);
    let zeros = ranks.iter().filter(|&&r| r == 0).count();
    assert!(zeros > data.len() / 2, "only {} zeros", zeros);
}

#[test]
fn test_mtf_roundtrip_all_bytes() {
    let data: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
    let ranks = mtf::encode(&data);
    assert_eq!(ranks.len(), data.len());
    assert_eq!(mtf::decode(&ranks), data);

    let codec = MoveToFront::default();
    assert_eq!(codec.roundtrip(&data).expect("roundtrip failed"), data);
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        bwt::inverse_transform(b"ARD!RCAAAABB", 12),
        Err(OxiBwtError::InvalidPrimaryIndex { first: 12, len: 12 })
    ));

    let codec = MoveToFront::with_alphabet(b"ACGT").expect("valid alphabet");
    assert!(matches!(
        codec.decode(&[0, 1, 4]),
        Err(OxiBwtError::RankOutOfRange { rank: 4, .. })
    ));
}

#[test]
fn test_pipeline_roundtrip() {
    let pipeline = Pipeline::new(BlockSize::MIN);
    let data = generate_dna(150_000, 99);
    let blocks = pipeline.encode(&data).expect("encode failed");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks.iter().map(|b| b.len()).sum::<usize>(), data.len());
    assert_eq!(pipeline.decode(&blocks).expect("decode failed"), data);
}

#[test]
fn test_independent_calls_on_threads() {
    let handles: Vec<_> = (0..4u32)
        .map(|seed| {
            std::thread::spawn(move || {
                let data = generate_random(2000, seed);
                let block = bwt::transform(&data);
                (data, block)
            })
        })
        .collect();

    for handle in handles {
        let (data, block) = handle.join().expect("thread panicked");
        assert_eq!(block.inverse().expect("inverse failed"), data);
    }
}
