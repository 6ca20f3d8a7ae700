use super::*;
use curve::Affine;

const ZERO_DIGEST_TEST: &str = "5de9ff18e7d5cb0a5a84c99dad86674c3ba58c1505585fad81ba2a00a03f5f26";

#[test]
fn test_regression_vector_all_zero() {
    let hasher = PedersenHasher::new(b"test", 64).unwrap();
    let digest = hasher.digest(&[0u8; 64]).unwrap();
    assert_eq!(hex::encode(digest), ZERO_DIGEST_TEST);
}

#[test]
fn test_regression_vector_all_ones() {
    let hasher = PedersenHasher::new(b"test", 64).unwrap();
    let digest = hasher.digest(&[0xffu8; 64]).unwrap();
    assert_eq!(
        hex::encode(digest),
        "433680eaf82b12428f8b2c1fbc207707bfb9f73027c48df0aa1b40d061f9a099"
    );
}

#[test]
fn test_personalization_separates_domains() {
    let test = PedersenHasher::new(b"test", 64).unwrap();
    let other = PedersenHasher::new(b"other", 64).unwrap();
    let digest = other.digest(&[0u8; 64]).unwrap();

    assert_eq!(
        hex::encode(digest),
        "807f71428998c17e92080c1eaa2a9effd1fd6903992b7f8953fc9518965d96aa"
    );
    assert_ne!(digest, test.digest(&[0u8; 64]).unwrap());
}

#[test]
fn test_hash_is_deterministic() {
    let preimage: Vec<u8> = (0..64).collect();
    let a = PedersenHasher::new(b"test", 64).unwrap();
    let b = PedersenHasher::new(b"test", 64).unwrap();
    assert_eq!(
        a.hash_bytes(&preimage).unwrap(),
        b.hash_bytes(&preimage).unwrap()
    );
}

#[test]
fn test_digest_decompresses_to_subgroup_point() {
    let hasher = PedersenHasher::new(b"test", 64).unwrap();
    let digest = hasher.digest(&[7u8; 64]).unwrap();
    let point = Affine::decompress(&digest).unwrap();
    assert_eq!(point, hasher.hash_bytes(&[7u8; 64]).unwrap());
    assert!(point.is_in_prime_subgroup());
}

#[test]
fn test_single_bit_flip_changes_digest() {
    let hasher = PedersenHasher::new(b"test", 64).unwrap();
    let base = hasher.digest(&[0u8; 64]).unwrap();
    for byte in [0usize, 31, 63] {
        let mut preimage = [0u8; 64];
        preimage[byte] = 0x01;
        assert_ne!(hasher.digest(&preimage).unwrap(), base, "byte {byte}");
    }
}

#[test]
fn test_batch_matches_individual_hashes() {
    let params = PedersenParams::default();
    let hasher = PedersenHasher::from_params(&params).unwrap();
    let preimages = vec![vec![0u8; 64], vec![1u8; 64], vec![0xffu8; 64]];

    let batch = hasher.hash_batch(&preimages).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(hex::encode(batch[0]), ZERO_DIGEST_TEST);
    for (digest, preimage) in batch.iter().zip(&preimages) {
        assert_eq!(*digest, hasher.digest(preimage).unwrap());
    }

    let bad = vec![vec![0u8; 64], vec![0u8; 63]];
    assert!(matches!(
        hasher.hash_batch(&bad),
        Err(PedersenError::LengthMismatch { .. })
    ));
}

#[test]
fn test_shared_across_threads() {
    let hasher = PedersenHasher::new(b"test", 64).unwrap();
    let digests: Vec<[u8; DIGEST_SIZE]> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let hasher = &hasher;
                scope.spawn(move || hasher.digest(&[i; 64]).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(hex::encode(digests[0]), ZERO_DIGEST_TEST);
    for (i, digest) in digests.iter().enumerate() {
        assert_eq!(*digest, hasher.digest(&[i as u8; 64]).unwrap());
    }
}

#[test]
fn test_generator_count_spans_segments() {
    let hasher = PedersenHasher::new(b"test", 64).unwrap();
    // 512 bits -> 171 windows -> 3 segments
    assert_eq!(hasher.generators().count(), 171);
    assert_eq!(hasher.bit_length(), 512);
    assert_eq!(hasher.personalization(), b"test");

    let bases: Vec<_> = hasher.generators().step_by(WINDOWS_PER_SEGMENT).collect();
    assert_eq!(bases.len(), 3);
    for (i, base) in bases.iter().enumerate() {
        assert_eq!(*base, segment_basepoint(b"test", i).unwrap());
    }
}

#[test]
fn test_long_personalization_is_configuration_error() {
    let name = [b'p'; MAX_PERSONALIZATION_LEN + 1];
    assert!(matches!(
        PedersenHasher::new(&name, 64),
        Err(PedersenError::Configuration(_))
    ));
}
