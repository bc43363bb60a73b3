use cryptal_sha512::{BLOCK_SIZE, DefaultBackend, Sha512Backend, Sha512Error, Sha512State, sha512};

/// Hashes `input` through any backend using only the shared contract.
fn hash_with<B: Sha512Backend>(input: &[u8]) -> B {
    let mut state = B::init();

    let split = input.len() - input.len() % BLOCK_SIZE;
    state.update_blocks(&input[..split]).unwrap();
    state.finalize(&input[split..], input.len() as u64).unwrap();

    state
}

fn check_contract<B: Sha512Backend>() {
    for len in [0, 3, 111, 112, 128, 129, 200, 240, 513] {
        let input: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let state = hash_with::<B>(&input);

        assert_eq!(state.digest().unwrap(), sha512(&input), "length {len}");
        assert_eq!(
            state.get_digest_slice(16, 16).unwrap(),
            sha512(&input)[16..32]
        );
    }

    let mut state = B::init();
    assert_eq!(state.get_digest_slice(0, 1), Err(Sha512Error::NotFinalized));
    assert!(state.finalize(b"xy", 1).is_err());

    state.finish(b"xy").unwrap();
    assert_eq!(
        state.compress_block(&[0u8; BLOCK_SIZE]),
        Err(Sha512Error::AlreadyFinalized)
    );
    assert_eq!(
        state.get_digest_slice(60, 10),
        Err(Sha512Error::OutOfRange { offset: 60, len: 10 })
    );
}

#[test]
fn portable_backend_honours_contract() {
    check_contract::<Sha512State>();
}

#[test]
fn default_backend_honours_contract() {
    check_contract::<DefaultBackend>();
}

#[cfg(feature = "sha2-backend")]
#[test]
fn sha2_backend_matches_portable_backend() {
    use cryptal_sha512::Sha2Backend;

    check_contract::<Sha2Backend>();

    let input = vec![0x61u8; 200];
    let portable = hash_with::<Sha512State>(&input);
    let delegated = hash_with::<Sha2Backend>(&input);

    for offset in [0u32, 7, 31, 63] {
        assert_eq!(
            portable.get_digest_slice(offset, 1),
            delegated.get_digest_slice(offset, 1)
        );
    }
}
