use eddsa::{Signature, SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"hello eddsa";
    let sig = sk.sign(msg);
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(msg, &sig2));
    assert_eq!(sk2.sign(msg), sig);

    let wire = sig.to_bytes();
    match vk.verify_encoded(b"tampered", &wire[..32], &wire[32..]) {
        Ok(()) => println!("unexpected success"),
        Err(err) => println!("rejected: {err}"),
    }
}
