use once_cell::sync::Lazy;
use openssl::pkey::PKey;
use openssl::rsa::Rsa;

use crate::services::jsonwebtoken::KeyPair;

/// PEM encoded private and public halves, generated once per test binary.
static PEMS: Lazy<(Vec<u8>, Vec<u8>)> = Lazy::new(|| {
    let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

    (
        pkey.private_key_to_pem_pkcs8().unwrap(),
        pkey.public_key_to_pem().unwrap(),
    )
});

pub fn keypair() -> KeyPair {
    KeyPair::from_rsa_pem(&PEMS.0, &PEMS.1).unwrap()
}
