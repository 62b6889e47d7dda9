//! The full derivation pipeline: one private key in, the identity triple out.

use crate::error::Result;
use crate::keys::{PrivateKey, PublicKey};

/// Everything derived from one private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Compressed public key as 66 lowercase hex characters.
    pub compressed_pubkey: String,
    /// Wallet Import Format encoding of the private key (mainnet,
    /// compressed-pubkey flavour).
    pub wif: String,
    /// Mainnet P2PKH address.
    pub address: String,
}

/// Run the whole pipeline. Fail-fast: if the public key cannot be derived,
/// nothing is produced.
pub fn derive(sk: &PrivateKey) -> Result<Identity> {
    let pk = PublicKey::from_private_key(sk)?;
    Ok(Identity {
        compressed_pubkey: crate::hex::encode(&pk.compress()),
        wif: sk.to_wif(),
        address: pk.address(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base58;
    use crate::error::Error;

    #[test]
    fn test_known_vector_sk_one() {
        // sk = 1 makes the public key the generator point itself
        let sk = PrivateKey::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        let identity = derive(&sk).unwrap();

        assert_eq!(
            identity.compressed_pubkey,
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            identity.wif,
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
        assert_eq!(identity.address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let sk = PrivateKey::from_hex(
            "3aba4162c7251c891207b747840551a71939b0de081f85c4e44cf7c13e41daa6",
        )
        .unwrap();
        assert_eq!(derive(&sk).unwrap(), derive(&sk).unwrap());
    }

    #[test]
    fn test_output_shapes() {
        let sk = PrivateKey::from_hex(
            "18e14a7b6a307f426a94f8114701e7c8e774e7f9a47e2c2035db29a206321725",
        )
        .unwrap();
        let identity = derive(&sk).unwrap();

        assert_eq!(identity.compressed_pubkey.len(), 66);
        assert!(identity.compressed_pubkey.starts_with("02")
            || identity.compressed_pubkey.starts_with("03"));
        assert_eq!(
            identity.compressed_pubkey,
            identity.compressed_pubkey.to_lowercase()
        );

        // Both Base58Check outputs must carry valid checksums
        assert!(base58::check_decode(&identity.wif).is_ok());
        assert!(base58::check_decode(&identity.address).is_ok());
        assert!(identity.address.starts_with('1'));
    }

    #[test]
    fn test_malformed_input_rejected_before_derivation() {
        // 63 chars
        let truncated = "000000000000000000000000000000000000000000000000000000000000001";
        assert!(matches!(
            PrivateKey::from_hex(truncated),
            Err(Error::InvalidEncoding(_))
        ));

        // right length, bad character
        let bad_char = "000000000000000000000000000000000000000000000000000000000000000g";
        assert!(matches!(
            PrivateKey::from_hex(bad_char),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
