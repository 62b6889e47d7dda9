//! Derive a Bitcoin identity from a known private key.
//!
//! Run with: cargo run --example derive

use btckey::{derive, PrivateKey};

fn main() {
    // Mastering Bitcoin Chapter 4 example key
    let sk_hex = "3aba4162c7251c891207b747840551a71939b0de081f85c4e44cf7c13e41daa6";
    let sk = PrivateKey::from_hex(sk_hex).expect("valid key");
    let identity = derive(&sk).expect("derivation");

    println!("=== Bitcoin Key Derivation ===\n");
    println!("Secret Key: {sk_hex}");
    println!("Compressed PubKey: {}", identity.compressed_pubkey);
    println!("WIF: {}", identity.wif);
    println!("Address: {}", identity.address);
    println!("Expected:  14cxpo3MBCYYWCgF74SWTdcmxipnGUsPw3");
}
