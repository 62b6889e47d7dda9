//! Read a hex-encoded private key on stdin and print the derived identity.

use std::io::{self, Read};

use btckey::{derive, PrivateKey};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let sk = PrivateKey::from_hex(input.trim())?;
    let identity = derive(&sk)?;

    println!("Compressed PubKey: {}", identity.compressed_pubkey);
    println!("WIF: {}", identity.wif);
    println!("Address: {}", identity.address);
    Ok(())
}
