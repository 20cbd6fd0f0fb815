//! Uniform dispatch over the classical ciphers.
//!
//! Every cipher is described by a static [`CipherSpec`] carrying its parameter
//! schema and defaults. Callers go through [`encode`] and [`decode`] with a
//! [`CipherId`] and a [`Params`] map; omitted parameters take the schema
//! defaults and unknown names are rejected.
//!
//! Only the homophonic cipher draws randomness. [`encode`] seeds it from the
//! `seed` parameter when present, otherwise from OS entropy;
//! [`encode_with_rng`] takes the generator from the caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher_id;
mod descriptor;
mod params;
mod table;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub use classic_core::CipherError;

pub use crate::cipher_id::{CipherId, Family};
pub use crate::descriptor::{CipherSpec, ParamDefault, ParamKind, ParamSpec};
pub use crate::params::{ParamValue, Params};
pub use crate::table::RUNNING_KEY_PASSAGE;

/// Returned by [`decode_or_sentinel`] when the ciphertext cannot be decoded.
pub const DECODE_FAILED: &str = "[Decode failed]";

/// Descriptor for `id`. Total over the closed set of identifiers.
pub fn get_cipher(id: CipherId) -> &'static CipherSpec {
    &table::CIPHERS[id.index()]
}

/// All descriptors, in [`CipherId::ALL`] order.
pub fn ciphers() -> &'static [CipherSpec] {
    table::CIPHERS.as_slice()
}

/// Encodes `text`. Randomized ciphers are seeded from the `seed` parameter, or
/// from OS entropy when it is absent.
pub fn encode(id: CipherId, text: &str, params: &Params) -> Result<String, CipherError> {
    let seed = match params.get("seed") {
        Some(value) if get_cipher(id).randomized => {
            let seed = value.as_int("seed")?;
            let seed = u64::try_from(seed).map_err(|_| {
                CipherError::invalid_parameter("seed", format!("{seed} is negative"))
            })?;
            Some(seed)
        }
        _ => None,
    };
    let mut rng = seeded_rng(seed);
    encode_with_rng(id, text, params, &mut rng)
}

/// Encodes `text` drawing any randomness from `rng`.
pub fn encode_with_rng(
    id: CipherId,
    text: &str,
    params: &Params,
    rng: &mut dyn RngCore,
) -> Result<String, CipherError> {
    let spec = get_cipher(id);
    tracing::debug!(cipher = %id, len = text.len(), "encode");
    spec.encode_with_rng(text, params, rng).inspect_err(|err| {
        tracing::debug!(cipher = %id, %err, "encode rejected");
    })
}

/// Decodes `text`.
pub fn decode(id: CipherId, text: &str, params: &Params) -> Result<String, CipherError> {
    let spec = get_cipher(id);
    tracing::debug!(cipher = %id, len = text.len(), "decode");
    spec.decode(text, params).inspect_err(|err| {
        tracing::debug!(cipher = %id, %err, "decode rejected");
    })
}

/// Decodes `text`, mapping malformed ciphertext to [`DECODE_FAILED`].
/// Parameter errors are still returned.
pub fn decode_or_sentinel(
    id: CipherId,
    text: &str,
    params: &Params,
) -> Result<String, CipherError> {
    match decode(id, text, params) {
        Err(err) if err.is_decode_failure() => {
            tracing::warn!(cipher = %id, %err, "decode failed");
            Ok(DECODE_FAILED.to_owned())
        }
        other => other,
    }
}

/// ChaCha20 seeded from `seed` (little-endian into the first eight bytes), or
/// from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
