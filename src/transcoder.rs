//! Conversion between one shift segment payload and the text it stands for.
//!
//! A payload is the big-endian UTF-16 form of the text, base64-encoded, with `,` written in
//! place of one base64 character (see [`Dialect`]) and without `=` padding.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::codec::Dialect;
use crate::error::{Error, Result};

// Leftover bits in the final symbol are ignored, as most mail clients do.
const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(crate) fn decode_payload(payload: &str, dialect: Dialect) -> Result<String> {
    let mut b64: String = payload
        .chars()
        .map(|c| if c == ',' { dialect.replaced() } else { c })
        .collect();
    while b64.len() % 4 != 0 {
        b64.push('=');
    }

    let bytes = PAYLOAD.decode(b64.as_bytes())?;
    if bytes.len() % 2 != 0 {
        return Err(Error::OddByteLength(bytes.len()));
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::UnpairedSurrogate(e.unpaired_surrogate()))
}

pub(crate) fn encode_payload(run: &str, dialect: Dialect) -> String {
    let bytes: Vec<u8> = run.encode_utf16().flat_map(u16::to_be_bytes).collect();
    let replaced = dialect.replaced();
    STANDARD_NO_PAD
        .encode(bytes)
        .chars()
        .map(|c| if c == replaced { ',' } else { c })
        .collect()
}
