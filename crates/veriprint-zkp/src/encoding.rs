//! Base64 wire encoding over the canonical compressed serialization.
//!
//! Proofs and public witnesses cross the JSON boundary as standard base64
//! of their `ark-serialize` compressed bytes. Round-trips are byte-exact.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::ZkpError;

/// Serialize a value compressed and base64-encode the bytes.
pub fn to_base64<T: CanonicalSerialize>(value: &T) -> Result<String, ZkpError> {
    let mut buf = Vec::with_capacity(value.compressed_size());
    value
        .serialize_compressed(&mut buf)
        .map_err(|err| ZkpError::Serialization(err.to_string()))?;
    Ok(BASE64.encode(buf))
}

/// Decode base64 and deserialize the compressed bytes.
pub fn from_base64<T: CanonicalDeserialize>(data: &str) -> Result<T, ZkpError> {
    let bytes = BASE64
        .decode(data)
        .map_err(|err| ZkpError::InvalidInput(format!("invalid base64: {err}")))?;
    T::deserialize_compressed(bytes.as_slice())
        .map_err(|err| ZkpError::InvalidInput(format!("malformed payload: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    #[test]
    fn field_vector_roundtrip() {
        let values = vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)];
        let encoded = to_base64(&values).unwrap();
        let decoded: Vec<Fr> = from_base64(&encoded).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn rejects_non_base64() {
        assert!(from_base64::<Vec<Fr>>("not base64!!!").is_err());
    }

    #[test]
    fn rejects_truncated_payload() {
        let values = vec![Fr::from(7u64)];
        let encoded = to_base64(&values).unwrap();
        let bytes = BASE64.decode(&encoded).unwrap();
        let truncated = BASE64.encode(&bytes[..bytes.len() - 1]);
        assert!(from_base64::<Vec<Fr>>(&truncated).is_err());
    }
}
