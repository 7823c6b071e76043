use crate::crypto;
use crate::error::PixelveilError;
use crate::result::Result;

/// payload terminator, appended behind the message text
const TERMINATOR: u8 = 0x00;

/// A secret text message that can be hidden inside a carrier.
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

impl Message {
    /// Creates a new message with the given text.
    ///
    /// Empty messages are rejected: an empty decode result is reserved as
    /// the wrong-password signal, so there is nothing it could round-trip to.
    pub fn new<S: Into<String>>(text: S) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(PixelveilError::EmptyMessage);
        }

        Ok(Self { text })
    }

    /// Serializes the message into the masked payload that goes onto the
    /// carrier: UTF-8 text, one terminator byte, XORed with the keystream
    /// derived from `password`.
    ///
    /// A NUL byte inside the message text truncates the message on decode;
    /// the terminator is not escaped.
    pub fn to_raw_data(&self, password: &str) -> Vec<u8> {
        let key = crypto::derive_key(password);
        let mut payload = self.text.as_bytes().to_vec();
        payload.push(TERMINATOR);

        crypto::mask(&payload, &key)
    }

    /// Deserializes a message from a masked payload.
    ///
    /// The payload is unmasked, cut at the first terminator byte and decoded
    /// as UTF-8. A wrong password surfaces as
    /// [`PixelveilError::InvalidTextData`], as
    /// [`PixelveilError::NoMessageOrWrongPassword`], or as garbage text.
    pub fn from_raw_data(data: &[u8], password: &str) -> Result<Self> {
        let key = crypto::derive_key(password);
        let payload = crypto::mask(data, &key);

        let text = match payload.iter().position(|byte| *byte == TERMINATOR) {
            Some(end) => &payload[..end],
            None => &payload[..],
        };
        let text = String::from_utf8(text.to_vec())?;
        if text.is_empty() {
            return Err(PixelveilError::NoMessageOrWrongPassword);
        }

        Ok(Self { text })
    }
}
