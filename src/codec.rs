//! Synthetic sample values

use std::fmt;

use crate::Sample;

/// Test value for `channel_id` at `tick`: the id in the top byte, the sample
/// index in the low 24 bits. Neither part is range checked.
pub fn encode_value(channel_id: u32, tick: u32, divisor: u32) -> Sample {
    ((channel_id << 24) | (tick / divisor)) as Sample
}

/// Displays samples as space separated 8 digit hex words
pub struct HexSamples<'a>(pub &'a [Sample]);

impl fmt::Display for HexSamples<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:08x}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_value() {
        assert_eq!(encode_value(0, 0, 1), 0);
        assert_eq!(encode_value(1, 10, 5), 0x0100_0002);
        assert_eq!(encode_value(2, 999, 1), 0x0200_03e7);
        // Ids above 127 land in the sign bit
        assert_eq!(encode_value(0xff, 0, 1) as u32, 0xff00_0000);
    }

    #[test]
    fn test_hex_samples() {
        let samples = [0x0100_0002, 0x0a, -1];
        assert_eq!(
            HexSamples(&samples).to_string(),
            "01000002 0000000a ffffffff"
        );
        assert_eq!(HexSamples(&[]).to_string(), "");
    }
}
