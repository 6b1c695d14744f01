use crate::core::MotorPair;
use crate::errors::{Error, Result};

/// Decode the motor pair encoded in a root identifier.
///
/// `MC4_MotorA_MC4_MotorB` yields prefix `MC4`, motors `MotorA` and `MotorB`.
/// The prefix must reappear after at least one motor token and be followed by
/// at least one more token; motor names may themselves contain `_`.
pub fn decode_root(root: &str) -> Result<MotorPair> {
    let tokens: Vec<&str> = root.split('_').collect();
    if tokens.len() < 4 {
        return Err(Error::malformed_root(root));
    }

    let prefix = tokens[0];
    let repeat = tokens
        .iter()
        .skip(1)
        .position(|token| *token == prefix)
        .map(|offset| offset + 1);

    match repeat {
        Some(i) if i > 1 && i < tokens.len() - 1 => Ok(MotorPair {
            prefix: prefix.to_string(),
            motor_a: tokens[1..i].join("_"),
            motor_b: tokens[i + 1..].join("_"),
        }),
        _ => Err(Error::malformed_root(root)),
    }
}
