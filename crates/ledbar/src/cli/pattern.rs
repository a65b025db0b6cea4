//! `pattern` subcommand — light LEDs from a bit mask.

use super::{Result, Rig};
use ledbar_lib::LedbarError;

/// Parse a mask string like `1011` into per-LED booleans.
fn parse_bits(bits: &str) -> Result<Vec<bool>> {
    bits.chars()
        .map(|c| match c {
            '1' => Ok(true),
            '0' => Ok(false),
            _ => Err(LedbarError::Pattern(format!(
                "invalid character '{c}' in mask (use 0 and 1)"
            ))),
        })
        .collect()
}

pub(super) fn cmd_pattern(bits: &str, color: Option<&str>) -> Result<()> {
    let mask = parse_bits(bits)?;
    let mut rig = Rig::open()?;
    let color = rig.resolve_color(color)?;
    rig.renderer.set_on_off_pattern(&mask, color)?;
    rig.report();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bits_maps_ones_and_zeroes() {
        assert_eq!(parse_bits("1011").unwrap(), vec![true, false, true, true]);
    }

    #[test]
    fn parse_bits_empty_is_valid() {
        assert!(parse_bits("").unwrap().is_empty());
    }

    #[test]
    fn parse_bits_rejects_other_characters() {
        let err = parse_bits("10x1").unwrap_err();
        assert!(matches!(err, LedbarError::Pattern(_)));
        assert!(err.to_string().contains('x'));
    }
}
