/// q15 sample to a float in [-1.0, 1.0).
#[inline]
pub fn q15_to_f32(sample: i16) -> f32 {
    sample as f32 / 32_768.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale() {
        assert_eq!(q15_to_f32(i16::MIN), -1.0);
        assert!(q15_to_f32(i16::MAX) < 1.0);
        assert_eq!(q15_to_f32(0), 0.0);
    }

    #[test]
    fn test_symbol_levels_scale() {
        assert_eq!(q15_to_f32(1893), 1893.0 / 32_768.0);
        assert_eq!(q15_to_f32(-1893), -q15_to_f32(1893));
    }
}
