//! Tests for palette index clamping and shade resolution.

#[cfg(test)]
mod tests {
    use crate::palette::{family, resolve_shade, PALETTE};

    #[test]
    fn test_negative_index_clamps_to_first() {
        assert_eq!(family(-5).name, "red");
        assert_eq!(family(-5).shade(-5), family(0).shades[0]);
    }

    #[test]
    fn test_oversized_index_clamps_to_last() {
        assert_eq!(family(999).name, "pink");
        assert_eq!(family(7).shade(999), PALETTE[7].shades[6]);
    }

    #[test]
    fn test_in_range_indices_resolve_directly() {
        assert_eq!(family(5).name, "blue");
        assert_eq!(family(5).shade(2), "#1976D2");
    }

    #[test]
    fn test_resolve_shade_requires_both_indices() {
        assert_eq!(resolve_shade(Some(0), None), None);
        assert_eq!(resolve_shade(None, Some(0)), None);
        assert_eq!(resolve_shade(Some(3), Some(0)), Some("#1B5E20"));
    }
}
