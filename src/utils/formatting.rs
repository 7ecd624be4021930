pub fn display_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

pub fn format_yield(value: f64, unit: &str) -> String {
    format!("{value:.2} {unit}")
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_replaces_every_underscore() {
        assert_eq!(display_key("bacterial_leaf_streak"), "BACTERIAL LEAF STREAK");
        assert_eq!(display_key("healthy"), "HEALTHY");
    }

    #[test]
    fn yield_rounds_to_two_decimals() {
        assert_eq!(format_yield(12.345, "tons/acre"), "12.35 tons/acre");
        assert_eq!(format_yield(3.0, "tons/hectare"), "3.00 tons/hectare");
    }

    #[test]
    fn confidence_is_a_percentage() {
        assert_eq!(format_confidence(0.873), "87.3%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }
}
