//! Free-text category normalization.
//!
//! Upstream reports describe livestock classes with loose vocabulary
//! ("Feeder Steers Medium and Large 1", "slaughter cows boning 80-85%").
//! This maps them onto a small display set so records from different
//! reports compare cleanly.

/// Normalize a free-text livestock class to one of a small closed set,
/// passing unrecognized text through unchanged.
///
/// Checks run in a fixed priority order: the compound classes
/// (cow-calf pairs, slaughter cows/bulls) are tested before the generic
/// cow/bull checks so "slaughter bulls" never classifies as plain "Bulls".
/// Idempotent: feeding a normalized value back returns it unchanged.
pub fn normalize_category(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.contains("pair") {
        return "Cow-Calf Pairs".to_string();
    }
    if lower.contains("slaughter") && lower.contains("bull") {
        return "Slaughter Bulls".to_string();
    }
    if lower.contains("slaughter") && lower.contains("cow") {
        return "Slaughter Cows".to_string();
    }
    if lower.contains("steer") {
        return "Steers".to_string();
    }
    if lower.contains("heifer") {
        return "Heifers".to_string();
    }
    if lower.contains("bull") {
        return "Bulls".to_string();
    }
    if lower.contains("cow") {
        return "Cows".to_string();
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "Mixed".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_classes() {
        assert_eq!(normalize_category("Feeder Steers Medium and Large 1"), "Steers");
        assert_eq!(normalize_category("HEIFERS"), "Heifers");
        assert_eq!(normalize_category("replacement cows"), "Cows");
        assert_eq!(normalize_category("herd bulls"), "Bulls");
    }

    #[test]
    fn test_compound_classes_take_priority() {
        // Pair check precedes the generic cow check.
        assert_eq!(normalize_category("Cow-Calf Pairs Medium 1-2"), "Cow-Calf Pairs");
        // Slaughter checks precede the generic bull/cow checks.
        assert_eq!(normalize_category("Slaughter Bulls YG 1-2"), "Slaughter Bulls");
        assert_eq!(
            normalize_category("Slaughter Cows Boning 80-85%"),
            "Slaughter Cows"
        );
    }

    #[test]
    fn test_passthrough_and_empty() {
        assert_eq!(normalize_category("Goats"), "Goats");
        assert_eq!(normalize_category("  "), "Mixed");
    }

    #[test]
    fn test_idempotent() {
        for class in [
            "Steers",
            "Heifers",
            "Cows",
            "Bulls",
            "Cow-Calf Pairs",
            "Slaughter Cows",
            "Slaughter Bulls",
            "Mixed",
        ] {
            assert_eq!(normalize_category(class), class);
            assert_eq!(normalize_category(&normalize_category(class)), class);
        }
    }
}
