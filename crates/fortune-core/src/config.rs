//! Runtime switches read from the environment.
//!
//! Values are read on every call so a host process can flip them without
//! reloading the module.

pub const DEFAULT_MAX_BATCH: usize = 1000;
pub const MAX_BATCH_CEILING: usize = 100_000;

/// Whether batch analysis fans out over the rayon pool (`FORTUNE_PARALLEL_BATCH`).
pub fn parallel_batch_enabled() -> bool {
    flag_enabled(std::env::var("FORTUNE_PARALLEL_BATCH").ok().as_deref())
}

/// Largest batch accepted by one call (`FORTUNE_MAX_BATCH`).
pub fn max_batch_size() -> usize {
    batch_limit(std::env::var("FORTUNE_MAX_BATCH").ok().as_deref())
}

fn flag_enabled(raw: Option<&str>) -> bool {
    match raw {
        Some(val) => {
            let v = val.trim().to_lowercase();
            !matches!(v.as_str(), "0" | "false" | "no" | "off")
        }
        None => true,
    }
}

fn batch_limit(raw: Option<&str>) -> usize {
    raw.and_then(|val| val.trim().parse::<usize>().ok())
        .map(|n| n.clamp(1, MAX_BATCH_CEILING))
        .unwrap_or(DEFAULT_MAX_BATCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_on() {
        assert!(flag_enabled(None));
        assert!(flag_enabled(Some("yes")));
        assert!(flag_enabled(Some("")));
    }

    #[test]
    fn test_flag_off_values() {
        for raw in ["0", "false", " OFF ", "No"] {
            assert!(!flag_enabled(Some(raw)), "{raw} should disable");
        }
    }

    #[test]
    fn test_batch_limit_parsing() {
        assert_eq!(batch_limit(None), DEFAULT_MAX_BATCH);
        assert_eq!(batch_limit(Some("25")), 25);
        assert_eq!(batch_limit(Some("0")), 1);
        assert_eq!(batch_limit(Some("999999999")), MAX_BATCH_CEILING);
        assert_eq!(batch_limit(Some("lots")), DEFAULT_MAX_BATCH);
    }
}
