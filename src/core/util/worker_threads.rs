use std::num::NonZeroUsize;

#[must_use]
pub fn available_worker_threads() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Explicit worker count if configured, otherwise one per available core.
#[must_use]
pub fn resolve_worker_threads(configured: Option<NonZeroUsize>) -> NonZeroUsize {
    configured.unwrap_or_else(available_worker_threads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_count_wins() {
        let four = NonZeroUsize::new(4).unwrap();

        assert_eq!(resolve_worker_threads(Some(four)), four);
    }

    #[test]
    fn test_default_matches_available_parallelism() {
        let expected = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        assert_eq!(resolve_worker_threads(None).get(), expected);
    }
}
