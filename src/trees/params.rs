/// Depth used by [`TreeParams::new`].
pub const DEFAULT_MAX_DEPTH: u16 = 10;

/// Training configuration, fixed for the duration of a `fit` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeParams {
    pub max_depth: Option<u16>,
    pub stop_when_pure: bool,
    pub parallel: bool,
    pub parallel_subtrees: bool,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    /// Depth-limited tree that also stops on pure nodes and evaluates attributes in parallel.
    pub fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            stop_when_pure: true,
            parallel: true,
            parallel_subtrees: false,
        }
    }

    /// Sequential tree that stops only on depth or when no split has positive gain.
    pub fn depth_only(max_depth: u16) -> Self {
        Self {
            max_depth: Some(max_depth),
            stop_when_pure: false,
            parallel: false,
            parallel_subtrees: false,
        }
    }

    /// Sets the maximum depth. `Some(0)` makes the root a leaf, `None` grows until no split
    /// has positive gain.
    pub fn set_max_depth(&mut self, max_depth: Option<u16>) {
        self.max_depth = max_depth;
    }

    pub fn set_stop_when_pure(&mut self, stop_when_pure: bool) {
        self.stop_when_pure = stop_when_pure;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn set_parallel_subtrees(&mut self, parallel_subtrees: bool) {
        self.parallel_subtrees = parallel_subtrees;
    }

    pub fn max_depth(&self) -> Option<u16> {
        self.max_depth
    }

    pub fn stop_when_pure(&self) -> bool {
        self.stop_when_pure
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn parallel_subtrees(&self) -> bool {
        self.parallel_subtrees
    }

    /// True once `depth` has reached the configured limit.
    pub fn depth_reached(&self, depth: u16) -> bool {
        self.max_depth.is_some_and(|max_depth| depth >= max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = TreeParams::default();
        assert_eq!(params.max_depth(), Some(DEFAULT_MAX_DEPTH));
        assert!(params.stop_when_pure());
        assert!(params.parallel());
        assert!(!params.parallel_subtrees());
    }

    #[test]
    fn test_depth_only_params() {
        let params = TreeParams::depth_only(3);
        assert_eq!(params.max_depth(), Some(3));
        assert!(!params.stop_when_pure());
        assert!(!params.parallel());
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        let mut params = TreeParams::new();
        params.set_max_depth(Some(0));
        assert!(params.depth_reached(0));
    }

    #[test]
    fn test_unlimited_depth() {
        let mut params = TreeParams::depth_only(4);
        params.set_max_depth(None);
        assert_eq!(params.max_depth(), None);
        assert!(!params.depth_reached(u16::MAX));
    }

    #[test]
    fn test_depth_reached() {
        let params = TreeParams::depth_only(2);
        assert!(!params.depth_reached(1));
        assert!(params.depth_reached(2));
    }
}
