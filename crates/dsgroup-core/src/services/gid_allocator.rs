//! Gid allocation against the directory's current id listing.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dscl::Dscl;
use crate::dscl::parse::parse_gid_listing;
use crate::ports::GroupError;
use crate::settings::ProviderSettings;

/// Command listing every group with its `PrimaryGroupID`.
pub const LIST_GIDS: &str = "list /Groups gid";

/// Finds unused gids and answers "is this gid taken".
///
/// Every call re-reads the listing; nothing is cached between calls.
#[derive(Clone)]
pub struct GidAllocator {
    dscl: Dscl,
    floor: u32,
    search_limit: u32,
}

impl GidAllocator {
    pub fn new(dscl: Dscl, settings: &ProviderSettings) -> Self {
        Self {
            dscl,
            floor: settings.gid_floor,
            search_limit: settings.gid_search_limit,
        }
    }

    /// Gids currently assigned to any group.
    pub fn used_gids(&self) -> Result<BTreeSet<u32>, GroupError> {
        let listing = self.dscl.safe_execute(LIST_GIDS)?;
        Ok(parse_gid_listing(&listing))
    }

    /// First free gid using the configured floor and search limit.
    pub fn free_gid(&self) -> Result<u32, GroupError> {
        self.free_gid_within(self.floor, self.search_limit)
    }

    /// First free gid in `floor ..= floor + search_limit - 1`.
    pub fn free_gid_within(&self, floor: u32, search_limit: u32) -> Result<u32, GroupError> {
        let used = self.used_gids()?;
        let gid = first_free_gid(&used, floor, search_limit)?;
        debug!(gid, floor, search_limit, "found free gid");
        Ok(gid)
    }

    /// Whether `gid` appears in the listing. `None` is never used and does
    /// not query the tool.
    pub fn gid_used(&self, gid: Option<u32>) -> Result<bool, GroupError> {
        let Some(gid) = gid else {
            return Ok(false);
        };
        Ok(self.used_gids()?.contains(&gid))
    }
}

/// Pick the first gid at or above `floor` missing from `used`, trying at most
/// `search_limit` candidates.
pub fn first_free_gid(used: &BTreeSet<u32>, floor: u32, search_limit: u32) -> Result<u32, GroupError> {
    (0..search_limit)
        .map_while(|offset| floor.checked_add(offset))
        .find(|candidate| !used.contains(candidate))
        .ok_or(GroupError::SearchExhausted {
            floor,
            limit: search_limit,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProcessOutput;
    use crate::ports::MockCommandRunnerPort;
    use std::sync::Arc;

    fn allocator_with_listing(listing: &'static str, calls: usize) -> GidAllocator {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .withf(|line: &str| line == "dscl . -list /Groups gid")
            .times(calls)
            .returning(move |_| Ok(ProcessOutput::ok(listing)));
        let settings = ProviderSettings::default();
        GidAllocator::new(Dscl::new(Arc::new(runner), &settings), &settings)
    }

    #[test]
    fn test_free_gid_runs_list_groups_gid() {
        let allocator = allocator_with_listing("\naj      200\njt      201\n", 1);
        allocator.free_gid().unwrap();
    }

    #[test]
    fn test_free_gid_returns_first_unused_at_or_above_200() {
        let allocator = allocator_with_listing("\naj      200\njt      201\n", 1);
        assert_eq!(allocator.free_gid().unwrap(), 202);
    }

    #[test]
    fn test_free_gid_fails_when_search_limit_exhausted() {
        let allocator = allocator_with_listing("\naj      200\njt      201\n", 1);
        let err = allocator.free_gid_within(200, 1).unwrap_err();
        assert!(err.is_exhaustion());
    }

    #[test]
    fn test_free_gid_ignores_malformed_lines() {
        let allocator = allocator_with_listing("\naj 200\nbroken gid\njt 201\n\n", 1);
        assert_eq!(allocator.free_gid().unwrap(), 202);
    }

    #[test]
    fn test_gid_used_runs_list_groups_gid() {
        let allocator = allocator_with_listing("\naj      500\n", 1);
        allocator.gid_used(Some(500)).unwrap();
    }

    #[test]
    fn test_gid_used_true_for_used_gid() {
        let allocator = allocator_with_listing("\naj      500\n", 1);
        assert!(allocator.gid_used(Some(500)).unwrap());
    }

    #[test]
    fn test_gid_used_false_for_unused_gid() {
        let allocator = allocator_with_listing("\naj      500\n", 1);
        assert!(!allocator.gid_used(Some(501)).unwrap());
    }

    #[test]
    fn test_gid_used_false_without_querying_for_none() {
        let allocator = allocator_with_listing("\naj      500\n", 0);
        assert!(!allocator.gid_used(None).unwrap());
    }

    #[test]
    fn test_first_free_gid_exhausts_full_window() {
        let limit = 5;
        let used: BTreeSet<u32> = (200..200 + limit).collect();
        assert!(matches!(
            first_free_gid(&used, 200, limit),
            Err(GroupError::SearchExhausted { floor: 200, limit: 5 })
        ));
        assert_eq!(first_free_gid(&used, 200, limit + 1).unwrap(), 205);
    }

    #[test]
    fn test_first_free_gid_stops_at_u32_max() {
        let used: BTreeSet<u32> = [u32::MAX].into_iter().collect();
        assert!(first_free_gid(&used, u32::MAX, 10).is_err());
    }
}
