// The seeding run itself: a fixed script of 21 sequential calls. The first
// failure aborts the run; whatever was already created stays on the server.

use std::ops::Range;

use indicatif::ProgressBar;
use tracing::info;

use crate::api::ApiClient;
use crate::error::Result;
use crate::transport::JsonTransport;

pub const USER_COUNT: usize = 10;
pub const GROUP_COUNT: usize = 5;

/// Members of group `i` are `user_ids[MEMBERSHIP_RANGES[i]]`.
pub const MEMBERSHIP_RANGES: [Range<usize>; GROUP_COUNT] = [0..3, 1..3, 2..3, 3..8, 4..9];

pub const ALL_GROUPS_FIRST_NAME: &str = "allgroup";
pub const ALL_GROUPS_LAST_NAME: &str = "every_single_group";

/// Requests issued by a complete run.
pub const TOTAL_REQUESTS: u64 = (USER_COUNT + GROUP_COUNT + MEMBERSHIP_RANGES.len() + 1) as u64;

/// What a successful run created, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Ids of every created user; the all-groups user is last.
    pub user_ids: Vec<String>,
    pub group_names: Vec<String>,
    /// `(group name, member ids)` as sent.
    pub memberships: Vec<(String, Vec<String>)>,
}

impl SeedReport {
    /// Id of the user created as a member of every group.
    pub fn all_groups_user(&self) -> Option<&str> {
        self.user_ids.get(USER_COUNT).map(String::as_str)
    }
}

/// Run the seeding script against `api`, ticking `progress` once per
/// request. Pass `ProgressBar::hidden()` for no output.
pub fn run<T: JsonTransport>(api: &ApiClient<T>, progress: &ProgressBar) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    progress.set_message("creating users");
    for i in 0..USER_COUNT {
        let user = api.create_user(&format!("user{i}"), &format!("last{i}"), &[])?;
        report.user_ids.push(user.userid);
        progress.inc(1);
    }

    progress.set_message("creating groups");
    for i in 0..GROUP_COUNT {
        let group = api.create_group(&format!("group{i}"))?;
        report.group_names.push(group.name);
        progress.inc(1);
    }

    progress.set_message("assigning members");
    for (group_name, range) in report.group_names.iter().zip(MEMBERSHIP_RANGES) {
        let members = report.user_ids[range].to_vec();
        api.set_group_membership(group_name, &members)?;
        report.memberships.push((group_name.clone(), members));
        progress.inc(1);
    }

    progress.set_message("creating all-groups user");
    let user = api.create_user(
        ALL_GROUPS_FIRST_NAME,
        ALL_GROUPS_LAST_NAME,
        &report.group_names,
    )?;
    report.user_ids.push(user.userid);
    progress.inc(1);

    info!(
        users = report.user_ids.len(),
        groups = report.group_names.len(),
        "seeding complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_fit_the_user_list() {
        for r in MEMBERSHIP_RANGES {
            assert!(r.start < r.end && r.end <= USER_COUNT, "{r:?}");
        }
    }

    #[test]
    fn request_count_is_fixed() {
        assert_eq!(TOTAL_REQUESTS, 21);
    }

    #[test]
    fn all_groups_user_is_the_eleventh() {
        let mut report = SeedReport::default();
        assert_eq!(report.all_groups_user(), None);
        report.user_ids = (0..=USER_COUNT).map(|i| format!("u{i}")).collect();
        assert_eq!(report.all_groups_user(), Some("u10"));
    }
}
