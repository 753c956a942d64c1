//! Membership resolution.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::{governance::GovernanceDocument, Error};

#[cfg(test)]
#[path = "membership_tests.rs"]
mod tests;

/// Role labels held by each user, both sorted.
pub type Membership = BTreeMap<String, BTreeSet<String>>;

/// Collects the users with a role on `repo_name` and the roles they hold.
///
/// For every `team: role` binding of the repository, each maintainer and
/// member of the team gains `role`. Roles accumulate across teams, so a user
/// in several bound teams holds the union of their roles. Bindings that name
/// an unknown team are skipped.
///
/// # Errors
///
/// Returns [`Error::RepositoryNotFound`] when the governance document has no
/// entry for `repo_name`.
///
/// # Examples
///
/// ```rust
/// use maintainers_core::{collect_members, GovernanceDocument, RepositoryBinding, Team};
///
/// let governance = GovernanceDocument {
///     teams: vec![Team {
///         name: "core".to_string(),
///         maintainers: vec!["alice".to_string()],
///         members: vec!["bob".to_string()],
///     }],
///     repositories: vec![RepositoryBinding {
///         name: "r1".to_string(),
///         teams: [("core".to_string(), "maintainer".to_string())].into(),
///     }],
///     origin: None,
/// };
///
/// let members = collect_members("r1", &governance).unwrap();
/// assert_eq!(members.len(), 2);
/// assert!(members["bob"].contains("maintainer"));
/// ```
pub fn collect_members(repo_name: &str, governance: &GovernanceDocument) -> Result<Membership, Error> {
    let binding = governance
        .repository(repo_name)
        .ok_or_else(|| Error::RepositoryNotFound {
            repo: repo_name.to_string(),
            governance: governance.describe(),
        })?;

    let mut members = Membership::new();
    for (team_name, role) in &binding.teams {
        let Some(team) = governance.team(team_name) else {
            warn!(repo = repo_name, team = %team_name, "Skipping binding to unknown team");
            continue;
        };

        for user in team.users() {
            members
                .entry(user.to_string())
                .or_default()
                .insert(role.clone());
        }
    }

    debug!(repo = repo_name, members = members.len(), "Collected repository members");
    Ok(members)
}
