//! Markdown rendering of the maintainers table.

use github_client::UserProfile;
use std::collections::BTreeMap;

use crate::membership::Membership;

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

/// Heading and column header lines that open every table.
const TABLE_HEADER: [&str; 4] = [
    "## Current Maintainers",
    "",
    "| GitHub ID | Name | Email | Company | Roles |",
    "|-----------|------|-------|---------|-------|",
];

/// Renders the maintainers table.
///
/// Rows are ordered by GitHub ID. Each user's roles are listed sorted and
/// comma-separated. Users without an entry in `profiles` get blank name,
/// email and company cells.
pub fn build_table(members: &Membership, profiles: &BTreeMap<String, UserProfile>) -> String {
    let mut lines: Vec<String> = TABLE_HEADER.iter().map(|line| line.to_string()).collect();

    for (user, roles) in members {
        let roles = roles.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        let row = match profiles.get(user) {
            Some(profile) => format!(
                "| {} | {} | {} | {} | {} |",
                user, profile.name, profile.email, profile.company, roles
            ),
            None => format!("| {} |  |  |  | {} |", user, roles),
        };
        lines.push(row);
    }

    lines.join("\n")
}
