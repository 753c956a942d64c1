//! GitHub profile lookup for table rows.

use github_client::{ProfileProvider, UserProfile};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::membership::Membership;

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;

/// Looks up the profile of every member, one request at a time.
///
/// Without a provider every member gets a blank profile. A failed lookup is
/// logged and replaced by a blank profile; it never aborts generation.
pub async fn fetch_profiles(
    members: &Membership,
    provider: Option<&dyn ProfileProvider>,
) -> BTreeMap<String, UserProfile> {
    let mut profiles = BTreeMap::new();

    for login in members.keys() {
        let profile = match provider {
            None => UserProfile::blank(login),
            Some(provider) => match provider.fetch_profile(login).await {
                Ok(profile) => {
                    debug!(login = %login, "Fetched GitHub profile");
                    profile
                }
                Err(e) => {
                    warn!(login = %login, error = %e, "Failed to fetch GitHub profile, leaving fields blank");
                    UserProfile::blank(login)
                }
            },
        };
        profiles.insert(login.clone(), profile);
    }

    profiles
}
