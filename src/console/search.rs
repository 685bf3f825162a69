use crate::models::AdminUser;

/// Users whose name contains `term`, ignoring case, in their original order.
/// An empty term matches everyone.
pub fn filter_users<'a>(users: &'a [AdminUser], term: &str) -> Vec<&'a AdminUser> {
    let needle = term.to_lowercase();
    users.iter().filter(|u| u.matches_search(&needle)).collect()
}
