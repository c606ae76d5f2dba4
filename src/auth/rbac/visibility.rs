//! Visibility rules

use super::roles::rank;
use super::types::RoleBearing;
use crate::core::models::Role;

/// Whether `requester` may perceive a subject holding `subject`
///
/// Super admins see everyone, peers included. Everyone else sees strictly
/// lower ranks only. An unrecognized role on either side is never visible.
pub fn is_visible(requester: Role, subject: Role) -> bool {
    if !requester.is_known() || !subject.is_known() {
        return false;
    }
    requester == Role::SuperAdmin || rank(subject) < rank(requester)
}

/// Stable filter keeping the subjects `requester` may see
pub fn filter_visible<T, I>(requester: Role, subjects: I) -> Vec<T>
where
    T: RoleBearing,
    I: IntoIterator<Item = T>,
{
    subjects
        .into_iter()
        .filter(|subject| is_visible(requester, subject.role()))
        .collect()
}
