//! Rank and creation rules

use crate::core::models::Role;

/// Fixed rank of a role; 0 for an unrecognized role
pub fn rank(role: Role) -> u8 {
    role.rank()
}

/// Whether `requester` may create a subject with role `candidate`
///
/// Creation is strictly downward. Unrecognized roles on either side deny.
pub fn can_create(requester: Role, candidate: Role) -> bool {
    if !requester.is_known() || !candidate.is_known() {
        return false;
    }
    rank(candidate) < rank(requester)
}

/// Whether a subject with this role must be affiliated with an office
pub fn required_office_for_role(role: Role) -> bool {
    matches!(role, Role::Internal | Role::External)
}

/// Roles `requester` may create, ascending by rank
pub fn creatable_roles(requester: Role) -> Vec<Role> {
    Role::KNOWN
        .into_iter()
        .filter(|candidate| can_create(requester, *candidate))
        .collect()
}
