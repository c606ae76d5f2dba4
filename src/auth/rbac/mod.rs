//! Role-hierarchy access control
//!
//! Roles are totally ordered by rank (external < internal < admin <
//! super_admin). A requester sees and acts on strictly lower ranks; a super
//! admin additionally sees peers but may only view them. Unrecognized roles
//! and statuses always resolve to the least privileged outcome.
//!
//! These checks mirror the record store's policy for the presentation layer.
//! They are not a security boundary: the store must enforce the same rules.

mod permissions;
mod roles;
mod system;
mod types;
mod visibility;

pub use permissions::{actions_for, authorize, authorized_actions, check_action};
pub use roles::{can_create, creatable_roles, rank, required_office_for_role};
pub use system::RoleAuthorizationEngine;
pub use types::{PermissionCheck, RoleBearing};
pub use visibility::{filter_visible, is_visible};
