use serenity::all::RoleId;

use crate::model::command::InvokingMember;

/// Returns whether the invoking member holds the role required to run bot commands.
///
/// Invocations without member data are never authorized.
pub fn authorize(member: Option<&InvokingMember>, required_role: RoleId) -> bool {
    member.is_some_and(|member| member.roles.contains(&required_role))
}
