use serenity::all::{Member, UserId};

/// A member of the configured guild, as needed for role grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    pub user_id: UserId,
    pub name: String,
}

impl From<&Member> for GuildMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            name: member.user.name.clone(),
        }
    }
}
