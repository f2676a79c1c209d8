//! Tester role assignment, immediate or deferred until the user joins.

use serenity::all::{GuildId, RoleId, UserId};

use crate::{
    config::Config,
    data::pending_tester::PendingTesterStore,
    error::tester::RoleGrantError,
    model::message::Embed,
    service::{discord::DiscordApi, embed},
};

/// Result of the `tester` command for one target user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TesterOutcome {
    /// Both roles were granted
    Assigned { name: String },
    /// Neither role was granted
    PrimaryRoleFailed,
    /// Only the primary role was granted
    SecondaryRoleFailed,
    /// The user is not in the guild. `stored` is false when the store write failed.
    Queued { name: String, stored: bool },
}

impl TesterOutcome {
    /// Embed reported back to the invoker.
    pub fn embed(&self) -> Embed {
        match self {
            TesterOutcome::Assigned { name } => embed::tester_roles_assigned(name),
            TesterOutcome::PrimaryRoleFailed => embed::tester_primary_role_failed(),
            TesterOutcome::SecondaryRoleFailed => embed::tester_secondary_role_failed(),
            TesterOutcome::Queued { name, .. } => embed::tester_pending(name),
        }
    }
}

/// Result of checking a newly joined member against the pending set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The join happened in a guild the bot does not manage
    IgnoredGuild,
    /// The pending set could not be read
    StoreUnavailable,
    NotPending,
    /// Both roles were granted. `removed` is false when the entry could not be deleted.
    Granted { removed: bool },
    /// A grant failed and the entry was kept
    GrantFailed,
}

/// Grants the primary then the secondary tester role.
///
/// The secondary role is not attempted when the primary fails.
pub async fn grant_tester_roles(
    api: &dyn DiscordApi,
    guild_id: GuildId,
    user_id: UserId,
    roles: [RoleId; 2],
) -> Result<(), RoleGrantError> {
    let [primary, secondary] = roles;

    api.add_role(guild_id, user_id, primary)
        .await
        .map_err(RoleGrantError::Primary)?;
    api.add_role(guild_id, user_id, secondary)
        .await
        .map_err(RoleGrantError::Secondary)?;

    Ok(())
}

/// Grants the tester roles to `target`, or queues them until the user joins.
///
/// Any failure to look the member up is treated as "not in the guild". Queueing is best
/// effort: a store failure is logged and the user is still told the roles are pending.
pub async fn assign_or_queue(
    api: &dyn DiscordApi,
    store: &dyn PendingTesterStore,
    config: &Config,
    guild_id: GuildId,
    target: (UserId, &str),
) -> TesterOutcome {
    let (user_id, target_name) = target;

    let member = match api.member(guild_id, user_id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::warn!("Failed to look up member {}: {}", user_id, e);
            None
        }
    };

    let Some(member) = member else {
        tracing::info!(
            "User {} not in server; adding to pending tester store",
            target_name
        );
        let stored = match store.add(user_id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to add {} to pending tester store: {}", user_id, e);
                false
            }
        };

        return TesterOutcome::Queued {
            name: target_name.to_string(),
            stored,
        };
    };

    match grant_tester_roles(api, guild_id, user_id, config.tester_role_ids).await {
        Ok(()) => {
            tracing::info!("Successfully assigned tester roles to: {}", member.name);
            TesterOutcome::Assigned { name: member.name }
        }
        Err(e @ RoleGrantError::Primary(_)) => {
            tracing::error!("{} to {}: {:?}", e, member.name, e);
            TesterOutcome::PrimaryRoleFailed
        }
        Err(e @ RoleGrantError::Secondary(_)) => {
            tracing::error!("{} to {}: {:?}", e, member.name, e);
            TesterOutcome::SecondaryRoleFailed
        }
    }
}

/// Grants pending tester roles to a member who just joined.
///
/// The entry is removed only after both roles were granted, so a partial grant is retried on
/// the user's next join.
pub async fn resolve_join(
    api: &dyn DiscordApi,
    store: &dyn PendingTesterStore,
    config: &Config,
    guild_id: GuildId,
    user_id: UserId,
) -> JoinOutcome {
    if guild_id != config.guild_id {
        return JoinOutcome::IgnoredGuild;
    }

    match store.contains(user_id).await {
        Ok(true) => {}
        Ok(false) => return JoinOutcome::NotPending,
        Err(e) => {
            tracing::error!("Failed to read pending tester store for {}: {}", user_id, e);
            return JoinOutcome::StoreUnavailable;
        }
    }

    if let Err(e) = grant_tester_roles(api, guild_id, user_id, config.tester_role_ids).await {
        tracing::error!("{} to pending tester {}: {:?}", e, user_id, e);
        return JoinOutcome::GrantFailed;
    }
    tracing::info!("Assigned pending tester roles to {}", user_id);

    let removed = match store.remove(user_id).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to remove {} from pending tester store: {}", user_id, e);
            false
        }
    };

    JoinOutcome::Granted { removed }
}
