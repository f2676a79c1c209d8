//! Slash command invocations as seen by the command router.

use serenity::all::{
    ChannelId, CommandInteraction, GuildId, Member, ResolvedOption, ResolvedValue, RoleId, UserId,
};

/// Typed value of a command option the bot understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    User { id: UserId, name: String },
    Channel { id: ChannelId, name: Option<String> },
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

/// The guild member who invoked a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokingMember {
    pub user_id: UserId,
    pub name: String,
    pub roles: Vec<RoleId>,
}

impl From<&Member> for InvokingMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            name: member.user.name.clone(),
            roles: member.roles.clone(),
        }
    }
}

/// A single slash command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub subcommand: Option<String>,
    /// `None` when Discord did not include member data (e.g. the command ran in a DM)
    pub member: Option<InvokingMember>,
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub options: Vec<CommandOption>,
}

impl CommandInvocation {
    /// Reads the invocation from a serenity command interaction.
    ///
    /// A top-level subcommand is flattened: its name goes to `subcommand` and its options are
    /// hoisted into `options`. Option types the bot never registers are skipped.
    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        let mut subcommand = None;
        let mut options = Vec::new();

        for option in interaction.data.options() {
            match option.value {
                ResolvedValue::SubCommand(nested) => {
                    subcommand = Some(option.name.to_string());
                    options.extend(nested.into_iter().filter_map(convert_option));
                }
                _ => options.extend(convert_option(option)),
            }
        }

        Self {
            name: interaction.data.name.clone(),
            subcommand,
            member: interaction.member.as_deref().map(InvokingMember::from),
            guild_id: interaction.guild_id,
            channel_id: interaction.channel_id,
            options,
        }
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn user_option(&self, name: &str) -> Option<(UserId, &str)> {
        match self.option(name)? {
            OptionValue::User { id, name } => Some((*id, name.as_str())),
            _ => None,
        }
    }

    pub fn channel_option(&self, name: &str) -> Option<(ChannelId, Option<&str>)> {
        match self.option(name)? {
            OptionValue::Channel { id, name } => Some((*id, name.as_deref())),
            _ => None,
        }
    }

    /// Name of the invoking user for log lines, "Unknown" when member data is absent.
    pub fn invoker_name(&self) -> &str {
        self.member
            .as_ref()
            .map_or("Unknown", |member| member.name.as_str())
    }
}

fn convert_option(option: ResolvedOption<'_>) -> Option<CommandOption> {
    let value = match option.value {
        ResolvedValue::User(user, _) => OptionValue::User {
            id: user.id,
            name: user.name.clone(),
        },
        ResolvedValue::Channel(channel) => OptionValue::Channel {
            id: channel.id,
            name: channel.name.clone(),
        },
        ResolvedValue::String(value) => OptionValue::String(value.to_string()),
        _ => return None,
    };

    Some(CommandOption {
        name: option.name.to_string(),
        value,
    })
}
