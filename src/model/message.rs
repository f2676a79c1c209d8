//! Outgoing Discord content, independent of serenity's builders.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub footer: Option<String>,
}

impl Embed {
    /// Converts into a serenity embed builder stamped with the current time.
    pub fn to_create_embed(&self) -> CreateEmbed {
        let embed = CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .colour(self.colour)
            .timestamp(Timestamp::now());

        match &self.footer {
            Some(footer) => embed.footer(CreateEmbedFooter::new(footer)),
            None => embed,
        }
    }
}

/// Response to the invoking user of a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<Embed>,
    /// Only honoured for the initial response; deferred responses keep the deferral's visibility
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            ephemeral: false,
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            ephemeral: false,
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

/// Public message posted into a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub embed: Embed,
}
