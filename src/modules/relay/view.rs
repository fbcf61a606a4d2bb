use super::parser::AccountRecord;
use crate::modules::stats::client::PlayerStats;
use poise::serenity_prelude::{
    ButtonStyle, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
};

pub const COPY_SESSION: &str = "copy:session";
pub const COPY_UUID: &str = "copy:uuid";
pub const COPY_USERNAME: &str = "copy:username";

pub const BLURPLE: Colour = Colour::new(0x5865F2);

pub fn account_embed(record: &AccountRecord, stats: &PlayerStats) -> CreateEmbed {
    CreateEmbed::new()
        .title("🎮 Minecraft Account Received")
        .description(format!(
            "**Username:** {}\n**UUID:** `{}`",
            record.username, record.uuid
        ))
        .field("Playtime", stats.playtime.clone(), true)
        .field("Balance", stats.balance.clone(), true)
        .colour(BLURPLE)
        .footer(CreateEmbedFooter::new(
            "Click buttons to copy data • Only visible to you",
        ))
}

pub fn stats_embed(username: &str, stats: &PlayerStats) -> CreateEmbed {
    CreateEmbed::new()
        .title("📊 Player Stats")
        .description(format!("Stats for **{username}**"))
        .field("Playtime", stats.playtime.clone(), true)
        .field("Balance", stats.balance.clone(), true)
        .colour(BLURPLE)
}

pub fn invalid_account_embed(username: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Not a valid account")
        .description(format!(
            "`{username}` could not be verified against the stats API."
        ))
        .colour(Colour::RED)
}

/// Copy Session leads (primary), UUID and Username follow (secondary).
pub fn copy_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(COPY_SESSION)
            .label("Copy Session")
            .style(ButtonStyle::Primary),
        CreateButton::new(COPY_UUID)
            .label("Copy UUID")
            .style(ButtonStyle::Secondary),
        CreateButton::new(COPY_USERNAME)
            .label("Copy Username")
            .style(ButtonStyle::Secondary),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AccountRecord {
        AccountRecord {
            username: "Steve".to_string(),
            uuid: "069a79f4".to_string(),
            session_token: "tok".to_string(),
        }
    }

    fn stats() -> PlayerStats {
        PlayerStats {
            playtime: "2h 1m".to_string(),
            balance: "$1,500,000".to_string(),
        }
    }

    #[test]
    fn account_embed_carries_username_and_both_fields() {
        let embed = serde_json::to_value(account_embed(&record(), &stats())).unwrap();
        assert_eq!(embed["title"], "🎮 Minecraft Account Received");
        assert!(embed["description"]
            .as_str()
            .unwrap()
            .contains("**Username:** Steve"));
        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["value"], "2h 1m");
        assert_eq!(fields[1]["value"], "$1,500,000");
    }

    #[test]
    fn invalid_embed_has_no_stat_fields() {
        let embed = serde_json::to_value(invalid_account_embed("Steve")).unwrap();
        assert!(embed.get("fields").is_none() || embed["fields"].as_array().unwrap().is_empty());
    }

    #[test]
    fn copy_buttons_cover_all_three_values() {
        let row = serde_json::to_value(copy_buttons()).unwrap();
        let buttons = row["components"].as_array().unwrap();
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[0]["custom_id"], COPY_SESSION);
        assert_eq!(buttons[1]["custom_id"], COPY_UUID);
        assert_eq!(buttons[2]["custom_id"], COPY_USERNAME);
    }
}
