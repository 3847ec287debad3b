use std::io::Write;

use anyhow::Result;
use simplelogin_client::{Client, Setting, SettingUpdate};

use crate::cli::SettingCommand;
use crate::display::{Column, DisplayOptions, format};

fn setting_fields(setting: &Setting) -> Vec<(&'static str, String)> {
    vec![
        ("Alias Generator", format::text(&setting.alias_generator)),
        ("Notification", format::check(setting.notification)),
        (
            "Random Alias Default Domain",
            format::text(&setting.random_alias_default_domain),
        ),
        ("Sender Format", format::text(&setting.sender_format)),
        ("Random Alias Suffix", format::text(&setting.random_alias_suffix)),
    ]
}

pub async fn run(
    cmd: SettingCommand,
    client: &Client,
    display: &DisplayOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        SettingCommand::Get => {
            let setting = client.setting().await?;
            display.record(out, &setting, &setting_fields(&setting))
        }

        SettingCommand::Update {
            alias_generator,
            notification,
            random_alias_default_domain,
            sender_format,
            random_alias_suffix,
        } => {
            let update = SettingUpdate {
                alias_generator: alias_generator.map(Into::into),
                notification,
                random_alias_default_domain,
                sender_format: sender_format.map(Into::into),
                random_alias_suffix: random_alias_suffix.map(Into::into),
            };
            let setting = client.update_setting(&update).await?;
            display.record(out, &setting, &setting_fields(&setting))
        }

        SettingCommand::Domains => {
            let domains = client.setting_domains().await?;
            display.list(out, &domains, "domains", &[Column::new("Domain"), Column::new("Custom")], |d| {
                vec![d.domain.clone(), format::check(d.is_custom)]
            })
        }
    }
}
