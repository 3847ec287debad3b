use std::io::Write;

use anyhow::Result;
use simplelogin_client::{Client, UserInfo, UserInfoUpdate};

use crate::cli::UserinfoCommand;
use crate::display::{DisplayOptions, format};

fn user_fields(info: &UserInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Name", format::text(&info.name)),
        ("Email", info.email.clone()),
        ("Premium", format::check(info.is_premium)),
        ("In Trial", format::check(info.in_trial)),
        (
            "Profile Picture",
            format::opt_text(info.profile_picture_url.as_deref()),
        ),
        ("Max Aliases (free plan)", info.max_alias_free_plan.to_string()),
    ]
}

pub async fn run(
    cmd: UserinfoCommand,
    client: &Client,
    display: &DisplayOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let info = match cmd {
        UserinfoCommand::Get => client.user_info().await?,
        UserinfoCommand::Update {
            name,
            profile_picture,
        } => {
            let update = UserInfoUpdate {
                profile_picture,
                name,
            };
            client.update_user_info(&update).await?
        }
    };
    display.record(out, &info, &user_fields(&info))
}
