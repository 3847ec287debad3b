use std::io::Write;

use anyhow::Result;
use simplelogin_client::Client;

use crate::display::DisplayOptions;

pub async fn run(client: &Client, display: &DisplayOptions, out: &mut dyn Write) -> Result<()> {
    let stats = client.stats().await?;
    display.record(
        out,
        &stats,
        &[
            ("Aliases", stats.nb_alias.to_string()),
            ("Forwarded", stats.nb_forward.to_string()),
            ("Replied", stats.nb_reply.to_string()),
            ("Blocked", stats.nb_block.to_string()),
        ],
    )
}
