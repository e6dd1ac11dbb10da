use anyhow::Result;
use clap::Args;

use super::Context;
use crate::ui::Dashboard;

#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub async fn execute(self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let ui = ctx.config.ui.clone();

        // The event loop blocks on terminal input; page loads keep running on
        // the other worker threads
        tokio::task::block_in_place(|| {
            let mut dashboard = Dashboard::new(client, ui)?;
            dashboard.run()
        })
    }
}
