pub mod terminal;

use crate::adapters::inbound::terminal::Terminal;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::localization::Localization;

pub fn create_client<L>(app: App<L>) -> impl Client
where
    L: Localization + Send + Sync + 'static,
{
    Terminal::new(app)
}
