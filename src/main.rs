use dotenv::dotenv;
use ponydex::adapters::inbound::create_client;
use ponydex::adapters::outbound::catalog_store::init_catalog_store;
use ponydex::adapters::outbound::localization::init_localization;
use ponydex::config::Settings;
use ponydex::domain::app::App;
use ponydex::domain::catalog;
use ponydex::ports::inbound::client::Client;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(why) => {
            log::error!("Bad configuration: {why}");
            return;
        }
    };

    let store = init_catalog_store(&settings);
    let catalog = match catalog::load(&store).await {
        Ok(catalog) => catalog,
        Err(why) => {
            log::error!("{why}");
            return;
        }
    };

    let localization = match init_localization(&settings).await {
        Ok(localization) => localization,
        Err(why) => {
            log::error!("{why}");
            return;
        }
    };

    let app = App::new(catalog, localization, settings.language, settings.options);
    let mut client = create_client(app);
    client.run().await;
}
