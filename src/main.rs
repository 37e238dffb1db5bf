// Entrypoint for the CLI application.
// - Keeps `main` small: read config, build the catalog and metadata
//   client, and hand them to the UI loop.
// - Returns `anyhow::Result` so a broken terminal ends the process with
//   a readable error.

use movie_catalog_cli::{
    api::OmdbClient, catalog::Catalog, config::Config, logging, store::CatalogStore, ui::main_menu,
};

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    // Catalog path and OMDb settings come from the environment.
    // See `config::Config::from_env`.
    let config = Config::from_env();
    let catalog = Catalog::new(CatalogStore::new(&config.catalog_path));
    let api = OmdbClient::new(&config)?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&catalog, &api)?;
    Ok(())
}
