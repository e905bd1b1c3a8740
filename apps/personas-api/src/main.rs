//! Personas API - person registry service
//!
//! Binary entry point: loads configuration, connects to MongoDB, wires the
//! repository into the domain service, and starts the HTTP server.

use anyhow::Result;
use personas_api::{routes, AppState};
use personas_domain::{Person, PersonService};
use personas_mongo::MongoPersonRepository;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting Personas API service");

    // Load environment variables
    dotenvy::dotenv().ok();

    let mongo_uri = std::env::var("MONGO_URI").unwrap_or_else(|_| {
        info!("MONGO_URI not set, using default: mongodb://localhost:27017");
        "mongodb://localhost:27017".to_string()
    });
    let db_name = std::env::var("MONGO_DB").unwrap_or_else(|_| {
        info!("MONGO_DB not set, using default: personas");
        "personas".to_string()
    });
    let collection_name = std::env::var("COLLECTION_NAME").unwrap_or_else(|_| {
        info!("COLLECTION_NAME not set, using default: personas");
        "personas".to_string()
    });

    info!(db = %db_name, collection = %collection_name, "Connecting to MongoDB");

    let client = mongodb::Client::with_uri_str(&mongo_uri).await?;
    let collection = client
        .database(&db_name)
        .collection::<Person>(&collection_name);

    // Create MongoDB repository
    let repository = MongoPersonRepository::new(collection);

    // Create person service
    let service = PersonService::new(repository);

    // Create shared application state
    let state = AppState::new(service);

    // Build HTTP router
    let app = routes::create_router(state);

    // Get bind address from environment
    let host = std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("API_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
