use std::{env, fs, fs::File, io::Write};

use async_graphql::{
    extensions::Logger, http::GraphiQLSource, EmptyMutation, EmptySubscription, SDLExportOptions,
    Schema,
};
use async_graphql_axum::GraphQL;
use axum::{
    response::{self, IntoResponse},
    routing::get,
    Router,
};
use clap::Parser;
use simple_logger::SimpleLogger;

use log::info;
use mongodb::{options::ClientOptions, Client, Database};

mod graphql;
use graphql::query::Query;

mod search;
use search::SearchCollaborators;

/// Builds the GraphiQL frontend.
async fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Establishes database connection and returns the client.
async fn db_connection() -> std::io::Result<Client> {
    let uri = env::var("MONGODB_URI")
        .map_err(|_| std::io::Error::other("$MONGODB_URI is not set."))?;

    // Parse a connection string into an options struct.
    let mut client_options = ClientOptions::parse(uri)
        .await
        .map_err(std::io::Error::other)?;

    // Manually set an option.
    client_options.app_name = Some("BlogProducts".to_string());

    // Get a handle to the deployment.
    Client::with_options(client_options).map_err(std::io::Error::other)
}

/// Command line arguments of the blog products service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generates GraphQL schema in `./schemas/blog-products.graphql`.
    #[arg(long)]
    generate_schema: bool,
    /// Port the GraphQL server listens on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// MongoDB database holding the `posts` and `products` collections.
    #[arg(long, default_value = "blog-database")]
    database: String,
}

/// Activates logger and parses argument for optional schema generation. Otherwise starts the GraphQL server.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .map_err(std::io::Error::other)?;

    let args = Args::parse();
    if args.generate_schema {
        let schema = Schema::build(Query, EmptyMutation, EmptySubscription).finish();
        fs::create_dir_all("./schemas")?;
        let mut file = File::create("./schemas/blog-products.graphql")?;
        let sdl_export_options = SDLExportOptions::new().federation();
        let schema_sdl = schema.sdl_with_options(sdl_export_options);
        file.write_all(schema_sdl.as_bytes())?;
        info!("GraphQL schema: ./schemas/blog-products.graphql was successfully generated!");
    } else {
        start_service(args).await?;
    }
    Ok(())
}

/// Starts blog products service on the configured port.
async fn start_service(args: Args) -> std::io::Result<()> {
    let client = db_connection().await?;
    let db_client: Database = client.database(&args.database);

    let schema = Schema::build(Query, EmptyMutation, EmptySubscription)
        .extension(Logger)
        .data(SearchCollaborators::mongodb(&db_client))
        .enable_federation()
        .finish();

    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("GraphiQL IDE: http://0.0.0.0:{}", args.port);
    axum::serve(listener, app).await
}
