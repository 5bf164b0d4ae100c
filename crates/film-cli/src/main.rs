use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use film_cli::create_admin;
use film_config::{StoreBackend, StoreConfig};
use film_db::{Gateway, seed::seed_samples};

#[derive(Parser)]
#[command(name = "film-cli")]
#[command(about = "Film API CLI - Administrative tools for Film API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the sample movies and directors into empty collections
    Seed,
    /// Create an account with the admin role
    CreateAdmin {
        /// Username (lowercased before storing)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let store_config = StoreConfig::from_env().map_err(anyhow::Error::msg)?;

    if store_config.backend == StoreBackend::Document {
        eprintln!("⚠️  STORE_BACKEND=document keeps data in process memory; changes are discarded on exit.");
    }

    // Seeding is explicit here, never implied by SEED_ON_START.
    let gateway = Gateway::connect(&StoreConfig {
        seed_on_start: false,
        ..store_config
    })
    .await?;

    match cli.command {
        Commands::Seed => handle_seed(&gateway).await,
        Commands::CreateAdmin { username, password } => {
            handle_create_admin(&gateway, username, password).await
        }
    }
}

async fn handle_seed(gateway: &Gateway) -> anyhow::Result<()> {
    let report = seed_samples(gateway).await?;

    if report.movies == 0 && report.directors == 0 {
        println!("ℹ️  Collections already contain data, nothing seeded");
    } else {
        println!(
            "✅ Seeded {} movies and {} directors",
            report.movies, report.directors
        );
    }
    Ok(())
}

async fn handle_create_admin(
    gateway: &Gateway,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let admin = create_admin(gateway, &username, &password).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Username: {}", admin.username);
    println!("   Id: {}", admin.id);
    Ok(())
}
