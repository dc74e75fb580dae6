use std::sync::Arc;

use lp_core::{Division, Rank};
use lp_persistence_sqlite::{SqliteLadderRepository, create_db_pool_from_env, init_schema};
use lp_server_app::workflow::player::register::{RegisterPlayerUseCase, RegisterPlayerUseCaseImpl};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        eprintln!("Usage: add_player <name> <rank> <division> [<lp>]");
        std::process::exit(1);
    }

    let name = &args[1];
    let rank: Rank = args[2].parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let division: Division = args[3].parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let lp: u32 = match args.get(4) {
        Some(lp) => lp.parse().unwrap_or_else(|_| {
            eprintln!("LP must be a non-negative integer, got [{}]", lp);
            std::process::exit(1);
        }),
        None => 0,
    };

    let pool = create_db_pool_from_env()
        .await
        .expect("Failed to create pool");
    init_schema(&pool).await.expect("Failed to create schema");

    let repo = Arc::new(SqliteLadderRepository::new(pool.clone()));
    let register = RegisterPlayerUseCaseImpl::new(repo);

    let outcome = register.register(name, rank, division, lp).await;
    pool.close().await;

    match outcome {
        Ok(standing) => println!(
            "Registered player [{}] at {}",
            standing.player_name,
            standing.position()
        ),
        Err(e) => {
            eprintln!("Failed to register player [{}]: {}", name, e);
            std::process::exit(1);
        }
    }
}
