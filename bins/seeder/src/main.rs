//! Database seeder for Condos development and testing.
//!
//! Seeds a demo user with a linked account and a fresh session, then a few
//! buildings with residents, payments and expenses for the last months.
//! Prints the session token so it can be used as a bearer token.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Duration, Months, Utc};
use condos_core::{building::NewBuilding, resident::NewResident};
use condos_db::{
    AccountRepository, BuildingRepository, CreateExpenseInput, CreatePaymentInput,
    CreateUserInput, ExpenseRepository, LinkAccountInput, PaymentRepository, ResidentRepository,
    SessionRepository, UserRepository, entities::users,
};
use condos_shared::{AppConfig, Month};
use fake::{Fake, faker::name::en::Name};
use sea_orm::DatabaseConnection;

const DEMO_EMAIL: &str = "demo@condos.dev";
const DEMO_PROVIDER: &str = "discord";
const DEMO_ACCOUNT_ID: &str = "000000000000000001";

/// Buildings seeded on an empty database: name, floors, fractions per floor.
const BUILDINGS: [(&str, i32, i32); 3] = [
    ("Edifício Aurora", 4, 2),
    ("Residencial Boreal", 3, 3),
    ("Torre Sul", 2, 2),
];

/// Monthly quota charged to every fraction, in cents.
const MONTHLY_QUOTA: i32 = 4_500;

/// Months of history generated for payments and expenses.
const HISTORY_MONTHS: u32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = condos_db::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding demo user...");
    let user = seed_demo_user(&db).await?;

    let (token, _) = SessionRepository::new(db.clone())
        .create(
            &user.id,
            Utc::now() + Duration::days(config.auth.session_max_age_days),
        )
        .await
        .context("Failed to create demo session")?;
    println!("  Session token: {token}");

    println!("Seeding buildings...");
    seed_buildings(&db, &user.id).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Seeds the demo user and its provider account.
async fn seed_demo_user(db: &DatabaseConnection) -> anyhow::Result<users::Model> {
    let users = UserRepository::new(db.clone());

    if let Some(user) = users.find_by_account(DEMO_PROVIDER, DEMO_ACCOUNT_ID).await? {
        println!("  Demo user already exists, skipping...");
        return Ok(user);
    }

    let user = users
        .create(CreateUserInput {
            name: Some("Demo".to_string()),
            email: DEMO_EMAIL.to_string(),
            image: None,
        })
        .await
        .context("Failed to create demo user")?;

    AccountRepository::new(db.clone())
        .link(LinkAccountInput {
            user_id: user.id.clone(),
            account_type: "oauth".to_string(),
            provider: DEMO_PROVIDER.to_string(),
            provider_account_id: DEMO_ACCOUNT_ID.to_string(),
            token_type: Some("bearer".to_string()),
            scope: Some("identify email".to_string()),
            ..Default::default()
        })
        .await
        .context("Failed to link demo account")?;

    println!("  Created demo user {}", user.id);
    Ok(user)
}

/// Seeds buildings, residents and their ledgers.
async fn seed_buildings(db: &DatabaseConnection, creator_id: &str) -> anyhow::Result<()> {
    let buildings = BuildingRepository::new(db.clone());

    if !buildings.list_ordered_by_name().await?.is_empty() {
        println!("  Buildings already exist, skipping...");
        return Ok(());
    }

    let residents = ResidentRepository::new(db.clone());
    let payments = PaymentRepository::new(db.clone());
    let expenses = ExpenseRepository::new(db.clone());
    let months = recent_months()?;

    for (name, floors, per_floor) in BUILDINGS {
        let building = buildings
            .create(
                NewBuilding {
                    name: name.to_string(),
                    floors,
                    fractions: floors * per_floor,
                },
                creator_id,
            )
            .await?;

        let mut fraction = 0;
        for floor in 0..floors {
            for _ in 0..per_floor {
                fraction += 1;
                let contact: u32 = (910_000_000..970_000_000).fake();
                let resident = residents
                    .create(NewResident {
                        building_id: building.id,
                        name: Name().fake(),
                        contact: Some(contact.to_string()),
                        floor,
                        fraction,
                    })
                    .await?;

                for month in &months {
                    payments
                        .create(CreatePaymentInput {
                            building_id: building.id,
                            resident_id: resident.id,
                            amount: MONTHLY_QUOTA,
                            month: *month,
                            description: Some("Quota mensal".to_string()),
                        })
                        .await?;
                }
            }
        }

        for month in &months {
            for (description, amount) in [("Limpeza", 12_000), ("Eletricidade", 8_500)] {
                expenses
                    .create(CreateExpenseInput {
                        building_id: building.id,
                        amount,
                        month: *month,
                        description: Some(description.to_string()),
                    })
                    .await?;
            }
        }

        println!("  Seeded {name} with {fraction} residents");
    }

    Ok(())
}

/// The current month and the ones before it, newest first.
fn recent_months() -> anyhow::Result<Vec<Month>> {
    let today = Utc::now().date_naive();

    (0..HISTORY_MONTHS)
        .map(|back| {
            let date = today
                .checked_sub_months(Months::new(back))
                .context("Month out of range")?;
            Ok(Month::of(date)?)
        })
        .collect()
}
