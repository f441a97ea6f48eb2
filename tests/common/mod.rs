//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use devcrate::db::{DbPool, establish_connection_pool};
use devcrate::domain::resource::NewResource;
use devcrate::domain::resource_tag::ResourceTagLink;
use devcrate::domain::tag::Tag;
use devcrate::repository::{CatalogWriter, DieselRepository};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Three tools over two tags: Tailwind CSS [css], Next.js [css, react] and
/// Figma [design], where only the first two have favicons.
#[allow(dead_code)]
pub fn seed_scenario(repo: &DieselRepository) {
    repo.create_tag(&Tag::new("t-css", "css", "#1d4ed8"))
        .expect("create css tag");
    repo.create_tag(&Tag::new("t-react", "react", "#0ea5e9"))
        .expect("create react tag");
    repo.create_tag(&Tag::new("t-design", "design", "#db2777"))
        .expect("create design tag");

    repo.create_resource(
        &NewResource::new("r1", "Tailwind CSS", "https://tailwindcss.com")
            .with_favicon("https://tailwindcss.com/favicon.ico"),
    )
    .expect("create r1");
    repo.create_resource(
        &NewResource::new("r2", "Next.js", "https://nextjs.org")
            .with_favicon("https://nextjs.org/favicon.ico"),
    )
    .expect("create r2");
    repo.create_resource(&NewResource::new("r3", "Figma", "https://figma.com"))
        .expect("create r3");

    for (resource_id, tag_id) in [("r1", "t-css"), ("r2", "t-css"), ("r2", "t-react"), ("r3", "t-design")] {
        repo.link_resource_tag(&ResourceTagLink::new(resource_id, tag_id))
            .expect("link resource to tag");
    }
}
