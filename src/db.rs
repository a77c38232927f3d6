use actix_web::web::Data;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use crate::artifacts::artifact::Artifact;
use crate::auth::Role;
use crate::curators::curator::Curator;
use crate::equipment::Equipment;
use crate::expeditions::expedition::Expedition;
use crate::leaders::leader::Leader;
use crate::locations::location::Location;
use crate::members::member::Member;

pub type DB = Data<Database>;

pub struct Database {
    pub pool: Pool<Postgres>,
}

/// A stored credential row. Only the login route ever sees one; the password
/// hash never leaves this module otherwise.
#[derive(FromRow)]
pub struct Account {
    pub id: i32,
    pub password: String,
}

impl Database {
    pub fn with_pool(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // ---- credentials ----

    pub async fn get_account(&self, role: Role, login: &str) -> Result<Option<Account>, sqlx::Error> {
        let q = match role {
            Role::Member => "SELECT id, password FROM members WHERE login = $1",
            Role::Leader => "SELECT id, password FROM leaders WHERE login = $1",
            Role::Admin => "SELECT id, password FROM admins WHERE login = $1",
        };

        sqlx::query_as::<_, Account>(q)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
    }

    // ---- locations ----

    pub async fn get_location(&self, id: i32) -> Result<Option<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(
            "SELECT id, name, country, terrain FROM locations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>("SELECT id, name, country, terrain FROM locations")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_location(
        &self,
        name: &str,
        country: &str,
        terrain: &str,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO locations (name, country, terrain)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(country)
        .bind(terrain)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_location(&self, id: i32) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    // ---- expeditions ----

    pub async fn get_expedition(&self, id: i32) -> Result<Option<Expedition>, sqlx::Error> {
        sqlx::query_as::<_, Expedition>(
            "SELECT id, location_id, start_date, end_date FROM expeditions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_expeditions(&self) -> Result<Vec<Expedition>, sqlx::Error> {
        sqlx::query_as::<_, Expedition>(
            "SELECT id, location_id, start_date, end_date FROM expeditions",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_expedition(
        &self,
        location_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO expeditions (location_id, start_date, end_date)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(location_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_expedition_dates(
        &self,
        id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query(
            r#"
            UPDATE expeditions
            SET start_date = $1, end_date = $2
            WHERE id = $3
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected())
    }

    pub async fn delete_expedition(&self, id: i32) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query("DELETE FROM expeditions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    // ---- leaders ----

    pub async fn get_leader(&self, id: i32) -> Result<Option<Leader>, sqlx::Error> {
        sqlx::query_as::<_, Leader>(
            "SELECT id, expedition_id, name, surname, login FROM leaders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_expedition_leaders(
        &self,
        expedition_id: i32,
    ) -> Result<Vec<Leader>, sqlx::Error> {
        sqlx::query_as::<_, Leader>(
            "SELECT id, expedition_id, name, surname, login FROM leaders WHERE expedition_id = $1",
        )
        .bind(expedition_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_leaders(&self) -> Result<Vec<Leader>, sqlx::Error> {
        sqlx::query_as::<_, Leader>("SELECT id, expedition_id, name, surname, login FROM leaders")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_leader(
        &self,
        expedition_id: Option<i32>,
        name: &str,
        surname: &str,
        login: &str,
        password_hash: &str,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO leaders (expedition_id, name, surname, login, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(expedition_id)
        .bind(name)
        .bind(surname)
        .bind(login)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_leader(&self, id: i32) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query("DELETE FROM leaders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    // ---- members ----

    pub async fn get_member(&self, id: i32) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            "SELECT id, expedition_id, name, surname, login FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_expedition_members(
        &self,
        expedition_id: i32,
    ) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            "SELECT id, expedition_id, name, surname, login FROM members WHERE expedition_id = $1",
        )
        .bind(expedition_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT id, expedition_id, name, surname, login FROM members")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_member(
        &self,
        expedition_id: Option<i32>,
        name: &str,
        surname: &str,
        login: &str,
        password_hash: &str,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO members (expedition_id, name, surname, login, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(expedition_id)
        .bind(name)
        .bind(surname)
        .bind(login)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_member(&self, id: i32) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    // ---- curators ----

    pub async fn get_curator(&self, id: i32) -> Result<Option<Curator>, sqlx::Error> {
        sqlx::query_as::<_, Curator>(
            "SELECT id, expedition_id, name, surname FROM curators WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_expedition_curators(
        &self,
        expedition_id: i32,
    ) -> Result<Vec<Curator>, sqlx::Error> {
        sqlx::query_as::<_, Curator>(
            "SELECT id, expedition_id, name, surname FROM curators WHERE expedition_id = $1",
        )
        .bind(expedition_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_curators(&self) -> Result<Vec<Curator>, sqlx::Error> {
        sqlx::query_as::<_, Curator>("SELECT id, expedition_id, name, surname FROM curators")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_curator(
        &self,
        expedition_id: Option<i32>,
        name: &str,
        surname: &str,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO curators (expedition_id, name, surname)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(expedition_id)
        .bind(name)
        .bind(surname)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_curator(&self, id: i32) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query("DELETE FROM curators WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    // ---- artifacts ----

    pub async fn get_artifact(&self, id: i32) -> Result<Option<Artifact>, sqlx::Error> {
        sqlx::query_as::<_, Artifact>(
            "SELECT id, location_id, name, age_years FROM artifacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_location_artifacts(
        &self,
        location_id: i32,
    ) -> Result<Vec<Artifact>, sqlx::Error> {
        sqlx::query_as::<_, Artifact>(
            "SELECT id, location_id, name, age_years FROM artifacts WHERE location_id = $1",
        )
        .bind(location_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_artifacts(&self) -> Result<Vec<Artifact>, sqlx::Error> {
        sqlx::query_as::<_, Artifact>("SELECT id, location_id, name, age_years FROM artifacts")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_artifact(
        &self,
        location_id: i32,
        name: &str,
        age_years: i32,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO artifacts (location_id, name, age_years)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(location_id)
        .bind(name)
        .bind(age_years)
        .fetch_one(&self.pool)
        .await
    }

    // ---- equipment ----

    pub async fn get_equipment(&self, id: i32) -> Result<Option<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>(
            "SELECT id, expedition_id, name, amount FROM equipment WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_expedition_equipment(
        &self,
        expedition_id: i32,
    ) -> Result<Vec<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>(
            "SELECT id, expedition_id, name, amount FROM equipment WHERE expedition_id = $1",
        )
        .bind(expedition_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>("SELECT id, expedition_id, name, amount FROM equipment")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_equipment(
        &self,
        expedition_id: i32,
        name: &str,
        amount: i32,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO equipment (expedition_id, name, amount)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(expedition_id)
        .bind(name)
        .bind(amount)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_equipment(&self, id: i32) -> Result<u64, sqlx::Error> {
        Ok(sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }
}
