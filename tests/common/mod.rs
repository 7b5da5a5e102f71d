//! Shared harness: an in-memory store and a server on an ephemeral port

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use extinguisher_server::{
    api,
    config::{AppConfig, SeedConfig},
    error::{AppError, AppResult},
    models::{
        extinguisher::CreateExtinguisher,
        storage_box::{CreateBox, DEFAULT_BOX_SIZE, DEFAULT_BUILDING, DEFAULT_ROOM, WAREHOUSE_BOX_SIZE},
        user::NewUser,
        Extinguisher, FireClass, Page, StorageBox, User,
    },
    repository::{BoxStore, ExtinguisherStore, UserStore},
    services::Services,
    AppState,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "$TeamAsti2023";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    boxes: Vec<StorageBox>,
    extinguishers: Vec<Extinguisher>,
}

/// Store kept in process memory, ordered by insertion like the Postgres one
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn page_of<T: Clone>(rows: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    rows.skip(page.offset as usize).take(page.limit as usize).collect()
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn users_list(&self, page: Page) -> AppResult<Vec<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(page_of(tables.users.iter().cloned(), page))
    }

    async fn users_get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn users_get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn users_email_exists(&self, email: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .any(|u| u.email == email && Some(u.id) != exclude_id))
    }

    async fn users_create(&self, user: &NewUser) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let created = User {
            id: tables.users.len() as i32 + 1,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            hashed_password: user.hashed_password.clone(),
            is_active: user.is_active,
            is_admin: user.is_admin,
            user_type: user.user_type,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn users_update(&self, user: &User) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user.id)))?;
        *row = User {
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(row.clone())
    }
}

#[async_trait]
impl BoxStore for MemoryStore {
    async fn boxes_list(&self, page: Page) -> AppResult<Vec<StorageBox>> {
        let tables = self.tables.lock().unwrap();
        Ok(page_of(tables.boxes.iter().cloned(), page))
    }

    async fn boxes_get_by_id(&self, id: i32) -> AppResult<Option<StorageBox>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.boxes.iter().find(|b| b.id == id).cloned())
    }

    async fn boxes_find_warehouse(&self) -> AppResult<Option<StorageBox>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .boxes
            .iter()
            .find(|b| b.box_size == WAREHOUSE_BOX_SIZE)
            .cloned())
    }

    async fn boxes_create(&self, data: &CreateBox) -> AppResult<StorageBox> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let created = StorageBox {
            id: tables.boxes.len() as i32 + 1,
            box_size: data.box_size.clone().unwrap_or_else(|| DEFAULT_BOX_SIZE.to_string()),
            building: data.building.clone().unwrap_or_else(|| DEFAULT_BUILDING.to_string()),
            room: data.room.clone().unwrap_or_else(|| DEFAULT_ROOM.to_string()),
            location_description: data.location_description.clone(),
            is_damaged: data.is_damaged.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        tables.boxes.push(created.clone());
        Ok(created)
    }

    async fn boxes_update(&self, storage_box: &StorageBox) -> AppResult<StorageBox> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .boxes
            .iter_mut()
            .find(|b| b.id == storage_box.id)
            .ok_or_else(|| AppError::NotFound(format!("Box {} not found", storage_box.id)))?;
        *row = StorageBox {
            updated_at: Utc::now(),
            ..storage_box.clone()
        };
        Ok(row.clone())
    }
}

#[async_trait]
impl ExtinguisherStore for MemoryStore {
    async fn extinguishers_list(&self, page: Page) -> AppResult<Vec<Extinguisher>> {
        let tables = self.tables.lock().unwrap();
        Ok(page_of(tables.extinguishers.iter().cloned(), page))
    }

    async fn extinguishers_list_by_type(
        &self,
        extinguisher_type: FireClass,
        page: Page,
    ) -> AppResult<Vec<Extinguisher>> {
        let tables = self.tables.lock().unwrap();
        let rows = tables
            .extinguishers
            .iter()
            .filter(|e| e.extinguisher_type == extinguisher_type)
            .cloned();
        Ok(page_of(rows, page))
    }

    async fn extinguishers_list_by_box(&self, box_id: i32) -> AppResult<Vec<Extinguisher>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .extinguishers
            .iter()
            .filter(|e| e.assigned_box_id == box_id)
            .cloned()
            .collect())
    }

    async fn extinguishers_get_by_id(&self, id: i32) -> AppResult<Option<Extinguisher>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.extinguishers.iter().find(|e| e.id == id).cloned())
    }

    async fn extinguishers_types(&self) -> AppResult<Vec<FireClass>> {
        let tables = self.tables.lock().unwrap();
        let mut types: Vec<FireClass> = Vec::new();
        for e in &tables.extinguishers {
            if !types.contains(&e.extinguisher_type) {
                types.push(e.extinguisher_type);
            }
        }
        types.sort_by_key(|t| t.as_str());
        Ok(types)
    }

    async fn extinguishers_create(
        &self,
        data: &CreateExtinguisher,
        box_id: i32,
    ) -> AppResult<Extinguisher> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let created = Extinguisher {
            id: tables.extinguishers.len() as i32 + 1,
            manufacturer_name: data.manufacturer_name.clone(),
            supplier_name: data.supplier_name.clone(),
            serial_number: data.serial_number.clone(),
            purchase_date: data.purchase_date.unwrap_or(now),
            extinguisher_type: data.extinguisher_type,
            is_active: data.is_active.unwrap_or(true),
            assigned_box_id: box_id,
            created_at: now,
            updated_at: now,
        };
        tables.extinguishers.push(created.clone());
        Ok(created)
    }

    async fn extinguishers_update(&self, extinguisher: &Extinguisher) -> AppResult<Extinguisher> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .extinguishers
            .iter_mut()
            .find(|e| e.id == extinguisher.id)
            .ok_or_else(|| AppError::NotFound(format!("Extinguisher {} not found", extinguisher.id)))?;
        *row = Extinguisher {
            updated_at: Utc::now(),
            ..extinguisher.clone()
        };
        Ok(row.clone())
    }
}

pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Seed the admin and warehouse (plus demo data when asked) and serve the router
    pub async fn spawn(demo_data: bool) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-secret".to_string();
        config.seed = SeedConfig {
            admin_email: ADMIN_EMAIL.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            demo_data,
        };

        let store = Arc::new(MemoryStore::default());
        let services = Services::new(store.clone(), config.auth.clone());
        services.seed.run(&config.seed).await.expect("seeding failed");

        let state = AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        };
        let app = api::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v1", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            store,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, client: &reqwest::Client, email: &str, password: &str) -> String {
        let res = client
            .post(self.url("/login/access-token"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), reqwest::StatusCode::OK, "login failed for {}", email);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["token_type"], "bearer");
        body["access_token"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
