//! Startup records: the default admin, the warehouse box and optional demo data

use std::sync::Arc;

use chrono::Utc;

use crate::{
    config::SeedConfig,
    error::AppResult,
    models::{
        extinguisher::CreateExtinguisher,
        storage_box::{CreateBox, DEFAULT_BOX_SIZE, WAREHOUSE_BOX_SIZE},
        user::NewUser,
        FireClass, StorageBox, User, UserType,
    },
    repository::{BoxStore, UserStore},
};

use super::{credentials::CredentialService, extinguishers::ExtinguishersService};

const DEMO_BOX_IDS: std::ops::Range<i32> = 2..10;
/// Ids past the last demo box land in the warehouse
const DEMO_EXTINGUISHER_IDS: std::ops::Range<i32> = 2..15;

#[derive(Clone)]
pub struct Seeder {
    users: Arc<dyn UserStore>,
    boxes: Arc<dyn BoxStore>,
    extinguishers: ExtinguishersService,
    credentials: CredentialService,
}

struct DemoUser {
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    password: &'static str,
    user_type: UserType,
}

const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        email: "linda.park@example.com",
        first_name: "Linda",
        last_name: "Park",
        password: "$SuperS3cure2023",
        user_type: UserType::Manager,
    },
    DemoUser {
        email: "santiago.bates@example.com",
        first_name: "Santiago",
        last_name: "Bates",
        password: "$C00lPassword2023",
        user_type: UserType::Inspector,
    },
];

impl Seeder {
    pub fn new(
        users: Arc<dyn UserStore>,
        boxes: Arc<dyn BoxStore>,
        extinguishers: ExtinguishersService,
        credentials: CredentialService,
    ) -> Self {
        Self {
            users,
            boxes,
            extinguishers,
            credentials,
        }
    }

    /// Create whatever bootstrap records are missing. Safe to run on every start.
    pub async fn run(&self, config: &SeedConfig) -> AppResult<()> {
        self.ensure_admin(config).await?;
        self.ensure_warehouse().await?;
        if config.demo_data {
            self.load_demo_data().await?;
        }
        Ok(())
    }

    async fn ensure_admin(&self, config: &SeedConfig) -> AppResult<User> {
        if let Some(admin) = self.users.users_get_by_email(&config.admin_email).await? {
            return Ok(admin);
        }

        let admin = self
            .users
            .users_create(&NewUser {
                email: config.admin_email.clone(),
                first_name: Some("ADMIN".to_string()),
                last_name: Some("DEFAULT".to_string()),
                hashed_password: self.credentials.hash_password(&config.admin_password)?,
                is_active: true,
                is_admin: true,
                user_type: UserType::Admin,
            })
            .await?;
        tracing::info!("Created default admin {}", admin.email);
        Ok(admin)
    }

    async fn ensure_warehouse(&self) -> AppResult<StorageBox> {
        if let Some(warehouse) = self.boxes.boxes_find_warehouse().await? {
            return Ok(warehouse);
        }

        let warehouse = self
            .boxes
            .boxes_create(&CreateBox {
                box_size: Some(WAREHOUSE_BOX_SIZE.to_string()),
                building: Some("AHEC Warehouse".to_string()),
                room: Some("Warehouse".to_string()),
                location_description: Some(
                    "Main warehouse where all extinguishers are stored by default or when in need of repair."
                        .to_string(),
                ),
                is_damaged: Some(false),
            })
            .await?;
        tracing::info!("Created warehouse box {}", warehouse.id);
        Ok(warehouse)
    }

    async fn load_demo_data(&self) -> AppResult<()> {
        for demo in &DEMO_USERS {
            if self.users.users_get_by_email(demo.email).await?.is_some() {
                continue;
            }
            self.users
                .users_create(&NewUser {
                    email: demo.email.to_string(),
                    first_name: Some(demo.first_name.to_string()),
                    last_name: Some(demo.last_name.to_string()),
                    hashed_password: self.credentials.hash_password(demo.password)?,
                    is_active: true,
                    is_admin: false,
                    user_type: demo.user_type,
                })
                .await?;
        }

        for n in DEMO_BOX_IDS {
            if self.boxes.boxes_get_by_id(n).await?.is_some() {
                continue;
            }
            self.boxes
                .boxes_create(&CreateBox {
                    box_size: Some(DEFAULT_BOX_SIZE.to_string()),
                    building: Some("Administration".to_string()),
                    room: Some(format!("24{}", n)),
                    location_description: Some(format!("Near room 24{}", n)),
                    is_damaged: Some(false),
                })
                .await?;
        }

        for n in DEMO_EXTINGUISHER_IDS {
            if self.extinguishers.exists(n).await? {
                continue;
            }
            let data = CreateExtinguisher {
                manufacturer_name: "Advanced Firefighting Systems".to_string(),
                supplier_name: "IgnisPro".to_string(),
                serial_number: format!("48329{}", n),
                purchase_date: Some(Utc::now()),
                extinguisher_type: FireClass::Abc,
                is_active: Some(true),
            };
            self.extinguishers.assign_and_create(&data, n).await?;
        }

        tracing::info!("Demo data loaded");
        Ok(())
    }
}
