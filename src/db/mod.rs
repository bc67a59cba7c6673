//! Database Connection Management Module
//!
//! MongoDB 연결을 만들고 리포지토리에 `mongodb::Database` 핸들을 제공합니다.
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::errors::errors::{AppResult, ErrorContext};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 연결을 만들고 `ping`으로 검증합니다.
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .context("MongoDB URI 파싱 실패")?;

        client_options.app_name = Some("devconnect".to_string());

        let client = Client::with_options(client_options).context("MongoDB 클라이언트 생성 실패")?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .with_context(|| format!("MongoDB ping 실패: {}", database_name))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
