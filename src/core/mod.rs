//! 애플리케이션 조립 계층
//!
//! 저장소 구현을 고르고, 서비스를 한 번만 생성해 핸들러에 `web::Data`로 공유합니다.
//!
//! ```text
//! main ─▶ Repositories::mongo / in_memory
//!      ─▶ ServiceContainer::build
//!      ─▶ App::configure(|cfg| container.configure(cfg))
//! ```

pub mod container;

pub use container::{print_startup_banner, Repositories, ServiceContainer};
