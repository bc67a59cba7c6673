//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 중 저장소와 서비스 조립 단계를 사람이 읽기 쉬운 형태로 출력합니다.
//! 로그 레벨과 무관하게 항상 표준 출력으로 나갑니다.

/// 박스로 둘러싼 제목을 가운데 정렬해 출력합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                DevConnect Backend                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: MongoDB repositories`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Repositories ready (3 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 아래의 세부 항목
///
/// ```text
///    ├─ UserRepository: users (email_unique)
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 조립이 끝난 뒤 구성 요소 개수를 요약합니다.
pub fn print_final_summary(repositories: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE CONTAINER READY");
    println!("   📦 Repositories: {}", repositories);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repositories + services);
    println!();
}
