//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 정리, 검증, 분리
//! - [`display_terminal`] - 시작 배너와 초기화 단계 터미널 출력

pub mod string_utils;
pub mod display_terminal;
