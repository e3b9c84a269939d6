pub mod backend;
pub mod kakao;
pub mod menu;
