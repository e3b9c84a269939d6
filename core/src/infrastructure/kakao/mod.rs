pub mod kakao_local_client;

pub use kakao_local_client::KakaoLocalClient;
