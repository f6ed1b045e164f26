pub mod config;
pub mod graphql;
pub mod kakao_page;
