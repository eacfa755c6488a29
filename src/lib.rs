//! 단위 변환 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 다른 표시 계층에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod assistant;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod reference;
pub mod ui_cli;
pub mod units;

